// SPDX-License-Identifier: MPL-2.0
//! Fluent (`.ftl`) string table loader.
//!
//! Translations ship inside the binary (`assets/i18n/<tag>.ftl`, embedded with
//! `rust-embed`). A directory override can point the loader at loose files
//! instead, which is handy for translators testing a new locale.
//!
//! Every message value is resolved once at load time into plain text. A file
//! with syntax errors, duplicate message ids or messages that cannot be
//! resolved without arguments is rejected as a whole.

use crate::application::port::{ResourceError, StringTable, StringTableLoader};
use crate::domain::locale::LocaleId;
use fluent_bundle::{FluentBundle, FluentResource};
use fluent_syntax::ast;
use rust_embed::RustEmbed;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const FTL_EXTENSION: &str = ".ftl";

/// Loads string tables from Fluent files.
#[derive(Debug, Clone, Default)]
pub struct FluentLoader {
    dir: Option<PathBuf>,
}

impl FluentLoader {
    /// Loader backed by the translations compiled into the binary.
    #[must_use]
    pub fn embedded() -> Self {
        Self { dir: None }
    }

    /// Loader reading `<dir>/<tag>.ftl` from disk.
    #[must_use]
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Locales with an embedded `.ftl` file, sorted by tag.
    #[must_use]
    pub fn embedded_locales() -> Vec<LocaleId> {
        let mut locales: Vec<LocaleId> = Asset::iter()
            .filter_map(|file| {
                file.strip_suffix(FTL_EXTENSION)
                    .and_then(|tag| LocaleId::parse(tag).ok())
            })
            .collect();
        locales.sort_by_key(ToString::to_string);
        locales
    }

    fn read_source(&self, locale: &LocaleId) -> Result<String, ResourceError> {
        let filename = format!("{locale}{FTL_EXTENSION}");
        match &self.dir {
            Some(dir) => fs::read_to_string(dir.join(&filename)).map_err(|err| {
                if err.kind() == io::ErrorKind::NotFound {
                    ResourceError::NotFound
                } else {
                    ResourceError::Io(err.to_string())
                }
            }),
            None => {
                let file = Asset::get(&filename).ok_or(ResourceError::NotFound)?;
                String::from_utf8(file.data.into_owned())
                    .map_err(|err| ResourceError::Malformed(err.to_string()))
            }
        }
    }
}

impl StringTableLoader for FluentLoader {
    fn load(&self, locale: &LocaleId) -> Result<StringTable, ResourceError> {
        let source = self.read_source(locale)?;
        parse_table(locale, source)
    }
}

/// Parses Fluent source and resolves every message value to text.
pub fn parse_table(locale: &LocaleId, source: String) -> Result<StringTable, ResourceError> {
    let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
        ResourceError::Malformed(format!("{} syntax error(s): {errors:?}", errors.len()))
    })?;

    let ids: Vec<String> = resource
        .entries()
        .filter_map(|entry| match entry {
            ast::Entry::Message(message) => Some(message.id.name.to_string()),
            _ => None,
        })
        .collect();

    let mut bundle = FluentBundle::new(vec![locale.as_langid().clone()]);
    // Plain text for the UI; no bidi isolation marks around placeables.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| ResourceError::Malformed(format!("{errors:?}")))?;

    let mut table = StringTable::new();
    for id in ids {
        let Some(pattern) = bundle.get_message(&id).and_then(|message| message.value()) else {
            // Attribute-only messages carry no text of their own.
            continue;
        };
        let mut errors = vec![];
        let text = bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            return Err(ResourceError::Malformed(format!(
                "message '{id}' cannot be resolved: {errors:?}"
            )));
        }
        let text = text.into_owned();
        table.insert(id, text);
    }

    Ok(table)
}
