// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

/// Messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Advance to the next supported locale.
    ToggleLanguage,
    /// Hide the notice shown after a failed language switch.
    DismissNotice,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LANGSWITCH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

impl Flags {
    /// Parses flags from the process arguments.
    pub fn from_env() -> Result<Self, pico_args::Error> {
        Self::from_args(pico_args::Arguments::from_env())
    }

    /// Parses flags from an argument list, rejecting unknown arguments.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self, pico_args::Error> {
        let flags = Self {
            lang: args.opt_value_from_str("--lang")?,
            i18n_dir: args.opt_value_from_str("--i18n-dir")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
        };

        let remaining = args.finish();
        if let Some(unknown) = remaining.into_iter().next() {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unexpected argument {unknown:?}"),
            });
        }
        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn parses_all_flags() {
        let flags = Flags::from_args(args(&[
            "--lang",
            "de",
            "--i18n-dir",
            "/tmp/ftl",
            "--config-dir",
            "/tmp/cfg",
        ]))
        .unwrap();
        assert_eq!(flags.lang.as_deref(), Some("de"));
        assert_eq!(flags.i18n_dir.as_deref(), Some("/tmp/ftl"));
        assert_eq!(flags.config_dir.as_deref(), Some("/tmp/cfg"));
    }

    #[test]
    fn no_flags_gives_defaults() {
        assert_eq!(Flags::from_args(args(&[])).unwrap(), Flags::default());
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert!(Flags::from_args(args(&["--bogus"])).is_err());
    }
}
