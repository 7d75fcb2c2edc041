// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Every label is read from the localization service on each render, so the
//! window follows a locale switch without caching any text.

use super::strings;
use super::Message;
use crate::i18n::LocalizationService;
use iced::{
    alignment::Horizontal,
    widget::{button, text, Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub localization: &'a LocalizationService,
    pub notice_visible: bool,
}

/// Localized text for `key`, or an empty label when the key is missing.
///
/// Startup guarantees every key in [`strings::REQUIRED_KEYS`] exists, so the
/// empty branch only shows up for keys outside that set.
pub fn label(localization: &LocalizationService, key: &str) -> String {
    localization.get(key).unwrap_or_else(|error| {
        tracing::warn!(%error, "missing localized string");
        String::new()
    })
}

/// Renders the single shell screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let localization = ctx.localization;

    let language = format!(
        "{}: {}",
        label(localization, strings::LANGUAGE_LABEL),
        label(localization, strings::LANGUAGE_NAME)
    );

    let mut content = Column::new()
        .spacing(16)
        .padding(24)
        .align_x(Horizontal::Center)
        .push(Text::new(label(localization, strings::GREETING)).size(24))
        .push(Text::new(language))
        .push(
            button(text(label(localization, strings::TOGGLE_LANGUAGE)))
                .on_press(Message::ToggleLanguage),
        );

    if ctx.notice_visible {
        content = content.push(
            button(text(label(localization, strings::SWITCH_FAILED)))
                .on_press(Message::DismissNotice),
        );
    }

    Container::new(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
