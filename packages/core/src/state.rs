//! Article state and the host-owned snapshot the settings panel mirrors

use crate::options::{
    ArticleOption, OptionField, BACKGROUND_COLORS, CONTENT_WIDTH_OPTIONS, FONT_COLORS,
    FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
};

/// The five chosen options that style an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleState {
    pub font_family: ArticleOption,
    pub font_size: ArticleOption,
    pub font_color: ArticleOption,
    pub background_color: ArticleOption,
    pub content_width: ArticleOption,
}

impl Default for ArticleState {
    fn default() -> Self {
        Self {
            font_family: FONT_FAMILY_OPTIONS[0],
            font_size: FONT_SIZE_OPTIONS[0],
            font_color: FONT_COLORS[0],
            background_color: BACKGROUND_COLORS[0],
            content_width: CONTENT_WIDTH_OPTIONS[0],
        }
    }
}

impl ArticleState {
    pub fn with_font_family(self, font_family: ArticleOption) -> Self {
        Self {
            font_family,
            ..self
        }
    }

    pub fn with_font_size(self, font_size: ArticleOption) -> Self {
        Self { font_size, ..self }
    }

    pub fn with_font_color(self, font_color: ArticleOption) -> Self {
        Self { font_color, ..self }
    }

    pub fn with_background_color(self, background_color: ArticleOption) -> Self {
        Self {
            background_color,
            ..self
        }
    }

    pub fn with_content_width(self, content_width: ArticleOption) -> Self {
        Self {
            content_width,
            ..self
        }
    }

    /// Replace a single field, leaving the others untouched
    pub fn with_field(self, field: OptionField, option: ArticleOption) -> Self {
        match field {
            OptionField::FontFamily => self.with_font_family(option),
            OptionField::FontSize => self.with_font_size(option),
            OptionField::FontColor => self.with_font_color(option),
            OptionField::BackgroundColor => self.with_background_color(option),
            OptionField::ContentWidth => self.with_content_width(option),
        }
    }

    pub fn field(&self, field: OptionField) -> ArticleOption {
        match field {
            OptionField::FontFamily => self.font_family,
            OptionField::FontSize => self.font_size,
            OptionField::FontColor => self.font_color,
            OptionField::BackgroundColor => self.background_color,
            OptionField::ContentWidth => self.content_width,
        }
    }
}

/// Canonical article state as published by the host.
///
/// Every [`replace`](Self::replace) bumps the revision, so observers can tell a
/// new publication apart from the previous one even when the values are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSnapshot {
    revision: u64,
    state: ArticleState,
}

impl ArticleSnapshot {
    pub fn new(state: ArticleState) -> Self {
        Self { revision: 0, state }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn state(&self) -> &ArticleState {
        &self.state
    }

    /// Publish a new canonical state
    pub fn replace(&mut self, state: ArticleState) {
        self.revision = self.revision.wrapping_add(1);
        self.state = state;
    }
}

impl Default for ArticleSnapshot {
    fn default() -> Self {
        Self::new(ArticleState::default())
    }
}
