//! Option catalogue for the five article settings
//!
//! Every setting is chosen from a fixed, ordered list of [`ArticleOption`]s.
//! Options are plain `'static` records so widgets can copy them freely.

use crate::{ArticleError, ArticleResult};

/// A selectable option: human label plus the underlying value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleOption {
    pub title: &'static str,
    pub value: &'static str,
    pub class_name: &'static str,
    /// Contrasting accent kept alongside some colors
    pub optional: Option<&'static str>,
}

impl ArticleOption {
    pub const fn new(title: &'static str, value: &'static str, class_name: &'static str) -> Self {
        Self {
            title,
            value,
            class_name,
            optional: None,
        }
    }

    pub const fn with_optional(mut self, optional: &'static str) -> Self {
        self.optional = Some(optional);
        self
    }
}

impl std::fmt::Display for ArticleOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

pub const FONT_FAMILY_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("Open Sans", "Open Sans", "open-sans"),
    ArticleOption::new("Ubuntu", "Ubuntu", "ubuntu"),
    ArticleOption::new("Cormorant Garamond", "Cormorant Garamond", "cormorant-garamond"),
    ArticleOption::new("Days One", "Days One", "days-one"),
    ArticleOption::new("Merriweather", "Merriweather", "merriweather"),
];

pub const FONT_SIZE_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("18px", "18px", "font-size-18"),
    ArticleOption::new("25px", "25px", "font-size-25"),
    ArticleOption::new("38px", "38px", "font-size-38"),
];

pub const FONT_COLORS: &[ArticleOption] = &[
    ArticleOption::new("Black", "#000000", "font-black").with_optional("white"),
    ArticleOption::new("White", "#FFFFFF", "font-white").with_optional("black"),
    ArticleOption::new("Gray", "#C4C4C4", "font-gray"),
    ArticleOption::new("Pink", "#FEAFE8", "font-pink"),
    ArticleOption::new("Fuchsia", "#FD24AF", "font-fuchsia"),
    ArticleOption::new("Yellow", "#FFC802", "font-yellow"),
    ArticleOption::new("Green", "#80D994", "font-green"),
    ArticleOption::new("Blue", "#6FC1FD", "font-blue"),
    ArticleOption::new("Purple", "#5F00B8", "font-purple"),
];

pub const BACKGROUND_COLORS: &[ArticleOption] = &[
    ArticleOption::new("White", "#FFFFFF", "bg-white").with_optional("black"),
    ArticleOption::new("Black", "#000000", "bg-black").with_optional("white"),
    ArticleOption::new("Gray", "#C4C4C4", "bg-gray"),
    ArticleOption::new("Pink", "#FEAFE8", "bg-pink"),
    ArticleOption::new("Fuchsia", "#FD24AF", "bg-fuchsia"),
    ArticleOption::new("Yellow", "#FFC802", "bg-yellow"),
    ArticleOption::new("Green", "#80D994", "bg-green"),
    ArticleOption::new("Blue", "#6FC1FD", "bg-blue"),
    ArticleOption::new("Purple", "#5F00B8", "bg-purple"),
];

pub const CONTENT_WIDTH_OPTIONS: &[ArticleOption] = &[
    ArticleOption::new("Wide", "1394px", "width-wide"),
    ArticleOption::new("Narrow", "948px", "width-narrow"),
];

/// The five settings a user can change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl OptionField {
    pub const ALL: [OptionField; 5] = [
        OptionField::FontFamily,
        OptionField::FontSize,
        OptionField::FontColor,
        OptionField::BackgroundColor,
        OptionField::ContentWidth,
    ];

    /// Label shown above the field's chooser
    pub fn title(&self) -> &'static str {
        match self {
            OptionField::FontFamily => "Font",
            OptionField::FontSize => "Font size",
            OptionField::FontColor => "Text color",
            OptionField::BackgroundColor => "Background color",
            OptionField::ContentWidth => "Content width",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            OptionField::FontFamily => "Choose a font",
            OptionField::FontSize => "Choose a size",
            OptionField::FontColor => "Choose a text color",
            OptionField::BackgroundColor => "Choose a background color",
            OptionField::ContentWidth => "Choose a width",
        }
    }

    /// Stable key used in stored preferences and error messages
    pub fn key(&self) -> &'static str {
        match self {
            OptionField::FontFamily => "font_family",
            OptionField::FontSize => "font_size",
            OptionField::FontColor => "font_color",
            OptionField::BackgroundColor => "background_color",
            OptionField::ContentWidth => "content_width",
        }
    }

    pub fn options(&self) -> &'static [ArticleOption] {
        match self {
            OptionField::FontFamily => FONT_FAMILY_OPTIONS,
            OptionField::FontSize => FONT_SIZE_OPTIONS,
            OptionField::FontColor => FONT_COLORS,
            OptionField::BackgroundColor => BACKGROUND_COLORS,
            OptionField::ContentWidth => CONTENT_WIDTH_OPTIONS,
        }
    }

    /// Resolve a stored value back to its catalogue entry
    pub fn find(&self, value: &str) -> ArticleResult<ArticleOption> {
        self.options()
            .iter()
            .copied()
            .find(|option| option.value == value)
            .ok_or_else(|| ArticleError::UnknownOption {
                field: self.key(),
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_values() {
        let option = OptionField::FontFamily.find("Ubuntu").unwrap();
        assert_eq!(option.title, "Ubuntu");

        let option = OptionField::BackgroundColor.find("#000000").unwrap();
        assert_eq!(option.class_name, "bg-black");
        assert_eq!(option.optional, Some("white"));
    }

    #[test]
    fn test_find_unknown_value() {
        let err = OptionField::ContentWidth.find("100px").unwrap_err();
        assert!(matches!(
            err,
            ArticleError::UnknownOption { field: "content_width", .. }
        ));
    }

    #[test]
    fn test_catalogues_are_non_empty_and_unique() {
        for field in OptionField::ALL {
            let options = field.options();
            assert!(!options.is_empty(), "{} has no options", field.key());

            for (i, a) in options.iter().enumerate() {
                for b in &options[i + 1..] {
                    assert_ne!(a.value, b.value, "duplicate value in {}", field.key());
                }
            }
        }
    }

    #[test]
    fn test_display_uses_title() {
        assert_eq!(CONTENT_WIDTH_OPTIONS[1].to_string(), "Narrow");
    }
}
