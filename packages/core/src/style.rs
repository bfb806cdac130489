//! Resolve option values into concrete render values

use crate::{ArticleError, ArticleResult, ArticleState};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    /// Parse `#RGB` or `#RRGGBB`
    pub fn from_hex(value: &str) -> ArticleResult<Self> {
        let invalid = || ArticleError::InvalidColor(value.to_string());
        let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match hex.len() {
            3 => {
                // #abc == #aabbcc
                let expand = |i: usize| channel(&hex[i..i + 1].repeat(2));
                Ok(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }
}

/// Parse a pixel length such as `"18px"` or `"948"`
pub fn parse_px(value: &str) -> ArticleResult<f32> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();

    match number.parse::<f32>() {
        Ok(px) if px.is_finite() && px > 0.0 => Ok(px),
        _ => Err(ArticleError::InvalidLength(value.to_string())),
    }
}

/// Render-ready article style
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleStyle {
    pub font_family: &'static str,
    pub font_size: f32,
    pub font_color: Rgba,
    pub background_color: Rgba,
    pub content_width: f32,
}

impl ArticleStyle {
    pub fn resolve(state: &ArticleState) -> ArticleResult<Self> {
        Ok(Self {
            font_family: state.font_family.value,
            font_size: parse_px(state.font_size.value)?,
            font_color: Rgba::from_hex(state.font_color.value)?,
            background_color: Rgba::from_hex(state.background_color.value)?,
            content_width: parse_px(state.content_width.value)?,
        })
    }
}

impl Default for ArticleStyle {
    fn default() -> Self {
        Self {
            font_family: "Open Sans",
            font_size: 18.0,
            font_color: Rgba::BLACK,
            background_color: Rgba::WHITE,
            content_width: 1394.0,
        }
    }
}
