//! Color palette
//!
//! The palette is the ordered list of colors that buckets map onto.
//! By default it holds three theme colors (the editor's bracket-pair
//! colors). Users can replace it with their own hex colors.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Theme colors used when no valid custom palette is configured
pub const DEFAULT_THEME_COLORS: [&str; 3] = [
    "editorBracketHighlight.foreground1",
    "editorBracketHighlight.foreground2",
    "editorBracketHighlight.foreground3",
];

/// Smallest custom palette that is accepted
pub const MIN_CUSTOM_COLORS: usize = 2;

/// A single palette entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    /// A color the host resolves from its theme, by name
    Theme(String),
    /// An explicit RGB color
    Rgb { r: u8, g: u8, b: u8 },
}

fn hex_pattern() -> Option<&'static Regex> {
    static HEX: OnceLock<Option<Regex>> = OnceLock::new();
    HEX.get_or_init(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").ok())
        .as_ref()
}

impl PaletteColor {
    /// Parse `#rgb` or `#rrggbb`
    pub fn from_hex(value: &str) -> Option<Self> {
        if !hex_pattern()?.is_match(value) {
            return None;
        }
        let digits = &value[1..];
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        let (r, g, b) = if digits.len() == 3 {
            // #abc is #aabbcc
            let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
            (expand(0)?, expand(1)?, expand(2)?)
        } else {
            (channel(&digits[0..2])?, channel(&digits[2..4])?, channel(&digits[4..6])?)
        };
        Some(PaletteColor::Rgb { r, g, b })
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteColor::Theme(name) => write!(f, "{name}"),
            PaletteColor::Rgb { r, g, b } => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

/// Ordered, non-empty list of colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<PaletteColor>,
    custom: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_THEME_COLORS
                .iter()
                .map(|name| PaletteColor::Theme(name.to_string()))
                .collect(),
            custom: false,
        }
    }
}

impl Palette {
    /// Build a palette from user colors.
    ///
    /// Invalid entries are dropped. If fewer than two remain, the
    /// default palette is used instead.
    pub fn from_custom<S: AsRef<str>>(custom_colors: &[S]) -> Self {
        if custom_colors.is_empty() {
            return Self::default();
        }

        let colors: Vec<PaletteColor> = custom_colors
            .iter()
            .filter_map(|value| PaletteColor::from_hex(value.as_ref()))
            .collect();

        if colors.len() < MIN_CUSTOM_COLORS {
            log::warn!(
                "Ignoring custom colors: {} of {} entries are valid hex colors, need at least {}",
                colors.len(),
                custom_colors.len(),
                MIN_CUSTOM_COLORS
            );
            return Self::default();
        }

        if colors.len() < custom_colors.len() {
            log::info!(
                "Dropped {} invalid custom color(s)",
                custom_colors.len() - colors.len()
            );
        }

        Self { colors, custom: true }
    }

    /// Number of colors (always at least one)
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// A palette is never empty
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for a bucket index (wraps around)
    pub fn color(&self, bucket: usize) -> &PaletteColor {
        &self.colors[bucket % self.colors.len()]
    }

    /// Iterate over the colors in order
    pub fn iter(&self) -> impl Iterator<Item = &PaletteColor> + '_ {
        self.colors.iter()
    }

    /// Whether this palette came from user configuration
    pub fn is_custom(&self) -> bool {
        self.custom
    }
}
