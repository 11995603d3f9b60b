use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// A theme color as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Ansi256(u8),
    Hex { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorDepth {
    #[default]
    TrueColor,
    Color256,
    Color16,
}

#[derive(Debug, Error)]
#[error("invalid color {value:?}: expected 0-255, #RGB, #RRGGBB or an ANSI color name")]
pub struct ColorParseError {
    pub value: String,
}

/// Names accepted for the 16 base ANSI colors, indexed by ANSI number.
const ANSI_NAMES: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "bright-black",
    "bright-red",
    "bright-green",
    "bright-yellow",
    "bright-blue",
    "bright-magenta",
    "bright-cyan",
    "bright-white",
];

/// Approximate RGB of the 16 base ANSI colors (xterm defaults).
const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// Channel levels of the 6x6x6 cube (indices 16-231).
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

impl Color {
    /// Parse `"0"`..`"255"`, `"#RGB"`, `"#RRGGBB"`, or an ANSI name such as
    /// `"blue"` or `"bright-black"` (`"grey"`/`"gray"` alias `"white"`).
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError {
            value: s.to_owned(),
        };
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(err);
        }
        if let Ok(n) = trimmed.parse::<u8>() {
            return Ok(Color::Ansi256(n));
        }

        let name = trimmed.to_ascii_lowercase().replace('_', "-");
        let name = match name.as_str() {
            "grey" | "gray" => "white",
            "dark-grey" | "dark-gray" => "bright-black",
            other => other,
        };
        ANSI_NAMES
            .iter()
            .position(|n| *n == name)
            .and_then(|i| u8::try_from(i).ok())
            .map(Color::Ansi256)
            .ok_or_else(err)
    }

    /// Convert to a crossterm color at the given terminal color depth.
    ///
    /// ANSI 0-15 map to crossterm's named variants so the terminal renders
    /// them through its own configured palette.
    pub fn to_crossterm_color(self, depth: ColorDepth) -> crossterm::style::Color {
        match (self, depth) {
            (Color::Ansi256(n), ColorDepth::TrueColor | ColorDepth::Color256) => {
                ansi_to_crossterm(n)
            }
            (Color::Hex { r, g, b }, ColorDepth::TrueColor) => {
                crossterm::style::Color::Rgb { r, g, b }
            }
            (Color::Hex { r, g, b }, ColorDepth::Color256) => {
                crossterm::style::Color::AnsiValue(nearest_ansi256(r, g, b))
            }
            (color, ColorDepth::Color16) => {
                let (r, g, b) = color.rgb();
                ansi_to_crossterm(nearest_ansi16(r, g, b))
            }
        }
    }

    fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Hex { r, g, b } => (r, g, b),
            Color::Ansi256(n) => ansi256_rgb(n),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Ansi256(n) => write!(f, "{n}"),
            Color::Hex { r, g, b } => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Hex {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }),
        // #abc is shorthand for #aabbcc.
        3 => Some(Color::Hex {
            r: channel(&hex[0..1])? * 17,
            g: channel(&hex[1..2])? * 17,
            b: channel(&hex[2..3])? * 17,
        }),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Color depth detection
// ---------------------------------------------------------------------------

impl ColorDepth {
    /// Detect terminal color depth from `COLORTERM` and `TERM`.
    pub fn detect() -> Self {
        Self::from_env(
            std::env::var("COLORTERM").ok().as_deref(),
            std::env::var("TERM").ok().as_deref(),
        )
    }

    fn from_env(colorterm: Option<&str>, term: Option<&str>) -> Self {
        if matches!(colorterm, Some("truecolor" | "24bit")) {
            ColorDepth::TrueColor
        } else if term.is_some_and(|t| t.contains("256color")) {
            ColorDepth::Color256
        } else {
            ColorDepth::Color16
        }
    }
}

// ---------------------------------------------------------------------------
// Palette mapping
// ---------------------------------------------------------------------------

fn ansi_to_crossterm(n: u8) -> crossterm::style::Color {
    use crossterm::style::Color as C;
    const BASE: [C; 16] = [
        C::Black,
        C::DarkRed,
        C::DarkGreen,
        C::DarkYellow,
        C::DarkBlue,
        C::DarkMagenta,
        C::DarkCyan,
        C::Grey,
        C::DarkGrey,
        C::Red,
        C::Green,
        C::Yellow,
        C::Blue,
        C::Magenta,
        C::Cyan,
        C::White,
    ];
    BASE.get(usize::from(n))
        .copied()
        .unwrap_or(C::AnsiValue(n))
}

fn ansi256_rgb(n: u8) -> (u8, u8, u8) {
    match n {
        0..=15 => ANSI16_RGB[usize::from(n)],
        16..=231 => {
            let i = n - 16;
            (
                CUBE_LEVELS[usize::from(i / 36)],
                CUBE_LEVELS[usize::from((i / 6) % 6)],
                CUBE_LEVELS[usize::from(i % 6)],
            )
        }
        232..=255 => {
            let v = 8 + 10 * (n - 232);
            (v, v, v)
        }
    }
}

fn distance((r1, g1, b1): (u8, u8, u8), (r2, g2, b2): (u8, u8, u8)) -> u32 {
    let d = |a: u8, b: u8| u32::from(a.abs_diff(b)).pow(2);
    d(r1, r2) + d(g1, g2) + d(b1, b2)
}

/// Nearest index in the extended palette (16-255); the base 16 are skipped
/// because their rendering depends on the user's terminal palette.
fn nearest_ansi256(r: u8, g: u8, b: u8) -> u8 {
    let target = (r, g, b);
    (16..=255u8)
        .min_by_key(|&n| distance(ansi256_rgb(n), target))
        .unwrap_or(16)
}

fn nearest_ansi16(r: u8, g: u8, b: u8) -> u8 {
    let target = (r, g, b);
    (0..16u8)
        .min_by_key(|&n| distance(ANSI16_RGB[usize::from(n)], target))
        .unwrap_or(0)
}
