// File: crates/calwall-core/src/params.rs
// Summary: Typed render parameters (mode, colors, paddings) and their validation.

use std::fmt;
use std::str::FromStr;

use skia_safe as skia;

use crate::error::ParamError;
use crate::types::{Insets, COLUMNS, HEIGHT, WIDTH};

/// Period covered by one wallpaper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Month,
    Year,
}

impl Mode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Mode::Month => "month",
            Mode::Year => "year",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Mode::Month => Mode::Year,
            Mode::Year => Mode::Month,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mode {:?} (expected month or year)", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("month") {
            Ok(Mode::Month)
        } else if s.eq_ignore_ascii_case("year") {
            Ok(Mode::Year)
        } else {
            Err(UnknownMode(s.to_string()))
        }
    }
}

/// Opaque 24-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `rrggbb`, with at most one leading `#`.
    pub fn from_hex(s: &str) -> Result<Self, ParamError> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParamError::Color(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ParamError::Color(s.to_string()))
        };
        Ok(Self { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_rgb(self.r, self.g, self.b)
    }
}

/// Lowercase hex without `#`, the form used in query strings.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<Rgb> for skia::Color {
    fn from(c: Rgb) -> Self {
        c.to_skia()
    }
}

/// The five colors of a wallpaper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub past: Rgb,
    pub current: Rgb,
    pub future: Rgb,
    pub text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(0x71, 0x71, 0x7a),
            past: Rgb::new(0xf9, 0x73, 0x16),
            current: Rgb::new(0xfb, 0xbf, 0x24),
            future: Rgb::new(0x52, 0x52, 0x5b),
            text: Rgb::new(0xff, 0xff, 0xff),
        }
    }
}

/// Everything one render depends on apart from the clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParameters {
    pub width: u32,
    pub height: u32,
    pub mode: Mode,
    /// Hours east of UTC; fractional offsets such as 5.5 are allowed.
    pub timezone_offset_hours: f64,
    pub padding: Insets,
    pub palette: Palette,
    pub columns: u32,
    pub dot_radius_multiplier: f64,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            mode: Mode::Month,
            timezone_offset_hours: 0.0,
            padding: Insets::default(),
            palette: Palette::default(),
            columns: COLUMNS,
            dot_radius_multiplier: 1.0,
        }
    }
}

impl RenderParameters {
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.width == 0 || self.height == 0 {
            return Err(ParamError::EmptyCanvas { width: self.width, height: self.height });
        }
        if self.columns == 0 {
            return Err(ParamError::NoColumns);
        }
        let m = self.dot_radius_multiplier;
        if !m.is_finite() || m <= 0.0 {
            return Err(ParamError::DotRadius(m));
        }
        let tz = self.timezone_offset_hours;
        if !tz.is_finite() || tz.abs() > 24.0 {
            return Err(ParamError::Timezone(tz));
        }
        Ok(())
    }
}
