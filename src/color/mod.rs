//! Color system
//! Canonical sRGB colors produced from CSS color literals

use crossterm::style::Color as CrosstermColor;
use std::fmt;

pub mod parse;

pub use parse::{classify, normalize, parse_color_literal, ColorLiteralKind};

/// Alpha channel of a canonical color, always within [0, 1]
///
/// The variant records where the value came from because the two sources
/// print differently: hex-derived alpha is fixed to 3 decimals, functional
/// alpha keeps its natural shortest form (`0.5`, `1`, `0.25`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alpha {
    /// Derived from a hex digit pair (byte / 255)
    Fixed(f64),
    /// Taken from an `rgba()`/`hsla()` field, clamped but not rounded
    Plain(f64),
}

impl Alpha {
    /// Alpha from a hex byte
    #[must_use]
    pub fn from_byte(byte: u8) -> Self {
        Alpha::Fixed(f64::from(byte) / 255.0)
    }

    /// Alpha from a functional field, clamped into [0, 1]
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        // `-0.0` survives clamping; adding zero turns it into `0.0`
        Alpha::Plain(value.clamp(0.0, 1.0) + 0.0)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Alpha::Fixed(v) | Alpha::Plain(v) => v,
        }
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alpha::Fixed(v) => write!(f, "{:.3}", v),
            Alpha::Plain(v) => write!(f, "{}", v),
        }
    }
}

/// Normalized color, printed as `rgb(r, g, b)` or `rgba(r, g, b, a)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// `None` prints as `rgb(...)`
    pub alpha: Option<Alpha>,
}

impl CanonicalColor {
    /// Opaque color
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        CanonicalColor { r, g, b, alpha: None }
    }

    /// Color with an explicit alpha channel
    #[must_use]
    pub fn rgba(r: u8, g: u8, b: u8, alpha: Alpha) -> Self {
        CanonicalColor {
            r,
            g,
            b,
            alpha: Some(alpha),
        }
    }

    /// Whether this color prints in `rgba(...)` form
    #[must_use]
    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Convert to a crossterm true-color value
    ///
    /// Terminals have no alpha, so translucent colors are composited over
    /// the given backdrop.
    #[must_use]
    pub fn to_crossterm(self, backdrop: (u8, u8, u8)) -> CrosstermColor {
        let Some(alpha) = self.alpha else {
            return CrosstermColor::Rgb {
                r: self.r,
                g: self.g,
                b: self.b,
            };
        };
        let a = alpha.value();
        let blend = |fg: u8, bg: u8| -> u8 {
            let v = f64::from(fg) * a + f64::from(bg) * (1.0 - a);
            v.round().clamp(0.0, 255.0) as u8
        };
        CrosstermColor::Rgb {
            r: blend(self.r, backdrop.0),
            g: blend(self.g, backdrop.1),
            b: blend(self.b, backdrop.2),
        }
    }
}

impl fmt::Display for CanonicalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alpha {
            Some(a) => write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, a),
            None => write!(f, "rgb({}, {}, {})", self.r, self.g, self.b),
        }
    }
}
