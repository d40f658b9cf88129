//! Color literal normalizer
//!
//! Turns the text of an inline code span into a [`CanonicalColor`].
//! Supported forms (ASCII case-insensitive):
//! * `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`
//! * `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! * `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)`
//!
//! Unsupported or malformed text yields `None`, which callers treat as
//! "render nothing".

use super::{Alpha, CanonicalColor};
use regex::Regex;
use std::sync::LazyLock;

/// Characters a numeric field may be made of. Whether the field is an
/// actual finite number is decided by `f64` parsing afterwards.
const NUMBER: &str = r"[-+0-9.eE]+";

static RGB_FUNC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?i-u:rgba?)\(\s*({n})\s*,\s*({n})\s*,\s*({n})\s*(?:,\s*({n})\s*)?\)$",
        n = NUMBER
    ))
    .expect("rgb() pattern is valid")
});

static HSL_FUNC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?i-u:hsla?)\(\s*({n})\s*,\s*({n})%\s*,\s*({n})%\s*(?:,\s*({n})\s*)?\)$",
        n = NUMBER
    ))
    .expect("hsl() pattern is valid")
});

/// Which grammar a literal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLiteralKind {
    Hex3,
    Hex4,
    Hex6,
    Hex8,
    /// `rgb()`/`rgba()` with three fields
    Rgb,
    /// `rgb()`/`rgba()` with an alpha field
    Rgba,
    /// `hsl()`/`hsla()` with three fields
    Hsl,
    /// `hsl()`/`hsla()` with an alpha field
    Hsla,
    Unrecognized,
}

/// Classify a literal by shape only.
///
/// A functional literal whose fields are not finite numbers still
/// classifies as `Rgb`/`Hsl` here; [`normalize`] rejects it.
#[must_use]
pub fn classify(text: &str) -> ColorLiteralKind {
    let s = text.trim();

    if let Some(digits) = hex_digits(s) {
        return match digits.len() {
            3 => ColorLiteralKind::Hex3,
            4 => ColorLiteralKind::Hex4,
            6 => ColorLiteralKind::Hex6,
            _ => ColorLiteralKind::Hex8,
        };
    }
    if let Some(caps) = RGB_FUNC.captures(s) {
        return if caps.get(4).is_some() {
            ColorLiteralKind::Rgba
        } else {
            ColorLiteralKind::Rgb
        };
    }
    if let Some(caps) = HSL_FUNC.captures(s) {
        return if caps.get(4).is_some() {
            ColorLiteralKind::Hsla
        } else {
            ColorLiteralKind::Hsl
        };
    }
    ColorLiteralKind::Unrecognized
}

/// Normalize a color literal into its canonical form.
#[must_use]
pub fn normalize(text: &str) -> Option<CanonicalColor> {
    let s = text.trim();

    if let Some(digits) = hex_digits(s) {
        return Some(parse_hex(digits));
    }
    // Functional grammars do not fall through once their shape matched.
    if let Some(caps) = RGB_FUNC.captures(s) {
        return parse_rgb_fields(&caps);
    }
    if let Some(caps) = HSL_FUNC.captures(s) {
        return parse_hsl_fields(&caps);
    }
    None
}

/// [`normalize`] rendered as a CSS-ready string
#[must_use]
pub fn parse_color_literal(text: &str) -> Option<String> {
    normalize(text).map(|c| c.to_string())
}

/// Digits of a `#` literal with a valid length, as ASCII bytes
fn hex_digits(s: &str) -> Option<&[u8]> {
    let digits = s.strip_prefix('#')?.as_bytes();
    if !matches!(digits.len(), 3 | 4 | 6 | 8) {
        return None;
    }
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    Some(digits)
}

/// Expects the output of [`hex_digits`].
fn parse_hex(digits: &[u8]) -> CanonicalColor {
    let nibble = |c: u8| -> u8 {
        match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            _ => c - b'A' + 10,
        }
    };

    match digits.len() {
        3 | 4 => {
            // #RGB / #RGBA: each digit stands for a doubled pair
            let r = nibble(digits[0]) * 17;
            let g = nibble(digits[1]) * 17;
            let b = nibble(digits[2]) * 17;
            match digits.get(3) {
                Some(&a) => CanonicalColor::rgba(r, g, b, Alpha::from_byte(nibble(a) * 17)),
                None => CanonicalColor::rgb(r, g, b),
            }
        }
        _ => {
            // #RRGGBB / #RRGGBBAA
            let pair = |i: usize| nibble(digits[i]) * 16 + nibble(digits[i + 1]);
            let (r, g, b) = (pair(0), pair(2), pair(4));
            if digits.len() == 8 {
                CanonicalColor::rgba(r, g, b, Alpha::from_byte(pair(6)))
            } else {
                CanonicalColor::rgb(r, g, b)
            }
        }
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse the optional 4th field. `Some(None)` when absent, `None` when
/// present but not a number.
fn parse_alpha(caps: &regex::Captures<'_>) -> Option<Option<Alpha>> {
    match caps.get(4) {
        Some(m) => parse_number(m.as_str()).map(|a| Some(Alpha::clamped(a))),
        None => Some(None),
    }
}

fn with_alpha(r: u8, g: u8, b: u8, alpha: Option<Alpha>) -> CanonicalColor {
    match alpha {
        Some(a) => CanonicalColor::rgba(r, g, b, a),
        None => CanonicalColor::rgb(r, g, b),
    }
}

fn to_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn parse_rgb_fields(caps: &regex::Captures<'_>) -> Option<CanonicalColor> {
    let r = parse_number(&caps[1])?;
    let g = parse_number(&caps[2])?;
    let b = parse_number(&caps[3])?;
    let alpha = parse_alpha(caps)?;

    Some(with_alpha(to_channel(r), to_channel(g), to_channel(b), alpha))
}

fn parse_hsl_fields(caps: &regex::Captures<'_>) -> Option<CanonicalColor> {
    let h = parse_number(&caps[1])?;
    let s = parse_number(&caps[2])?;
    let l = parse_number(&caps[3])?;
    let alpha = parse_alpha(caps)?;

    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);
    let (r, g, b) = hsl_to_rgb(h, s, l);

    Some(with_alpha(r, g, b, alpha))
}

/// HSL to RGB via chroma and hue sector. `s` and `l` are in [0, 1], `h` in
/// degrees and may be any finite value.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let channel = |v: f64| to_channel((v + m) * 255.0);
    (channel(r1), channel(g1), channel(b1))
}
