use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A color in the hue/saturation/lightness model. `h` is in degrees,
/// `s` and `l` are percentages.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    pub fn to_hex(&self) -> String {
        hsl_to_hex(self.h, self.s, self.l)
    }

    pub fn is_nan(&self) -> bool {
        self.h.is_nan() || self.s.is_nan() || self.l.is_nan()
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ColorError {
    #[error("hex color must start with '#'")]
    MissingHash,
    #[error("hex color must have 6 digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digits in {0:?}")]
    BadDigit(String),
}

/// Strict `#RRGGBB` parser. The conversion functions below never reject
/// input, so callers that need a diagnostic check with this first.
pub fn parse_hex_color(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    let digits = hex.strip_prefix('#').ok_or(ColorError::MissingHash)?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ColorError::BadLength(digits.chars().count()));
    }
    // from_str_radix would accept a leading '+'
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::BadDigit(hex.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorError::BadDigit(hex.to_string()))
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

// a channel that is missing or not hex turns into NaN and poisons the result
fn channel_from_hex(hex: &str, range: std::ops::Range<usize>) -> f64 {
    hex.get(range)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        .map_or(f64::NAN, |byte| byte as f64 / 255.0)
}

/// Convert `#RRGGBB` to HSL. The leading character is skipped without being
/// checked; malformed input yields NaN components instead of an error.
pub fn hex_to_hsl(hex: &str) -> Hsl {
    let r = channel_from_hex(hex, 1..3);
    let g = channel_from_hex(hex, 3..5);
    let b = channel_from_hex(hex, 5..7);

    if r.is_nan() || g.is_nan() || b.is_nan() {
        warn!("malformed hex color {:?}", hex);
        return Hsl::new(f64::NAN, f64::NAN, f64::NAN);
    }

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    //achromatic
    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0 * 360.0, s * 100.0, l * 100.0)
}

/// Convert HSL back to a lowercase `#rrggbb` string. Hues outside `[0, 360)`
/// are not wrapped; they drop the chroma and keep only the lightness offset.
pub fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    let s = saturation / 100.0;
    let l = lightness / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&hue) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&hue) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&hue) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&hue) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&hue) {
        (x, 0.0, c)
    } else if (300.0..360.0).contains(&hue) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    // `as u8` saturates and maps NaN to 0
    format!(
        "#{:02x}{:02x}{:02x}",
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8
    )
}

/// Evenly spaced hues at half saturation and lightness, for when the colors
/// only need to be told apart.
pub fn generate_color_palette(num_colors: usize) -> Vec<String> {
    (0..num_colors)
        .map(|i| {
            let hue = (i as f64 / num_colors as f64) * 360.0;
            hsl_to_hex(hue, 50.0, 50.0)
        })
        .collect()
}
