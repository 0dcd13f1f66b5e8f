use log::{debug, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::colors::{self, ColorError, Hsl};

/// Share of the lightness scale a ramp walks down, spread over all of its colors.
pub const LIGHTNESS_SPAN: f64 = 0.8;
pub const MIN_LIGHTNESS: f64 = 20.0;
pub const MAX_LIGHTNESS: f64 = 100.0;

#[derive(Error, Debug, PartialEq)]
pub enum PaletteError {
    #[error("a palette needs at least one color")]
    EmptyPalette,
    #[error("invalid base color: {0}")]
    InvalidBaseColor(#[from] ColorError),
}

/// Lightness values for a ramp of `num_colors` starting at `base_lightness`.
///
/// Each step is `LIGHTNESS_SPAN / num_colors` on the fractional scale, applied
/// to the percentage scale, so consecutive values are `80 / num_colors` points
/// apart until they hit `MIN_LIGHTNESS`.
pub fn lightness_ramp(base_lightness: f64, num_colors: usize) -> Vec<f64> {
    let lightness_step = LIGHTNESS_SPAN / num_colors as f64;
    (0..num_colors)
        .map(|i| {
            (base_lightness - i as f64 * lightness_step * 100.0)
                .min(MAX_LIGHTNESS)
                .max(MIN_LIGHTNESS)
        })
        .collect()
}

// (lightness, hex) for every step of the ramp below `hsl`
fn shades(hsl: Hsl, num_colors: usize) -> impl Iterator<Item = (f64, String)> {
    debug!("base {:?}, step {:.3} points", hsl, LIGHTNESS_SPAN * 100.0 / num_colors as f64);
    lightness_ramp(hsl.l, num_colors).into_iter().map(move |l| {
        let hex = hsl.with_lightness(l).to_hex();
        trace!("lightness {:.2} -> {}", l, hex);
        (l, hex)
    })
}

/// Build `num_colors` shades of `base_color`, lightest first. Hue and
/// saturation are kept; only lightness changes.
pub fn generate_matching_colors(
    base_color: &str,
    num_colors: usize,
) -> Result<Vec<String>, PaletteError> {
    if num_colors == 0 {
        return Err(PaletteError::EmptyPalette);
    }
    let hsl = colors::hex_to_hsl(base_color);
    Ok(shades(hsl, num_colors).map(|(_, hex)| hex).collect())
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Swatch {
    pub index: usize,
    pub hex: String,
    pub lightness: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Palette {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_hsl: Option<Hsl>,
    pub swatches: Vec<Swatch>,
}

impl Palette {
    /// Like `generate_matching_colors`, but rejects a malformed base color
    /// instead of producing garbage, and keeps the lightness of every swatch.
    pub fn matching(base_color: &str, num_colors: usize) -> Result<Self, PaletteError> {
        colors::parse_hex_color(base_color)?;
        if num_colors == 0 {
            return Err(PaletteError::EmptyPalette);
        }
        let base_hsl = colors::hex_to_hsl(base_color);
        let swatches = shades(base_hsl, num_colors)
            .enumerate()
            .map(|(index, (lightness, hex))| Swatch { index, hex, lightness })
            .collect();
        Ok(Self {
            base_color: Some(base_color.to_lowercase()),
            base_hsl: Some(base_hsl),
            swatches,
        })
    }

    pub fn hue_wheel(num_colors: usize) -> Result<Self, PaletteError> {
        if num_colors == 0 {
            return Err(PaletteError::EmptyPalette);
        }
        let swatches = colors::generate_color_palette(num_colors)
            .into_iter()
            .enumerate()
            .map(|(index, hex)| Swatch { index, hex, lightness: 50.0 })
            .collect();
        Ok(Self {
            base_color: None,
            base_hsl: None,
            swatches,
        })
    }

    pub fn hex_colors(&self) -> Vec<&str> {
        self.swatches.iter().map(|s| s.hex.as_str()).collect()
    }
}
