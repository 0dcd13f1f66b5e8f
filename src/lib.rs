pub mod colors;
pub mod export;
pub mod palette;

use serde::{Deserialize, Serialize};

pub use colors::{hex_to_hsl, hsl_to_hex, Hsl};
pub use palette::{generate_matching_colors, Palette, PaletteError};

/// One palette to build in a batch run.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct PaletteRequest {
    pub base_color: String,
    pub num_colors: usize,
}

/// Batch configuration, read from json by `palette_tool --config`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct PaletteConfig {
    pub palettes: Vec<PaletteRequest>,
}

impl PaletteConfig {
    pub fn read_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json_string = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json_string)?)
    }

    pub fn build(&self) -> Result<Vec<Palette>, PaletteError> {
        self.palettes
            .iter()
            .map(|request| Palette::matching(&request.base_color, request.num_colors))
            .collect()
    }
}
