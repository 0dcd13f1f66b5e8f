use std::fs;
use serde::Serialize;
use thiserror::Error;
use crate::palette::Palette;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv output is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    Plain,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    base_color: Option<&'a str>,
    index: usize,
    hex: &'a str,
    lightness: f64,
}

pub fn palette_to_json(palette: &Palette) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(palette)?)
}

/// Always an array, whatever the number of palettes.
pub fn to_json(palettes: &[Palette]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(palettes)?)
}

pub fn to_csv(palettes: &[Palette]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(vec![]);
    for palette in palettes {
        for swatch in &palette.swatches {
            writer.serialize(CsvRow {
                base_color: palette.base_color.as_deref(),
                index: swatch.index,
                hex: &swatch.hex,
                lightness: swatch.lightness,
            })?;
        }
    }
    // header is only written with the first row
    if palettes.iter().all(|p| p.swatches.is_empty()) {
        writer.write_record(["base_color", "index", "hex", "lightness"])?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// One hex color per line, palettes separated by an empty line.
pub fn to_plain(palettes: &[Palette]) -> String {
    palettes
        .iter()
        .map(|p| p.hex_colors().join("\n") + "\n")
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render palettes for output. Unless `batch` is set, a lone palette is
/// written as a json object instead of a one-element array.
pub fn render(
    palettes: &[Palette],
    format: OutputFormat,
    batch: bool,
) -> Result<String, ExportError> {
    match (format, palettes) {
        (OutputFormat::Json, [palette]) if !batch => palette_to_json(palette),
        (OutputFormat::Json, _) => to_json(palettes),
        (OutputFormat::Csv, _) => to_csv(palettes),
        (OutputFormat::Plain, _) => Ok(to_plain(palettes)),
    }
}

pub fn write_to_file(path: &str, contents: &str) -> Result<(), ExportError> {
    Ok(fs::write(path, contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Palette {
        Palette::matching("#ff0000", 3).unwrap()
    }

    fn render_json(palettes: &[Palette], batch: bool) -> serde_json::Value {
        serde_json::from_str(&render(palettes, OutputFormat::Json, batch).unwrap()).unwrap()
    }

    #[test]
    fn test_json_single_and_batch() {
        let single = render_json(&[red()], false);
        assert!(single.is_object());
        assert_eq!(single["swatches"][1]["hex"], "#770000");

        let batch = render_json(&[red(), Palette::hue_wheel(2).unwrap()], true);
        assert_eq!(batch.as_array().unwrap().len(), 2);

        let parsed: Vec<Palette> = serde_json::from_value(batch).unwrap();
        assert_eq!(parsed[0].hex_colors(), red().hex_colors());
        assert_eq!(parsed[1].base_color, None);
    }

    #[test]
    fn test_json_batch_of_one_is_array() {
        let batch = render_json(&[red()], true);
        assert!(batch.is_array());
        assert_eq!(batch[0]["swatches"][2]["hex"], "#660000");

        let direct: serde_json::Value = serde_json::from_str(&to_json(&[red()]).unwrap()).unwrap();
        assert_eq!(direct, batch);
        assert_eq!(render_json(&[], true), serde_json::json!([]));
    }

    #[test]
    fn test_csv() {
        let csv = to_csv(&[red()]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "base_color,index,hex,lightness");
        assert_eq!(lines[1], "#ff0000,0,#ff0000,50.0");
        assert_eq!(lines[3], "#ff0000,2,#660000,20.0");
    }

    #[test]
    fn test_csv_hue_wheel_has_empty_base() {
        let csv = to_csv(&[Palette::hue_wheel(1).unwrap()]).unwrap();
        assert_eq!(csv.lines().nth(1), Some(",0,#bf4040,50.0"));
    }

    #[test]
    fn test_csv_empty_still_has_header() {
        assert_eq!(to_csv(&[]).unwrap(), "base_color,index,hex,lightness\n");
    }

    #[test]
    fn test_plain() {
        assert_eq!(to_plain(&[red()]), "#ff0000\n#770000\n#660000\n");
        let two = to_plain(&[red(), red()]);
        assert_eq!(two.lines().filter(|l| l.is_empty()).count(), 1);
    }

    #[test]
    fn test_write_to_file() {
        let path = std::env::temp_dir().join("palette_curator_export_test.txt");
        let path = path.to_str().unwrap();
        write_to_file(path, &render(&[red()], OutputFormat::Plain, false).unwrap()).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "#ff0000\n#770000\n#660000\n");
        let _ = fs::remove_file(path);
    }
}
