use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use palette_curator::colors;
use palette_curator::export::{self, OutputFormat};
use palette_curator::{Palette, PaletteConfig};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Shades of the base color, lightest first
    Matching,
    /// Evenly spaced hues, ignores the base color
    HueWheel,
}

/// Program to generate color palettes from a base color
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base color in #rrggbb notation
    #[arg(short, long, default_value = "#3366cc", value_parser = parse_base_color)]
    base_color: String,

    /// Number of colors in the palette
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    num_colors: u64,

    /// How the palette is derived
    #[arg(short, long, value_enum, default_value_t = Mode::Matching)]
    mode: Mode,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// File to write the palette to, stdout if not set
    #[arg(short, long)]
    output: Option<String>,

    /// Json file with a list of matching palettes to build. Cannot be combined
    /// with --mode, --base-color or --num-colors
    #[arg(short, long, conflicts_with_all = ["mode", "base_color", "num_colors"])]
    config: Option<String>,
}

struct Built {
    palettes: Vec<Palette>,
    // config runs always render as a list, even with a single request
    batch: bool,
}

fn parse_base_color(value: &str) -> Result<String, colors::ColorError> {
    colors::parse_hex_color(value)?;
    Ok(value.to_lowercase())
}

fn build_palettes(args: &Args) -> Result<Built> {
    if let Some(config_path) = &args.config {
        let config = PaletteConfig::read_from_file(config_path)
            .map_err(|e| anyhow!("failed to read config {}: {}", config_path, e))?;
        info!("building {} palettes from {}", config.palettes.len(), config_path);
        return Ok(Built { palettes: config.build()?, batch: true });
    }

    let num_colors = usize::try_from(args.num_colors)?;
    let palette = match args.mode {
        Mode::Matching => Palette::matching(&args.base_color, num_colors)?,
        Mode::HueWheel => Palette::hue_wheel(num_colors)?,
    };
    Ok(Built { palettes: vec![palette], batch: false })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let built = build_palettes(&args)?;
    let rendered = export::render(&built.palettes, args.format, built.batch)?;

    match &args.output {
        Some(path) => {
            export::write_to_file(path, &rendered)
                .with_context(|| format!("failed to write {}", path))?;
            info!("wrote {} palettes to {}", built.palettes.len(), path);
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
