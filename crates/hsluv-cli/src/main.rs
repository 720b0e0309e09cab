//! hsluv - HSLuv / HPLuv <-> sRGB converter
//!
//! Thin shell front end over the `hsluv` crate.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Output;
use commands::convert::Direction;

#[derive(Parser, Debug)]
#[command(name = "hsluv")]
#[command(author, version, about = "HSLuv / HPLuv <-> sRGB converter")]
#[command(long_about = "
Converts colors between gamma-encoded sRGB (components in 0..1) and the
perceptually uniform HSLuv and HPLuv spaces (hue in degrees, saturation
and lightness in 0..100).

Examples:
  hsluv hsluv-to-rgb 250 80 45          # HSLuv -> sRGB
  hsluv rgb2hsluv 0.2 0.4 0.8           # sRGB -> HSLuv
  hsluv rgb-to-hpluv 1 0 0 --clamp      # clamp into the HPLuv gamut
  hsluv --json hpluv-to-rgb -30 60 50   # hue wraps, JSON output
  hsluv table --from hsluv --steps 4    # grid sweep
  RUST_LOG=debug hsluv rgb2hpluv 1 0 0  # log to stderr
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Print results as JSON arrays
    #[arg(long, global = true)]
    json: bool,

    /// Decimal places for text output
    #[arg(long, global = true, default_value_t = 6)]
    precision: usize,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// HSLuv (h s l) to sRGB (r g b)
    #[command(name = "hsluv-to-rgb", visible_alias = "hsluv2rgb")]
    HsluvToRgb(PolarArgs),

    /// sRGB (r g b) to HSLuv (h s l)
    #[command(name = "rgb-to-hsluv", visible_alias = "rgb2hsluv")]
    RgbToHsluv(RgbArgs),

    /// HPLuv (h s l) to sRGB (r g b)
    #[command(name = "hpluv-to-rgb", visible_alias = "hpluv2rgb")]
    HpluvToRgb(PolarArgs),

    /// sRGB (r g b) to HPLuv (h s l)
    #[command(name = "rgb-to-hpluv", visible_alias = "rgb2hpluv")]
    RgbToHpluv(RgbToHpluvArgs),

    /// Print a grid sweep of conversions
    Table(TableArgs),
}

/// HSLuv or HPLuv input.
#[derive(Args, Debug)]
struct PolarArgs {
    /// Hue in degrees (any finite value, wraps)
    #[arg(allow_negative_numbers = true)]
    h: f64,

    /// Saturation, 0..100
    #[arg(allow_negative_numbers = true)]
    s: f64,

    /// Lightness, 0..100
    #[arg(allow_negative_numbers = true)]
    l: f64,
}

/// Gamma-encoded sRGB input.
#[derive(Args, Debug)]
struct RgbArgs {
    /// Red, 0..1
    #[arg(allow_negative_numbers = true)]
    r: f64,

    /// Green, 0..1
    #[arg(allow_negative_numbers = true)]
    g: f64,

    /// Blue, 0..1
    #[arg(allow_negative_numbers = true)]
    b: f64,
}

#[derive(Args, Debug)]
struct RgbToHpluvArgs {
    #[command(flatten)]
    rgb: RgbArgs,

    /// Clamp saturation into 0..100 (closest color inside the HPLuv gamut)
    #[arg(long)]
    clamp: bool,
}

/// Arguments for the `table` command.
#[derive(Args, Debug)]
struct TableArgs {
    /// Space to sweep
    #[arg(long, value_enum, default_value_t = TableSource::Rgb)]
    from: TableSource,

    /// Subdivisions per axis
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=64))]
    steps: u32,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum TableSource {
    Rgb,
    Hsluv,
    Hpluv,
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let out = Output {
        json: cli.json,
        precision: cli.precision,
    };

    match cli.command {
        Commands::HsluvToRgb(a) => commands::convert::run(Direction::HsluvToRgb, (a.h, a.s, a.l), false, &out),
        Commands::RgbToHsluv(a) => commands::convert::run(Direction::RgbToHsluv, (a.r, a.g, a.b), false, &out),
        Commands::HpluvToRgb(a) => commands::convert::run(Direction::HpluvToRgb, (a.h, a.s, a.l), false, &out),
        Commands::RgbToHpluv(a) => {
            let RgbArgs { r, g, b } = a.rgb;
            commands::convert::run(Direction::RgbToHpluv, (r, g, b), a.clamp, &out)
        }
        Commands::Table(a) => commands::table::run(&a, &out),
    }
}
