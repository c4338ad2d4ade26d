//! Sweep the magnitude response around cutoff.

use clap::{Args, ValueEnum};
use std::path::Path;

use super::common::{FilterArgs, load_settings};
use crate::export::{response_csv, response_json};
use crate::plot;
use crate::units::format_frequency;

/// Output format for `pilc response`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResponseFormat {
    /// ASCII plot
    Plot,
    /// JSON document with every sample
    Json,
    /// `frequency_hz,magnitude_db` rows
    Csv,
}

#[derive(Args)]
pub struct ResponseArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Number of log-spaced points from fc/10 to fc*10
    #[arg(long, value_name = "N")]
    points: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ResponseFormat::Plot)]
    format: ResponseFormat,
}

pub fn run(args: ResponseArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let settings = load_settings(config)?;
    let spec = args.filter.to_spec(&settings)?;
    let points = args.points.unwrap_or(settings.points);

    let curve = spec.sweep(points)?;
    tracing::info!(points = curve.len(), "response sampled");

    match args.format {
        ResponseFormat::Json => println!("{}", response_json(&spec, &curve)?),
        ResponseFormat::Csv => println!("{}", response_csv(&curve)),
        ResponseFormat::Plot => {
            println!();
            println!(
                "{}",
                plot::render(&curve, spec.cutoff_hz, settings.plot.width, settings.plot.height)
            );
            println!();
            match curve.minus_3db_frequency() {
                Some(f) => println!("-3 dB at {}", format_frequency(f)),
                None => println!("-3 dB point not reached in the sweep"),
            }
            if let Ok(range) = curve.dynamic_range_db() {
                println!("Range: {range:.1} dB over {} points", curve.len());
            }
        }
    }

    Ok(())
}
