//! Match a single value to standard parts.

use clap::Args;
use pilc_core::{ESeries, match_standard};
use std::path::Path;

use super::common::load_settings;
use crate::units::format_g;

#[derive(Args)]
pub struct MatchArgs {
    /// Ideal value in base units (e.g. 3.3e-10 for 330 pF)
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    value: f64,

    /// Standard series: E12, E24 or E96 [default: from settings, E24]
    #[arg(short, long, value_name = "SERIES")]
    series: Option<ESeries>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: MatchArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let series = match args.series {
        Some(series) => series,
        None => load_settings(config)?.series()?,
    };
    let m = match_standard(args.value, series)?;

    if args.json {
        let mut doc = serde_json::json!({
            "ideal_value": m.ideal_value,
            "series": m.series.name(),
            "matched_value": m.matched_value(),
            "error_percent": m.error_percent,
        });
        if let Some(pair) = m.parallel {
            doc["parallel"] = serde_json::json!({
                "first": pair.first,
                "second": pair.second,
                "combined": pair.combined(),
                "error_percent": pair.error_percent,
            });
        }
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("Ideal:    {}", format_g(m.ideal_value, 6));
    println!(
        "{:<9} {} ({:+.2}%)",
        format!("{}:", m.series),
        format_g(m.matched_value(), 6),
        m.error_percent
    );
    match m.parallel {
        Some(pair) => println!(
            "Pair:     {} + {} = {} ({:+.2}%)",
            format_g(pair.first, 6),
            format_g(pair.second, 6),
            format_g(pair.combined(), 6),
            pair.error_percent
        ),
        None => println!("Pair:     none needed"),
    }
    Ok(())
}
