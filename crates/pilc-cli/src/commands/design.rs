//! Design a Pi ladder and print its component values.

use clap::{Args, ValueEnum};
use pilc_config::{Design, Settings, ensure_user_designs_dir, user_designs_dir};
use pilc_core::{
    Component, ComponentKind, ComponentSequence, ESeries, EvenOrderPolicy, FilterSpec,
    match_standard, synthesize_with_policy,
};
use std::path::Path;

use super::common::{FilterArgs, load_design, load_settings};
use super::explain::explanation;
use crate::diagram::pi_topology;
use crate::export::{design_csv, design_json, designator};
use crate::plot;
use crate::units::{format_capacitance, format_frequency, format_g, format_inductance, format_sci};

/// Output format for `pilc design`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DesignFormat {
    /// Header, schematic and component table
    Table,
    /// JSON document
    Json,
    /// One CSV row per component
    Csv,
}

#[derive(Args)]
pub struct DesignArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Load a saved or factory design instead of -t/-f/-z/-r/-n
    #[arg(long, value_name = "NAME|PATH", conflicts_with_all = ["family", "frequency"])]
    preset: Option<String>,

    /// Even Chebyshev orders: reject, increment (round up to odd), or accept
    #[arg(long, value_name = "POLICY")]
    even_order: Option<EvenOrderPolicy>,

    /// Show the nearest standard part for every component (E12, E24, E96)
    #[arg(long, value_name = "SERIES", num_args = 0..=1, default_missing_value = "")]
    eseries: Option<String>,

    /// Append an ASCII frequency-response plot
    #[arg(long)]
    plot: bool,

    /// Number of sweep points for --plot
    #[arg(long, value_name = "N")]
    points: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = DesignFormat::Table)]
    format: DesignFormat,

    /// Print raw values in farads and henries
    #[arg(long)]
    raw: bool,

    /// Explain the selected filter family and exit
    #[arg(long)]
    explain: bool,

    /// Save the design under this name in the user designs directory
    #[arg(long, value_name = "NAME")]
    save: Option<String>,

    /// Overwrite an existing saved design
    #[arg(long, requires = "save")]
    force: bool,
}

pub fn run(args: DesignArgs, config: Option<&Path>) -> anyhow::Result<()> {
    if args.explain {
        let Some(family) = args.filter.family else {
            anyhow::bail!("--explain needs a filter type: pass -t/--type");
        };
        println!();
        print!("{}", explanation(family));
        return Ok(());
    }

    let settings = load_settings(config)?;

    let (spec, title) = match &args.preset {
        Some(name) => {
            let design = load_design(name)?;
            (design.to_spec()?, Some(design.name))
        }
        None => (args.filter.to_spec(&settings)?, None),
    };

    let policy = match args.even_order {
        Some(policy) => policy,
        None => settings.even_order_policy()?,
    };
    let ladder = synthesize_with_policy(&spec, policy)?;
    if let Some(adj) = ladder.adjustment() {
        tracing::info!(requested = adj.requested, effective = adj.effective, "order adjusted");
    }

    let series = match args.eseries.as_deref() {
        None => None,
        Some("") => Some(settings.series()?),
        Some(name) => Some(name.parse::<ESeries>()?),
    };

    if let Some(name) = &args.save {
        save_design(name, &spec, args.force)?;
    }

    match args.format {
        DesignFormat::Json => println!("{}", design_json(&ladder, series)?),
        DesignFormat::Csv => println!("{}", design_csv(&ladder)),
        DesignFormat::Table => {
            print!("{}", render_table(&ladder, title.as_deref(), args.raw));
            if let Some(series) = series {
                print!("{}", render_standard_values(&ladder, series)?);
            }
            if args.plot {
                print_plot(ladder.spec(), &settings, args.points)?;
            }
        }
    }

    Ok(())
}

fn save_design(name: &str, spec: &FilterSpec, force: bool) -> anyhow::Result<()> {
    ensure_user_designs_dir()?;
    let path = user_designs_dir().join(format!("{name}.toml"));
    if path.exists() && !force {
        anyhow::bail!("Design '{}' already exists. Use --force to overwrite.", name);
    }
    Design::from_spec(name, spec).save(&path)?;
    eprintln!("Saved design '{}' to {}", name, path.display());
    Ok(())
}

fn format_value(component: &Component, raw: bool) -> String {
    match (raw, component.kind) {
        (true, kind) => format!("{} {}", format_sci(component.value, 6), kind.unit()),
        (false, ComponentKind::Capacitor) => format_capacitance(component.value),
        (false, ComponentKind::Inductor) => format_inductance(component.value),
    }
}

const RULE_WIDTH: usize = 50;
const COLUMN_WIDTH: usize = 24;

/// Header, schematic and two-column component table.
pub fn render_table(ladder: &ComponentSequence, title: Option<&str>, raw: bool) -> String {
    let spec = ladder.spec();
    let family = spec.family.name();
    let mut out = String::new();

    let heading = format!(
        "{}{} Pi Low Pass Filter",
        family[..1].to_uppercase(),
        &family[1..]
    );
    out.push_str(&format!("\n{heading}\n"));
    if let Some(title) = title {
        out.push_str(&format!("Design:              {title}\n"));
    }
    out.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));
    out.push_str(&format!("Cutoff Frequency:    {}\n", format_frequency(spec.cutoff_hz)));
    out.push_str(&format!("Impedance Z0:        {} Ohm\n", format_g(spec.impedance_ohm, 4)));
    if let Some(ripple) = spec.effective_ripple() {
        out.push_str(&format!("Ripple:              {ripple} dB\n"));
    }
    out.push_str(&format!("Order:               {}\n", spec.order));
    if let Some(adj) = ladder.adjustment() {
        out.push_str(&format!(
            "Note:                order {} raised to {} (odd order needed for an equally terminated Pi ladder)\n",
            adj.requested, adj.effective
        ));
    }
    out.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));

    let caps: Vec<&Component> = ladder.capacitors().collect();
    let inds: Vec<&Component> = ladder.inductors().collect();

    out.push_str("\nTopology:\n");
    out.push_str(&pi_topology(caps.len(), inds.len()));
    out.push('\n');

    let border = format!("+{0}+{0}+\n", "-".repeat(COLUMN_WIDTH));
    out.push_str(&format!("\n{:^width$}\n", "Component Values", width = RULE_WIDTH));
    out.push_str(&border);
    out.push_str(&format!(
        "|{:^width$}|{:^width$}|\n",
        "Capacitors",
        "Inductors",
        width = COLUMN_WIDTH
    ));
    out.push_str(&border);

    let cell = |c: Option<&&Component>| {
        c.map(|c| format!("{}: {}", designator(c), format_value(c, raw)))
            .unwrap_or_default()
    };
    let inner = COLUMN_WIDTH - 2;
    for i in 0..caps.len().max(inds.len()) {
        out.push_str(&format!(
            "| {:<inner$} | {:<inner$} |\n",
            cell(caps.get(i)),
            cell(inds.get(i))
        ));
    }
    out.push_str(&border);
    out.push('\n');
    out
}

/// Nearest standard part for each component, with two-part suggestions.
///
/// Capacitors combine in parallel and inductors in series; both add.
pub fn render_standard_values(ladder: &ComponentSequence, series: ESeries) -> anyhow::Result<String> {
    let mut out = format!("Standard Values ({series})\n{}\n", "-".repeat(RULE_WIDTH));
    for c in ladder.components() {
        let m = match_standard(c.value, series)?;
        let fmt = |v: f64| match c.kind {
            ComponentKind::Capacitor => format_capacitance(v),
            ComponentKind::Inductor => format_inductance(v),
        };
        out.push_str(&format!(
            "  {:<4}{:>12} -> {:>12} ({:+.2}%)\n",
            designator(c),
            fmt(c.value),
            fmt(m.matched_value()),
            m.error_percent
        ));
        if let Some(pair) = m.parallel {
            let how = match c.kind {
                ComponentKind::Capacitor => "parallel",
                ComponentKind::Inductor => "series",
            };
            out.push_str(&format!(
                "      or {} + {} in {how} = {} ({:+.2}%)\n",
                fmt(pair.first),
                fmt(pair.second),
                fmt(pair.combined()),
                pair.error_percent
            ));
        }
    }
    out.push('\n');
    Ok(out)
}

fn print_plot(spec: &FilterSpec, settings: &Settings, points: Option<usize>) -> anyhow::Result<()> {
    let curve = spec.sweep(points.unwrap_or(settings.points))?;
    println!(
        "{}",
        plot::render(&curve, spec.cutoff_hz, settings.plot.width, settings.plot.height)
    );
    println!();
    Ok(())
}
