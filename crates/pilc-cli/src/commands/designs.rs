//! List factory and user designs.

use clap::Args;
use pilc_config::{
    Design, design_name_from_path, factory_design_names, get_factory_design, list_user_designs,
    user_designs_dir,
};

use crate::units::format_frequency;

#[derive(Args)]
pub struct DesignsArgs {
    /// Show only factory designs
    #[arg(long, conflicts_with = "user")]
    factory: bool,

    /// Show only user designs
    #[arg(long)]
    user: bool,
}

fn summary(design: &Design) -> String {
    let ripple = design
        .ripple_db
        .map(|r| format!(", {r} dB"))
        .unwrap_or_default();
    format!(
        "{} n={} {}{ripple}",
        design.filter_type,
        design.order,
        format_frequency(design.cutoff_hz)
    )
}

pub fn run(args: DesignsArgs) -> anyhow::Result<()> {
    if !args.user {
        println!("Factory Designs:");
        println!("================");
        for key in factory_design_names() {
            let Some(design) = get_factory_design(key) else {
                continue;
            };
            println!("  {key:16} {:32} {}", summary(&design), design.name);
        }
        println!();
    }

    if !args.factory {
        println!("User Designs:");
        println!("=============");
        let paths = list_user_designs();
        if paths.is_empty() {
            println!("  (none)");
            println!();
            println!("  Save one with: pilc design ... --save <name>");
            println!("  Directory: {}", user_designs_dir().display());
        }
        for path in paths {
            let name = design_name_from_path(&path).unwrap_or_else(|| "unknown".to_string());
            match Design::load(&path) {
                Ok(design) => println!("  {name:16} {:32} {}", summary(&design), design.name),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "unreadable design");
                    println!("  {name:16} (error loading)");
                }
            }
        }
        println!();
    }

    Ok(())
}
