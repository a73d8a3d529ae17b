//! `nearby` subcommand: bodies within a radius of a named body.

use anyhow::{Context, Result};

use navcomp_lib::{nearby_objects, NearbySummary};

use super::{ensure_number, GlobalOptions};

/// Arguments for the nearby command.
#[derive(Debug, Clone)]
pub struct NearbyCommandArgs {
    pub name: String,
    pub range: f64,
    pub limit: usize,
}

pub fn handle_nearby(options: &GlobalOptions, args: &NearbyCommandArgs) -> Result<()> {
    print!("{}", nearby_output(options, args)?);
    Ok(())
}

pub fn nearby_output(options: &GlobalOptions, args: &NearbyCommandArgs) -> Result<String> {
    ensure_number("range", args.range, false)?;
    if args.range < 0.0 {
        anyhow::bail!("--range must not be negative, got {}", args.range);
    }

    let catalog = options.load_catalog()?;
    let target = catalog
        .find_body(&args.name)
        .with_context(|| format!("failed to look up {}", args.name))?;
    let rows = nearby_objects(&catalog, target, args.range, args.limit)
        .with_context(|| format!("failed to search around {}", target.name))?;

    let summary = NearbySummary::from_rows(&target.name, args.range, args.limit, &rows);
    options
        .format
        .format(&summary, |summary, mode| summary.render(mode))
}
