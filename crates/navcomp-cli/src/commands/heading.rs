//! `heading` subcommand: bodies along a projected line of sight.

use anyhow::{Context, Result};

use navcomp_lib::{find_along_line, Heading, HeadingSummary, LineQuery, Point};

use super::{ensure_number, GlobalOptions};

/// Arguments for the heading command.
#[derive(Debug, Clone)]
pub struct HeadingCommandArgs {
    pub origin: Point,
    pub heading: Heading,
    pub speed: f64,
    pub frame: String,
    pub same_body_distance: f64,
    pub line_length: Option<f64>,
}

pub fn handle_heading(options: &GlobalOptions, args: &HeadingCommandArgs) -> Result<()> {
    print!("{}", heading_output(options, args)?);
    Ok(())
}

pub fn heading_output(options: &GlobalOptions, args: &HeadingCommandArgs) -> Result<String> {
    ensure_number("x", args.origin.x, false)?;
    ensure_number("y", args.origin.y, false)?;
    ensure_number("z", args.origin.z, false)?;
    ensure_number("yaw", args.heading.yaw, false)?;
    ensure_number("pitch", args.heading.pitch, false)?;
    ensure_number("speed", args.speed, true)?;
    ensure_number("same-body-distance", args.same_body_distance, false)?;
    if let Some(length) = args.line_length {
        ensure_number("line-length", length, true)?;
    }

    let catalog = options.load_catalog()?;

    let mut query = LineQuery::new(args.origin, args.heading, args.speed)
        .with_frame(args.frame.as_str())
        .with_same_body_distance(args.same_body_distance);
    if let Some(length) = args.line_length {
        query = query.with_line_length(length);
    }

    let search = find_along_line(&catalog, &query).with_context(|| {
        format!(
            "failed to search along heading {}/{}",
            args.heading.yaw, args.heading.pitch
        )
    })?;

    let summary = HeadingSummary::from_search(&search, args.heading, args.speed);
    options
        .format
        .format(&summary, |summary, mode| summary.render(mode))
}
