use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use navcomp_cli::commands::heading::{handle_heading, HeadingCommandArgs};
use navcomp_cli::commands::nearby::{handle_nearby, NearbyCommandArgs};
use navcomp_cli::commands::route::{handle_route, RouteCommandArgs};
use navcomp_cli::commands::GlobalOptions;
use navcomp_cli::output::OutputFormat;
use navcomp_lib::{Heading, Point, GLOBAL_FRAME};

#[derive(Parser, Debug)]
#[command(author, version, about = "Navigation computer for the body catalog")]
struct Cli {
    /// Catalog JSON file (falls back to NAVCOMP_CATALOG, then ./atsdata.json).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Route cache file (falls back to NAVCOMP_ROUTE_CACHE, then the user data directory).
    #[arg(long, global = true)]
    cache: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Neither load nor persist the route cache.
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Best route between two bodies, through the gate network when shorter.
    Route {
        /// Starting body name (case-insensitive substring).
        #[arg(long = "from")]
        from: String,
        /// Destination body name (case-insensitive substring).
        #[arg(long = "to")]
        to: String,
        /// Warp factor.
        #[arg(long, default_value_t = 1.0)]
        speed: f64,
    },
    /// Bodies lying along a heading from a position.
    Heading {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long, allow_hyphen_values = true)]
        z: f64,
        /// Yaw in degrees.
        #[arg(long, allow_hyphen_values = true)]
        yaw: f64,
        /// Pitch in degrees.
        #[arg(long, allow_hyphen_values = true)]
        pitch: f64,
        /// Warp factor; also the projection length unless --line-length is set.
        #[arg(long, default_value_t = 1.0)]
        speed: f64,
        /// Region the position is expressed in.
        #[arg(long, default_value = GLOBAL_FRAME)]
        frame: String,
        /// Bodies this close to the position are treated as the observer.
        #[arg(long, default_value_t = 0.0)]
        same_body_distance: f64,
        /// Length of the projected line.
        #[arg(long)]
        line_length: Option<f64>,
    },
    /// Bodies within a range of a named body.
    Nearby {
        /// Reference body name (case-insensitive substring).
        name: String,
        /// Search radius.
        #[arg(long, default_value_t = 50.0)]
        range: f64,
        /// Maximum rows to print.
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..=100))]
        limit: u8,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let options = GlobalOptions {
        catalog: cli.catalog,
        cache: cli.cache,
        format: cli.format,
        no_cache: cli.no_cache,
    };

    match cli.command {
        Command::Route { from, to, speed } => {
            handle_route(&options, &RouteCommandArgs { from, to, speed })
        }
        Command::Heading {
            x,
            y,
            z,
            yaw,
            pitch,
            speed,
            frame,
            same_body_distance,
            line_length,
        } => handle_heading(
            &options,
            &HeadingCommandArgs {
                origin: Point::new(x, y, z),
                heading: Heading::new(yaw, pitch),
                speed,
                frame,
                same_body_distance,
                line_length,
            },
        ),
        Command::Nearby { name, range, limit } => handle_nearby(
            &options,
            &NearbyCommandArgs {
                name,
                range,
                limit: usize::from(limit),
            },
        ),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
