use crate::infra::{
    parse_room_status, parse_room_toggle, parse_room_type_spec, RoomToggle, RoomTypeSpec,
};
use crate::reports::{run_occupancy_report, run_pricing_publish, run_pricing_quote};
use crate::server;
use clap::{Args, Parser, Subcommand};
use himyatra::error::AppError;
use himyatra::occupancy::RoomStatus;
use himyatra::pricing::PricingInput;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "HimYatra Companion",
    about = "Run the HimYatra pricing service or inspect pricing and occupancy from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Quote and publish dynamic room prices
    Pricing {
        #[command(subcommand)]
        command: PricingCommand,
    },
    /// Inspect the occupancy board
    Occupancy {
        #[command(subcommand)]
        command: OccupancyCommand,
    },
}

#[derive(Subcommand, Debug)]
enum PricingCommand {
    /// Show final prices and how they were derived
    Quote(QuoteArgs),
    /// Write final Deluxe and Premium Suite prices to the hotel store
    Publish(PublishArgs),
}

#[derive(Subcommand, Debug)]
enum OccupancyCommand {
    /// Summarize room types, optionally toggling rooms first
    Report(OccupancyReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured hotel data file
    #[arg(long)]
    pub(crate) data: Option<PathBuf>,
}

/// Pricing controls shared by the pricing subcommands.
#[derive(Args, Debug, Clone)]
pub(crate) struct PricingArgs {
    /// Current occupancy percentage (0-100)
    #[arg(long, default_value_t = 50.0)]
    pub(crate) occupancy_rate: f64,
    /// Disable occupancy and event adjustments
    #[arg(long)]
    pub(crate) no_dynamic_pricing: bool,
    /// Apply the special event multiplier
    #[arg(long)]
    pub(crate) special_event: bool,
    /// Special event multiplier, clamped to 1-3
    #[arg(long, default_value_t = 1.5)]
    pub(crate) event_multiplier: f64,
}

impl PricingArgs {
    pub(crate) fn settings(&self) -> PricingInput {
        PricingInput {
            occupancy_rate: self.occupancy_rate,
            dynamic_pricing_enabled: !self.no_dynamic_pricing,
            special_event_enabled: self.special_event,
            ..PricingInput::default()
        }
        .with_event_multiplier(self.event_multiplier)
    }
}

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    #[command(flatten)]
    pub(crate) pricing: PricingArgs,
    /// Quote an explicit base price instead of the standard rate card
    #[arg(long)]
    pub(crate) base_price: Option<f64>,
    /// Quote a single rate card entry
    #[arg(long, conflicts_with = "base_price")]
    pub(crate) room_type: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct PublishArgs {
    #[command(flatten)]
    pub(crate) pricing: PricingArgs,
    /// Hotel data file to update (defaults to HOTEL_DATA_PATH)
    #[arg(long)]
    pub(crate) data: Option<PathBuf>,
    /// Print the prices without writing them
    #[arg(long)]
    pub(crate) dry_run: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct OccupancyReportArgs {
    /// Only list rooms in this status
    #[arg(long, value_parser = parse_room_status)]
    pub(crate) status: Option<RoomStatus>,
    /// Only report this room type
    #[arg(long)]
    pub(crate) room_type: Option<String>,
    /// Add a room type before reporting (<name>:<room count>)
    #[arg(long = "add", value_parser = parse_room_type_spec)]
    pub(crate) add_room_types: Vec<RoomTypeSpec>,
    /// Toggle a room to its next status before reporting (<room type>:<room number>)
    #[arg(long = "toggle", value_parser = parse_room_toggle)]
    pub(crate) toggles: Vec<RoomToggle>,
    /// List individual rooms under each room type
    #[arg(long)]
    pub(crate) list_rooms: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Pricing {
            command: PricingCommand::Quote(args),
        } => run_pricing_quote(args),
        Command::Pricing {
            command: PricingCommand::Publish(args),
        } => run_pricing_publish(args),
        Command::Occupancy {
            command: OccupancyCommand::Report(args),
        } => run_occupancy_report(args),
    }
}
