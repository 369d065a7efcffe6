mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use searoute_cli::output::OutputFormat;

use commands::demo::handle_demo_command;
use commands::route::{
    handle_route_command, CostArg, FuelAccountingArg, HeuristicArg, RouteCommandArgs,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fuel-constrained shipping lane planner")]
struct Cli {
    /// Load the lane network from a JSON file instead of the built-in fixture.
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Output format for planned routes.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two ports.
    Route(RouteArgs),
    /// Plan B -> D, add the B-A detour lane, and plan again.
    Demo {
        /// Maximum fuel a single lane may burn.
        #[arg(long, default_value_t = 20.0, allow_negative_numbers = true)]
        fuel_budget: f64,
    },
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Starting port name.
    #[arg(long = "from")]
    from: String,
    /// Destination port name.
    #[arg(long = "to")]
    to: String,
    /// Fuel budget checked against each lane (or the running total).
    #[arg(long, allow_negative_numbers = true)]
    fuel_budget: f64,
    /// Remaining-distance estimate used to order the frontier.
    #[arg(long, value_enum, default_value_t = HeuristicArg::InitialLetter)]
    heuristic: HeuristicArg,
    /// How fuel is compared against the budget.
    #[arg(long, value_enum, default_value_t = FuelAccountingArg::LastLeg)]
    fuel_accounting: FuelAccountingArg,
    /// How lane weather is applied to the accumulated cost.
    #[arg(long, value_enum, default_value_t = CostArg::Compounding)]
    cost: CostArg,
    /// Abort the search after this many node expansions.
    #[arg(long)]
    max_expansions: Option<usize>,
}

impl From<RouteArgs> for RouteCommandArgs {
    fn from(args: RouteArgs) -> Self {
        Self {
            from: args.from,
            to: args.to,
            fuel_budget: args.fuel_budget,
            heuristic: args.heuristic,
            fuel_accounting: args.fuel_accounting,
            cost: args.cost,
            max_expansions: args.max_expansions,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let network = cli.network.as_deref();

    match cli.command {
        Command::Route(args) => handle_route_command(network, cli.format, &args.into()),
        Command::Demo { fuel_budget } => handle_demo_command(network, cli.format, fuel_budget),
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
