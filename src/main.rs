//! Terminal blackjack for up to four players.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_table::console::Console;
use blackjack_table::options::DEFAULT_BANKROLL;
use blackjack_table::{Table, TableOptions};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(
    name = "blackjack",
    about = "Play blackjack against the dealer in your terminal"
)]
struct Args {
    /// Seed for shuffling (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Money each player starts with
    #[arg(long, default_value_t = DEFAULT_BANKROLL)]
    bankroll: u32,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    info!(seed, bankroll = args.bankroll, "opening table");

    let options = TableOptions::default().with_starting_bankroll(args.bankroll);
    let mut table = Table::new(options, seed);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    match console.run(&mut table) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "table closed");
            eprintln!("blackjack: {err}");
            ExitCode::FAILURE
        }
    }
}
