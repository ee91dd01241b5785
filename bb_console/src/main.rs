//! An interactive restaurant table-booking console.
//!
//! The console drives the booking engine through a menu loop: guest queue
//! generation, seating (one by one or in bulk), table status, and booking
//! statistics. Expired table holds are released at the top of every loop
//! iteration.

use anyhow::Result;
use pico_args::Arguments;

use bistro_booking::{BookingLedger, DEFAULT_HOLD_SECS, LedgerConfig, QueueGenerator};

mod menu;

use menu::Console;

const HELP: &str = "\
Run an interactive restaurant table-booking session

USAGE:
  bb_console [OPTIONS]

OPTIONS:
  --tables N            Number of tables in the dining room  [default: env BISTRO_TABLES or interactive prompt]
  --hold-secs N         Seconds a booking holds its table    [default: 30]
  --seed N              Seed for reproducible queue generation
  --auto                Generate one queue, seat it in bulk, print status and statistics, then exit

FLAGS:
  --json                With --auto, print the final status snapshot as JSON
  -h, --help            Print help information

ENVIRONMENT:
  BISTRO_TABLES         Table count used when --tables is not given
  RUST_LOG              Log level filter (e.g. debug, info)
";

struct Args {
    tables: Option<usize>,
    hold_secs: u64,
    seed: Option<u64>,
    auto: bool,
    json: bool,
}

fn main() -> Result<()> {
    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        tables: pargs.opt_value_from_str("--tables").ok().flatten().or_else(|| {
            std::env::var("BISTRO_TABLES")
                .ok()
                .and_then(|v| v.parse().ok())
        }),
        hold_secs: pargs
            .value_from_str("--hold-secs")
            .unwrap_or(DEFAULT_HOLD_SECS),
        seed: pargs.opt_value_from_str("--seed").ok().flatten(),
        auto: pargs.contains("--auto"),
        json: pargs.contains("--json"),
    };

    env_logger::builder().format_target(false).init();

    let total_tables = match args.tables {
        Some(n) => n,
        None => menu::prompt_table_count()?,
    };

    let config = LedgerConfig {
        total_tables,
        hold_secs: args.hold_secs,
        ..LedgerConfig::default()
    };
    let ledger = BookingLedger::new(config)?;
    let generator = match args.seed {
        Some(seed) => QueueGenerator::with_seed(seed),
        None => QueueGenerator::new(),
    };

    let mut console = Console::new(ledger, generator);
    if args.auto {
        console.run_automatic(args.json)
    } else {
        console.run()
    }
}
