//! dialgen - terminal phone number generator
//!
//! This is the binary entry point. All logic lives in the library.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dialgen::app::write_default_config;
use dialgen::{list_countries, run_headless, run_tui, HeadlessOptions, LaunchOptions};
use dialgen_core::{parse_count, Error};

/// dialgen - generate plausible phone numbers per country
#[derive(Parser, Debug)]
#[command(name = "dialgen", version)]
#[command(about = "Generate plausible phone numbers for a chosen country", long_about = None)]
struct Args {
    /// Country to preselect (id, name or dialing code)
    #[arg(long, value_name = "KEY")]
    country: Option<String>,

    /// How many numbers to generate (1-10000)
    #[arg(long, value_name = "N", value_parser = count_arg, allow_hyphen_values = true)]
    count: Option<u32>,

    /// Seed for reproducible output
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Config file (defaults to <config dir>/dialgen/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory for exported files
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    /// Generate once and print the numbers instead of starting the TUI
    #[arg(long, requires = "country")]
    headless: bool,

    /// Print NDJSON records in headless mode
    #[arg(long, requires = "headless")]
    json: bool,

    /// Write the export file (or into this directory) in headless mode
    #[arg(long, value_name = "FILE", requires = "headless", conflicts_with = "json")]
    output: Option<PathBuf>,

    /// Verify every generated number against the country's shape
    #[arg(long, requires = "headless")]
    check: bool,

    /// List countries, optionally filtered by QUERY, and exit
    #[arg(long, value_name = "QUERY", num_args = 0..=1, conflicts_with = "headless")]
    list_countries: Option<Option<String>>,

    /// Write a default config file and exit
    #[arg(long, conflicts_with_all = ["headless", "list_countries"])]
    init_config: bool,
}

fn count_arg(raw: &str) -> Result<u32, String> {
    parse_count(raw).map_err(|e| e.user_message())
}

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();

    let launch = LaunchOptions {
        config: args.config,
        country: args.country,
        count: args.count,
        seed: args.seed,
        export_dir: args.export_dir,
    };

    let result = if args.init_config {
        write_default_config(launch.config.as_deref()).map(|message| println!("{}", message))
    } else if let Some(query) = &args.list_countries {
        let mut stdout = io::stdout().lock();
        list_countries(&launch, query.as_deref(), &mut stdout).map(|found| {
            if found == 0 {
                eprintln!("no matching countries");
            }
        })
    } else if args.headless {
        let options = HeadlessOptions {
            json: args.json,
            output: args.output,
            check: args.check,
        };
        run_headless(&launch, &options).await
    } else {
        run_tui(&launch).await
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => report(e),
    }
}

/// User mistakes get a one-line message; anything else goes to color-eyre
fn report(error: Error) -> color_eyre::Result<ExitCode> {
    match error {
        Error::InvalidCount { .. } | Error::UnknownCountry { .. } => {
            eprintln!("dialgen: {}", error.user_message());
            Ok(ExitCode::from(2))
        }
        e if e.is_recoverable() => {
            eprintln!("dialgen: {}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
        e => Err(e.into()),
    }
}
