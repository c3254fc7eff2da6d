use std::path::PathBuf;
use std::process;

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use iowa_events::export::{self, DEFAULT_CSV_FILE, DEFAULT_JSON_FILE};
use iowa_events::summary::CatalogueSummary;
use iowa_events::{collect_events, default_sources};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "iowa-events")]
#[command(about = "Builds the Iowa public events catalogue and exports it to JSON and CSV", long_about = None)]
struct Cli {
    #[arg(
        short = 'l',
        long = "log-level",
        value_enum,
        default_value = "info",
        help = "Set the logging level"
    )]
    log_level: LogLevel,

    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_JSON_FILE,
        help = "Where to write the JSON export"
    )]
    json: PathBuf,

    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_CSV_FILE,
        help = "Where to write the CSV export"
    )]
    csv: PathBuf,

    #[arg(
        long,
        value_name = "YYYY-MM-DD",
        help = "Reference date for dropping past events (defaults to today)",
        value_parser = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| e.to_string()),
    )]
    today: Option<NaiveDate>,

    #[arg(long, help = "Do not print the catalogue summary")]
    no_summary: bool,
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.clone().into())
        .init();

    let started_at = Local::now().naive_local();
    let today = cli.today.unwrap_or_else(|| started_at.date());

    log::info!("Building Iowa events catalogue...");
    let events = collect_events(today, &default_sources());

    export::write_json(&cli.json, &events, started_at).unwrap_or_else(|e| {
        log::error!("Error writing {}: {}", cli.json.display(), e);
        process::exit(1);
    });

    export::write_csv(&cli.csv, &events).unwrap_or_else(|e| {
        log::error!("Error writing {}: {}", cli.csv.display(), e);
        process::exit(1);
    });

    if !cli.no_summary {
        print!("{}", CatalogueSummary::from_events(&events));
        println!(
            "\nOutput: {}, {}",
            cli.json.display(),
            cli.csv.display()
        );
    }
}
