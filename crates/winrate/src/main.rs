//! Win-rate CLI
//!
//! Print one win-rate line per tournament results file.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use winrate::{tally_tournament, MalformedPolicy, OutputFormat, TallyConfig, WinRate};

#[derive(Parser, Debug)]
#[command(name = "winrate")]
#[command(version, about = "Report win rates from tnmt_<N>.txt tournament files", long_about = None)]
struct Cli {
    /// Tournament indices to report [default: 3]
    tournaments: Vec<u32>,

    /// Directory holding the tournament files
    #[arg(short, long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Player whose wins are counted
    #[arg(short, long, allow_negative_numbers = true)]
    player: Option<i32>,

    /// How to treat lines whose winner field cannot be read
    #[arg(short, long, value_enum)]
    malformed: Option<MalformedPolicy>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log each file read
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Build the effective config: file values first, then flags
    fn into_config(self) -> winrate::Result<TallyConfig> {
        let mut config = match &self.config {
            Some(path) => TallyConfig::load(path)?,
            None => TallyConfig::default(),
        };

        if !self.tournaments.is_empty() {
            config.tournaments = self.tournaments;
        }
        if let Some(dir) = self.dir {
            config.dir = dir;
        }
        if let Some(player) = self.player {
            config.player = player;
        }
        if let Some(malformed) = self.malformed {
            config.malformed = malformed;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "winrate=debug" } else { "winrate=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn print_result(rate: &WinRate, format: OutputFormat) -> winrate::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", rate),
        OutputFormat::Json => println!("{}", serde_json::to_string(rate)?),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;
    for &index in &config.tournaments {
        let outcome = tally_tournament(&config, index)
            .and_then(|rate| print_result(&rate, config.format));
        if let Err(e) = outcome {
            eprintln!("Tournament #{} Error: {}", index, e);
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
