use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;

use aztro_predict::numerology::parse_birth_date;
use aztro_predict::report::{comprehensive_chart, numerology_report, ChartReading};
use aztro_predict::server::{self, AppState};
use aztro_predict::vastu::{analyze, VastuInput};
use aztro_predict::{AppConfig, BirthProfile, ChartOptions};

/// Numerology, Jyotish and Vastu readings over HTTP or from the shell.
#[derive(Debug, Parser)]
#[command(name = "aztro", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file (defaults to ./aztro.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Print a complete numerology report
    Numerology {
        #[arg(long)]
        dob: String,
        #[arg(long)]
        name: String,
    },
    /// Print a comprehensive birth chart
    Chart {
        #[arg(long)]
        dob: String,
        /// HH:MM local time
        #[arg(long)]
        time: Option<String>,
        /// Location id, e.g. "mumbai"
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        name: Option<String>,
        /// Date the running dasha is read for (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Score a property described by a JSON file
    Vastu {
        #[arg(long)]
        file: PathBuf,
    },
}

fn main() {
    if let Err(error) = run() {
        eprintln!("aztro error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_tracing(cli.quiet, cli.verbose, &config.log.level)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let state = AppState::new(&config.chart);
            server::serve(&config.server, state).context("server stopped")?;
        }
        Command::Numerology { dob, name } => {
            let today = Utc::now().date_naive();
            print_json(&numerology_report(&name, &dob, today)?)?;
        }
        Command::Chart {
            dob,
            time,
            location,
            name,
            as_of,
        } => {
            let profile = BirthProfile::parse(
                &dob,
                time.as_deref(),
                location.as_deref(),
                name.as_deref(),
                &config.chart.default_time_of_birth,
                &config.chart.default_location_id,
            )?;
            let as_of = match as_of {
                Some(date) => parse_birth_date(&date)?,
                None => Utc::now().date_naive(),
            };
            let reading = ChartReading::compute(profile, &ChartOptions::from(&config.chart), as_of);
            print_json(&comprehensive_chart(&reading))?;
        }
        Command::Vastu { file } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let input: VastuInput = serde_json::from_str(&raw)
                .with_context(|| format!("invalid vastu input in {}", file.display()))?;
            print_json(&analyze(&input))?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AZTRO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default() {
        let cli = Cli::try_parse_from(["aztro", "--verbose"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.verbose);
    }

    #[test]
    fn chart_flags_parse() {
        let cli = Cli::try_parse_from([
            "aztro",
            "chart",
            "--dob",
            "1990-05-15",
            "--time",
            "06:30",
            "--location",
            "mumbai",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Chart { dob, time, location, .. }) => {
                assert_eq!(dob, "1990-05-15");
                assert_eq!(time.as_deref(), Some("06:30"));
                assert_eq!(location.as_deref(), Some("mumbai"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn numerology_requires_name() {
        assert!(Cli::try_parse_from(["aztro", "numerology", "--dob", "1990-05-15"]).is_err());
    }
}
