//! Swarm CLI - Headless driver for the particle simulator

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, run};

#[derive(Parser)]
#[command(name = "swarm")]
#[command(about = "Headless runner for a 2D particle swarm with gravity and collisions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation for a number of ticks and print a summary
    Run {
        /// Path to a TOML config (defaults are used when omitted)
        #[arg(long)]
        config: Option<String>,

        /// Number of ticks to advance
        #[arg(long, default_value = "600")]
        ticks: u64,

        /// Fixed RNG seed (overrides the config)
        #[arg(long)]
        seed: Option<u64>,

        /// Initial spawn requests (overrides the config)
        #[arg(long)]
        particles: Option<u32>,

        /// Press the boost button on this tick (repeatable)
        #[arg(long = "boost-at")]
        boost_at: Vec<u64>,

        /// Press the add-particles button on this tick (repeatable)
        #[arg(long = "add-at")]
        add_at: Vec<u64>,

        /// Request a preset bulk spawn, bypassing the add cap, as TICK:COUNT (repeatable)
        #[arg(long = "bulk-at", value_parser = parse_bulk)]
        bulk_at: Vec<(u64, u32)>,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: String,
    },

    /// Print the default config as TOML
    Config {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn parse_format(s: &str) -> Result<String, String> {
    match s {
        "text" | "json" => Ok(s.to_string()),
        _ => Err(format!("unknown format '{}'; valid values: text, json", s)),
    }
}

fn parse_bulk(s: &str) -> Result<(u64, u32), String> {
    let (tick, count) = s
        .split_once(':')
        .ok_or_else(|| format!("expected TICK:COUNT, got '{}'", s))?;
    let tick = tick
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid tick '{}': {}", tick, e))?;
    let count = count
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid count '{}': {}", count, e))?;
    Ok((tick, count))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            ticks,
            seed,
            particles,
            boost_at,
            add_at,
            bulk_at,
            format,
        } => run::run(run::RunArgs {
            config,
            ticks,
            seed,
            particles,
            boost_at,
            add_at,
            bulk_at,
            format,
        }),
        Commands::Config { output } => config::run(output.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_format_accepts_known_values() {
        assert_eq!(parse_format("json").unwrap(), "json");
        assert!(parse_format("yaml").is_err());
    }

    #[test]
    fn parse_bulk_splits_tick_and_count() {
        assert_eq!(parse_bulk("12:300").unwrap(), (12, 300));
        assert!(parse_bulk("12").is_err());
        assert!(parse_bulk("x:300").is_err());
        assert!(parse_bulk("12:-5").is_err());
    }

    #[test]
    fn cli_parses_bulk_presets() {
        let cli = Cli::try_parse_from([
            "swarm", "run", "--bulk-at", "1:100", "--bulk-at", "40:500",
        ])
        .unwrap();
        match cli.command {
            Commands::Run { bulk_at, .. } => assert_eq!(bulk_at, vec![(1, 100), (40, 500)]),
            Commands::Config { .. } => panic!("expected run"),
        }
    }

    #[test]
    fn cli_parses_repeated_boosts() {
        let cli = Cli::try_parse_from([
            "swarm", "run", "--ticks", "10", "--boost-at", "3", "--boost-at", "7",
        ])
        .unwrap();
        match cli.command {
            Commands::Run { ticks, boost_at, format, .. } => {
                assert_eq!(ticks, 10);
                assert_eq!(boost_at, vec![3, 7]);
                assert_eq!(format, "text");
            }
            Commands::Config { .. } => panic!("expected run"),
        }
    }
}
