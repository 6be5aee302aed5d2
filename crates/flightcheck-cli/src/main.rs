// SPDX-License-Identifier: MIT
// Copyright (c) 2026 flightcheck contributors

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::fs;
use std::path::{Path, PathBuf};

use flightcheck_core::aeroplane::AeroplaneTable;
use flightcheck_core::airport::AirportTable;
use flightcheck_core::flight::FlightTable;
use flightcheck_core::report::{check_flights, render_invalid_report, render_profit_report};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the airport reference CSV
    #[arg(long, env = "FLIGHTCHECK_AIRPORTS", default_value = "airports.csv")]
    airports: PathBuf,

    /// Path to the aeroplane reference CSV
    #[arg(long, env = "FLIGHTCHECK_AEROPLANES", default_value = "aeroplanes.csv")]
    aeroplanes: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a flight batch and report the infeasible flights
    Check {
        /// Flight batch CSV
        flights: PathBuf,
        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit the full checked batch as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compute profit/loss for a flight batch carrying fare columns
    Profit {
        /// Flight batch CSV with fare columns
        flights: PathBuf,
        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit the full checked batch as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the loaded airport reference data
    Airports,
    /// List the loaded aeroplane reference data
    Fleet,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let airports = AirportTable::load_file(&cli.airports)
        .with_context(|| format!("Failed to load airports from {:?}", cli.airports))?;
    let aeroplanes = AeroplaneTable::load_file(&cli.aeroplanes)
        .with_context(|| format!("Failed to load aeroplanes from {:?}", cli.aeroplanes))?;

    match &cli.command {
        Commands::Check {
            flights,
            output,
            json,
        } => {
            let batch = FlightTable::load_file(flights)
                .with_context(|| format!("Failed to load flights from {:?}", flights))?;
            let reports = check_flights(&batch, &airports, &aeroplanes);
            let rendered = if *json {
                serde_json::to_string_pretty(&reports)?
            } else {
                render_invalid_report(&reports)
            };
            emit(&rendered, output.as_deref())?;
        }
        Commands::Profit {
            flights,
            output,
            json,
        } => {
            let batch = FlightTable::load_file(flights)
                .with_context(|| format!("Failed to load flights from {:?}", flights))?;
            if !batch.is_empty() && batch.iter().all(|f| f.prices.is_none()) {
                anyhow::bail!(
                    "Flight batch {:?} carries no fare columns; use `check` for validation-only batches",
                    flights
                );
            }
            let reports = check_flights(&batch, &airports, &aeroplanes);
            let rendered = if *json {
                serde_json::to_string_pretty(&reports)?
            } else {
                render_profit_report(&reports, &airports)
            };
            emit(&rendered, output.as_deref())?;
        }
        Commands::Airports => {
            for airport in &airports {
                println!(
                    "{} {} (A: {} km, B: {} km)",
                    airport.code,
                    airport.name,
                    airport.distance_from_origin_a,
                    airport.distance_from_origin_b
                );
            }
        }
        Commands::Fleet => {
            for plane in &aeroplanes {
                println!(
                    "{}: range {} km, {} seats ({}/{}/{}), £{:.2} per seat per 100 km",
                    plane.model,
                    plane.max_flight_range,
                    plane.total_seats(),
                    plane.economy_seats,
                    plane.business_seats,
                    plane.first_class_seats,
                    plane.running_cost_per_seat_per_100km
                );
            }
        }
    }

    Ok(())
}

fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {:?}", path))?;
            println!("Report written to {:?}", path);
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
