//! Campus Rooms CLI
//!
//! Maintenance and reporting front-end for the reservation database.
//!
//! ```sh
//! # Create or upgrade the schema
//! campus-rooms migrate
//!
//! # Admin report as JSON, top 5 rooms and users
//! campus-rooms report --top 5
//!
//! # The same report as CSV
//! campus-rooms report --format csv > campus_room_report.csv
//!
//! # Ten newest approved reservations
//! campus-rooms recent --status APPROVED --limit 10
//!
//! # A user's week
//! campus-rooms schedule --user 42 --week-start 2026-10-12
//!
//! # Validate config without touching the database
//! campus-rooms check
//! ```

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{error, info};

use campus_rooms::application::dto::ReservationSummary;
use campus_rooms::application::report_to_csv;
use campus_rooms::domain::ReservationStatus;
use campus_rooms::shared::PageRequest;
use campus_rooms::{default_config_path, init_tracing, AppConfig, AppHandle, AppOptions};

/// Campus Rooms: reservation data access tool.
#[derive(Parser, Debug)]
#[command(
    name = "campus-rooms",
    version,
    about = "Reservation database maintenance and reports for the campus booking app",
    long_about = "Campus Rooms runs schema migrations and prints reservation \
                  reports as JSON.\n\n\
                  Default config: ~/.config/campus-rooms/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "CAMPUS_ROOMS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override the database URL.
    #[arg(long)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the configuration file and exit.
    Check,
    /// Apply pending database migrations.
    Migrate,
    /// Print the admin report.
    Report {
        /// Length of the room and user rankings.
        #[arg(long, default_value_t = 5)]
        top: u32,
        /// Output format.
        #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
        format: ReportFormat,
    },
    /// Print the newest reservations.
    Recent {
        /// Only reservations with this status (PENDING, APPROVED, REJECTED, CANCELLED).
        #[arg(long)]
        status: Option<String>,
        /// How many to print (at least 1); at most 10 without --status.
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32,
    },
    /// Print a user's pending and approved reservations for one week.
    Schedule {
        #[arg(long)]
        user: i64,
        /// First day of the week (YYYY-MM-DD).
        #[arg(long)]
        week_start: NaiveDate,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ReportFormat {
    Json,
    Csv,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let loaded = AppConfig::load(&config_path);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => {
            let mut cfg = AppConfig::default();
            cfg.apply_env();
            cfg
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref url) = cli.database_url {
        config.database.url = Some(url.clone());
    }

    init_tracing(&config);
    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Config validation mode ─────────────────────────────────
    if let Command::Check = cli.command {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Database    : {}", config.database.connection_url());
        println!("   Log level   : {}", config.logging.level);
        println!("   Log format  : {}", config.logging.format);
        return Ok(());
    }

    let mut options = AppOptions::from_config(&config);
    // `migrate` applies and counts the pending migrations itself.
    options.auto_migrate = !matches!(cli.command, Command::Migrate);
    let handle = AppHandle::start(options).await?;

    let outcome = run(&handle, cli.command).await;
    handle.shutdown().await;
    outcome
}

async fn run(handle: &AppHandle, command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Check => Ok(()),
        Command::Migrate => {
            let applied = handle.migrate().await?;
            info!("Schema up to date ({} migrations applied now)", applied);
            Ok(())
        }
        Command::Report { top, format } => {
            let report = handle.reports().build_report(top).await?;
            match format {
                ReportFormat::Json => print_json(&report),
                ReportFormat::Csv => {
                    let bytes = report_to_csv(&report)?;
                    std::io::stdout().write_all(&bytes)?;
                    Ok(())
                }
            }
        }
        Command::Recent { status, limit } => {
            let reservations = handle.repos.reservations();
            let rows = match status {
                Some(s) => {
                    let status: ReservationStatus = s.parse()?;
                    reservations
                        .find_recent_by_status(status, PageRequest::first(limit))
                        .await?
                }
                None => {
                    let mut rows = reservations.find_top10_by_order_by_created_at_desc().await?;
                    rows.truncate(limit as usize);
                    rows
                }
            };
            let rows: Vec<ReservationSummary> = rows.into_iter().map(Into::into).collect();
            print_json(&rows)
        }
        Command::Schedule { user, week_start } => {
            let rows: Vec<ReservationSummary> = handle
                .reports()
                .weekly_schedule(user, week_start)
                .await?
                .into_iter()
                .map(Into::into)
                .collect();
            print_json(&rows)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_rejects_zero_limit() {
        let parsed = Cli::try_parse_from(["campus-rooms", "recent", "--limit", "0"]);
        assert!(parsed.is_err());

        let cli = Cli::try_parse_from(["campus-rooms", "recent", "--limit", "1"]).unwrap();
        assert!(matches!(cli.command, Command::Recent { limit: 1, .. }));
    }

    #[test]
    fn report_format_defaults_to_json() {
        let cli = Cli::try_parse_from(["campus-rooms", "report"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Report { top: 5, format: ReportFormat::Json }
        ));

        let cli = Cli::try_parse_from(["campus-rooms", "report", "--format", "csv"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Report { format: ReportFormat::Csv, .. }
        ));
    }
}
