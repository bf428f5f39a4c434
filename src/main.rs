use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use trainstat::config::AppConfig;
use trainstat::export::{write_report, ReportFormat};
use trainstat::logging::{init_logging, LogLevel};
use trainstat::models::WorkoutPackage;
use trainstat::report::{process_package, process_packages, ProcessingReport};
use trainstat::error::log_error;
use trainstat::{import, TrainStatError};

/// TrainStat - Workout statistics CLI
///
/// Computes distance, mean speed and calories burned from raw sensor
/// packages (SWM, RUN, WLK) and prints a summary for each training.
#[derive(Parser)]
#[command(name = "trainstat")]
#[command(version)]
#[command(about = "Workout statistics CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of logging (stderr)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a batch of packages (the default command)
    Run {
        /// Package file (JSON or CSV); configured packages are used if omitted
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,

        /// Report format (text, json, csv, table)
        #[arg(short = 'f', long)]
        format: Option<ReportFormat>,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Summarize a single package given on the command line
    Calc {
        /// Activity code (SWM, RUN, WLK)
        code: String,

        /// Raw sensor values in package order
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Inspect or create the configuration file
    Config {
        /// Print the effective configuration
        #[arg(short, long)]
        show: bool,

        /// Write the default configuration file
        #[arg(short, long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // `config --init` must work even when the current file is broken
    let resetting = matches!(cli.command, Some(Commands::Config { init: true, .. }));
    let mut config = if resetting {
        AppConfig::default()
    } else {
        AppConfig::load_or_default(cli.config.as_deref()).map_err(fail)?
    };
    config.logging.level = LogLevel::from_verbosity(cli.verbose, config.logging.level);
    init_logging(&config.logging)?;

    match cli.command.unwrap_or(Commands::Run {
        input: None,
        format: None,
        output: None,
    }) {
        Commands::Run {
            input,
            format,
            output,
        } => {
            let packages = match input {
                Some(path) => import::import_file(&path)
                    .map_err(TrainStatError::from)
                    .map_err(fail)?,
                None => config.packages.clone(),
            };
            let format = format.unwrap_or(config.output.format);

            run(&packages, format, output)?;
        }

        Commands::Calc { code, values } => {
            let package = WorkoutPackage::new(code, values);
            match process_package(&package) {
                Ok(info) => println!("{}", info.get_message()),
                Err(err) => {
                    eprintln!("{}", err.user_message().red());
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { show, init } => {
            let path = cli.config.unwrap_or_else(AppConfig::default_config_path);
            if init {
                AppConfig::init_file(&path)?;
                println!("{} {}", "✓ Configuration written to".green(), path.display());
            }
            if show || !init {
                print!("{}", config.to_toml()?);
            }
        }
    }

    Ok(())
}

fn run(packages: &[WorkoutPackage], format: ReportFormat, output: Option<PathBuf>) -> Result<()> {
    let report = process_packages(packages);

    match &output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create report file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_report(&report, format, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_report(&report, format, &mut handle)?;
        }
    }

    report_failures(&report);

    if report.failure_count() > 0 {
        anyhow::bail!(
            "{} of {} packages could not be processed",
            report.failure_count(),
            report.entries.len()
        );
    }
    Ok(())
}

fn fail(err: TrainStatError) -> anyhow::Error {
    log_error(err.severity(), &err);
    anyhow::anyhow!(err.user_message())
}

fn report_failures(report: &ProcessingReport) {
    for (entry, reason) in report.failures() {
        eprintln!(
            "{} {}",
            format!("✗ package #{} ({}):", entry.index + 1, entry.code).red().bold(),
            reason.red()
        );
    }
}
