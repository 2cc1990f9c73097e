//! Retirement Policy CLI
//!
//! Command-line interface for retirement age calculations
//!
//! ```bash
//! retirement_policy calculate -b 1965-01 -c male
//! retirement_policy batch -i people.csv -o results.csv
//! retirement_policy schedule -c female50 --from 1974 --to 1985 --bands
//! retirement_policy categories
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use retirement_policy::api::{format_contribution, CalculateResponse, CategoryInfo};
use retirement_policy::audit;
use retirement_policy::batch::{self, BatchRunner};
use retirement_policy::calculation::{age_bands, compute_with_trace, schedule};
use retirement_policy::policy::{load_requests, load_requests_from_reader, MAX_YEAR, MIN_YEAR};
use retirement_policy::{CalculationRequest, ServiceConfig, WorkerCategory};

/// Statutory retirement age calculator for the graduated pension reform
#[derive(Parser, Debug)]
#[command(name = "retirement_policy")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Write an audit record for every calculation
    #[arg(short, long, global = true)]
    audit: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate the reformed retirement age for one person
    Calculate {
        /// Birth year-month, e.g. 1980-05
        #[arg(short, long)]
        birth_date: String,

        /// Worker category: male, female55 or female50
        #[arg(short, long, default_value = "male")]
        category: String,

        /// Include the calculation trace in JSON output
        #[arg(long)]
        trace: bool,
    },

    /// Calculate every row of a BirthDate,PersonType CSV file
    Batch {
        /// Input CSV ("-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the reform schedule for a range of birth years
    Schedule {
        /// Worker category: male, female55 or female50
        #[arg(short, long, default_value = "male")]
        category: String,

        /// First birth year
        #[arg(long)]
        from: i32,

        /// Last birth year
        #[arg(long)]
        to: i32,

        /// Collapse consecutive months with the same age into bands
        #[arg(long)]
        bands: bool,
    },

    /// List worker categories and their parameters
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ServiceConfig::from_env();
    audit::init_logging(&config).context("failed to initialize logging")?;

    match cli.command {
        Commands::Calculate { birth_date, category, trace } => {
            run_calculate(&birth_date, &category, trace, cli.json, cli.audit)
        }
        Commands::Batch { input, output } => run_batch(&input, output.as_deref(), cli.json, cli.audit),
        Commands::Schedule { category, from, to, bands } => {
            run_schedule(&category, from, to, bands, cli.json)
        }
        Commands::Categories => run_categories(cli.json),
    }
}

fn run_calculate(birth_date: &str, category: &str, with_trace: bool, json: bool, audit: bool) -> Result<()> {
    let request = CalculationRequest::new(birth_date, category);
    let profile = match request.validate() {
        Ok(profile) => profile,
        Err(err) => {
            if audit {
                audit::record_rejection(birth_date, &err);
            }
            anyhow::bail!(err.user_message());
        }
    };

    let (result, trace) = compute_with_trace(&profile);
    if audit {
        audit::record_calculation(&trace, &result);
    }

    if json {
        let response = CalculateResponse::new(profile.category, result, with_trace.then_some(trace));
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("Birth:                   {} ({})", profile.birth, profile.category.label());
    println!("Reformed retirement age: {} years {} months", result.age_years, result.age_months);
    println!("Retirement date:         {}", result.retirement_date());
    println!("Delay:                   {} months", result.delay_months);
    println!("Minimum contribution:    {}", format_contribution(&result));
    println!("Earliest voluntary:      {}", result.early_retirement());
    println!("Latest voluntary:        {}", result.late_retirement());
    Ok(())
}

fn run_batch(input: &Path, output: Option<&Path>, json: bool, audit: bool) -> Result<()> {
    let start = Instant::now();

    let requests = if input.as_os_str() == "-" {
        load_requests_from_reader(io::stdin().lock()).context("failed to read requests from stdin")?
    } else {
        load_requests(input).with_context(|| format!("failed to load {}", input.display()))?
    };
    info!("loaded {} requests in {:?}", requests.len(), start.elapsed());

    let outcomes = BatchRunner::new().with_audit(audit).run_batch(&requests);
    let summary = batch::summarize(&outcomes);

    match output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
            batch::write_outcomes(file, &outcomes)?;
        }
        None => batch::write_outcomes(io::stdout().lock(), &outcomes)?,
    }

    if json {
        eprintln!("{}", serde_json::to_string(&summary)?);
    } else {
        eprintln!(
            "{} requests: {} calculated, {} rejected ({:?})",
            summary.total,
            summary.succeeded,
            summary.rejected,
            start.elapsed()
        );
    }
    Ok(())
}

/// Flat schedule row for CSV-like console output
#[derive(Serialize)]
struct ScheduleLine {
    birth: String,
    age_years: u32,
    age_months: u32,
    delay_months: u32,
    retirement: String,
    minimum_contribution: String,
}

fn run_schedule(category: &str, from: i32, to: i32, bands: bool, json: bool) -> Result<()> {
    let category: WorkerCategory = category.parse()?;
    anyhow::ensure!(from <= to, "--from ({}) must not be after --to ({})", from, to);
    anyhow::ensure!(
        (MIN_YEAR..=MAX_YEAR).contains(&from) && (MIN_YEAR..=MAX_YEAR).contains(&to),
        "birth years must have four digits"
    );

    let rows = schedule(category, from, to);

    if bands {
        let bands = age_bands(&rows);
        if json {
            println!("{}", serde_json::to_string_pretty(&bands)?);
            return Ok(());
        }
        println!("{:<9} {:<9} {:>9} {:>6}", "From", "To", "Age", "Delay");
        println!("{}", "-".repeat(36));
        for band in &bands {
            println!(
                "{:<9} {:<9} {:>5}y{:>2}m {:>6}",
                band.first_birth.to_string(),
                band.last_birth.to_string(),
                band.age_years,
                band.age_months,
                band.delay_months
            );
        }
        return Ok(());
    }

    let lines: Vec<ScheduleLine> = rows
        .iter()
        .map(|row| ScheduleLine {
            birth: row.birth.to_string(),
            age_years: row.result.age_years,
            age_months: row.result.age_months,
            delay_months: row.result.delay_months,
            retirement: row.result.retirement_date().to_string(),
            minimum_contribution: format_contribution(&row.result),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{:<9} {:>9} {:>6} {:<10} {}", "Birth", "Age", "Delay", "Retires", "MinContrib")?;
    writeln!(out, "{}", "-".repeat(50))?;
    for line in &lines {
        writeln!(
            out,
            "{:<9} {:>5}y{:>2}m {:>6} {:<10} {}",
            line.birth, line.age_years, line.age_months, line.delay_months, line.retirement,
            line.minimum_contribution
        )?;
    }
    Ok(())
}

fn run_categories(json: bool) -> Result<()> {
    let infos: Vec<CategoryInfo> = WorkerCategory::ALL.into_iter().map(CategoryInfo::from).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!("{:<10} {:>4} {:>9} {:>5} {:>4}  {}", "Selector", "Age", "Threshold", "Step", "Cap", "Label");
    for info in &infos {
        println!(
            "{:<10} {:>4} {:>9} {:>5} {:>4}  {}",
            info.value.as_str(),
            info.base_age_years,
            info.threshold_year,
            info.delay_step_months,
            info.max_delay_months,
            info.label
        );
    }
    Ok(())
}
