use std::error::Error;

use clap::Parser;
use simple_logger::SimpleLogger;

use ghg::commuting::{calculate_commuting, ModalSplit, DEFAULT_WORK_DAYS_PER_YEAR};

fn parse_mode(value: &str) -> Result<(String, f64), String> {
    let (mode, share) = value
        .split_once('=')
        .ok_or_else(|| format!("\"{value}\" is not of the form mode=share"))?;
    let share = share
        .parse::<f64>()
        .map_err(|e| format!("share of \"{mode}\": {e}"))?;
    Ok((mode.trim().to_string(), share))
}

/// Estimates the annual emissions of the commute of a workforce (Scope 3, category 7)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Number of employees
    #[arg(long)]
    employees: u32,
    /// Average one-way distance between home and work, in km
    #[arg(long)]
    distance: f64,
    /// Work days per year
    #[arg(long, default_value_t = DEFAULT_WORK_DAYS_PER_YEAR)]
    work_days: u32,
    /// Fraction (0-1) of work days worked remotely
    #[arg(long, default_value_t = 0.0)]
    remote: f64,
    /// Share of employees of a mode, e.g. `--mode car_average=0.6`; repeatable.
    /// Defaults to a typical split when omitted.
    #[arg(long = "mode", value_parser = parse_mode)]
    modes: Vec<(String, f64)>,
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let cli = Cli::parse();
    if !(0.0..=1.0).contains(&cli.remote) {
        return Err(format!("--remote must be between 0 and 1, got {}", cli.remote).into());
    }

    let modal_split = cli.modes.into_iter().collect::<ModalSplit>();
    let estimate = calculate_commuting(
        cli.employees,
        cli.distance,
        cli.work_days,
        modal_split,
        cli.remote,
    );
    log::info!(
        "{} employees emit {} kg CO2e per year commuting",
        cli.employees,
        estimate.total_co2e_kg
    );

    println!("{}", serde_json::to_string_pretty(&estimate)?);
    Ok(())
}
