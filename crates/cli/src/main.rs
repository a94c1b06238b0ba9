//! Loan calculator entry point: parses arguments, loads settings and prints
//! one result per command.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use loan_calc_config::constants::outputs;
use loan_calc_config::{LoggingSettings, Settings};

mod cli;
mod form;

use cli::{unit_text, Cli, Commands};
use form::FormEntries;

/// One filled output slot
#[derive(Debug, Serialize)]
struct SlotOutput<'a> {
    output: &'a str,
    value: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    init_tracing(&settings.logging);

    let Some((label, value)) = run(&cli.command, &settings) else {
        return print_settings(&settings, cli.json);
    };
    tracing::info!(output = label, %value, "calculation finished");

    if cli.json {
        let slot = SlotOutput {
            output: label,
            value,
        };
        println!("{}", serde_json::to_string(&slot)?);
    } else {
        println!("{label}: {value}");
    }
    Ok(())
}

/// Fill the form from the command and compute its slot; `None` for `config`
fn run(command: &Commands, settings: &Settings) -> Option<(&'static str, String)> {
    let defaults = &settings.defaults;
    let mut form = FormEntries::new();

    let slot = match command {
        Commands::Payment { loan } => {
            loan.fill(&mut form, defaults.term_unit);
            (outputs::TOTAL_MONTHLY_PAYMENT, form.total_monthly_payment())
        }
        Commands::RepayTime { loan, repay_unit } => {
            loan.fill(&mut form, defaults.term_unit);
            form.repay_time_unit = unit_text(repay_unit, defaults.repay_unit);
            (outputs::TIME_TO_REPAY, form.time_to_repay())
        }
        Commands::Takehome { loan, salary } => {
            loan.fill(&mut form, defaults.term_unit);
            salary.fill(&mut form);
            (outputs::MONTHLY_TAKEHOME, form.monthly_takehome())
        }
        Commands::Cost { loan } => {
            loan.fill(&mut form, defaults.term_unit);
            (outputs::LOAN_COST, form.loan_cost())
        }
        Commands::Config => return None,
    };
    Some(slot)
}

fn print_settings(settings: &Settings, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(settings)?);
    } else {
        print!("{}", settings.to_toml()?);
    }
    Ok(())
}

fn init_tracing(logging: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        eprintln!("tracing init failed: {e}");
    }
}
