//! Command-line arguments
//!
//! Every numeric flag is kept as raw text so omitted or malformed values
//! reach the form exactly as a blank or mistyped field would.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use loan_calc_core::TermUnit;

use crate::form::{Field, FormEntries};

#[derive(Parser, Debug)]
#[command(name = "loan-calc", version, about = "Loan and salary calculator")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Settings file (defaults to loan-calc.toml when present)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Monthly payment plus any additional payment
    Payment {
        #[command(flatten)]
        loan: LoanArgs,
    },
    /// Number of payments needed with the additional payment
    RepayTime {
        #[command(flatten)]
        loan: LoanArgs,
        #[arg(long, help = "Show the result in 'months' or 'years'")]
        repay_unit: Option<String>,
    },
    /// Monthly take-home salary after tax, savings and the loan
    Takehome {
        #[command(flatten)]
        loan: LoanArgs,
        #[command(flatten)]
        salary: SalaryArgs,
    },
    /// Total repaid and total interest over the loan term
    Cost {
        #[command(flatten)]
        loan: LoanArgs,
    },
    /// Print the effective settings
    Config,
}

/// Loan inputs; omitted values are treated as blank form fields
#[derive(Args, Debug, Clone, Default)]
pub struct LoanArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub amount: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Annual interest rate (%)")]
    pub rate: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub term: Option<String>,
    #[arg(long, help = "Unit of --term: 'months' or 'years'")]
    pub term_unit: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Additional monthly payment")]
    pub extra: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SalaryArgs {
    #[arg(long, allow_hyphen_values = true, help = "Annual base salary")]
    pub salary: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Effective tax rate (%)")]
    pub tax_rate: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Annual savings target")]
    pub savings: Option<String>,
}

impl LoanArgs {
    /// Copy the loan inputs into the form, falling back to `default_unit`
    pub fn fill(&self, form: &mut FormEntries, default_unit: Option<TermUnit>) {
        set_optional(form, Field::LoanAmount, &self.amount);
        set_optional(form, Field::AnnualInterestRate, &self.rate);
        set_optional(form, Field::LoanTerm, &self.term);
        set_optional(form, Field::AdditionalMonthlyPayment, &self.extra);
        form.loan_term_unit = unit_text(&self.term_unit, default_unit);
    }
}

impl SalaryArgs {
    pub fn fill(&self, form: &mut FormEntries) {
        set_optional(form, Field::Salary, &self.salary);
        set_optional(form, Field::EffectiveTaxRate, &self.tax_rate);
        set_optional(form, Field::AnnualSavingsTarget, &self.savings);
    }
}

/// Explicit selection, else the configured default, else nothing selected
pub fn unit_text(selected: &Option<String>, default_unit: Option<TermUnit>) -> String {
    match (selected, default_unit) {
        (Some(text), _) => text.clone(),
        (None, Some(unit)) => unit.to_string(),
        (None, None) => String::new(),
    }
}

fn set_optional(form: &mut FormEntries, field: Field, value: &Option<String>) {
    if let Some(text) = value {
        form.set(field, text.as_str());
    }
}
