//! Loan and salary value types
//!
//! Plain values passed into the calculations. None of them hold state
//! between calls.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit a loan term (or a repayment time) is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermUnit {
    Months,
    Years,
}

impl TermUnit {
    /// Parse a unit selection; anything other than "months"/"years" is no selection.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "months" => Some(TermUnit::Months),
            "years" => Some(TermUnit::Years),
            _ => None,
        }
    }

    /// Number of monthly payments in one unit
    pub fn months(self) -> f64 {
        match self {
            TermUnit::Months => 1.0,
            TermUnit::Years => 12.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TermUnit::Months => "months",
            TermUnit::Years => "years",
        }
    }
}

impl fmt::Display for TermUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed-rate loan description
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount borrowed
    pub amount: f64,
    /// Annual interest rate as percentage (e.g., 4.5 for 4.5%)
    pub annual_rate_percent: f64,
    /// Length of the loan, in `term_unit`
    pub term: f64,
    /// `None` when no recognised unit was selected
    pub term_unit: Option<TermUnit>,
}

impl LoanParameters {
    pub fn new(
        amount: f64,
        annual_rate_percent: f64,
        term: f64,
        term_unit: impl Into<Option<TermUnit>>,
    ) -> Self {
        Self {
            amount,
            annual_rate_percent,
            term,
            term_unit: term_unit.into(),
        }
    }

    /// Monthly interest rate as a fraction (annual percent / 12 / 100)
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 12.0 / 100.0
    }

    /// Number of monthly payments over the full term
    pub fn payment_count(&self) -> Option<f64> {
        self.term_unit.map(|unit| self.term * unit.months())
    }
}

/// Loan plus an extra amount paid towards it every month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepaymentRequest {
    #[serde(flatten)]
    pub loan: LoanParameters,
    #[serde(default)]
    pub extra_monthly_payment: f64,
}

impl RepaymentRequest {
    pub fn new(loan: LoanParameters) -> Self {
        Self {
            loan,
            extra_monthly_payment: 0.0,
        }
    }

    pub fn with_extra_payment(mut self, extra_monthly_payment: f64) -> Self {
        self.extra_monthly_payment = extra_monthly_payment;
        self
    }
}

/// Annual salary figures used for take-home pay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryParameters {
    pub base_salary: f64,
    /// Average percentage of income paid in tax
    pub effective_tax_rate_percent: f64,
    pub annual_savings_target: f64,
}

impl SalaryParameters {
    pub fn new(base_salary: f64, effective_tax_rate_percent: f64, annual_savings_target: f64) -> Self {
        Self {
            base_salary,
            effective_tax_rate_percent,
            annual_savings_target,
        }
    }
}

/// Monthly income left once the loan is paid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetIncome {
    pub takehome: f64,
    pub base_payment: f64,
    pub extra_payment: f64,
    pub net: f64,
}

/// Cost of a loan over its full term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanCost {
    pub monthly_payment: f64,
    pub payment_count: f64,
    pub total_repayment: f64,
    pub total_interest: f64,
}
