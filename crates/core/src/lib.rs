//! Loan Calculator Core
//!
//! Pure financial calculations for fixed-rate amortized loans:
//! - Monthly payment for a loan term
//! - Time to repay when extra principal is paid each month
//! - Monthly take-home salary after tax and savings
//! - Net disposable income once the loan payment is deducted
//!
//! Every calculation returns a [`CalculationResult`], so callers always
//! branch on the outcome before touching the number.

pub mod error;
pub mod financial;
pub mod format;
pub mod types;

pub use error::{CalcError, CalculationResult, ParamField};
pub use financial::{
    loan_cost, monthly_payment, monthly_takehome, net_monthly_income, time_to_repay,
    total_monthly_payment, validate,
};
pub use format::{display, format_currency, format_repay_time};
pub use types::{LoanCost, LoanParameters, NetIncome, RepaymentRequest, SalaryParameters, TermUnit};
