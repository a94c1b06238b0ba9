//! Display formatting for calculation results
//!
//! Success and error share one text slot, so both arms end up as a `String`.

use crate::error::{CalcError, CalculationResult};
use crate::types::TermUnit;

/// Currency with two decimal places
pub fn format_currency(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a payment count in the unit the user asked for.
///
/// Months are rounded up to whole payments; years are shown with one
/// decimal place.
pub fn format_repay_time(payments: f64, unit: Option<TermUnit>) -> CalculationResult<String> {
    match unit {
        Some(TermUnit::Months) => Ok(format!("{:.0}", payments.ceil())),
        Some(TermUnit::Years) => Ok(format!("{:.1}", payments / 12.0)),
        None => Err(CalcError::MissingSelection),
    }
}

/// Collapse a result into the text shown to the user
pub fn display(result: CalculationResult<String>) -> String {
    result.unwrap_or_else(|err| err.to_string())
}
