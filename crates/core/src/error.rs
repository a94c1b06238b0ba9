//! Calculation errors
//!
//! The message of each error is exactly what the user sees in the output
//! slot, so `Display` carries the user-facing text.

use thiserror::Error;

/// Outcome of a calculation: either the number or the reason it failed.
pub type CalculationResult<T> = Result<T, CalcError>;

/// Input that failed a sanity check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamField {
    LoanAmount,
    InterestRate,
    LoanTerm,
    LoanTermUnit,
    Salary,
}

impl ParamField {
    /// Message shown when this field holds an unusable value
    pub fn invalid_message(&self) -> &'static str {
        match self {
            ParamField::LoanAmount => "Please enter valid loan amount",
            ParamField::InterestRate => "Please enter valid interest rate",
            ParamField::LoanTerm => "Please enter valid loan term",
            ParamField::LoanTermUnit => "Please select 'years' or 'months' for the loan term",
            ParamField::Salary => "Please enter valid salary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A loan or salary parameter failed validation
    #[error("{}", .field.invalid_message())]
    InvalidParameter { field: ParamField },

    /// The payoff formula's logarithm argument fell outside (0, 1)
    #[error("{}", math_domain_message(.argument))]
    MathDomain { argument: f64 },

    /// A required unit choice was never made
    #[error("Please select 'years' or 'months'")]
    MissingSelection,
}

impl CalcError {
    pub fn invalid(field: ParamField) -> Self {
        Self::InvalidParameter { field }
    }
}

fn math_domain_message(argument: &f64) -> &'static str {
    // NaN lands here too: the payment never covered the interest
    if argument.is_nan() || *argument <= 0.0 {
        "Payments are too small to ever repay this loan"
    } else {
        "Unable to compute time to repay for these payments"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = CalcError::invalid(ParamField::LoanTerm);
        assert_eq!(err.to_string(), "Please enter valid loan term");
    }

    #[test]
    fn test_math_domain_messages() {
        let too_small = CalcError::MathDomain { argument: -0.5 };
        assert_eq!(
            too_small.to_string(),
            "Payments are too small to ever repay this loan"
        );

        let nan = CalcError::MathDomain { argument: f64::NAN };
        assert_eq!(nan.to_string(), too_small.to_string());

        let above_one = CalcError::MathDomain { argument: 1.5 };
        assert_eq!(
            above_one.to_string(),
            "Unable to compute time to repay for these payments"
        );
    }

    #[test]
    fn test_missing_selection_message() {
        let err = CalcError::MissingSelection;
        assert_eq!(err.to_string(), "Please select 'years' or 'months'");
    }
}
