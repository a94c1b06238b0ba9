//! Centralized constants for the loan calculator
//!
//! Field labels and configuration locations shared by the form adapter and
//! the settings loader.

/// Form field labels, as shown next to each input
pub mod fields {
    pub const LOAN_AMOUNT: &str = "Loan Amount";
    pub const ANNUAL_INTEREST_RATE: &str = "Annual Interest Rate";
    pub const LOAN_TERM: &str = "Loan Term";
    pub const ADDITIONAL_MONTHLY_PAYMENT: &str = "Additional Monthly Payment";
    pub const SALARY: &str = "Salary";
    pub const EFFECTIVE_TAX_RATE: &str = "Effective Tax Rate";
    pub const ANNUAL_SAVINGS_TARGET: &str = "Annual Savings Target";
}

/// Output slot labels
pub mod outputs {
    pub const TOTAL_MONTHLY_PAYMENT: &str = "Total Monthly Payment";
    pub const TIME_TO_REPAY: &str = "Time to Repay";
    pub const MONTHLY_TAKEHOME: &str = "Monthly Take-home Salary";
    pub const LOAN_COST: &str = "Loan Cost";
}

/// Value written into an input left blank
pub const BLANK_FIELD_VALUE: &str = "0";

/// Settings file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "loan-calc.toml";

/// Prefix for environment overrides, e.g. `LOAN_CALC__LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "LOAN_CALC";

/// Separator between nested keys in environment overrides
pub const ENV_SEPARATOR: &str = "__";

/// Log filter used when neither config nor `RUST_LOG` set one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_labels_distinct() {
        let labels = [
            fields::LOAN_AMOUNT,
            fields::ANNUAL_INTEREST_RATE,
            fields::LOAN_TERM,
            fields::ADDITIONAL_MONTHLY_PAYMENT,
            fields::SALARY,
            fields::EFFECTIVE_TAX_RATE,
            fields::ANNUAL_SAVINGS_TARGET,
        ];
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_blank_value_parses_as_zero() {
        assert_eq!(BLANK_FIELD_VALUE.parse::<f64>().unwrap(), 0.0);
    }

    #[test]
    fn test_config_file_is_toml() {
        assert!(DEFAULT_CONFIG_FILE.ends_with(".toml"));
    }
}
