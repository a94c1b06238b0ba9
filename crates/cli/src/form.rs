//! Form Adapter
//!
//! Holds the raw text of every input, fills blanks with "0", parses the
//! numbers and runs one calculation per output slot. Each action returns
//! the text for its slot: the formatted number, or the error message.

use std::collections::BTreeMap;

use loan_calc_config::constants::{fields, BLANK_FIELD_VALUE};
use loan_calc_core::{
    display, format_currency, format_repay_time, CalcError, LoanParameters, RepaymentRequest,
    SalaryParameters, TermUnit,
};
use thiserror::Error;

/// Numeric input on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    LoanAmount,
    AnnualInterestRate,
    LoanTerm,
    AdditionalMonthlyPayment,
    Salary,
    EffectiveTaxRate,
    AnnualSavingsTarget,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::LoanAmount => fields::LOAN_AMOUNT,
            Field::AnnualInterestRate => fields::ANNUAL_INTEREST_RATE,
            Field::LoanTerm => fields::LOAN_TERM,
            Field::AdditionalMonthlyPayment => fields::ADDITIONAL_MONTHLY_PAYMENT,
            Field::Salary => fields::SALARY,
            Field::EffectiveTaxRate => fields::EFFECTIVE_TAX_RATE,
            Field::AnnualSavingsTarget => fields::ANNUAL_SAVINGS_TARGET,
        }
    }
}

/// Inputs every loan calculation fills before parsing
const LOAN_FIELDS: [Field; 4] = [
    Field::LoanAmount,
    Field::AnnualInterestRate,
    Field::LoanTerm,
    Field::AdditionalMonthlyPayment,
];

const ALL_FIELDS: [Field; 7] = [
    Field::LoanAmount,
    Field::AnnualInterestRate,
    Field::LoanTerm,
    Field::AdditionalMonthlyPayment,
    Field::Salary,
    Field::EffectiveTaxRate,
    Field::AnnualSavingsTarget,
];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Please enter a number for {field}, not '{text}'")]
    InvalidNumber { field: &'static str, text: String },

    #[error(transparent)]
    Calc(#[from] CalcError),
}

/// Raw form state: field text plus the two unit selections
#[derive(Debug, Clone, Default)]
pub struct FormEntries {
    values: BTreeMap<Field, String>,
    /// Selected loan term unit; any text other than "months"/"years" is unset
    pub loan_term_unit: String,
    /// Selected unit for displaying the time to repay
    pub repay_time_unit: String,
}

impl FormEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        self.values.insert(field, text.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(|s| s.as_str())
    }

    /// Replace every blank field in `fields` with "0"
    pub fn fill_missing_fields(&mut self, fields: &[Field]) {
        for &field in fields {
            let entry = self.values.entry(field).or_default();
            if entry.trim().is_empty() {
                *entry = BLANK_FIELD_VALUE.to_string();
            }
        }
    }

    fn number(&self, field: Field) -> Result<f64, FormError> {
        let text = self.get(field).unwrap_or(BLANK_FIELD_VALUE);
        text.trim().parse().map_err(|_| FormError::InvalidNumber {
            field: field.label(),
            text: text.to_string(),
        })
    }

    fn loan(&self) -> Result<LoanParameters, FormError> {
        Ok(LoanParameters::new(
            self.number(Field::LoanAmount)?,
            self.number(Field::AnnualInterestRate)?,
            self.number(Field::LoanTerm)?,
            TermUnit::parse(&self.loan_term_unit),
        ))
    }

    fn repayment(&self) -> Result<RepaymentRequest, FormError> {
        Ok(RepaymentRequest::new(self.loan()?)
            .with_extra_payment(self.number(Field::AdditionalMonthlyPayment)?))
    }

    fn salary(&self) -> Result<SalaryParameters, FormError> {
        Ok(SalaryParameters::new(
            self.number(Field::Salary)?,
            self.number(Field::EffectiveTaxRate)?,
            self.number(Field::AnnualSavingsTarget)?,
        ))
    }

    /// Regular payment plus the additional monthly payment, in currency
    pub fn total_monthly_payment(&mut self) -> String {
        self.fill_missing_fields(&LOAN_FIELDS);
        let result = self.repayment().and_then(|request| {
            Ok(format_currency(loan_calc_core::total_monthly_payment(&request)?))
        });
        slot_text(result)
    }

    /// Time to repay in the selected repay-time unit.
    ///
    /// Without a unit selection only the selection message is shown.
    pub fn time_to_repay(&mut self) -> String {
        self.fill_missing_fields(&LOAN_FIELDS);
        let Some(unit) = TermUnit::parse(&self.repay_time_unit) else {
            return display(Err(CalcError::MissingSelection));
        };
        let result = self.repayment().and_then(|request| {
            let payments = loan_calc_core::time_to_repay(&request)?;
            Ok(format_repay_time(payments, Some(unit))?)
        });
        slot_text(result)
    }

    /// Take-home salary left after the loan payments, in currency.
    ///
    /// A zero loan amount skips the loan inputs entirely.
    pub fn monthly_takehome(&mut self) -> String {
        self.fill_missing_fields(&ALL_FIELDS);
        let result = self.salary().and_then(|salary| {
            let request = if self.number(Field::LoanAmount)? == 0.0 {
                RepaymentRequest::new(LoanParameters::new(0.0, 0.0, 0.0, None))
            } else {
                self.repayment()?
            };
            let income = loan_calc_core::net_monthly_income(&salary, &request)?;
            tracing::debug!(?income, "net monthly income");
            Ok(format_currency(income.net))
        });
        slot_text(result)
    }

    /// Monthly payment, number of payments, total repaid and total interest
    pub fn loan_cost(&mut self) -> String {
        self.fill_missing_fields(&LOAN_FIELDS);
        let result = self.loan().and_then(|loan| {
            let cost = loan_calc_core::loan_cost(&loan)?;
            Ok(format!(
                "{} monthly over {:.0} payments, {} total, {} interest",
                format_currency(cost.monthly_payment),
                cost.payment_count,
                format_currency(cost.total_repayment),
                format_currency(cost.total_interest),
            ))
        });
        slot_text(result)
    }
}

fn slot_text(result: Result<String, FormError>) -> String {
    match result {
        Ok(text) => text,
        Err(FormError::Calc(err)) => display(Err(err)),
        Err(err) => {
            tracing::warn!(error = ?err, "form input rejected");
            err.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mortgage_form() -> FormEntries {
        let mut form = FormEntries::new();
        form.set(Field::LoanAmount, "200000");
        form.set(Field::AnnualInterestRate, "4.5");
        form.set(Field::LoanTerm, "30");
        form.loan_term_unit = "years".to_string();
        form
    }

    #[test]
    fn test_fill_missing_fields() {
        let mut form = FormEntries::new();
        form.set(Field::LoanAmount, "   ");
        form.set(Field::LoanTerm, "12");
        form.fill_missing_fields(&LOAN_FIELDS);

        assert_eq!(form.get(Field::LoanAmount), Some("0"));
        assert_eq!(form.get(Field::AnnualInterestRate), Some("0"));
        assert_eq!(form.get(Field::LoanTerm), Some("12"));
        assert_eq!(form.get(Field::AdditionalMonthlyPayment), Some("0"));
        assert_eq!(form.get(Field::Salary), None);
    }

    #[test]
    fn test_total_monthly_payment() {
        let mut form = mortgage_form();
        assert_eq!(form.total_monthly_payment(), "1013.37");

        form.set(Field::AdditionalMonthlyPayment, "100");
        assert_eq!(form.total_monthly_payment(), "1113.37");
    }

    #[test]
    fn test_blank_form_reports_loan_amount() {
        let mut form = FormEntries::new();
        assert_eq!(form.total_monthly_payment(), "Please enter valid loan amount");
    }

    #[test]
    fn test_unselected_term_unit() {
        let mut form = mortgage_form();
        form.loan_term_unit = "Loan Term Units".to_string();
        assert_eq!(
            form.total_monthly_payment(),
            "Please select 'years' or 'months' for the loan term"
        );
    }

    #[test]
    fn test_time_to_repay_units() {
        let mut form = mortgage_form();
        form.set(Field::AdditionalMonthlyPayment, "200");

        form.repay_time_unit = "months".to_string();
        assert_eq!(form.time_to_repay(), "258");

        form.repay_time_unit = "years".to_string();
        assert_eq!(form.time_to_repay(), "21.4");

        form.repay_time_unit = String::new();
        assert_eq!(form.time_to_repay(), "Please select 'years' or 'months'");
    }

    #[test]
    fn test_time_to_repay_unit_checked_first() {
        let mut form = FormEntries::new();
        form.set(Field::LoanTerm, "thirty");
        assert_eq!(form.time_to_repay(), "Please select 'years' or 'months'");

        form.set(Field::LoanTerm, "30");
        form.repay_time_unit = "months".to_string();
        assert_eq!(form.time_to_repay(), "Please enter valid loan amount");
    }

    #[test]
    fn test_time_to_repay_domain_error() {
        let mut form = mortgage_form();
        form.set(Field::AdditionalMonthlyPayment, "-300");
        form.repay_time_unit = "months".to_string();
        assert_eq!(
            form.time_to_repay(),
            "Payments are too small to ever repay this loan"
        );
    }

    #[test]
    fn test_monthly_takehome_without_loan() {
        let mut form = FormEntries::new();
        form.set(Field::Salary, "100000");
        form.set(Field::EffectiveTaxRate, "25");
        form.set(Field::AnnualSavingsTarget, "12000");
        // Ignored: no loan amount means no loan
        form.set(Field::AdditionalMonthlyPayment, "500");
        form.set(Field::AnnualInterestRate, "not a number");

        assert_eq!(form.monthly_takehome(), "5125.00");
    }

    #[test]
    fn test_monthly_takehome_with_loan() {
        let mut form = mortgage_form();
        form.set(Field::AdditionalMonthlyPayment, "200");
        form.set(Field::Salary, "100000");
        form.set(Field::EffectiveTaxRate, "25");
        form.set(Field::AnnualSavingsTarget, "12000");

        // 5125.00 - 1013.37 - 200.00
        assert_eq!(form.monthly_takehome(), "3911.63");
    }

    #[test]
    fn test_monthly_takehome_error_precedence() {
        let mut form = mortgage_form();
        form.set(Field::AnnualInterestRate, "0");
        assert_eq!(form.monthly_takehome(), "Please enter valid salary");

        form.set(Field::Salary, "60000");
        assert_eq!(form.monthly_takehome(), "Please enter valid interest rate");
    }

    #[test]
    fn test_invalid_number() {
        let mut form = mortgage_form();
        form.set(Field::LoanTerm, "thirty");
        assert_eq!(
            form.total_monthly_payment(),
            "Please enter a number for Loan Term, not 'thirty'"
        );
    }

    #[test]
    fn test_loan_cost() {
        let mut form = mortgage_form();
        assert_eq!(
            form.loan_cost(),
            "1013.37 monthly over 360 payments, 364813.42 total, 164813.42 interest"
        );
    }
}
