//! Financial Calculations
//!
//! Fixed-rate loan and salary calculations. Every function is pure and
//! returns a [`CalculationResult`]; validation failures and out-of-domain
//! inputs come back as the error arm instead of a panic or a NaN.

use tracing::{debug, warn};

use crate::error::{CalcError, CalculationResult, ParamField};
use crate::types::{LoanCost, LoanParameters, NetIncome, RepaymentRequest, SalaryParameters, TermUnit};

/// Check that loan parameters are usable.
///
/// This is a sanity check rather than range validation: only zero values
/// and a missing term unit are rejected. Negative amounts, rates and terms
/// pass through.
///
/// # Returns
/// The first failing check, in the order amount, rate, term, unit, or
/// `None` when all parameters are usable
pub fn validate(params: &LoanParameters) -> Option<CalcError> {
    let field = if params.amount == 0.0 {
        ParamField::LoanAmount
    } else if params.annual_rate_percent == 0.0 {
        ParamField::InterestRate
    } else if params.term == 0.0 {
        ParamField::LoanTerm
    } else if params.term_unit.is_none() {
        ParamField::LoanTermUnit
    } else {
        return None;
    };
    Some(CalcError::invalid(field))
}

/// Validate and hand back the selected term unit
fn checked_unit(params: &LoanParameters) -> CalculationResult<TermUnit> {
    match (validate(params), params.term_unit) {
        (Some(err), _) => Err(err),
        (None, Some(unit)) => Ok(unit),
        (None, None) => Err(CalcError::invalid(ParamField::LoanTermUnit)),
    }
}

/// (1 + r)^n, using `powi` for whole-month terms to keep full precision
fn compound_factor(monthly_rate: f64, payments: f64) -> f64 {
    let base = 1.0 + monthly_rate;
    if payments.fract() == 0.0 && payments.abs() <= f64::from(i32::MAX) {
        base.powi(payments as i32)
    } else {
        base.powf(payments)
    }
}

/// Calculate the monthly payment using the standard amortization formula.
///
/// payment = P × r × (1 + r)^n / [(1 + r)^n - 1] = P × r / [1 - (1 + r)^-n]
///
/// Where:
/// - P = Loan amount
/// - r = Monthly interest rate (annual_rate / 12 / 100)
/// - n = Number of monthly payments (term × 12 for years)
///
/// The second form is evaluated: for very long terms (1 + r)^-n underflows
/// to zero and the payment approaches P × r instead of overflowing.
///
/// # Errors
/// - `InvalidParameter` when validation fails
/// - `InvalidParameter` for the interest rate when the rate is so small
///   that (1 + r)^-n rounds to 1 and the formula would divide by zero
pub fn monthly_payment(params: &LoanParameters) -> CalculationResult<f64> {
    let unit = checked_unit(params)?;

    let rate = params.monthly_rate();
    let payments = params.term * unit.months();
    let denominator = 1.0 - compound_factor(rate, -payments);

    if denominator == 0.0 {
        warn!(
            annual_rate_percent = params.annual_rate_percent,
            payments, "compound factor degenerate, rejecting interest rate"
        );
        return Err(CalcError::invalid(ParamField::InterestRate));
    }

    let payment = params.amount * rate / denominator;
    if !payment.is_finite() {
        warn!(amount = params.amount, payments, "monthly payment is not finite");
        return Err(CalcError::invalid(ParamField::InterestRate));
    }

    debug!(amount = params.amount, payments, payment, "computed monthly payment");
    Ok(payment)
}

/// Calculate how many monthly payments repay a loan when an extra amount
/// is paid on top of the regular payment each month.
///
/// n = -ln(1 - r × P / (payment + extra)) / ln(1 + r)
///
/// Solving the amortization identity for n only works while the
/// logarithm's argument lies strictly inside (0, 1). The argument is
/// checked before any logarithm is taken.
///
/// With no extra payment and a positive rate and term the formula reduces
/// to the loan's own n, which is returned directly since (1 + r)^-n may
/// have underflowed inside the base payment.
///
/// # Returns
/// The raw, possibly fractional, number of payments
///
/// # Errors
/// - Any error from [`validate`] or [`monthly_payment`], untouched
/// - `MathDomain` when the payments can never repay the loan
pub fn time_to_repay(request: &RepaymentRequest) -> CalculationResult<f64> {
    let loan = &request.loan;
    let unit = checked_unit(loan)?;

    let base_payment = monthly_payment(loan)?;
    let rate = loan.monthly_rate();
    let term_payments = loan.term * unit.months();
    if request.extra_monthly_payment == 0.0 && rate > 0.0 && term_payments > 0.0 {
        debug!(base_payment, payments = term_payments, "computed time to repay");
        return Ok(term_payments);
    }

    let total_payment = base_payment + request.extra_monthly_payment;
    let argument = 1.0 - rate * loan.amount / total_payment;

    let in_domain = argument > 0.0 && argument < 1.0;
    if !in_domain || 1.0 + rate <= 0.0 {
        warn!(
            argument,
            base_payment,
            extra_payment = request.extra_monthly_payment,
            "repayment time outside logarithm domain"
        );
        return Err(CalcError::MathDomain { argument });
    }

    let growth = rate.ln_1p();
    if growth == 0.0 || !growth.is_finite() {
        return Err(CalcError::MathDomain { argument });
    }

    let payments = -argument.ln() / growth;
    debug!(
        base_payment,
        extra_payment = request.extra_monthly_payment,
        payments,
        "computed time to repay"
    );
    Ok(payments)
}

/// Calculate monthly take-home salary.
///
/// takehome = (salary × (1 - tax / 100) - savings) / 12
///
/// Only a zero salary is rejected. Negative tax rates or savings above the
/// salary flow through into a (possibly negative) result.
pub fn monthly_takehome(salary: &SalaryParameters) -> CalculationResult<f64> {
    if salary.base_salary == 0.0 {
        return Err(CalcError::invalid(ParamField::Salary));
    }

    let annual = salary.base_salary * (1.0 - salary.effective_tax_rate_percent / 100.0)
        - salary.annual_savings_target;
    Ok(annual / 12.0)
}

/// Regular payment plus the extra monthly amount
pub fn total_monthly_payment(request: &RepaymentRequest) -> CalculationResult<f64> {
    let base_payment = monthly_payment(&request.loan)?;
    Ok(base_payment + request.extra_monthly_payment)
}

/// Calculate the monthly income left after salary deductions and the loan.
///
/// A zero loan amount means no loan is in play: the payment and the extra
/// payment both count as zero and the loan is never validated.
///
/// # Errors
/// The take-home error when the salary is invalid, otherwise the
/// monthly payment error, each surfaced untouched
pub fn net_monthly_income(
    salary: &SalaryParameters,
    request: &RepaymentRequest,
) -> CalculationResult<NetIncome> {
    let takehome = monthly_takehome(salary)?;

    let (base_payment, extra_payment) = if request.loan.amount == 0.0 {
        (0.0, 0.0)
    } else {
        (monthly_payment(&request.loan)?, request.extra_monthly_payment)
    };

    Ok(NetIncome {
        takehome,
        base_payment,
        extra_payment,
        net: takehome - base_payment - extra_payment,
    })
}

/// Calculate total repayment and total interest over the full term.
///
/// Total Interest = (payment × n) - amount
pub fn loan_cost(params: &LoanParameters) -> CalculationResult<LoanCost> {
    let unit = checked_unit(params)?;
    let payment = monthly_payment(params)?;
    let payment_count = params.term * unit.months();
    let total_repayment = payment * payment_count;

    Ok(LoanCost {
        monthly_payment: payment,
        payment_count,
        total_repayment,
        total_interest: total_repayment - params.amount,
    })
}
