//! Level-payment loan amortization.
//!
//! ```text
//! r = annual_rate / 100 / 12
//! n = term_years * 12
//! payment = loan * r / (1 - (1 + r)^-n)
//! ```
//!
//! The denominator is evaluated as `-expm1(-n * ln_1p(r))` so that rates too
//! small to survive `1 + r` keep their precision. When it is exactly zero
//! (r = 0) the payment is straight-line, loan / n, which is the formula's
//! limit as r approaches zero.

use crate::error::UnderwritingError;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Monthly payment on a fixed-rate, fully amortizing loan.
///
/// # Errors
///
/// - `DivisionByZero` when the term is zero months
/// - `NonFiniteResult` when the inputs drive the formula to NaN or infinity
pub fn monthly_payment(
    loan_amount: f64,
    annual_rate: f64,
    term_years: f64,
) -> Result<f64, UnderwritingError> {
    let r = annual_rate / 100.0 / MONTHS_PER_YEAR;
    let n = term_years * MONTHS_PER_YEAR;

    if n == 0.0 {
        return Err(UnderwritingError::DivisionByZero {
            context: "loan term".to_string(),
        });
    }

    // 1 - (1 + r)^-n
    let denominator = -(-n * r.ln_1p()).exp_m1();

    let payment = if denominator == 0.0 {
        loan_amount / n
    } else {
        loan_amount * r / denominator
    };

    if !payment.is_finite() {
        return Err(UnderwritingError::NonFiniteResult {
            metric: "monthly payment".to_string(),
        });
    }

    Ok(payment)
}

/// Twelve monthly payments.
pub fn annual_debt_service(monthly_payment: f64) -> f64 {
    monthly_payment * MONTHS_PER_YEAR
}
