//! Return metrics after debt service and tax.

use crate::error::UnderwritingError;

/// Flat tax rate applied to taxable cash flow, losses included.
pub const TAX_RATE: f64 = 0.35;

pub fn noi(annual_income: f64, expenses: f64) -> f64 {
    annual_income - expenses
}

pub fn taxable_cash_flow(noi: f64, annual_debt_service: f64) -> f64 {
    noi - annual_debt_service
}

/// No floor at zero: a negative taxable cash flow gets a symmetric tax benefit.
pub fn after_tax_cash_flow(taxable_cash_flow: f64) -> f64 {
    taxable_cash_flow * (1.0 - TAX_RATE)
}

/// After-tax cash flow over the equity invested (price - loan).
///
/// # Errors
///
/// `DivisionByZero` when the loan covers the whole price.
pub fn cash_on_cash(
    after_tax_cash_flow: f64,
    purchase_price: f64,
    loan_amount: f64,
) -> Result<f64, UnderwritingError> {
    let equity = purchase_price - loan_amount;
    if equity == 0.0 {
        return Err(UnderwritingError::DivisionByZero {
            context: "cash-on-cash return (purchase price equals loan amount)".to_string(),
        });
    }
    Ok(after_tax_cash_flow / equity)
}

/// NOI over purchase price.
///
/// # Errors
///
/// `DivisionByZero` when the purchase price is zero.
pub fn cap_rate(noi: f64, purchase_price: f64) -> Result<f64, UnderwritingError> {
    if purchase_price == 0.0 {
        return Err(UnderwritingError::DivisionByZero {
            context: "cap rate (purchase price is zero)".to_string(),
        });
    }
    Ok(noi / purchase_price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_applies_to_losses_too() {
        assert_eq!(after_tax_cash_flow(100_000.0), 65_000.0);
        assert_eq!(after_tax_cash_flow(-100_000.0), -65_000.0);
        assert_eq!(after_tax_cash_flow(0.0), 0.0);
    }

    #[test]
    fn cash_on_cash_divides_by_equity() {
        assert_eq!(cash_on_cash(30_000.0, 1_000_000.0, 700_000.0).unwrap(), 0.1);
    }

    #[test]
    fn zero_down_payment_is_rejected() {
        let err = cash_on_cash(30_000.0, 700_000.0, 700_000.0).unwrap_err();
        assert!(matches!(err, UnderwritingError::DivisionByZero { .. }));
        assert!(err.to_string().contains("cash-on-cash"));
    }

    #[test]
    fn negative_equity_is_not_rejected() {
        assert_eq!(cash_on_cash(10_000.0, 100_000.0, 200_000.0).unwrap(), -0.1);
    }

    #[test]
    fn cap_rate_is_noi_over_price() {
        assert_eq!(cap_rate(534_000.0, 1_000_000.0).unwrap(), 0.534);
        assert!(matches!(
            cap_rate(534_000.0, 0.0),
            Err(UnderwritingError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn noi_and_taxable_are_differences() {
        assert_eq!(noi(570_000.0, 36_000.0), 534_000.0);
        assert_eq!(taxable_cash_flow(534_000.0, 34_000.0), 500_000.0);
    }
}
