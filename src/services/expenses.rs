//! Operating expense model.
//!
//! NNN leases push every operating cost to the tenant. Gross leases carry a
//! price-proportional tax allowance plus three flat reserves.

use crate::models::underwriting::LeaseType;

/// Share of purchase price charged annually on gross leases.
pub const GROSS_PRICE_RATIO: f64 = 0.012;
pub const MANAGEMENT_RESERVE: f64 = 8_000.0;
pub const INSURANCE_RESERVE: f64 = 10_000.0;
pub const MAINTENANCE_RESERVE: f64 = 6_000.0;

/// Annual operating expenses for `lease_type`.
pub fn operating_expenses(lease_type: LeaseType, purchase_price: f64) -> f64 {
    match lease_type {
        LeaseType::Nnn => 0.0,
        LeaseType::Gross => {
            GROSS_PRICE_RATIO * purchase_price
                + MANAGEMENT_RESERVE
                + INSURANCE_RESERVE
                + MAINTENANCE_RESERVE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nnn_expenses_are_always_zero() {
        for price in [0.0, 1.0, 250_000.0, 1_000_000.0, 75_000_000.0, -5.0] {
            assert_eq!(operating_expenses(LeaseType::Nnn, price), 0.0);
        }
    }

    #[test]
    fn gross_expenses_are_ratio_plus_flat_reserves() {
        for price in [0.0, 500_000.0, 1_000_000.0, 12_345_678.0] {
            let expected = 0.012 * price + 24_000.0;
            assert!((operating_expenses(LeaseType::Gross, price) - expected).abs() < 1e-9);
        }
        assert_eq!(operating_expenses(LeaseType::Gross, 1_000_000.0), 36_000.0);
    }
}
