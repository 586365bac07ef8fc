//! Underwriting inputs and results.
//!
//! This module defines:
//! - `LeaseType`: who carries the operating expenses
//! - `UnderwritingInputs`: the six user-supplied scalars
//! - `UnderwritingResult`: every metric derived from one run

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Lease structure of the property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaseType {
    /// Landlord pays operating expenses.
    #[default]
    Gross,
    /// Triple net: tenant pays operating expenses.
    #[serde(rename = "NNN")]
    Nnn,
}

impl fmt::Display for LeaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaseType::Gross => write!(f, "Gross"),
            LeaseType::Nnn => write!(f, "NNN"),
        }
    }
}

impl FromStr for LeaseType {
    type Err = String;

    /// Case-insensitive: "gross", "Gross", "nnn", "NNN".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gross" => Ok(LeaseType::Gross),
            "nnn" => Ok(LeaseType::Nnn),
            other => Err(format!(
                "Unknown lease type '{other}', expected Gross or NNN"
            )),
        }
    }
}

/// Property and loan parameters for one underwriting run.
///
/// Rates are percentages (6.0 means 6%). Nothing is range-checked: zero and
/// negative values flow into the formulas, which report the degenerate cases.
///
/// # JSON Example
///
/// ```json
/// {
///   "purchase_price": 1000000.0,
///   "loan_amount": 700000.0,
///   "interest_rate": 6.0,
///   "loan_term_years": 30.0,
///   "vacancy_rate": 5.0,
///   "lease_type": "Gross"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnderwritingInputs {
    pub purchase_price: f64,
    pub loan_amount: f64,
    /// Annual interest rate, percent
    pub interest_rate: f64,
    pub loan_term_years: f64,
    /// Vacancy and collection loss, percent
    pub vacancy_rate: f64,
    pub lease_type: LeaseType,
}

pub const DEFAULT_PURCHASE_PRICE: f64 = 1_000_000.0;
pub const DEFAULT_LOAN_AMOUNT: f64 = 700_000.0;
pub const DEFAULT_INTEREST_RATE: f64 = 6.0;
pub const DEFAULT_LOAN_TERM_YEARS: f64 = 30.0;
pub const DEFAULT_VACANCY_RATE: f64 = 5.0;

impl Default for UnderwritingInputs {
    fn default() -> Self {
        Self {
            purchase_price: DEFAULT_PURCHASE_PRICE,
            loan_amount: DEFAULT_LOAN_AMOUNT,
            interest_rate: DEFAULT_INTEREST_RATE,
            loan_term_years: DEFAULT_LOAN_TERM_YEARS,
            vacancy_rate: DEFAULT_VACANCY_RATE,
            lease_type: LeaseType::default(),
        }
    }
}

/// How the rent column was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RentColumnSource {
    /// Header contains "rent".
    Matched,
    /// No header matched; the last column was used.
    Fallback,
}

/// Metrics computed by one underwriting run.
///
/// The first eight fields are the underwriting metrics; the rest record how
/// the rent roll was read so the heuristic can be audited.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnderwritingResult {
    pub annual_income: f64,
    pub expenses: f64,
    pub noi: f64,
    pub annual_debt_service: f64,
    pub taxable_cash_flow: f64,
    pub after_tax_cash_flow: f64,
    pub cash_on_cash: f64,
    pub cap_rate: f64,

    /// Header of the column summed as monthly rent
    pub rent_column: String,
    pub rent_column_source: RentColumnSource,
    pub total_monthly_rent: f64,
    pub monthly_payment: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lease_type_parses_case_insensitively() {
        assert_eq!("NNN".parse::<LeaseType>(), Ok(LeaseType::Nnn));
        assert_eq!("nnn".parse::<LeaseType>(), Ok(LeaseType::Nnn));
        assert_eq!(" Gross ".parse::<LeaseType>(), Ok(LeaseType::Gross));
        assert!("modified gross".parse::<LeaseType>().is_err());
    }

    #[test]
    fn lease_type_serializes_with_display_names() {
        assert_eq!(serde_json::to_string(&LeaseType::Nnn).unwrap(), "\"NNN\"");
        assert_eq!(
            serde_json::to_string(&LeaseType::Gross).unwrap(),
            "\"Gross\""
        );
        assert_eq!(LeaseType::Nnn.to_string(), "NNN");
    }

    #[test]
    fn defaults_match_form_defaults() {
        let inputs = UnderwritingInputs::default();
        assert_eq!(inputs.purchase_price, 1_000_000.0);
        assert_eq!(inputs.loan_amount, 700_000.0);
        assert_eq!(inputs.interest_rate, 6.0);
        assert_eq!(inputs.loan_term_years, 30.0);
        assert_eq!(inputs.vacancy_rate, 5.0);
        assert_eq!(inputs.lease_type, LeaseType::Gross);
    }
}
