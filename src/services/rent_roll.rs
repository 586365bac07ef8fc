//! Rent column resolution and income aggregation.
//!
//! The rent column is found in two steps:
//! 1. the first header containing "rent" (case-insensitive)
//! 2. otherwise the last column
//!
//! The fallback never fails while the table has at least one column, so an
//! oddly labelled rent roll degrades to a plausible column instead of an error.

use crate::models::{rent_roll::RentRoll, underwriting::RentColumnSource};

const RENT_KEYWORD: &str = "rent";

/// Column picked as the monthly rent column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub index: usize,
    pub source: RentColumnSource,
}

/// Step 1: first column whose header contains "rent", ignoring case.
pub fn find_rent_column<S: AsRef<str>>(columns: &[S]) -> Option<usize> {
    columns
        .iter()
        .position(|name| name.as_ref().to_lowercase().contains(RENT_KEYWORD))
}

/// Step 1, then step 2. `None` only when there are no columns at all.
pub fn resolve_rent_column<S: AsRef<str>>(columns: &[S]) -> Option<ResolvedColumn> {
    if let Some(index) = find_rent_column(columns) {
        return Some(ResolvedColumn {
            index,
            source: RentColumnSource::Matched,
        });
    }

    columns.len().checked_sub(1).map(|index| ResolvedColumn {
        index,
        source: RentColumnSource::Fallback,
    })
}

/// Numeric value of a cell, if it has one.
///
/// Blank cells, text that does not parse and non-finite values are all `None`.
pub fn coerce_numeric(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Sum of the coercible values; everything else is skipped.
pub fn total_monthly_rent<'a, I>(values: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().filter_map(coerce_numeric).sum()
}

/// Monthly rent for the resolved column of `roll`.
pub fn monthly_rent_for(roll: &RentRoll, column: ResolvedColumn) -> f64 {
    total_monthly_rent(roll.column_values(column.index))
}

/// Annualized rent after vacancy. `vacancy_rate` is a percentage and is not clamped.
pub fn annual_income(total_monthly_rent: f64, vacancy_rate: f64) -> f64 {
    total_monthly_rent * 12.0 * (1.0 - vacancy_rate / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rent_roll::RentRollRow;

    fn roll(columns: &[&str], rows: &[&[&str]]) -> RentRoll {
        RentRoll::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|row| RentRollRow::new(row.iter().map(|c| c.to_string()).collect()))
                .collect(),
        )
    }

    #[test]
    fn literal_rent_column_wins_over_others() {
        let columns = ["Unit", "Tenant", "Rent", "Deposit"];
        assert_eq!(
            resolve_rent_column(&columns),
            Some(ResolvedColumn {
                index: 2,
                source: RentColumnSource::Matched
            })
        );
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert_eq!(find_rent_column(&["Unit", "MONTHLY RENT", "Notes"]), Some(1));
        assert_eq!(find_rent_column(&["Unit", "rent_amt", "Notes"]), Some(1));
        assert_eq!(find_rent_column(&["Current Rent", "Market Rent"]), Some(0));
    }

    #[test]
    fn substring_match_includes_unrelated_words() {
        // "Parent Company" contains "rent"; the heuristic takes it.
        assert_eq!(find_rent_column(&["Parent Company", "Rent"]), Some(0));
    }

    #[test]
    fn falls_back_to_last_column() {
        assert_eq!(
            resolve_rent_column(&["Unit", "Tenant", "Amount"]),
            Some(ResolvedColumn {
                index: 2,
                source: RentColumnSource::Fallback
            })
        );
    }

    #[test]
    fn no_columns_cannot_resolve() {
        let columns: [&str; 0] = [];
        assert_eq!(resolve_rent_column(&columns), None);
    }

    #[test]
    fn coercion_skips_text_and_blanks() {
        assert_eq!(coerce_numeric("1200"), Some(1200.0));
        assert_eq!(coerce_numeric(" 950.5 "), Some(950.5));
        assert_eq!(coerce_numeric("-100"), Some(-100.0));
        assert_eq!(coerce_numeric(""), None);
        assert_eq!(coerce_numeric("vacant"), None);
        assert_eq!(coerce_numeric("$1,200"), None);
        assert_eq!(coerce_numeric("NaN"), None);
        assert_eq!(coerce_numeric("inf"), None);
    }

    #[test]
    fn monthly_total_sums_only_numeric_cells() {
        let roll = roll(
            &["Unit", "Rent"],
            &[
                &["1A", "1200"],
                &["1B", "vacant"],
                &["1C", ""],
                &["1D", "1300.50"],
                &["1E"],
            ],
        );
        let column = resolve_rent_column(roll.columns()).unwrap();

        assert_eq!(monthly_rent_for(&roll, column), 2500.5);
    }

    #[test]
    fn annual_income_applies_vacancy() {
        assert_eq!(annual_income(50_000.0, 5.0), 570_000.0);
        assert_eq!(annual_income(1_000.0, 0.0), 12_000.0);
        assert_eq!(annual_income(1_000.0, 100.0), 0.0);
        // No clamp on vacancy above 100%.
        assert_eq!(annual_income(1_000.0, 150.0), -6_000.0);
    }
}
