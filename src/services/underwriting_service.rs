//! Underwriting service - one complete run from rent roll to filled template.
//!
//! # Process
//!
//! 1. Parse the uploaded workbook into a rent roll
//! 2. Resolve the rent column and aggregate income
//! 3. Apply the expense model, loan payment and return metrics
//! 4. Fill a fresh copy of the template and serialize it
//!
//! Everything here is synchronous; handlers run it on a blocking worker.

use crate::{
    error::{AppError, UnderwritingError},
    models::{
        rent_roll::RentRoll,
        underwriting::{RentColumnSource, UnderwritingInputs, UnderwritingResult},
    },
    services::{amortization, expenses, rent_roll, returns},
    workbook::{rent_roll_reader, template},
};
use std::path::Path;

/// Filled template plus the metrics written into it.
#[derive(Debug, Clone)]
pub struct UnderwritingReport {
    pub result: UnderwritingResult,
    pub workbook: Vec<u8>,
}

/// Compute every metric for `roll` and `inputs`.
///
/// # Errors
///
/// - `InsufficientData`: the rent roll has no columns
/// - `DivisionByZero`: zero loan term, zero equity or zero purchase price
/// - `NonFiniteResult`: any metric came out NaN or infinite
pub fn underwrite(
    roll: &RentRoll,
    inputs: &UnderwritingInputs,
) -> Result<UnderwritingResult, UnderwritingError> {
    let column = rent_roll::resolve_rent_column(roll.columns()).ok_or_else(|| {
        UnderwritingError::InsufficientData("rent roll has no columns".to_string())
    })?;

    let total_monthly_rent = rent_roll::monthly_rent_for(roll, column);
    let annual_income = rent_roll::annual_income(total_monthly_rent, inputs.vacancy_rate);
    let expenses = expenses::operating_expenses(inputs.lease_type, inputs.purchase_price);
    let noi = returns::noi(annual_income, expenses);

    let monthly_payment = amortization::monthly_payment(
        inputs.loan_amount,
        inputs.interest_rate,
        inputs.loan_term_years,
    )?;
    let annual_debt_service = amortization::annual_debt_service(monthly_payment);

    let taxable_cash_flow = returns::taxable_cash_flow(noi, annual_debt_service);
    let after_tax_cash_flow = returns::after_tax_cash_flow(taxable_cash_flow);
    let cash_on_cash =
        returns::cash_on_cash(after_tax_cash_flow, inputs.purchase_price, inputs.loan_amount)?;
    let cap_rate = returns::cap_rate(noi, inputs.purchase_price)?;

    let result = UnderwritingResult {
        annual_income,
        expenses,
        noi,
        annual_debt_service,
        taxable_cash_flow,
        after_tax_cash_flow,
        cash_on_cash,
        cap_rate,
        rent_column: roll.columns()[column.index].clone(),
        rent_column_source: column.source,
        total_monthly_rent,
        monthly_payment,
    };
    ensure_finite(&result)?;

    Ok(result)
}

fn ensure_finite(result: &UnderwritingResult) -> Result<(), UnderwritingError> {
    let metrics = [
        ("annual income", result.annual_income),
        ("expenses", result.expenses),
        ("net operating income", result.noi),
        ("annual debt service", result.annual_debt_service),
        ("taxable cash flow", result.taxable_cash_flow),
        ("after-tax cash flow", result.after_tax_cash_flow),
        ("cash-on-cash return", result.cash_on_cash),
        ("cap rate", result.cap_rate),
    ];

    match metrics.iter().find(|(_, value)| !value.is_finite()) {
        Some((metric, _)) => Err(UnderwritingError::NonFiniteResult {
            metric: metric.to_string(),
        }),
        None => Ok(()),
    }
}

/// Parse the upload and compute the metrics, without touching the template.
pub fn summarize(
    rent_roll_bytes: &[u8],
    inputs: &UnderwritingInputs,
) -> Result<UnderwritingResult, AppError> {
    let roll = rent_roll_reader::read_rent_roll(rent_roll_bytes)?;
    tracing::debug!(
        columns = roll.columns().len(),
        rows = roll.rows().len(),
        "Rent roll parsed"
    );

    let result = underwrite(&roll, inputs)?;

    match result.rent_column_source {
        RentColumnSource::Matched => {
            tracing::debug!(column = %result.rent_column, "Rent column matched")
        }
        RentColumnSource::Fallback => tracing::warn!(
            column = %result.rent_column,
            "No column header contains 'rent', using the last column"
        ),
    }

    tracing::info!(
        noi = result.noi,
        cap_rate = result.cap_rate,
        cash_on_cash = result.cash_on_cash,
        "Underwriting computed"
    );

    Ok(result)
}

/// Full run: metrics plus the filled template bytes.
pub fn run_underwriting(
    template_path: &Path,
    rent_roll_bytes: &[u8],
    inputs: &UnderwritingInputs,
) -> Result<UnderwritingReport, AppError> {
    let result = summarize(rent_roll_bytes, inputs)?;
    let workbook = template::render(template_path, &result)?;

    tracing::debug!(bytes = workbook.len(), "Template filled");

    Ok(UnderwritingReport { result, workbook })
}
