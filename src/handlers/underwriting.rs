//! Underwriting HTTP handlers.
//!
//! This module implements the underwriting endpoints:
//! - POST /api/v1/underwriting - Filled template as an xlsx download
//! - POST /api/v1/underwriting/summary - The same metrics as JSON
//!
//! Both take the same multipart form:
//!
//! | Field             | Kind   | Default   |
//! |-------------------|--------|-----------|
//! | `rent_roll`       | file   | required  |
//! | `purchase_price`  | number | 1,000,000 |
//! | `loan_amount`     | number | 700,000   |
//! | `interest_rate`   | number | 6.0       |
//! | `loan_term_years` | number | 30        |
//! | `vacancy_rate`    | number | 5.0       |
//! | `lease_type`      | text   | Gross     |

use crate::{
    error::AppError,
    middleware::auth::AccessGrant,
    models::underwriting::{UnderwritingInputs, UnderwritingResult},
    services::underwriting_service,
    state::AppState,
    workbook::template::{OUTPUT_FILE_NAME, XLSX_CONTENT_TYPE},
};
use axum::{
    Extension, Json,
    body::Bytes,
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
};

/// Parsed multipart form.
#[derive(Debug, Default)]
pub struct UnderwritingForm {
    /// `None` when the field is absent or the file is empty
    pub rent_roll: Option<Bytes>,
    pub inputs: UnderwritingInputs,
}

/// Read every field of the form. Blank scalars keep their defaults; unknown
/// fields are ignored.
///
/// # Errors
///
/// - `Multipart` for a malformed or oversized body
/// - `InvalidRequest` for a non-numeric number field or an unknown lease type
pub async fn read_form(mut multipart: Multipart) -> Result<UnderwritingForm, AppError> {
    let mut form = UnderwritingForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "rent_roll" {
            let bytes = field.bytes().await?;
            form.rent_roll = (!bytes.is_empty()).then_some(bytes);
            continue;
        }

        let text = field.text().await?;
        let inputs = &mut form.inputs;

        match name.as_str() {
            "purchase_price" => {
                inputs.purchase_price = parse_number(&name, &text, inputs.purchase_price)?
            }
            "loan_amount" => {
                inputs.loan_amount = parse_number(&name, &text, inputs.loan_amount)?
            }
            "interest_rate" => {
                inputs.interest_rate = parse_number(&name, &text, inputs.interest_rate)?
            }
            "loan_term_years" => {
                inputs.loan_term_years = parse_number(&name, &text, inputs.loan_term_years)?
            }
            "vacancy_rate" => {
                inputs.vacancy_rate = parse_number(&name, &text, inputs.vacancy_rate)?
            }
            "lease_type" if !text.trim().is_empty() => {
                inputs.lease_type = text.parse().map_err(AppError::InvalidRequest)?
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Blank means "use the default"; anything else must be a finite number.
fn parse_number(field: &str, text: &str, default: f64) -> Result<f64, AppError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            AppError::InvalidRequest(format!("{field} must be a number, got '{trimmed}'"))
        })
}

/// Run the underwriting and return the filled template.
///
/// # Response
///
/// - **Success (200 OK)**: `BH_Underwriting.xlsx` as an attachment
/// - **Error (400)**: No rent roll, malformed form, unreadable workbook
/// - **Error (401)**: Wrong or missing password
/// - **Error (413)**: Upload larger than `MAX_UPLOAD_BYTES`
/// - **Error (422)**: Degenerate inputs (zero term, zero equity, zero price)
/// - **Error (500)**: Template missing or unreadable
///
/// # Arguments
///
/// * `State(state)` - Shared configuration
/// * `Extension(grant)` - Access grant (injected by the password gate)
/// * `multipart` - The form described in the module docs
pub async fn download_underwriting(
    State(state): State<AppState>,
    Extension(grant): Extension<AccessGrant>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = read_form(multipart).await?;
    let rent_roll = form.rent_roll.ok_or(AppError::MissingRentRoll)?;
    let inputs = form.inputs;

    tracing::info!(
        session_id = %grant.session_id,
        lease_type = %inputs.lease_type,
        upload_bytes = rent_roll.len(),
        "Running underwriting"
    );

    let template_path = state.config.template_path.clone();
    let report = tokio::task::spawn_blocking(move || {
        underwriting_service::run_underwriting(&template_path, &rent_roll, &inputs)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    tracing::info!(
        session_id = %grant.session_id,
        rent_column = %report.result.rent_column,
        "Sending filled template"
    );

    let headers = [
        (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{OUTPUT_FILE_NAME}\""),
        ),
    ];

    Ok((headers, report.workbook))
}

/// Run the underwriting and return the metrics as JSON.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "annual_income": 570000.0,
///   "expenses": 36000.0,
///   "noi": 534000.0,
///   "annual_debt_service": 50362.24,
///   "taxable_cash_flow": 483637.76,
///   "after_tax_cash_flow": 314364.54,
///   "cash_on_cash": 1.0479,
///   "cap_rate": 0.534,
///   "rent_column": "Rent",
///   "rent_column_source": "matched",
///   "total_monthly_rent": 50000.0,
///   "monthly_payment": 4196.85
/// }
/// ```
///
/// Errors are the same as for the download, minus the template failures.
pub async fn underwriting_summary(
    Extension(grant): Extension<AccessGrant>,
    multipart: Multipart,
) -> Result<Json<UnderwritingResult>, AppError> {
    let form = read_form(multipart).await?;
    let rent_roll = form.rent_roll.ok_or(AppError::MissingRentRoll)?;
    let inputs = form.inputs;

    tracing::info!(session_id = %grant.session_id, "Summarizing underwriting");

    let result = tokio::task::spawn_blocking(move || {
        underwriting_service::summarize(&rent_roll, &inputs)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_number_keeps_default() {
        assert_eq!(parse_number("loan_amount", "  ", 700_000.0).unwrap(), 700_000.0);
    }

    #[test]
    fn numbers_are_parsed_without_range_checks() {
        assert_eq!(parse_number("interest_rate", "0", 6.0).unwrap(), 0.0);
        assert_eq!(parse_number("vacancy_rate", "-3.5", 5.0).unwrap(), -3.5);
        assert_eq!(
            parse_number("purchase_price", " 2500000 ", 1.0).unwrap(),
            2_500_000.0
        );
    }

    #[test]
    fn non_numbers_are_rejected() {
        for text in ["abc", "1,000", "inf", "NaN"] {
            let err = parse_number("purchase_price", text, 1.0).unwrap_err();
            assert!(matches!(err, AppError::InvalidRequest(msg) if msg.contains("purchase_price")));
        }
    }
}
