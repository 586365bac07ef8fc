//! Underwriting template.
//!
//! The template is a prebuilt workbook whose first worksheet has seven cells
//! reserved for computed metrics. [`OUTPUT_CELLS`] is the only place those
//! coordinates are written down; a layout change to the template means
//! editing that table and nothing else.

use super::WorkbookError;
use crate::models::underwriting::UnderwritingResult;
use std::{io::Cursor, path::Path};
use umya_spreadsheet::{Spreadsheet, reader, writer};

pub const OUTPUT_FILE_NAME: &str = "BH_Underwriting.xlsx";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Metrics written into the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputField {
    AnnualIncome,
    Expenses,
    NetOperatingIncome,
    TaxableCashFlow,
    AfterTaxCashFlow,
    CashOnCash,
    CapRate,
}

impl OutputField {
    pub fn value(self, result: &UnderwritingResult) -> f64 {
        match self {
            OutputField::AnnualIncome => result.annual_income,
            OutputField::Expenses => result.expenses,
            OutputField::NetOperatingIncome => result.noi,
            OutputField::TaxableCashFlow => result.taxable_cash_flow,
            OutputField::AfterTaxCashFlow => result.after_tax_cash_flow,
            OutputField::CashOnCash => result.cash_on_cash,
            OutputField::CapRate => result.cap_rate,
        }
    }
}

/// Field → cell on the template's first worksheet.
pub const OUTPUT_CELLS: [(OutputField, &str); 7] = [
    (OutputField::AnnualIncome, "C24"),
    (OutputField::Expenses, "C31"),
    (OutputField::NetOperatingIncome, "C43"),
    (OutputField::TaxableCashFlow, "C55"),
    (OutputField::AfterTaxCashFlow, "C56"),
    (OutputField::CashOnCash, "C61"),
    (OutputField::CapRate, "C62"),
];

/// Read the template from disk. The file is only ever read.
pub fn load_template(path: &Path) -> Result<Spreadsheet, WorkbookError> {
    let bytes = std::fs::read(path).map_err(|source| WorkbookError::TemplateUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_template(&bytes)
}

pub fn parse_template(bytes: &[u8]) -> Result<Spreadsheet, WorkbookError> {
    reader::xlsx::read_reader(Cursor::new(bytes), true).map_err(WorkbookError::TemplateUnreadable)
}

/// Overwrite the output cells with `result`'s metrics as numeric cells.
pub fn fill_template(
    book: &mut Spreadsheet,
    result: &UnderwritingResult,
) -> Result<(), WorkbookError> {
    let sheet = book
        .get_sheet_mut(&0)
        .ok_or(WorkbookError::TemplateMissingSheet)?;

    for (field, cell) in OUTPUT_CELLS {
        sheet.get_cell_mut(cell).set_value_number(field.value(result));
    }
    Ok(())
}

/// Serialize the workbook into an in-memory xlsx buffer.
pub fn to_xlsx_bytes(book: &Spreadsheet) -> Result<Vec<u8>, WorkbookError> {
    let mut out = Cursor::new(Vec::new());
    writer::xlsx::write_writer(book, &mut out).map_err(WorkbookError::Write)?;
    Ok(out.into_inner())
}

/// Load, fill and serialize in one step.
pub fn render(template_path: &Path, result: &UnderwritingResult) -> Result<Vec<u8>, WorkbookError> {
    let mut book = load_template(template_path)?;
    fill_template(&mut book, result)?;
    to_xlsx_bytes(&book)
}
