//! Reads an uploaded rent roll workbook.
//!
//! The first worksheet is the table. Row 1 holds the column names and every
//! following row up to the sheet's last used row is a data row. Cells are kept
//! as the text the workbook reports; a numeric cell reads as its number.

use super::WorkbookError;
use crate::models::rent_roll::{RentRoll, RentRollRow};
use std::io::Cursor;
use umya_spreadsheet::{Worksheet, reader};

const HEADER_ROW: u32 = 1;

/// Parse xlsx bytes into a [`RentRoll`].
///
/// # Errors
///
/// - `UnreadableUpload` if the bytes are not an xlsx workbook
/// - `NoWorksheet` if the workbook has no sheets
pub fn read_rent_roll(bytes: &[u8]) -> Result<RentRoll, WorkbookError> {
    let book = reader::xlsx::read_reader(Cursor::new(bytes), true)
        .map_err(WorkbookError::UnreadableUpload)?;
    let sheet = book.get_sheet(&0).ok_or(WorkbookError::NoWorksheet)?;

    Ok(rent_roll_from_sheet(sheet))
}

fn rent_roll_from_sheet(sheet: &Worksheet) -> RentRoll {
    let (last_column, last_row) = sheet.get_highest_column_and_row();
    if last_row < HEADER_ROW {
        return RentRoll::default();
    }

    let columns = (1..=last_column)
        .map(|col| column_name(sheet.get_value((col, HEADER_ROW)), col))
        .collect();

    let rows = (HEADER_ROW + 1..=last_row)
        .map(|row| {
            RentRollRow::new(
                (1..=last_column)
                    .map(|col| sheet.get_value((col, row)))
                    .collect(),
            )
        })
        .collect();

    RentRoll::new(columns, rows)
}

/// Blank headers get a positional name so every column stays addressable.
fn column_name(header: String, col: u32) -> String {
    let trimmed = header.trim();
    if trimmed.is_empty() {
        format!("Unnamed: {}", col - 1)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use umya_spreadsheet::writer;

    /// Cell contents for a test sheet: numbers become numeric cells.
    pub enum TestCell<'a> {
        Text(&'a str),
        Number(f64),
        Blank,
    }

    /// Build an xlsx rent roll in memory.
    pub fn rent_roll_xlsx(headers: &[&str], rows: &[Vec<TestCell<'_>>]) -> Vec<u8> {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_mut(&0).unwrap();

        for (i, header) in headers.iter().enumerate() {
            if !header.is_empty() {
                sheet
                    .get_cell_mut((i as u32 + 1, HEADER_ROW))
                    .set_value(header.to_string());
            }
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let coordinate = (c as u32 + 1, HEADER_ROW + 1 + r as u32);
                match cell {
                    TestCell::Text(text) => {
                        sheet.get_cell_mut(coordinate).set_value(text.to_string());
                    }
                    TestCell::Number(value) => {
                        sheet.get_cell_mut(coordinate).set_value_number(*value);
                    }
                    TestCell::Blank => {}
                }
            }
        }

        let mut out = Cursor::new(Vec::new());
        writer::xlsx::write_writer(&book, &mut out).unwrap();
        out.into_inner()
    }

    #[test]
    fn reads_header_and_rows() {
        let bytes = rent_roll_xlsx(
            &["Unit", "Tenant", "Monthly Rent"],
            &[
                vec![
                    TestCell::Text("1A"),
                    TestCell::Text("Acme"),
                    TestCell::Number(1200.0),
                ],
                vec![
                    TestCell::Text("1B"),
                    TestCell::Text("Vacant"),
                    TestCell::Text("n/a"),
                ],
            ],
        );

        let roll = read_rent_roll(&bytes).unwrap();

        assert_eq!(roll.columns(), ["Unit", "Tenant", "Monthly Rent"]);
        assert_eq!(roll.rows().len(), 2);
        assert_eq!(roll.rows()[0].get(0), Some("1A"));
        assert_eq!(roll.rows()[1].get(2), Some("n/a"));
        assert_eq!(
            roll.rows()[0].get(2).and_then(|v| v.parse::<f64>().ok()),
            Some(1200.0)
        );
    }

    #[test]
    fn blank_headers_get_positional_names() {
        let bytes = rent_roll_xlsx(
            &["Unit", "", "Amount"],
            &[vec![
                TestCell::Text("1A"),
                TestCell::Blank,
                TestCell::Number(900.0),
            ]],
        );

        let roll = read_rent_roll(&bytes).unwrap();

        assert_eq!(roll.columns(), ["Unit", "Unnamed: 1", "Amount"]);
        assert_eq!(roll.rows()[0].get(1), Some(""));
    }

    #[test]
    fn garbage_bytes_are_an_upload_error() {
        let err = read_rent_roll(b"unit,rent\n1A,1200\n").unwrap_err();
        assert!(matches!(err, WorkbookError::UnreadableUpload(_)));
        assert!(err.is_upload_error());
    }
}
