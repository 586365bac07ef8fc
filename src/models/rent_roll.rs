//! Rent roll table parsed from an uploaded workbook.
//!
//! Column names come from the header row; every data cell is kept as the text
//! the workbook reported. Numeric interpretation happens later, only for the
//! column chosen as the rent column.

/// One data row of the rent roll.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RentRollRow {
    cells: Vec<String>,
}

impl RentRollRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Cell text at `column`, `None` past the end of a short row.
    pub fn get(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

/// Uploaded rent roll: ordered column names plus data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RentRoll {
    columns: Vec<String>,
    rows: Vec<RentRollRow>,
}

impl RentRoll {
    pub fn new(columns: Vec<String>, rows: Vec<RentRollRow>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[RentRollRow] {
        &self.rows
    }

    /// Every cell of one column, top to bottom. Missing cells read as "".
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(column).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_values_pads_short_rows() {
        let roll = RentRoll::new(
            vec!["Unit".to_string(), "Rent".to_string()],
            vec![
                RentRollRow::new(vec!["1A".to_string(), "1200".to_string()]),
                RentRollRow::new(vec!["1B".to_string()]),
            ],
        );

        let rents: Vec<&str> = roll.column_values(1).collect();
        assert_eq!(rents, vec!["1200", ""]);
        assert_eq!(roll.rows().len(), 2);
    }
}
