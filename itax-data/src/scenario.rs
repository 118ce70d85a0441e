//! CSV loader for taxpayer scenarios.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column           | Required | Type    | Notes                              |
//! |------------------|----------|---------|------------------------------------|
//! | `label`          | yes      | string  | Free text shown in reports         |
//! | `annual_income`  | yes      | decimal | Gross annual income in rupees      |
//! | `old_deductions` | no       | decimal | Empty cell or missing column ⇒ 0   |
//! | `new_deductions` | no       | decimal | Empty cell or missing column ⇒ 0   |
//!
//! ```csv
//! label,annual_income,old_deductions,new_deductions
//! salaried,1250000,150000,75000
//! founder,42000000,,
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use itax_core::TaxInputs;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading scenarios.
#[derive(Debug, Error)]
pub enum ScenarioLoadError {
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// An amount column was negative. `row` is 1-based, header excluded.
    #[error("negative {field} on row {row}")]
    NegativeAmount { field: &'static str, row: usize },

    #[error("empty label on row {row}")]
    EmptyLabel { row: usize },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One named set of tax inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub label: String,
    pub inputs: TaxInputs,
}

#[derive(Debug, Deserialize)]
struct ScenarioRow {
    label: String,
    annual_income: Decimal,
    #[serde(default)]
    old_deductions: Option<Decimal>,
    #[serde(default)]
    new_deductions: Option<Decimal>,
}

fn non_negative(
    value: Decimal,
    field: &'static str,
    row: usize,
) -> Result<Decimal, ScenarioLoadError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ScenarioLoadError::NegativeAmount { field, row });
    }
    Ok(value)
}

fn convert_row(
    row: ScenarioRow,
    row_number: usize,
) -> Result<Scenario, ScenarioLoadError> {
    if row.label.is_empty() {
        return Err(ScenarioLoadError::EmptyLabel { row: row_number });
    }

    Ok(Scenario {
        label: row.label,
        inputs: TaxInputs {
            annual_income: non_negative(row.annual_income, "annual_income", row_number)?,
            old_deductions: non_negative(
                row.old_deductions.unwrap_or_default(),
                "old_deductions",
                row_number,
            )?,
            new_deductions: non_negative(
                row.new_deductions.unwrap_or_default(),
                "new_deductions",
                row_number,
            )?,
        },
    })
}

/// Parses scenarios from any reader, in file order.
///
/// # Errors
///
/// * [`ScenarioLoadError::Parse`] if the CSV is malformed or a required
///   column is missing or not a number.
/// * [`ScenarioLoadError::NegativeAmount`] / [`ScenarioLoadError::EmptyLabel`]
///   for rows that parse but are not usable.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>, ScenarioLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    reader
        .deserialize::<ScenarioRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect()
}

/// Reads a scenario file from disk.
pub fn load_from_file(path: &Path) -> Result<Vec<Scenario>, ScenarioLoadError> {
    let file = std::fs::File::open(path).map_err(|source| ScenarioLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_reader(file)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const MINIMAL_CSV: &str = "\
label,annual_income
intern,300000
";

    const FULL_CSV: &str = "\
label,annual_income,old_deductions,new_deductions
salaried,1250000,150000,75000
founder,42000000,,
";

    #[test]
    fn minimal_csv_defaults_deductions_to_zero() {
        let scenarios = load_from_reader(MINIMAL_CSV.as_bytes()).unwrap();

        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].label, "intern");
        assert_eq!(scenarios[0].inputs.annual_income, dec!(300000));
        assert_eq!(scenarios[0].inputs.old_deductions, dec!(0));
        assert_eq!(scenarios[0].inputs.new_deductions, dec!(0));
    }

    #[test]
    fn full_csv_keeps_row_order_and_values() {
        let scenarios = load_from_reader(FULL_CSV.as_bytes()).unwrap();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(
            scenarios[0].inputs,
            TaxInputs {
                annual_income: dec!(1250000),
                old_deductions: dec!(150000),
                new_deductions: dec!(75000),
            }
        );
        assert_eq!(scenarios[1].label, "founder");
        assert_eq!(scenarios[1].inputs.old_deductions, dec!(0));
    }

    #[test]
    fn column_order_does_not_matter() {
        let csv = "new_deductions,annual_income,label\n75000,900000,reordered\n";

        let scenarios = load_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(scenarios[0].inputs.new_deductions, dec!(75000));
        assert_eq!(scenarios[0].inputs.annual_income, dec!(900000));
    }

    #[test]
    fn whitespace_around_values_is_trimmed() {
        let csv = "label , annual_income\n  padded , 500000 \n";

        let scenarios = load_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(scenarios[0].label, "padded");
        assert_eq!(scenarios[0].inputs.annual_income, dec!(500000));
    }

    #[test]
    fn negative_amount_reports_field_and_row() {
        let csv = "label,annual_income,old_deductions\nok,100,0\nbad,100,-5\n";

        let err = load_from_reader(csv.as_bytes()).unwrap_err();

        assert!(matches!(
            err,
            ScenarioLoadError::NegativeAmount {
                field: "old_deductions",
                row: 2
            }
        ));
    }

    #[test]
    fn empty_label_is_rejected() {
        let csv = "label,annual_income\n,100\n";

        let err = load_from_reader(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, ScenarioLoadError::EmptyLabel { row: 1 }));
    }

    #[test]
    fn non_numeric_income_is_a_parse_error() {
        let csv = "label,annual_income\nbad,lots\n";

        let err = load_from_reader(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, ScenarioLoadError::Parse(_)));
    }

    #[test]
    fn missing_required_column_is_a_parse_error() {
        let csv = "label\nno-income\n";

        assert!(matches!(
            load_from_reader(csv.as_bytes()),
            Err(ScenarioLoadError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_from_file(Path::new("does/not/exist.csv")).unwrap_err();

        assert!(matches!(err, ScenarioLoadError::Io { .. }));
    }
}
