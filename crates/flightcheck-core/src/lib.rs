pub mod aeroplane;
pub mod airport;
pub mod economics;
pub mod flight;
pub mod report;
pub mod validator;

pub use aeroplane::Aeroplane;
pub use airport::{Airport, Origin};
pub use economics::FinancialSummary;
pub use flight::{CabinCounts, CabinPrices, FlightRequest};
pub use report::FlightReport;
pub use validator::{CabinClass, ValidationError, ValidationOutcome};

use thiserror::Error;

/// Fatal failure while loading reference or batch data. The validator and
/// calculator are never invoked on collections that failed to load.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: missing {column} column")]
    MissingColumn { row: usize, column: &'static str },
    #[error("row {row}: invalid {column} value '{value}'")]
    BadField {
        row: usize,
        column: &'static str,
        value: String,
    },
}

pub(crate) fn field<'a>(
    record: &'a csv::StringRecord,
    index: usize,
    column: &'static str,
    row: usize,
) -> Result<&'a str, LoadError> {
    record
        .get(index)
        .ok_or(LoadError::MissingColumn { row, column })
}

pub(crate) fn parse_i64(value: &str, column: &'static str, row: usize) -> Result<i64, LoadError> {
    value.parse().map_err(|_| LoadError::BadField {
        row,
        column,
        value: value.to_string(),
    })
}

pub(crate) fn parse_u32(value: &str, column: &'static str, row: usize) -> Result<u32, LoadError> {
    value.parse().map_err(|_| LoadError::BadField {
        row,
        column,
        value: value.to_string(),
    })
}

pub(crate) fn non_negative_f64(
    value: &str,
    column: &'static str,
    row: usize,
) -> Result<f64, LoadError> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(LoadError::BadField {
            row,
            column,
            value: value.to_string(),
        }),
    }
}

/// Parses a currency amount that may carry a symbol prefix ("£7") and comma
/// grouping ("1,200").
pub(crate) fn currency_f64(
    value: &str,
    column: &'static str,
    row: usize,
) -> Result<f64, LoadError> {
    let cleaned = value
        .trim_start_matches(&['£', '$', '€'][..])
        .replace(',', "");
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(LoadError::BadField {
            row,
            column,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_parsing() {
        assert_eq!(currency_f64("£7", "cost", 2).unwrap(), 7.0);
        assert_eq!(currency_f64("$1,250.50", "cost", 2).unwrap(), 1250.5);
        assert_eq!(currency_f64("42", "cost", 2).unwrap(), 42.0);

        assert!(currency_f64("seven", "cost", 2).is_err());
        assert!(currency_f64("-7", "cost", 2).is_err());
        assert!(currency_f64("NaN", "cost", 2).is_err());
    }

    #[test]
    fn test_bad_field_reports_row_and_column() {
        let err = non_negative_f64("abc", "distanceA", 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "row 4: invalid distanceA value 'abc'"
        );
    }
}
