use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::{field, non_negative_f64, LoadError};

/// One of the two fixed departure points flights are measured from.
/// Reference distances are pre-computed per airport for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    A,
    B,
}

impl Origin {
    pub fn as_str(self) -> &'static str {
        match self {
            Origin::A => "A",
            Origin::B => "B",
        }
    }

    /// Strict parse — an unrecognised origin token is a bad row, not a
    /// fallback to origin B.
    pub fn parse(token: &str) -> Option<Origin> {
        match token.trim() {
            "A" | "a" => Some(Origin::A),
            "B" | "b" => Some(Origin::B),
            _ => None,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub distance_from_origin_a: f64,
    pub distance_from_origin_b: f64,
}

impl Airport {
    pub fn distance_from(&self, origin: Origin) -> f64 {
        match origin {
            Origin::A => self.distance_from_origin_a,
            Origin::B => self.distance_from_origin_b,
        }
    }
}

pub struct AirportTable;

impl AirportTable {
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<Airport>, LoadError> {
        let file = File::open(path)?;
        Self::load(file)
    }

    /// Reads `[code, name, distanceA, distanceB]` rows. The header row is
    /// skipped; malformed or negative distances are fatal.
    pub fn load<R: Read>(reader: R) -> Result<Vec<Airport>, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut airports = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            let row = i + 2; // 1-based, after the header

            let code = field(&record, 0, "code", row)?.to_string();
            let name = field(&record, 1, "name", row)?.to_string();
            let distance_from_origin_a =
                non_negative_f64(field(&record, 2, "distanceA", row)?, "distanceA", row)?;
            let distance_from_origin_b =
                non_negative_f64(field(&record, 3, "distanceB", row)?, "distanceB", row)?;

            airports.push(Airport {
                code,
                name,
                distance_from_origin_a,
                distance_from_origin_b,
            });
        }

        debug!("Loaded airport reference data — count={}", airports.len());
        Ok(airports)
    }
}
