use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::airport::Origin;
use crate::{currency_f64, field, parse_i64, LoadError};

/// Booked seats per cabin. Counts come from untrusted batch rows and may be
/// negative; the validator deals with them as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinCounts {
    pub economy: i64,
    pub business: i64,
    pub first_class: i64,
}

impl CabinCounts {
    /// Saturating sum: pathological counts near the integer bounds must
    /// still produce a validation outcome, never an overflow panic.
    pub fn total(self) -> i64 {
        self.economy
            .saturating_add(self.business)
            .saturating_add(self.first_class)
    }
}

/// Per-seat fares, present only in economics-mode batches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CabinPrices {
    pub economy: f64,
    pub business: f64,
    pub first_class: f64,
}

/// A proposed flight from one batch row. References an airport by code and an
/// aeroplane by model; both are resolved at validation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRequest {
    pub origin: Origin,
    pub destination_code: String,
    pub aircraft_model: String,
    pub bookings: CabinCounts,
    pub prices: Option<CabinPrices>,
}

pub struct FlightTable;

impl FlightTable {
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<FlightRequest>, LoadError> {
        let file = File::open(path)?;
        Self::load(file)
    }

    /// Reads `[origin, destinationCode, aircraftModel, economyBooked,
    /// businessBooked, firstClassBooked]` rows, optionally followed by
    /// `[economyPrice, businessPrice, firstClassPrice]` in economics-mode
    /// batches. Malformed seat counts are fatal, never zero-coerced.
    pub fn load<R: Read>(reader: R) -> Result<Vec<FlightRequest>, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut flights = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            let row = i + 2;

            let origin_token = field(&record, 0, "origin", row)?;
            let origin = Origin::parse(origin_token).ok_or_else(|| LoadError::BadField {
                row,
                column: "origin",
                value: origin_token.to_string(),
            })?;
            let destination_code = field(&record, 1, "destinationCode", row)?.to_string();
            let aircraft_model = field(&record, 2, "aircraftModel", row)?.to_string();

            let bookings = CabinCounts {
                economy: parse_i64(field(&record, 3, "economyBooked", row)?, "economyBooked", row)?,
                business: parse_i64(
                    field(&record, 4, "businessBooked", row)?,
                    "businessBooked",
                    row,
                )?,
                first_class: parse_i64(
                    field(&record, 5, "firstClassBooked", row)?,
                    "firstClassBooked",
                    row,
                )?,
            };

            let prices = match record.len() {
                6 => None,
                9 => Some(CabinPrices {
                    economy: currency_f64(
                        field(&record, 6, "economyPrice", row)?,
                        "economyPrice",
                        row,
                    )?,
                    business: currency_f64(
                        field(&record, 7, "businessPrice", row)?,
                        "businessPrice",
                        row,
                    )?,
                    first_class: currency_f64(
                        field(&record, 8, "firstClassPrice", row)?,
                        "firstClassPrice",
                        row,
                    )?,
                }),
                _ => {
                    return Err(LoadError::MissingColumn {
                        row,
                        column: "firstClassPrice",
                    })
                }
            };

            flights.push(FlightRequest {
                origin,
                destination_code,
                aircraft_model,
                bookings,
                prices,
            });
        }

        debug!(
            "Loaded flight batch — count={} priced={}",
            flights.len(),
            flights.iter().filter(|f| f.prices.is_some()).count()
        );
        Ok(flights)
    }
}
