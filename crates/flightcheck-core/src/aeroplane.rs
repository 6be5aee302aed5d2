use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::{currency_f64, field, non_negative_f64, parse_u32, LoadError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aeroplane {
    pub model: String,
    /// Running cost per seat per 100 km flown, in currency units.
    pub running_cost_per_seat_per_100km: f64,
    /// Maximum flight range in km.
    pub max_flight_range: f64,
    pub economy_seats: u32,
    pub business_seats: u32,
    pub first_class_seats: u32,
}

impl Aeroplane {
    pub fn total_seats(&self) -> u32 {
        self.economy_seats
            .saturating_add(self.business_seats)
            .saturating_add(self.first_class_seats)
    }
}

pub struct AeroplaneTable;

impl AeroplaneTable {
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<Aeroplane>, LoadError> {
        let file = File::open(path)?;
        Self::load(file)
    }

    /// Reads `[model, costPerSeatPer100km, maxRange, economyCap, businessCap,
    /// firstClassCap]` rows. The cost column may be currency-prefixed ("£7").
    pub fn load<R: Read>(reader: R) -> Result<Vec<Aeroplane>, LoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut aeroplanes = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            let row = i + 2;

            let model = field(&record, 0, "model", row)?.to_string();
            let running_cost_per_seat_per_100km = currency_f64(
                field(&record, 1, "costPerSeatPer100km", row)?,
                "costPerSeatPer100km",
                row,
            )?;
            let max_flight_range =
                non_negative_f64(field(&record, 2, "maxRange", row)?, "maxRange", row)?;
            let economy_seats = parse_u32(field(&record, 3, "economyCap", row)?, "economyCap", row)?;
            let business_seats =
                parse_u32(field(&record, 4, "businessCap", row)?, "businessCap", row)?;
            let first_class_seats =
                parse_u32(field(&record, 5, "firstClassCap", row)?, "firstClassCap", row)?;

            aeroplanes.push(Aeroplane {
                model,
                running_cost_per_seat_per_100km,
                max_flight_range,
                economy_seats,
                business_seats,
                first_class_seats,
            });
        }

        debug!(
            "Loaded aeroplane reference data — count={}",
            aeroplanes.len()
        );
        Ok(aeroplanes)
    }
}
