// SPDX-License-Identifier: MIT
// Copyright (c) 2026 flightcheck contributors

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::aeroplane::Aeroplane;
use crate::airport::Airport;
use crate::flight::FlightRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CabinClass {
    Economy,
    Business,
    FirstClass,
}

impl CabinClass {
    pub fn label(self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::Business => "business",
            CabinClass::FirstClass => "first-class",
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a proposed flight is not flyable. These are expected, reportable data
/// outcomes, not process failures.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum ValidationError {
    #[error("Invalid airport code ({0})")]
    InvalidAirportCode(String),
    #[error("Invalid aircraft code ({0})")]
    InvalidAircraftModel(String),
    #[error("{model} doesn't have the range to fly to {destination}")]
    InsufficientRange { model: String, destination: String },
    #[error("Too many {cabin} seats booked ({booked} > {capacity})")]
    CabinOvercapacity {
        cabin: CabinClass,
        booked: i64,
        capacity: u32,
    },
    #[error("Too many total seats booked ({booked} > {capacity})")]
    TotalOvercapacity { booked: i64, capacity: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ValidationOutcome {
    Valid,
    Invalid(ValidationError),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(error) => Some(error),
        }
    }
}

pub struct FlightValidator;

impl FlightValidator {
    /// Decides whether a flight is flyable. Checks run in a fixed order and
    /// the first failure wins; equality at a bound (distance == range,
    /// booked == capacity) passes.
    pub fn validate(
        flight: &FlightRequest,
        airports: &[Airport],
        aeroplanes: &[Aeroplane],
    ) -> ValidationOutcome {
        use ValidationError::*;

        let Some(airport) = airports
            .iter()
            .find(|a| a.code == flight.destination_code)
        else {
            return ValidationOutcome::Invalid(InvalidAirportCode(flight.destination_code.clone()));
        };

        let Some(aeroplane) = aeroplanes
            .iter()
            .find(|a| a.model == flight.aircraft_model)
        else {
            return ValidationOutcome::Invalid(InvalidAircraftModel(flight.aircraft_model.clone()));
        };

        let distance = airport.distance_from(flight.origin);
        if distance > aeroplane.max_flight_range {
            return ValidationOutcome::Invalid(InsufficientRange {
                model: aeroplane.model.clone(),
                destination: airport.name.clone(),
            });
        }

        let bookings = flight.bookings;
        let cabins = [
            (CabinClass::Economy, bookings.economy, aeroplane.economy_seats),
            (
                CabinClass::Business,
                bookings.business,
                aeroplane.business_seats,
            ),
            (
                CabinClass::FirstClass,
                bookings.first_class,
                aeroplane.first_class_seats,
            ),
        ];
        for (cabin, booked, capacity) in cabins {
            if booked > i64::from(capacity) {
                return ValidationOutcome::Invalid(CabinOvercapacity {
                    cabin,
                    booked,
                    capacity,
                });
            }
        }

        // Shadowed by the per-cabin checks whenever a single cabin overflows,
        // but the check ordering is an observable contract and stays.
        let total_booked = bookings.total();
        let total_capacity = aeroplane.total_seats();
        if total_booked > i64::from(total_capacity) {
            return ValidationOutcome::Invalid(TotalOvercapacity {
                booked: total_booked,
                capacity: total_capacity,
            });
        }

        ValidationOutcome::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airport::Origin;
    use crate::flight::CabinCounts;

    fn jfk() -> Airport {
        Airport {
            code: "JFK".into(),
            name: "John F. Kennedy International".into(),
            distance_from_origin_a: 5376.0,
            distance_from_origin_b: 5576.0,
        }
    }

    fn a380() -> Aeroplane {
        Aeroplane {
            model: "A380".into(),
            running_cost_per_seat_per_100km: 7.0,
            max_flight_range: 6000.0,
            economy_seats: 300,
            business_seats: 50,
            first_class_seats: 10,
        }
    }

    fn flight(bookings: CabinCounts) -> FlightRequest {
        FlightRequest {
            origin: Origin::A,
            destination_code: "JFK".into(),
            aircraft_model: "A380".into(),
            bookings,
            prices: None,
        }
    }

    #[test]
    fn test_valid_flight() {
        let outcome = FlightValidator::validate(
            &flight(CabinCounts {
                economy: 200,
                business: 30,
                first_class: 5,
            }),
            &[jfk()],
            &[a380()],
        );
        assert_eq!(outcome, ValidationOutcome::Valid);
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_booked_equal_to_capacity_passes() {
        let outcome = FlightValidator::validate(
            &flight(CabinCounts {
                economy: 300,
                business: 50,
                first_class: 10,
            }),
            &[jfk()],
            &[a380()],
        );
        assert_eq!(outcome, ValidationOutcome::Valid);
    }

    #[test]
    fn test_duplicate_codes_resolve_first_occurrence() {
        let mut shadow = jfk();
        shadow.name = "Shadow JFK".into();
        shadow.distance_from_origin_a = 99999.0;

        let outcome =
            FlightValidator::validate(
                &flight(CabinCounts {
                    economy: 1,
                    business: 0,
                    first_class: 0,
                }),
                &[jfk(), shadow],
                &[a380()],
            );
        // First occurrence wins, so the in-range JFK record is used.
        assert_eq!(outcome, ValidationOutcome::Valid);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::InvalidAirportCode("XYZ".into()).to_string(),
            "Invalid airport code (XYZ)"
        );
        assert_eq!(
            ValidationError::InvalidAircraftModel("A390".into()).to_string(),
            "Invalid aircraft code (A390)"
        );
        assert_eq!(
            ValidationError::InsufficientRange {
                model: "A380".into(),
                destination: "Los Angeles International".into(),
            }
            .to_string(),
            "A380 doesn't have the range to fly to Los Angeles International"
        );
        assert_eq!(
            ValidationError::CabinOvercapacity {
                cabin: CabinClass::FirstClass,
                booked: 12,
                capacity: 10,
            }
            .to_string(),
            "Too many first-class seats booked (12 > 10)"
        );
        assert_eq!(
            ValidationError::TotalOvercapacity {
                booked: 400,
                capacity: 360,
            }
            .to_string(),
            "Too many total seats booked (400 > 360)"
        );
    }
}
