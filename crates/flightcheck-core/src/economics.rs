use serde::Serialize;

use crate::aeroplane::Aeroplane;
use crate::flight::{CabinCounts, CabinPrices};

/// Financial figures for one feasible flight, all rounded to 2 decimal
/// places. The aircraft model is echoed for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub aircraft_model: String,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub profit_or_loss: f64,
}

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes revenue, cost and profit/loss for a flight the validator has
/// already passed. The per-seat cost is rounded before scaling by the seat
/// count; the final cent value depends on this ordering.
pub fn compute_financials(
    aeroplane: &Aeroplane,
    distance: f64,
    bookings: CabinCounts,
    prices: CabinPrices,
) -> FinancialSummary {
    let total_revenue = round2(
        bookings.economy as f64 * prices.economy
            + bookings.business as f64 * prices.business
            + bookings.first_class as f64 * prices.first_class,
    );

    let cost_per_seat = round2(aeroplane.running_cost_per_seat_per_100km * (distance / 100.0));
    let total_cost = round2(cost_per_seat * bookings.total() as f64);

    FinancialSummary {
        aircraft_model: aeroplane.model.clone(),
        total_revenue,
        total_cost,
        profit_or_loss: round2(total_revenue - total_cost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(cost: f64) -> Aeroplane {
        Aeroplane {
            model: "A380".into(),
            running_cost_per_seat_per_100km: cost,
            max_flight_range: 6000.0,
            economy_seats: 300,
            business_seats: 50,
            first_class_seats: 10,
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(19.147), 19.15);
        assert_eq!(round2(19.144), 19.14);
        assert_eq!(round2(-0.005), -0.01);
        assert_eq!(round2(30500.0), 30500.0);
    }

    #[test]
    fn test_per_seat_cost_rounded_before_scaling() {
        // 7.77 * (123 / 100) = 9.5571 → 9.56 per seat → 956.00 for 100 seats.
        // Rounding after scaling would give 955.71 instead.
        let fin = compute_financials(
            &plane(7.77),
            123.0,
            CabinCounts {
                economy: 100,
                business: 0,
                first_class: 0,
            },
            CabinPrices {
                economy: 10.0,
                business: 0.0,
                first_class: 0.0,
            },
        );
        assert_eq!(fin.total_cost, 956.0);
        assert_eq!(fin.total_revenue, 1000.0);
        assert_eq!(fin.profit_or_loss, 44.0);
    }

    #[test]
    fn test_empty_flight_costs_nothing() {
        let fin = compute_financials(
            &plane(7.0),
            5376.0,
            CabinCounts {
                economy: 0,
                business: 0,
                first_class: 0,
            },
            CabinPrices {
                economy: 100.0,
                business: 250.0,
                first_class: 600.0,
            },
        );
        assert_eq!(fin.total_revenue, 0.0);
        assert_eq!(fin.total_cost, 0.0);
        assert_eq!(fin.profit_or_loss, 0.0);
    }

    #[test]
    fn test_idempotent_bitwise() {
        let args = (
            plane(7.0),
            5376.0,
            CabinCounts {
                economy: 200,
                business: 30,
                first_class: 5,
            },
            CabinPrices {
                economy: 100.0,
                business: 250.0,
                first_class: 600.0,
            },
        );
        let first = compute_financials(&args.0, args.1, args.2, args.3);
        let second = compute_financials(&args.0, args.1, args.2, args.3);

        assert_eq!(first.total_revenue.to_bits(), second.total_revenue.to_bits());
        assert_eq!(first.total_cost.to_bits(), second.total_cost.to_bits());
        assert_eq!(
            first.profit_or_loss.to_bits(),
            second.profit_or_loss.to_bits()
        );
    }
}
