use log::{debug, warn};
use serde::Serialize;

use crate::aeroplane::Aeroplane;
use crate::airport::Airport;
use crate::economics::{compute_financials, FinancialSummary};
use crate::flight::{CabinCounts, FlightRequest};
use crate::validator::{FlightValidator, ValidationError, ValidationOutcome};

/// Outcome of checking one batch row, in input order. Serialisable for
/// machine-readable report output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightReport {
    pub flight: FlightRequest,
    pub outcome: ValidationOutcome,
    pub financials: Option<FinancialSummary>,
}

/// Validates every flight in the batch, preserving input order, and computes
/// financials for valid rows that carry fares.
pub fn check_flights(
    flights: &[FlightRequest],
    airports: &[Airport],
    aeroplanes: &[Aeroplane],
) -> Vec<FlightReport> {
    let mut reports = Vec::with_capacity(flights.len());
    for flight in flights {
        let outcome = FlightValidator::validate(flight, airports, aeroplanes);

        let financials = match (&outcome, flight.prices) {
            (ValidationOutcome::Valid, Some(prices)) => {
                // Both lookups already succeeded during validation.
                let airport = airports.iter().find(|a| a.code == flight.destination_code);
                let aeroplane = aeroplanes.iter().find(|a| a.model == flight.aircraft_model);
                match (airport, aeroplane) {
                    (Some(airport), Some(aeroplane)) => Some(compute_financials(
                        aeroplane,
                        airport.distance_from(flight.origin),
                        flight.bookings,
                        prices,
                    )),
                    _ => None,
                }
            }
            _ => None,
        };

        reports.push(FlightReport {
            flight: flight.clone(),
            outcome,
            financials,
        });
    }

    let invalid = reports.iter().filter(|r| !r.outcome.is_valid()).count();
    debug!(
        "Checked flight batch — total={} invalid={}",
        reports.len(),
        invalid
    );
    reports
}

/// One error block per infeasible flight:
/// `Flight from A to XYZ using A380:\nError: Invalid airport code (XYZ)\n`
pub fn format_error(flight: &FlightRequest, error: &ValidationError) -> String {
    format!(
        "Flight from {} to {} using {}:\nError: {}\n",
        flight.origin, flight.destination_code, flight.aircraft_model, error
    )
}

/// One summary block per feasible, costed flight. Monetary values carry a
/// currency prefix and exactly 2 decimal places.
pub fn format_summary(
    airport: &Airport,
    bookings: CabinCounts,
    financials: &FinancialSummary,
) -> String {
    format!(
        "Flight to {} ({}) using {}:\n\
         Economy seats booked: {}\n\
         Business seats booked: {}\n\
         First-class seats booked: {}\n\
         Total revenue: £{:.2}\n\
         Total cost: £{:.2}\n\
         Profit/loss: £{:.2}\n",
        airport.name,
        airport.code,
        financials.aircraft_model,
        bookings.economy,
        bookings.business,
        bookings.first_class,
        financials.total_revenue,
        financials.total_cost,
        financials.profit_or_loss,
    )
}

/// Renders the infeasible flights only, in input order, blocks separated by a
/// blank line.
pub fn render_invalid_report(reports: &[FlightReport]) -> String {
    let blocks: Vec<String> = reports
        .iter()
        .filter_map(|report| {
            report
                .outcome
                .error()
                .map(|error| format_error(&report.flight, error))
        })
        .collect();
    blocks.join("\n")
}

/// Renders every flight in input order: a financial summary for feasible
/// rows, an error block for infeasible ones.
pub fn render_profit_report(reports: &[FlightReport], airports: &[Airport]) -> String {
    let mut blocks = Vec::new();
    for report in reports {
        match &report.outcome {
            ValidationOutcome::Invalid(error) => {
                blocks.push(format_error(&report.flight, error));
            }
            ValidationOutcome::Valid => {
                let airport = airports
                    .iter()
                    .find(|a| a.code == report.flight.destination_code);
                match (airport, &report.financials) {
                    (Some(airport), Some(financials)) => {
                        blocks.push(format_summary(airport, report.flight.bookings, financials));
                    }
                    _ => warn!(
                        "Valid flight without fare data skipped in profit report — destination={} aircraft={}",
                        report.flight.destination_code, report.flight.aircraft_model
                    ),
                }
            }
        }
    }
    blocks.join("\n")
}
