//! Trip cost splitting.
//!
//! Pure arithmetic over validated inputs; no I/O and no hidden state, so the
//! same request always produces the same breakdown.

use serde::{Deserialize, Serialize};

/// Validated inputs for one calculation.
///
/// The validator guarantees every number is positive and that
/// `passenger_count >= 1`, which keeps the division below safe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripCostRequest {
    /// Driving distance in kilometers.
    pub trip_length_km: f64,
    /// Currency units per liter.
    pub fuel_price_unit: f64,
    /// Liters per 100 km.
    pub consumption_rate: f64,
    /// People sharing the cost.
    pub passenger_count: u32,
}

/// Cost breakdown for one trip, with the inputs echoed for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripCostResult {
    pub total_cost: f64,
    pub cost_per_person: f64,
    pub details: TripCostRequest,
}

/// Split the fuel cost of a trip between its passengers.
///
/// `total = (km / 100) * l_per_100km * price_per_l`, divided evenly.
pub fn split_cost(request: TripCostRequest) -> TripCostResult {
    let total_cost =
        (request.trip_length_km / 100.0) * request.consumption_rate * request.fuel_price_unit;
    let cost_per_person = total_cost / f64::from(request.passenger_count);

    TripCostResult {
        total_cost,
        cost_per_person,
        details: request,
    }
}

/// Round to the given number of decimals for display.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn request(km: f64, price: f64, consumption: f64, persons: u32) -> TripCostRequest {
        TripCostRequest {
            trip_length_km: km,
            fuel_price_unit: price,
            consumption_rate: consumption,
            passenger_count: persons,
        }
    }

    #[test]
    fn test_split_cost_typical_trip() {
        let result = split_cost(request(100.0, 1.90, 7.1, 2));

        assert!((result.total_cost - 13.49).abs() < EPSILON);
        assert!((result.cost_per_person - 6.745).abs() < EPSILON);
    }

    #[test]
    fn test_split_cost_minimum_boundary() {
        let result = split_cost(request(0.1, 0.1, 0.1, 1));

        assert!((result.total_cost - 0.0001).abs() < EPSILON);
        assert!((result.cost_per_person - 0.0001).abs() < EPSILON);
    }

    #[test]
    fn test_single_passenger_pays_everything() {
        let result = split_cost(request(250.0, 1.75, 6.5, 1));

        assert!((result.cost_per_person - result.total_cost).abs() < EPSILON);
    }

    #[test]
    fn test_details_echo_inputs() {
        let req = request(42.0, 2.05, 8.2, 4);
        let result = split_cost(req);

        assert_eq!(result.details, req);
    }

    #[test]
    fn test_idempotent() {
        let req = request(123.4, 1.89, 7.3, 3);

        assert_eq!(split_cost(req), split_cost(req));
    }

    #[test]
    fn test_per_person_times_count_equals_total() {
        let result = split_cost(request(300.0, 1.95, 9.0, 5));

        assert!((result.cost_per_person * 5.0 - result.total_cost).abs() < EPSILON);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(13.489999999, 2), 13.49);
        assert_eq!(round_to(6.746, 2), 6.75);
        assert_eq!(round_to(185.3333, 0), 185.0);
    }
}
