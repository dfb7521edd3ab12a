use gassplit::cost::{round_to, split_cost, TripCostRequest};

const EPSILON: f64 = 1e-9;

#[test]
fn test_hundred_km_trip_for_two() {
    let result = split_cost(TripCostRequest {
        trip_length_km: 100.0,
        fuel_price_unit: 1.90,
        consumption_rate: 7.1,
        passenger_count: 2,
    });

    assert!((result.total_cost - 13.49).abs() < EPSILON);
    assert!((result.cost_per_person - 6.745).abs() < EPSILON);
}

#[test]
fn test_everything_at_the_minimum() {
    let result = split_cost(TripCostRequest {
        trip_length_km: 0.1,
        fuel_price_unit: 0.1,
        consumption_rate: 0.1,
        passenger_count: 1,
    });

    assert!((result.total_cost - 0.0001).abs() < EPSILON);
    assert!((result.cost_per_person - 0.0001).abs() < EPSILON);
}

#[test]
fn test_formula_is_exact() {
    let request = TripCostRequest {
        trip_length_km: 437.5,
        fuel_price_unit: 2.04,
        consumption_rate: 5.9,
        passenger_count: 3,
    };
    let result = split_cost(request);

    let expected_total = (437.5 / 100.0) * 5.9 * 2.04;
    assert_eq!(result.total_cost, expected_total);
    assert_eq!(result.cost_per_person, expected_total / 3.0);
}

#[test]
fn test_result_is_pure_and_repeatable() {
    let request = TripCostRequest {
        trip_length_km: 88.8,
        fuel_price_unit: 1.77,
        consumption_rate: 6.6,
        passenger_count: 4,
    };

    assert_eq!(split_cost(request), split_cost(request));
}

#[test]
fn test_large_values_are_not_clamped() {
    let result = split_cost(TripCostRequest {
        trip_length_km: 1.0e9,
        fuel_price_unit: 100.0,
        consumption_rate: 50.0,
        passenger_count: 1,
    });

    assert!(result.total_cost.is_finite());
    assert!(result.total_cost > 1.0e10);
}

#[test]
fn test_round_to_display_precision() {
    assert_eq!(round_to(185.432, 2), 185.43);
    assert_eq!(round_to(185.437, 2), 185.44);
}
