// ABOUTME: Fixed constants of the recommendation scoring model
// ABOUTME: Composite weights, target shares, pool bounds, and default intake targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

//! Scoring constants
//!
//! These values define the scoring model itself and are not runtime
//! configuration. Changing any of them changes which products are recommended.

/// Weights of the composite score
///
/// Two regimes exist: one when a distance is known and one when it is not.
/// Each regime sums to 1.0.
pub mod weights {
    /// Nutrition match weight when a distance is known
    pub const LOCATED_NUTRITION: f64 = 0.5;
    /// Proximity weight, applied to `1 / (1 + km)`
    pub const LOCATED_PROXIMITY: f64 = 0.25;
    /// Price weight when a distance is known
    pub const LOCATED_PRICE: f64 = 0.25;
    /// Nutrition match weight without distance
    pub const UNLOCATED_NUTRITION: f64 = 0.7;
    /// Price weight without distance
    pub const UNLOCATED_PRICE: f64 = 0.3;
}

/// Share of a daily target a scored unit is expected to cover
pub mod target_shares {
    /// A single product is roughly a third of a day's intake
    pub const SINGLE_PRODUCT: f64 = 0.33;
    /// A meal set approximates a full day's intake
    pub const MEAL_SET: f64 = 1.0;
}

/// Bounds on how many items each stage keeps
pub mod pool_limits {
    /// Individual products returned to the buyer
    pub const INDIVIDUAL_RECOMMENDATIONS: usize = 3;
    /// Top-ranked products fed into meal-set search
    pub const CANDIDATE_POOL_SIZE: usize = 10;
    /// Products per meal set
    pub const MEAL_SET_SIZE: usize = 3;
    /// Meal sets returned to the buyer
    pub const MEAL_SET_RECOMMENDATIONS: usize = 2;
}

/// Decimal places kept on reported distances and prices
pub const REPORTED_DECIMALS: i32 = 2;

/// Round `value` to `decimals` places, half away from zero
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_regimes_sum_to_one() {
        let located = weights::LOCATED_NUTRITION + weights::LOCATED_PROXIMITY + weights::LOCATED_PRICE;
        let unlocated = weights::UNLOCATED_NUTRITION + weights::UNLOCATED_PRICE;
        assert!((located - 1.0).abs() < 1e-12);
        assert!((unlocated - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_round_to_two_places() {
        assert!((round_to(1.234_56, 2) - 1.23).abs() < 1e-12);
        assert!((round_to(2.675_1, 2) - 2.68).abs() < 1e-12);
    }
}
