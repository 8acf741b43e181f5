// ABOUTME: Scores one listing against a buyer's targets, price ceiling, and position
// ABOUTME: Nutrition match, price score, and the two-regime composite weighting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

//! Product scorer
//!
//! A product scores well when each tracked nutrient covers about a third of
//! the buyer's daily target, when it is cheap relative to the request's price
//! basis, and (when a distance is known) when it is close by.

use crate::geo::{DistanceEvaluator, HaversineDistance};
use crate::scoring_constants::{round_to, target_shares, weights, REPORTED_DECIMALS};
use foodbridge_core::errors::RecommendationError;
use foodbridge_core::models::{
    GeoPoint, Nutrient, NutritionFacts, NutritionTargets, ProductRecord,
};
use serde::Serialize;

/// Inputs shared by every product scored in one request
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext {
    /// Buyer's daily targets
    pub targets: NutritionTargets,
    /// Buyer's position, when known
    pub buyer_position: Option<GeoPoint>,
    /// Listings above this effective price are excluded
    pub price_ceiling: Option<f64>,
    /// Denominator of the price score, identical for the whole pool
    pub normalization_ceiling: f64,
}

/// A listing with its per-request score
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoredProduct<'a> {
    /// The scored listing
    pub product: &'a ProductRecord,
    /// Validated nutrition facts of the listing
    #[serde(skip)]
    pub nutrition: NutritionFacts,
    /// Original price times discount rate
    pub effective_price: f64,
    /// Distance from the buyer in km, rounded to two decimals
    pub distance_km: Option<f64>,
    /// Composite score, higher is better
    pub score: f64,
}

/// Mean absolute deviation of each nutrient's target ratio from `share`, subtracted from 1
///
/// A perfect match scores 1.0; both shortfall and excess lower it linearly.
#[must_use]
pub fn nutrition_match(facts: &NutritionFacts, targets: &NutritionTargets, share: f64) -> f64 {
    let total_deviation: f64 = Nutrient::ALL
        .iter()
        .map(|&nutrient| (facts.value(nutrient) / targets.value(nutrient) - share).abs())
        .sum();

    1.0 - total_deviation / Nutrient::ALL.len() as f64
}

/// `1 - price / basis`; a non-positive basis means every eligible price is zero
#[must_use]
pub fn price_score(price: f64, basis: f64) -> f64 {
    if basis > 0.0 {
        1.0 - price / basis
    } else {
        1.0
    }
}

/// Weighted blend of the sub-scores
///
/// With a known distance the proximity term `1 / (1 + km)` takes a quarter of
/// the weight; without one, nutrition and price share the whole score.
#[must_use]
pub fn composite_score(nutrition: f64, price: f64, distance_km: Option<f64>) -> f64 {
    match distance_km {
        Some(km) => {
            weights::LOCATED_NUTRITION * nutrition
                + weights::LOCATED_PROXIMITY * (1.0 / (1.0 + km))
                + weights::LOCATED_PRICE * price
        }
        None => weights::UNLOCATED_NUTRITION * nutrition + weights::UNLOCATED_PRICE * price,
    }
}

/// Scores individual listings
#[derive(Debug, Clone, Default)]
pub struct ProductScorer<D = HaversineDistance> {
    distance: D,
}

impl ProductScorer {
    /// Create a scorer using haversine distances
    #[must_use]
    pub const fn new() -> Self {
        Self {
            distance: HaversineDistance,
        }
    }
}

impl<D: DistanceEvaluator> ProductScorer<D> {
    /// Create a scorer using a custom distance evaluator
    #[must_use]
    pub const fn with_distance(distance: D) -> Self {
        Self { distance }
    }

    /// Score one listing
    ///
    /// Returns `Ok(None)` when the listing is excluded: it has no nutrition
    /// facts, or its effective price is above the context's ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendationError::MalformedNutritionData`] when a nutrient
    /// value that reaches scoring is not a finite, non-negative number
    pub fn score<'a>(
        &self,
        product: &'a ProductRecord,
        context: &ScoringContext,
    ) -> Result<Option<ScoredProduct<'a>>, RecommendationError> {
        let Some(nutrition) = product.nutrition else {
            return Ok(None);
        };

        let distance_km = self
            .distance
            .distance_km(context.buyer_position, product.position());

        let effective_price = product.effective_price();
        if context
            .price_ceiling
            .is_some_and(|ceiling| effective_price > ceiling)
        {
            return Ok(None);
        }

        nutrition.validate().map_err(|nutrient| {
            tracing::warn!(
                product.id = %product.id,
                nutrient = %nutrient,
                "Listing has malformed nutrition data"
            );
            RecommendationError::MalformedNutritionData {
                product_id: product.id,
                nutrient,
            }
        })?;

        let nutrition_score =
            nutrition_match(&nutrition, &context.targets, target_shares::SINGLE_PRODUCT);
        let price = price_score(effective_price, context.normalization_ceiling);
        let score = composite_score(nutrition_score, price, distance_km);

        Ok(Some(ScoredProduct {
            product,
            nutrition,
            effective_price,
            distance_km: distance_km.map(|km| round_to(km, REPORTED_DECIMALS)),
            score,
        }))
    }
}
