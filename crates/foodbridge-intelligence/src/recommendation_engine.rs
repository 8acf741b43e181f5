// ABOUTME: End-to-end recommendation pass for one buyer and one product pool
// ABOUTME: Derives targets, ranks listings, searches meal sets, and bundles the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

use crate::candidate_selector::CandidateSelector;
use crate::geo::{DistanceEvaluator, HaversineDistance};
use crate::meal_sets::{MealSet, MealSetSearch};
use crate::nutrition_profiler::derive_targets;
use crate::product_scorer::{ProductScorer, ScoredProduct};
use foodbridge_core::errors::RecommendationError;
use foodbridge_core::models::{BuyerContext, NutritionTargets, ProductRecord};
use serde::Serialize;

/// Everything recommended to one buyer in one request
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResult<'a> {
    /// Up to three best individual listings
    pub individual: Vec<ScoredProduct<'a>>,
    /// Up to two best meal sets
    pub sets: Vec<MealSet<'a>>,
    /// Daily targets the scores were computed against
    pub targets: NutritionTargets,
}

/// Composes target derivation, ranking, and meal-set search
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine<D = HaversineDistance> {
    selector: CandidateSelector<D>,
    meal_sets: MealSetSearch,
}

impl RecommendationEngine {
    /// Create an engine with haversine distances and the default bounds
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(ProductScorer::new(), MealSetSearch::default())
    }
}

impl<D: DistanceEvaluator> RecommendationEngine<D> {
    /// Create an engine from a configured scorer and meal-set search
    #[must_use]
    pub const fn with_parts(scorer: ProductScorer<D>, meal_sets: MealSetSearch) -> Self {
        Self {
            selector: CandidateSelector::with_scorer(scorer),
            meal_sets,
        }
    }

    /// Recommend listings and meal sets for one buyer
    ///
    /// A non-positive or non-finite `price_ceiling` is treated as no ceiling.
    /// The pool is only read; nothing is cached between calls.
    ///
    /// # Errors
    ///
    /// - [`RecommendationError::IneligibleBuyer`] when the context has no consumer profile
    /// - [`RecommendationError::NoProductsAvailable`] when the pool is empty
    /// - [`RecommendationError::MalformedNutritionData`] when a listing's nutrition is corrupt
    pub fn recommend<'a>(
        &self,
        buyer: &BuyerContext,
        products: &'a [ProductRecord],
        price_ceiling: Option<f64>,
    ) -> Result<RecommendationResult<'a>, RecommendationError> {
        let profile = buyer
            .consumer_profile()
            .ok_or(RecommendationError::IneligibleBuyer)?;

        if products.is_empty() {
            return Err(RecommendationError::NoProductsAvailable);
        }

        let price_ceiling = price_ceiling.filter(|ceiling| ceiling.is_finite() && *ceiling > 0.0);
        let targets = derive_targets(profile.age, profile.sex);
        tracing::debug!(
            buyer.age = ?profile.age,
            buyer.sex = ?profile.sex,
            buyer.located = profile.position.is_some(),
            targets.calories = targets.calories,
            "Derived nutrition targets"
        );

        let ranked =
            self.selector
                .select_and_rank(products, targets, profile.position, price_ceiling)?;
        let sets = self.meal_sets.build_sets(&ranked, &targets, price_ceiling);

        tracing::info!(
            pool.size = products.len(),
            candidates.count = ranked.len(),
            sets.count = sets.len(),
            "Built recommendations"
        );

        Ok(RecommendationResult {
            individual: ranked.individual().to_vec(),
            sets,
            targets,
        })
    }
}
