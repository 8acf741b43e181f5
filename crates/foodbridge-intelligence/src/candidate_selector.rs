// ABOUTME: Scores the whole product pool and ranks it by composite score
// ABOUTME: Computes the shared price basis once and exposes top-N views of the ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

use crate::geo::{DistanceEvaluator, HaversineDistance};
use crate::product_scorer::{ProductScorer, ScoredProduct, ScoringContext};
use crate::scoring_constants::pool_limits;
use foodbridge_core::errors::RecommendationError;
use foodbridge_core::models::{GeoPoint, NutritionTargets, ProductRecord};

/// Highest effective price among listings that carry nutrition facts
///
/// Listings without nutrition never reach scoring, so they never set the basis.
#[must_use]
pub fn max_eligible_price(products: &[ProductRecord]) -> f64 {
    products
        .iter()
        .filter(|product| product.nutrition.is_some())
        .map(ProductRecord::effective_price)
        .fold(0.0, f64::max)
}

/// Listings ranked by descending score
///
/// Equal scores keep the order in which the listings were supplied.
#[derive(Debug, Clone, Default)]
pub struct RankedCandidates<'a> {
    ranked: Vec<ScoredProduct<'a>>,
}

impl<'a> RankedCandidates<'a> {
    /// Sort scored listings into a ranking (stable on ties)
    #[must_use]
    pub fn from_scored(mut scored: Vec<ScoredProduct<'a>>) -> Self {
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        Self { ranked: scored }
    }

    /// The full ranking
    #[must_use]
    pub fn ranked(&self) -> &[ScoredProduct<'a>] {
        &self.ranked
    }

    /// Top listings recommended on their own
    #[must_use]
    pub fn individual(&self) -> &[ScoredProduct<'a>] {
        self.top(pool_limits::INDIVIDUAL_RECOMMENDATIONS)
    }

    /// Top listings fed to meal-set search
    #[must_use]
    pub fn candidate_pool(&self) -> &[ScoredProduct<'a>] {
        self.top(pool_limits::CANDIDATE_POOL_SIZE)
    }

    /// The first `count` listings, or all of them when fewer exist
    #[must_use]
    pub fn top(&self, count: usize) -> &[ScoredProduct<'a>] {
        &self.ranked[..count.min(self.ranked.len())]
    }

    /// Highest effective price in the ranking
    #[must_use]
    pub fn max_effective_price(&self) -> f64 {
        self.ranked
            .iter()
            .map(|scored| scored.effective_price)
            .fold(0.0, f64::max)
    }

    /// Number of ranked listings
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Whether no listing survived scoring
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Filters, scores, and ranks a product pool
#[derive(Debug, Clone, Default)]
pub struct CandidateSelector<D = HaversineDistance> {
    scorer: ProductScorer<D>,
}

impl CandidateSelector {
    /// Create a selector using haversine distances
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scorer: ProductScorer::new(),
        }
    }
}

impl<D: DistanceEvaluator> CandidateSelector<D> {
    /// Create a selector around a configured scorer
    #[must_use]
    pub const fn with_scorer(scorer: ProductScorer<D>) -> Self {
        Self { scorer }
    }

    /// Score every listing and rank the survivors
    ///
    /// The price basis is the supplied ceiling, or else the highest effective
    /// price among listings with nutrition facts; it is computed once and
    /// shared by every listing. Excluded listings are dropped, not scored as zero.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendationError::NoProductsAvailable`] for an empty pool and
    /// propagates [`RecommendationError::MalformedNutritionData`] from scoring
    pub fn select_and_rank<'a>(
        &self,
        products: &'a [ProductRecord],
        targets: NutritionTargets,
        buyer_position: Option<GeoPoint>,
        price_ceiling: Option<f64>,
    ) -> Result<RankedCandidates<'a>, RecommendationError> {
        if products.is_empty() {
            return Err(RecommendationError::NoProductsAvailable);
        }

        let context = ScoringContext {
            targets,
            buyer_position,
            price_ceiling,
            normalization_ceiling: price_ceiling.unwrap_or_else(|| max_eligible_price(products)),
        };

        let mut scored = Vec::with_capacity(products.len());
        for product in products {
            if let Some(candidate) = self.scorer.score(product, &context)? {
                scored.push(candidate);
            }
        }

        tracing::debug!(
            pool.size = products.len(),
            candidates.count = scored.len(),
            price.basis = context.normalization_ceiling,
            "Scored product pool"
        );

        Ok(RankedCandidates::from_scored(scored))
    }
}
