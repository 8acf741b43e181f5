// ABOUTME: Recommendation scoring engine for discounted near-expiry food
// ABOUTME: Personal nutrition targets, product scoring, ranking, and meal-set search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

#![deny(unsafe_code)]

//! # Foodbridge Intelligence
//!
//! Scores listed products against a buyer's daily nutrition needs, price and
//! distance, then searches three-item meal sets that approximate a full day of
//! intake. Everything here is a synchronous, read-only computation over
//! records the caller has already fetched.
//!
//! Pipeline:
//!
//! 1. [`nutrition_profiler::derive_targets`] turns age and sex into daily targets
//! 2. [`candidate_selector::CandidateSelector`] scores and ranks the whole pool
//! 3. [`meal_sets::MealSetSearch`] combines the top candidates into meal sets
//! 4. [`recommendation_engine::RecommendationEngine`] ties the stages together

/// Fixed weights, target shares, and pool bounds used by scoring
pub mod scoring_constants;

/// Daily nutrition targets by sex and age bracket
pub mod nutrition_profiler;

/// Great-circle distance between coordinates
pub mod geo;

/// Per-product scoring against one buyer
pub mod product_scorer;

/// Pool-wide scoring and ranking
pub mod candidate_selector;

/// Combinatorial meal-set search over the top candidates
pub mod meal_sets;

/// End-to-end recommendation orchestration
pub mod recommendation_engine;

pub use candidate_selector::{CandidateSelector, RankedCandidates};
pub use geo::{DistanceEvaluator, HaversineDistance};
pub use meal_sets::{MealSet, MealSetSearch};
pub use nutrition_profiler::{derive_targets, AgeBracket};
pub use product_scorer::{ProductScorer, ScoredProduct, ScoringContext};
pub use recommendation_engine::{RecommendationEngine, RecommendationResult};
