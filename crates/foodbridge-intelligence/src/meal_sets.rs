// ABOUTME: Combinatorial meal-set search over the top-ranked candidates
// ABOUTME: Enumerates fixed-size combinations, scores aggregate nutrition, keeps the best sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

//! Meal-set search
//!
//! A meal set is a group of distinct products meant to cover a whole day of
//! intake together. The search only ever sees the bounded candidate pool
//! (10 products by default), so every combination is evaluated exhaustively:
//! C(10, 3) = 120 sets at most.

use crate::candidate_selector::RankedCandidates;
use crate::product_scorer::{composite_score, nutrition_match, price_score, ScoredProduct};
use crate::scoring_constants::{pool_limits, round_to, target_shares, REPORTED_DECIMALS};
use foodbridge_core::models::{NutritionFacts, NutritionTargets};
use serde::Serialize;

/// A scored combination of distinct products
#[derive(Debug, Clone, Serialize)]
pub struct MealSet<'a> {
    /// Member products, in ranking order
    pub items: Vec<ScoredProduct<'a>>,
    /// Sum of the tracked nutrients across members
    pub total_nutrition: NutritionFacts,
    /// Sum of member effective prices, rounded to two decimals
    pub total_price: f64,
    /// Mean member distance in km (unknown distances count as 0), rounded to two decimals
    pub avg_distance_km: f64,
    /// Composite set score, higher is better
    pub score: f64,
}

/// Lexicographic k-combinations of `0..n`
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    /// All `k`-element index combinations drawn from `0..n`
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            exhausted: k == 0 || k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.indices.clone();

        // Advance the rightmost index that still has room, then reset the tail
        let k = self.indices.len();
        match (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) {
            Some(pivot) => {
                self.indices[pivot] += 1;
                for i in pivot + 1..k {
                    self.indices[i] = self.indices[i - 1] + 1;
                }
            }
            None => self.exhausted = true,
        }

        Some(current)
    }
}

/// Searches meal sets among the top-ranked candidates
#[derive(Debug, Clone, Copy)]
pub struct MealSetSearch {
    pool_size: usize,
    group_size: usize,
    max_sets: usize,
}

impl Default for MealSetSearch {
    fn default() -> Self {
        Self {
            pool_size: pool_limits::CANDIDATE_POOL_SIZE,
            group_size: pool_limits::MEAL_SET_SIZE,
            max_sets: pool_limits::MEAL_SET_RECOMMENDATIONS,
        }
    }
}

impl MealSetSearch {
    /// Search with custom bounds
    #[must_use]
    pub const fn new(pool_size: usize, group_size: usize, max_sets: usize) -> Self {
        Self {
            pool_size,
            group_size,
            max_sets,
        }
    }

    /// Products per set
    #[must_use]
    pub const fn group_size(&self) -> usize {
        self.group_size
    }

    /// Best-scoring meal sets, at most `max_sets` of them
    #[must_use]
    pub fn build_sets<'a>(
        &self,
        ranked: &RankedCandidates<'a>,
        targets: &NutritionTargets,
        price_ceiling: Option<f64>,
    ) -> Vec<MealSet<'a>> {
        let mut sets = self.rank_sets(ranked, targets, price_ceiling);
        sets.truncate(self.max_sets);
        sets
    }

    /// Every meal set from the candidate pool, ranked by descending score
    ///
    /// The price basis is `group_size` times the ceiling, or else `group_size`
    /// times the highest effective price in the whole ranking. Fewer candidates
    /// than `group_size` yields no sets.
    #[must_use]
    pub fn rank_sets<'a>(
        &self,
        ranked: &RankedCandidates<'a>,
        targets: &NutritionTargets,
        price_ceiling: Option<f64>,
    ) -> Vec<MealSet<'a>> {
        let pool = ranked.top(self.pool_size);
        let group = self.group_size as f64;
        let price_basis = price_ceiling.map_or_else(
            || ranked.max_effective_price() * group,
            |ceiling| ceiling * group,
        );

        let mut sets: Vec<MealSet<'a>> = Combinations::new(pool.len(), self.group_size)
            .map(|indices| {
                let items: Vec<ScoredProduct<'a>> = indices.iter().map(|&i| pool[i]).collect();
                Self::score_set(items, targets, price_basis)
            })
            .collect();

        sets.sort_by(|a, b| b.score.total_cmp(&a.score));

        tracing::debug!(
            candidates.count = pool.len(),
            sets.count = sets.len(),
            price.basis = price_basis,
            "Ranked meal sets"
        );

        sets
    }

    /// Aggregate and score one combination
    ///
    /// The located regime applies whenever any member distance is known, so a
    /// set whose known distances are all zero still earns the proximity term
    /// instead of falling back to the nutrition/price weighting.
    fn score_set<'a>(
        items: Vec<ScoredProduct<'a>>,
        targets: &NutritionTargets,
        price_basis: f64,
    ) -> MealSet<'a> {
        let total_nutrition = items
            .iter()
            .fold(NutritionFacts::zero(), |total, item| total + item.nutrition);
        let total_price: f64 = items.iter().map(|item| item.effective_price).sum();

        let member_count = items.len() as f64;
        let avg_distance =
            items.iter().map(|item| item.distance_km.unwrap_or(0.0)).sum::<f64>() / member_count;
        let located = items.iter().any(|item| item.distance_km.is_some());

        let balance = nutrition_match(&total_nutrition, targets, target_shares::MEAL_SET);
        let price = price_score(total_price, price_basis);
        let score = composite_score(balance, price, located.then_some(avg_distance));

        MealSet {
            items,
            total_nutrition,
            total_price: round_to(total_price, REPORTED_DECIMALS),
            avg_distance_km: round_to(avg_distance, REPORTED_DECIMALS),
            score,
        }
    }
}
