// ABOUTME: Error taxonomy for the recommendation scoring engine
// ABOUTME: Empty pools, ineligible buyers, and malformed nutrition facts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

use super::{AppError, ErrorCode};
use crate::models::Nutrient;
use serde_json::{json, Value};
use thiserror::Error;
use uuid::Uuid;

/// Failures the scoring engine reports to its caller.
///
/// Every other degenerate situation (fewer than three candidates, a zero
/// price basis) degrades to an empty or neutral result instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendationError {
    /// The product pool handed to the engine was empty
    #[error("No products available")]
    NoProductsAvailable,

    /// The requesting account is a store, not a consumer
    #[error("Store accounts cannot use recommendations")]
    IneligibleBuyer,

    /// A listing reached scoring with a nutrient value that is not a finite, non-negative number
    #[error("Product {product_id} has malformed nutrition data: {nutrient} is not a valid amount")]
    MalformedNutritionData {
        /// Offending listing
        product_id: Uuid,
        /// First nutrient that failed validation
        nutrient: Nutrient,
    },
}

impl From<RecommendationError> for AppError {
    fn from(error: RecommendationError) -> Self {
        let code = match &error {
            RecommendationError::NoProductsAvailable => ErrorCode::ResourceNotFound,
            RecommendationError::IneligibleBuyer => ErrorCode::PermissionDenied,
            RecommendationError::MalformedNutritionData { .. } => ErrorCode::DataIntegrity,
        };

        let details = match &error {
            RecommendationError::MalformedNutritionData {
                product_id,
                nutrient,
            } => json!({
                "product_id": product_id,
                "nutrient": nutrient,
            }),
            _ => Value::Null,
        };

        Self::new(code, error.to_string()).with_details(details)
    }
}
