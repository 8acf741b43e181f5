// ABOUTME: JSON views returned by the listing and recommendation endpoints
// ABOUTME: Flattens listings with their discounted price and shapes scored results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

use crate::catalog::ListedProduct;
use chrono::NaiveDate;
use foodbridge_core::models::{NutritionFacts, NutritionTargets, ProductRecord};
use foodbridge_intelligence::{MealSet, RecommendationResult, ScoredProduct};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A listing as shown to buyers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductView {
    /// Listing identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
    /// Units in stock
    pub quantity: u32,
    /// Pickup address
    pub address: String,
    /// Pickup latitude
    pub latitude: Option<f64>,
    /// Pickup longitude
    pub longitude: Option<f64>,
    /// Best-before date
    pub expiry_date: NaiveDate,
    /// Price before discount
    pub original_price: f64,
    /// Discount multiplier
    pub discount_rate: f64,
    /// Price after discount
    pub discounted_price: f64,
    /// Nutrition facts, when known
    pub nutrition_info: Option<NutritionFacts>,
    /// Store that listed the product
    pub store_id: Uuid,
}

impl From<&ProductRecord> for ProductView {
    fn from(product: &ProductRecord) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            quantity: product.quantity,
            address: product.address.clone(),
            latitude: product.latitude,
            longitude: product.longitude,
            expiry_date: product.expiry_date,
            original_price: product.original_price,
            discount_rate: product.discount_rate,
            discounted_price: product.effective_price(),
            nutrition_info: product.nutrition,
            store_id: product.store_id,
        }
    }
}

/// A search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingView {
    /// The listing
    #[serde(flatten)]
    pub product: ProductView,
    /// Distance from the search origin in km, when a radius search computed one
    pub distance: Option<f64>,
}

impl From<&ListedProduct> for ListingView {
    fn from(listing: &ListedProduct) -> Self {
        Self {
            product: ProductView::from(&listing.product),
            distance: listing.distance_km,
        }
    }
}

/// Body of `GET /api/products`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSearchResponse {
    /// Matching listings in catalog order
    pub products: Vec<ListingView>,
    /// Number of matches
    pub total: usize,
}

/// One individually recommended listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedProduct {
    /// The listing
    pub product: ProductView,
    /// Distance from the buyer in km, when known
    pub distance: Option<f64>,
    /// Composite score
    pub score: f64,
}

impl From<&ScoredProduct<'_>> for RecommendedProduct {
    fn from(scored: &ScoredProduct<'_>) -> Self {
        Self {
            product: ProductView::from(scored.product),
            distance: scored.distance_km,
            score: scored.score,
        }
    }
}

/// One recommended meal set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealSetView {
    /// Member listings
    pub products: Vec<ProductView>,
    /// Summed nutrients
    pub total_nutrition: NutritionFacts,
    /// Summed discounted prices
    pub total_price: f64,
    /// Mean member distance in km
    pub avg_distance: f64,
    /// Composite set score
    pub score: f64,
}

impl From<&MealSet<'_>> for MealSetView {
    fn from(set: &MealSet<'_>) -> Self {
        Self {
            products: set
                .items
                .iter()
                .map(|item| ProductView::from(item.product))
                .collect(),
            total_nutrition: set.total_nutrition,
            total_price: set.total_price,
            avg_distance: set.avg_distance_km,
            score: set.score,
        }
    }
}

/// Body of `POST /api/recommendations`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Best listings on their own
    pub individual_recommendations: Vec<RecommendedProduct>,
    /// Best meal sets
    pub set_recommendations: Vec<MealSetView>,
    /// Daily targets used for scoring
    pub nutrition_needs: NutritionTargets,
}

impl From<&RecommendationResult<'_>> for RecommendationResponse {
    fn from(result: &RecommendationResult<'_>) -> Self {
        Self {
            individual_recommendations: result
                .individual
                .iter()
                .map(RecommendedProduct::from)
                .collect(),
            set_recommendations: result.sets.iter().map(MealSetView::from).collect(),
            nutrition_needs: result.targets,
        }
    }
}
