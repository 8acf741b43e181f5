// ABOUTME: Recommendation route resolving the buyer, their position, and the product pool
// ABOUTME: POST /api/recommendations returning individual listings, meal sets, and targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

use super::views::RecommendationResponse;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use foodbridge_core::constants::endpoints;
use foodbridge_core::errors::AppError;
use foodbridge_core::models::GeoPoint;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Body of `POST /api/recommendations`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Account asking for recommendations
    pub buyer_id: Uuid,
    /// Buyer latitude
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Buyer longitude
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Free-text address, geocoded when coordinates are absent
    #[serde(default)]
    pub address: Option<String>,
    /// Price ceiling; non-positive means none
    #[serde(default)]
    pub max_price: Option<f64>,
}

/// Recommendation routes
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create the recommendation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::RECOMMENDATIONS, post(Self::handle_recommend))
            .with_state(resources)
    }

    /// Handle POST /api/recommendations
    async fn handle_recommend(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<RecommendationRequest>,
    ) -> Result<Response, AppError> {
        let account = resources
            .buyers
            .find_account(request.buyer_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Buyer {}", request.buyer_id)))?;

        let position = Self::resolve_position(&resources, &request).await;
        let buyer = account.buyer_context(resources.config.today(), position);
        let products = resources.products.all_products().await?;

        let result = resources
            .engine
            .recommend(&buyer, &products, request.max_price)?;

        tracing::info!(
            buyer.id = %account.id,
            buyer.located = position.is_some(),
            pool.size = products.len(),
            individual.count = result.individual.len(),
            sets.count = result.sets.len(),
            "Served recommendations"
        );

        let response = RecommendationResponse::from(&result);
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Coordinates from the request, else the geocoded address
    async fn resolve_position(
        resources: &ServerResources,
        request: &RecommendationRequest,
    ) -> Option<GeoPoint> {
        if let Some(point) = GeoPoint::from_parts(request.latitude, request.longitude) {
            return Some(point);
        }
        match request.address.as_deref().map(str::trim) {
            Some(address) if !address.is_empty() => resources.geocoder.locate(address).await,
            _ => None,
        }
    }
}
