// ABOUTME: Route module organization for the Foodbridge HTTP endpoints
// ABOUTME: Assembles health, listing, geocoding, and recommendation routes into one router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

//! HTTP routes
//!
//! Each domain module holds only route definitions and thin handlers that
//! delegate to the catalog and the recommendation engine.

/// Address lookup routes
pub mod geocode;
/// Health check and readiness routes
pub mod health;
/// Listing routes
pub mod products;
/// Recommendation routes
pub mod recommendations;
/// JSON response views
pub mod views;

pub use geocode::GeocodeRoutes;
pub use health::HealthRoutes;
pub use products::ProductRoutes;
pub use recommendations::RecommendationRoutes;

use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Every route, traced
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(ProductRoutes::routes(resources.clone()))
        .merge(GeocodeRoutes::routes(resources.clone()))
        .merge(RecommendationRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
}
