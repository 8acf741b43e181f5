// ABOUTME: Address lookup route exposing the configured geocoder
// ABOUTME: GET /api/geocode?address= answers with coordinates or a not-found error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

use crate::resources::ServerResources;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use foodbridge_core::constants::endpoints;
use foodbridge_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query string of `GET /api/geocode`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeParams {
    /// Address to resolve
    #[serde(default)]
    pub address: Option<String>,
}

/// Resolved coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResponse {
    /// Always true on a 200 response
    pub success: bool,
    /// Resolved latitude
    pub latitude: f64,
    /// Resolved longitude
    pub longitude: f64,
}

/// Geocoding routes
pub struct GeocodeRoutes;

impl GeocodeRoutes {
    /// Create the geocoding routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::GEOCODE, get(Self::handle_geocode))
            .with_state(resources)
    }

    /// Handle GET /api/geocode
    async fn handle_geocode(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<GeocodeParams>,
    ) -> Result<Response, AppError> {
        let address = params
            .address
            .as_deref()
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .ok_or_else(|| AppError::missing_field("address"))?;

        let point = resources
            .geocoder
            .locate(address)
            .await
            .ok_or_else(|| AppError::not_found(format!("Address '{address}'")))?;

        let response = GeocodeResponse {
            success: true,
            latitude: point.latitude,
            longitude: point.longitude,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
