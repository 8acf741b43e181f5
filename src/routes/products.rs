// ABOUTME: Listing routes: browse with filters, detail, and store-owned create/edit/delete
// ABOUTME: Store actions identify the acting account by header and enforce listing ownership
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

use super::views::{ListingView, ProductSearchResponse, ProductView};
use crate::catalog::{Account, ProductQuery};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use foodbridge_core::constants::{endpoints, headers};
use foodbridge_core::errors::AppError;
use foodbridge_core::models::{optional_nutrition, GeoPoint, NutritionFacts, ProductRecord};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

const DEFAULT_DISCOUNT_RATE: f64 = 0.5;

/// Query string of `GET /api/products`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductSearchParams {
    /// Text matched against name and address
    pub search: Option<String>,
    /// Highest discounted price
    pub max_price: Option<f64>,
    /// Radius in km around the user
    pub distance: Option<f64>,
    /// User latitude
    pub user_lat: Option<f64>,
    /// User longitude
    pub user_lon: Option<f64>,
}

impl From<ProductSearchParams> for ProductQuery {
    fn from(params: ProductSearchParams) -> Self {
        Self {
            search: params.search,
            max_price: params.max_price,
            radius_km: params.distance,
            origin: GeoPoint::from_parts(params.user_lat, params.user_lon),
        }
    }
}

/// Body of `POST /api/products`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewListingRequest {
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Units in stock
    pub quantity: u32,
    /// Pickup address, geocoded when coordinates are absent
    #[serde(default)]
    pub address: String,
    /// Pickup latitude
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Pickup longitude
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Best-before date
    pub expiry_date: NaiveDate,
    /// Price before discount
    pub original_price: f64,
    /// Discount multiplier, 0.5 when omitted
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
    /// Nutrition facts, when the store knows them
    #[serde(default, deserialize_with = "optional_nutrition")]
    pub nutrition_info: Option<NutritionFacts>,
}

const fn default_discount_rate() -> f64 {
    DEFAULT_DISCOUNT_RATE
}

/// Body of `PATCH /api/products/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityUpdate {
    /// New stock level
    pub quantity: i64,
}

/// Listing routes
pub struct ProductRoutes;

impl ProductRoutes {
    /// Create the listing routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                endpoints::PRODUCTS,
                get(Self::handle_search).post(Self::handle_create),
            )
            .route(
                endpoints::PRODUCT,
                get(Self::handle_detail)
                    .patch(Self::handle_update_quantity)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle GET /api/products
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<ProductSearchParams>,
    ) -> Result<Response, AppError> {
        let query = ProductQuery::from(params);
        let listings = resources.products.search(&query).await?;

        tracing::debug!(
            search = ?query.search,
            listings.count = listings.len(),
            "Listing search"
        );

        let response = ProductSearchResponse {
            total: listings.len(),
            products: listings.iter().map(ListingView::from).collect(),
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/products/:id
    async fn handle_detail(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let product = resources
            .products
            .find_product(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {id}")))?;

        Ok((StatusCode::OK, Json(ProductView::from(&product))).into_response())
    }

    /// Handle POST /api/products
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        request_headers: HeaderMap,
        Json(request): Json<NewListingRequest>,
    ) -> Result<Response, AppError> {
        let store = Self::acting_store(&resources, &request_headers).await?;
        Self::validate_listing(&request)?;

        let position = match GeoPoint::from_parts(request.latitude, request.longitude) {
            Some(point) => Some(point),
            None => resources.geocoder.locate(request.address.trim()).await,
        };
        if position.is_none() {
            warn!(
                store.id = %store.id,
                address = %request.address,
                "Listing address could not be located, it will have no distance"
            );
        }

        let product = ProductRecord {
            id: Uuid::new_v4(),
            name: request.name.trim().to_owned(),
            description: request.description,
            quantity: request.quantity,
            address: request.address,
            latitude: position.map(|point| point.latitude),
            longitude: position.map(|point| point.longitude),
            expiry_date: request.expiry_date,
            original_price: request.original_price,
            discount_rate: request.discount_rate,
            nutrition: request.nutrition_info,
            store_id: store.id,
        };
        let view = ProductView::from(&product);
        resources.listings.insert_product(product).await?;

        info!(store.id = %store.id, product.id = %view.id, "Listing created");
        Ok((StatusCode::CREATED, Json(view)).into_response())
    }

    /// Handle PATCH /api/products/:id
    async fn handle_update_quantity(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
        request_headers: HeaderMap,
        Json(update): Json<QuantityUpdate>,
    ) -> Result<Response, AppError> {
        let store = Self::acting_store(&resources, &request_headers).await?;
        Self::owned_listing(&resources, &store, id).await?;

        let quantity = u32::try_from(update.quantity).map_err(|_| {
            AppError::invalid_input(format!("Invalid quantity: {}", update.quantity))
        })?;
        let product = resources
            .listings
            .set_quantity(id, quantity)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {id}")))?;

        info!(store.id = %store.id, product.id = %id, quantity, "Listing quantity updated");
        Ok((StatusCode::OK, Json(ProductView::from(&product))).into_response())
    }

    /// Handle DELETE /api/products/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<Uuid>,
        request_headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let store = Self::acting_store(&resources, &request_headers).await?;
        Self::owned_listing(&resources, &store, id).await?;

        resources
            .listings
            .remove_product(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {id}")))?;

        info!(store.id = %store.id, product.id = %id, "Listing removed");
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    /// Store account named by the account header
    async fn acting_store(
        resources: &ServerResources,
        request_headers: &HeaderMap,
    ) -> Result<Account, AppError> {
        let raw = request_headers
            .get(headers::ACCOUNT_ID)
            .ok_or_else(|| AppError::missing_field(headers::ACCOUNT_ID))?;
        let id = raw
            .to_str()
            .ok()
            .and_then(|value| Uuid::parse_str(value.trim()).ok())
            .ok_or_else(|| {
                AppError::invalid_format(format!("{} must be an account UUID", headers::ACCOUNT_ID))
            })?;

        let account = resources
            .buyers
            .find_account(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Account {id}")))?;
        if !account.is_store {
            return Err(AppError::permission_denied(
                "Only store accounts can manage listings",
            ));
        }
        Ok(account)
    }

    /// Listing `id`, provided `store` published it
    async fn owned_listing(
        resources: &ServerResources,
        store: &Account,
        id: Uuid,
    ) -> Result<ProductRecord, AppError> {
        let product = resources
            .products
            .find_product(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {id}")))?;
        if product.store_id != store.id {
            return Err(AppError::permission_denied(
                "You do not have permission to modify this product",
            ));
        }
        Ok(product)
    }

    fn validate_listing(request: &NewListingRequest) -> Result<(), AppError> {
        if request.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        if !(request.original_price.is_finite() && request.original_price > 0.0) {
            return Err(AppError::invalid_input(
                "original_price must be a positive amount",
            ));
        }
        if !(request.discount_rate > 0.0 && request.discount_rate <= 1.0) {
            return Err(AppError::invalid_input(
                "discount_rate must be greater than 0 and at most 1",
            ));
        }
        if let Some(nutrition) = request.nutrition_info {
            nutrition.validate().map_err(|nutrient| {
                AppError::invalid_input(format!("{nutrient} is not a valid amount"))
                    .with_details(json!({ "nutrient": nutrient }))
            })?;
        }
        Ok(())
    }
}
