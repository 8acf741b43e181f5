// ABOUTME: Centralized resource container shared by every route handler
// ABOUTME: Holds configuration, catalog sources, the geocoder, and the recommendation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

use crate::catalog::{BuyerDirectory, InMemoryCatalog, ListingStore, ProductSource};
use crate::config::ServerConfig;
use crate::geocoding::{GazetteerGeocoder, Geocoder};
use foodbridge_intelligence::RecommendationEngine;
use std::sync::Arc;

/// Shared server resources for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Where request product pools come from
    pub products: Arc<dyn ProductSource>,
    /// Where store listing changes go
    pub listings: Arc<dyn ListingStore>,
    /// Where buyer accounts come from
    pub buyers: Arc<dyn BuyerDirectory>,
    /// Resolves buyer addresses to coordinates
    pub geocoder: Arc<dyn Geocoder>,
    /// Stateless scoring engine
    pub engine: Arc<RecommendationEngine>,
}

impl ServerResources {
    /// Resources backed by one in-memory catalog and its gazetteer
    #[must_use]
    pub fn new(config: ServerConfig, catalog: Arc<InMemoryCatalog>) -> Self {
        let geocoder = Arc::new(GazetteerGeocoder::new(catalog.places()));
        Self::with_sources(config, catalog.clone(), catalog.clone(), catalog, geocoder)
    }

    /// Resources from explicit sources
    #[must_use]
    pub fn with_sources(
        config: ServerConfig,
        products: Arc<dyn ProductSource>,
        listings: Arc<dyn ListingStore>,
        buyers: Arc<dyn BuyerDirectory>,
        geocoder: Arc<dyn Geocoder>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            products,
            listings,
            buyers,
            geocoder,
            engine: Arc::new(RecommendationEngine::new()),
        }
    }
}
