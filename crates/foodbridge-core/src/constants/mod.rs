// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Ports, endpoints, service names, and environment variable keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY_CHECK: &str = "/ready";
    /// Listing search and creation endpoint
    pub const PRODUCTS: &str = "/api/products";
    /// Single listing endpoint
    pub const PRODUCT: &str = "/api/products/:id";
    /// Address lookup endpoint
    pub const GEOCODE: &str = "/api/geocode";
    /// Recommendation endpoint
    pub const RECOMMENDATIONS: &str = "/api/recommendations";
}

/// Request headers
pub mod headers {
    /// Account acting on a listing
    pub const ACCOUNT_ID: &str = "x-account-id";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Service names used in structured logs
pub mod service_names {
    /// The HTTP server
    pub const FOODBRIDGE_SERVER: &str = "foodbridge-server";
}

/// Environment variable names read at startup
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP bind host
    pub const HOST: &str = "HOST";
    /// Path to the JSON catalog snapshot
    pub const CATALOG_PATH: &str = "FOODBRIDGE_CATALOG_PATH";
    /// Fixed `YYYY-MM-DD` date used as "today" for buyer ages
    pub const REFERENCE_DATE: &str = "FOODBRIDGE_REFERENCE_DATE";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Defaults applied when the environment is silent
pub mod defaults {
    /// Bind host
    pub const HOST: &str = "127.0.0.1";
}
