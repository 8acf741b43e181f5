// ABOUTME: Main library entry point for the Foodbridge recommendation server
// ABOUTME: Wires configuration, logging, the in-memory catalog, and the HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

#![deny(unsafe_code)]

//! # Foodbridge Server
//!
//! An HTTP service that recommends discounted near-expiry food to buyers.
//! Listings are scored against the buyer's daily nutrition targets, their
//! price, and (when a position is known) their distance, then combined into
//! three-item meal sets that together cover a day of intake.
//!
//! ## Architecture
//!
//! - **Core** (`foodbridge-core`): errors, domain models, constants
//! - **Intelligence** (`foodbridge-intelligence`): the scoring engine
//! - **Catalog**: in-memory listings and accounts loaded from a JSON snapshot
//! - **Geocoding**: offline gazetteer lookups for free-text addresses
//! - **Routes**: axum handlers for search and recommendations
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use foodbridge_server::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("{}", config.summary());
//!     Ok(())
//! }
//! ```

/// In-memory listing and account storage
pub mod catalog;

/// Environment-driven server configuration
pub mod config;

/// Offline address resolution
pub mod geocoding;

/// Structured logging setup
pub mod logging;

/// Shared resources injected into route handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// HTTP server startup and shutdown
pub mod server;
