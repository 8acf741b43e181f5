// ABOUTME: Core types and constants for the Foodbridge surplus-food marketplace
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

#![deny(unsafe_code)]

//! # Foodbridge Core
//!
//! Foundation crate providing shared types and constants for the Foodbridge
//! marketplace. Buyers, listings and nutrition records live here so that the
//! scoring engine and the HTTP server agree on a single vocabulary.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `RecommendationError`
//! - **models**: Buyers, product listings, coordinates, and nutrition records
//! - **constants**: Application-wide constants organized by domain

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (buyers, listings, nutrition)
pub mod models;

/// Application constants organized by domain
pub mod constants;
