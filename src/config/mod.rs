// ABOUTME: Configuration module entry point
// ABOUTME: Re-exports the environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

/// Server configuration loaded from environment variables
pub mod environment;

pub use environment::{Environment, ServerConfig};
