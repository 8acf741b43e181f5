// ABOUTME: Server binary for the Foodbridge recommendation API
// ABOUTME: Loads configuration and the catalog snapshot, then serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

//! # Foodbridge Server Binary
//!
//! ```bash
//! foodbridge-server --catalog catalog.json --http-port 8081
//! ```

use anyhow::Result;
use clap::Parser;
use foodbridge_server::{
    catalog::InMemoryCatalog, config::ServerConfig, logging, resources::ServerResources, server,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "foodbridge-server")]
#[command(about = "Foodbridge - nutrition-aware recommendations for near-expiry food")]
struct Args {
    /// Catalog snapshot to serve (overrides `FOODBRIDGE_CATALOG_PATH`)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(catalog) = args.catalog {
        config.catalog_path = Some(catalog);
    }

    logging::init_from_env()?;
    info!("{}", config.summary());

    let catalog = match &config.catalog_path {
        Some(path) => InMemoryCatalog::load(path).await?,
        None => {
            warn!("No catalog configured, serving an empty catalog");
            InMemoryCatalog::default()
        }
    };

    let resources = Arc::new(ServerResources::new(config, Arc::new(catalog)));
    server::run(resources).await
}
