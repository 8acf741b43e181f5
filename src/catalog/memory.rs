// ABOUTME: In-memory catalog implementing the product and buyer source traits
// ABOUTME: Loads and saves JSON snapshots of accounts, listings, and gazetteer places
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

use super::{Account, BuyerDirectory, ListedProduct, ListingStore, ProductQuery, ProductSource};
use crate::geocoding::Place;
use anyhow::{Context, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use foodbridge_core::errors::AppResult;
use foodbridge_core::models::ProductRecord;
use foodbridge_intelligence::HaversineDistance;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// Serialized form of the whole catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Buyer and store accounts
    #[serde(default)]
    pub accounts: Vec<Account>,
    /// Listings, in display order
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    /// Gazetteer used to geocode buyer addresses
    #[serde(default)]
    pub places: Vec<Place>,
}

impl CatalogSnapshot {
    /// Read a snapshot from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid snapshot
    pub async fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .await
            .with_context(|| format!("Failed to read catalog snapshot {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("Invalid catalog snapshot {}", path.display()))
    }

    /// Write the snapshot as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub async fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_vec_pretty(self).context("Failed to serialize catalog")?;
        fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write catalog snapshot {}", path.display()))
    }
}

/// Catalog held entirely in memory
///
/// Listings keep insertion order so that equal recommendation scores resolve
/// the same way on every request.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    accounts: DashMap<Uuid, Account>,
    products: RwLock<Vec<ProductRecord>>,
    places: Vec<Place>,
}

impl InMemoryCatalog {
    /// Build a catalog from a snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        let accounts = snapshot
            .accounts
            .into_iter()
            .map(|account| (account.id, account))
            .collect();
        Self {
            accounts,
            products: RwLock::new(snapshot.products),
            places: snapshot.places,
        }
    }

    /// Load a catalog from a JSON snapshot file
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or parsed
    pub async fn load(path: &Path) -> Result<Self> {
        let snapshot = CatalogSnapshot::load(path).await?;
        info!(
            catalog.path = %path.display(),
            accounts.count = snapshot.accounts.len(),
            products.count = snapshot.products.len(),
            places.count = snapshot.places.len(),
            "Loaded catalog snapshot"
        );
        Ok(Self::from_snapshot(snapshot))
    }

    /// Gazetteer places shipped with the catalog
    #[must_use]
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Insert or replace an account
    pub fn upsert_account(&self, account: Account) {
        self.accounts.insert(account.id, account);
    }

    /// Append a listing
    pub async fn add_product(&self, product: ProductRecord) {
        self.products.write().await.push(product);
    }

    /// Number of listings
    pub async fn product_count(&self) -> usize {
        self.products.read().await.len()
    }

    /// Copy the current state into a snapshot
    pub async fn snapshot(&self) -> CatalogSnapshot {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        accounts.sort_by(|a, b| a.username.cmp(&b.username));

        CatalogSnapshot {
            accounts,
            products: self.products.read().await.clone(),
            places: self.places.clone(),
        }
    }
}

#[async_trait]
impl ProductSource for InMemoryCatalog {
    async fn all_products(&self) -> AppResult<Vec<ProductRecord>> {
        Ok(self.products.read().await.clone())
    }

    async fn search(&self, query: &ProductQuery) -> AppResult<Vec<ListedProduct>> {
        let products = self.products.read().await;
        Ok(query.apply(&products, &HaversineDistance))
    }

    async fn find_product(&self, id: Uuid) -> AppResult<Option<ProductRecord>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|product| product.id == id).cloned())
    }
}

#[async_trait]
impl ListingStore for InMemoryCatalog {
    async fn insert_product(&self, product: ProductRecord) -> AppResult<()> {
        self.add_product(product).await;
        Ok(())
    }

    async fn set_quantity(&self, id: Uuid, quantity: u32) -> AppResult<Option<ProductRecord>> {
        let mut products = self.products.write().await;
        Ok(products
            .iter_mut()
            .find(|product| product.id == id)
            .map(|product| {
                product.quantity = quantity;
                product.clone()
            }))
    }

    async fn remove_product(&self, id: Uuid) -> AppResult<Option<ProductRecord>> {
        let mut products = self.products.write().await;
        let index = products.iter().position(|product| product.id == id);
        Ok(index.map(|index| products.remove(index)))
    }
}

#[async_trait]
impl BuyerDirectory for InMemoryCatalog {
    async fn find_account(&self, id: Uuid) -> AppResult<Option<Account>> {
        Ok(self.accounts.get(&id).map(|entry| entry.value().clone()))
    }
}
