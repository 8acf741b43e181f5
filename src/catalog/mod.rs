// ABOUTME: Catalog of listings and accounts behind product and buyer source traits
// ABOUTME: Snapshot loading, in-memory storage, listing search, and reference nutrition import
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

//! Catalog
//!
//! Route handlers only see the [`ProductSource`], [`ListingStore`] and
//! [`BuyerDirectory`] traits. The shipped implementation keeps everything in memory and is
//! loaded from a JSON snapshot written by the `seed-catalog` binary.

/// Buyer and store accounts
pub mod account;

/// In-memory catalog and JSON snapshots
pub mod memory;

/// Listing search filters
pub mod query;

/// USDA-style reference nutrition import
pub mod reference;

pub use account::Account;
pub use memory::{CatalogSnapshot, InMemoryCatalog};
pub use query::{ListedProduct, ProductQuery};
pub use reference::{ReferenceFood, ReferenceImport, ReferenceImportError};

use async_trait::async_trait;
use foodbridge_core::errors::AppResult;
use foodbridge_core::models::ProductRecord;
use uuid::Uuid;

/// Supplies the product pool for one request
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Every current listing, in catalog order
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read
    async fn all_products(&self) -> AppResult<Vec<ProductRecord>>;

    /// Listings matching `query`, in catalog order
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read
    async fn search(&self, query: &ProductQuery) -> AppResult<Vec<ListedProduct>>;

    /// The listing with `id`, if it exists
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read
    async fn find_product(&self, id: Uuid) -> AppResult<Option<ProductRecord>>;
}

/// Accepts listing changes made by stores
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Append a new listing
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written
    async fn insert_product(&self, product: ProductRecord) -> AppResult<()>;

    /// Set the stock of listing `id`, returning the updated listing
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written
    async fn set_quantity(&self, id: Uuid, quantity: u32) -> AppResult<Option<ProductRecord>>;

    /// Remove listing `id`, returning it when it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written
    async fn remove_product(&self, id: Uuid) -> AppResult<Option<ProductRecord>>;
}

/// Looks up the account behind a request
#[async_trait]
pub trait BuyerDirectory: Send + Sync {
    /// The account with `id`, if it exists
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read
    async fn find_account(&self, id: Uuid) -> AppResult<Option<Account>>;
}
