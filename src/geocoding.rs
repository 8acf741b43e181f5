// ABOUTME: Offline address resolution against a gazetteer of named places
// ABOUTME: Geocoder trait seam and a case-insensitive exact-then-substring matcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

//! Geocoding
//!
//! Unresolvable addresses are not errors: the caller simply carries on
//! without a position, which switches scoring to the nutrition/price regime.

use async_trait::async_trait;
use foodbridge_core::models::GeoPoint;
use serde::{Deserialize, Serialize};

/// A named place with known coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Place name or address as buyers would type it
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// Resolves free-text addresses to coordinates
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Coordinates for `address`, or `None` when it cannot be resolved
    async fn locate(&self, address: &str) -> Option<GeoPoint>;
}

/// Geocoder backed by a fixed list of places
#[derive(Debug, Clone, Default)]
pub struct GazetteerGeocoder {
    entries: Vec<(String, GeoPoint)>,
}

impl GazetteerGeocoder {
    /// Index the given places
    #[must_use]
    pub fn new(places: &[Place]) -> Self {
        let entries = places
            .iter()
            .map(|place| {
                (
                    normalize(&place.name),
                    GeoPoint::new(place.latitude, place.longitude),
                )
            })
            .filter(|(name, _)| !name.is_empty())
            .collect();
        Self { entries }
    }

    /// Number of indexed places
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the gazetteer is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve an address synchronously
    ///
    /// An exact (normalized) name match wins. Otherwise the longest place name
    /// contained in the address is used.
    #[must_use]
    pub fn resolve(&self, address: &str) -> Option<GeoPoint> {
        let wanted = normalize(address);
        if wanted.is_empty() {
            return None;
        }

        if let Some((_, point)) = self.entries.iter().find(|(name, _)| *name == wanted) {
            return Some(*point);
        }

        self.entries
            .iter()
            .filter(|(name, _)| wanted.contains(name.as_str()))
            .max_by_key(|(name, _)| name.len())
            .map(|(_, point)| *point)
    }
}

#[async_trait]
impl Geocoder for GazetteerGeocoder {
    async fn locate(&self, address: &str) -> Option<GeoPoint> {
        let point = self.resolve(address);
        if point.is_none() {
            tracing::debug!(address = %address, "Address not found in gazetteer");
        }
        point
    }
}

/// Lowercase and collapse runs of whitespace
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
