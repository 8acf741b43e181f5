// ABOUTME: Product listing model for discounted near-expiry food
// ABOUTME: ProductRecord, GeoPoint coordinates, and effective price arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

use super::{Nutrient, NutritionFacts};
use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a point only when both coordinates are present
    #[must_use]
    pub const fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self::new(latitude, longitude)),
            _ => None,
        }
    }
}

/// A listed product as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Listing identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Units in stock
    #[serde(default)]
    pub quantity: u32,
    /// Pickup address
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
    /// Multiplier applied to the original price (0 < rate <= 1)
    pub discount_rate: f64,
    /// Nutrition facts, when known
    ///
    /// A payload carrying none of the tracked nutrients (such as `{}`) reads as
    /// absent, so the listing is excluded from scoring rather than rejected.
    #[serde(
        default,
        rename = "nutrition_info",
        deserialize_with = "optional_nutrition"
    )]
    pub nutrition: Option<NutritionFacts>,
    /// Store account that listed the product
    pub store_id: Uuid,
}

impl ProductRecord {
    /// Price the buyer actually pays
    #[must_use]
    pub fn effective_price(&self) -> f64 {
        self.original_price * self.discount_rate
    }

    /// Pickup position, when both coordinates are recorded
    #[must_use]
    pub const fn position(&self) -> Option<GeoPoint> {
        GeoPoint::from_parts(self.latitude, self.longitude)
    }
}

/// Read an optional nutrition payload
///
/// `null`, a missing key, and an object carrying none of the tracked nutrients
/// all read as `None`. Anything else goes through [`NutritionFacts`]'s lenient
/// reader so that garbage values surface later in validation.
///
/// # Errors
///
/// Returns an error when the payload is neither an object nor `null`
pub fn optional_nutrition<'de, D>(deserializer: D) -> Result<Option<NutritionFacts>, D::Error>
where
    D: Deserializer<'de>,
{
    let payload = Option::<Value>::deserialize(deserializer)?;
    let blank = match &payload {
        None | Some(Value::Null) => true,
        Some(Value::Object(fields)) => Nutrient::ALL
            .iter()
            .all(|nutrient| !fields.contains_key(nutrient.key())),
        Some(_) => false,
    };
    if blank {
        return Ok(None);
    }

    payload
        .map(NutritionFacts::deserialize)
        .transpose()
        .map_err(de::Error::custom)
}
