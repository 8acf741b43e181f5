// ABOUTME: Nutrition models for listings and buyers' daily intake targets
// ABOUTME: NutritionFacts, NutritionTargets, and the Nutrient enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Add;

/// The six nutrients tracked by scoring
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy in kcal
    Energy,
    /// Protein in grams
    Protein,
    /// Total fat in grams
    Fat,
    /// Carbohydrate in grams
    Carbohydrate,
    /// Dietary fiber in grams
    Fiber,
    /// Sodium in milligrams
    Sodium,
}

impl Nutrient {
    /// Every tracked nutrient, in reporting order
    pub const ALL: [Self; 6] = [
        Self::Energy,
        Self::Protein,
        Self::Fat,
        Self::Carbohydrate,
        Self::Fiber,
        Self::Sodium,
    ];

    /// Lowercase key used in nutrition payloads
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Energy => "energy",
            Self::Protein => "protein",
            Self::Fat => "fat",
            Self::Carbohydrate => "carbohydrate",
            Self::Fiber => "fiber",
            Self::Sodium => "sodium",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Nutrition facts attached to a listing.
///
/// Values are read leniently from the catalog: numbers and numeric strings are
/// accepted, anything else (or a missing key) is carried as `NaN` so that
/// [`NutritionFacts::validate`] can report it instead of silently scoring a zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Energy (kcal)
    #[serde(default = "missing_amount", deserialize_with = "lenient_amount")]
    pub energy: f64,
    /// Protein (g)
    #[serde(default = "missing_amount", deserialize_with = "lenient_amount")]
    pub protein: f64,
    /// Fat (g)
    #[serde(default = "missing_amount", deserialize_with = "lenient_amount")]
    pub fat: f64,
    /// Carbohydrate (g)
    #[serde(default = "missing_amount", deserialize_with = "lenient_amount")]
    pub carbohydrate: f64,
    /// Fiber (g)
    #[serde(default = "missing_amount", deserialize_with = "lenient_amount")]
    pub fiber: f64,
    /// Sodium (mg)
    #[serde(default = "missing_amount", deserialize_with = "lenient_amount")]
    pub sodium: f64,
    /// Sugars (g), informational only
    #[serde(
        default,
        alias = "sugar",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_optional_amount"
    )]
    pub sugars: Option<f64>,
}

impl NutritionFacts {
    /// Facts with every tracked nutrient at zero
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            energy: 0.0,
            protein: 0.0,
            fat: 0.0,
            carbohydrate: 0.0,
            fiber: 0.0,
            sodium: 0.0,
            sugars: None,
        }
    }

    /// Amount of one tracked nutrient
    #[must_use]
    pub const fn value(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Energy => self.energy,
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Carbohydrate => self.carbohydrate,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sodium => self.sodium,
        }
    }

    /// Check every tracked nutrient is a finite, non-negative amount
    ///
    /// # Errors
    ///
    /// Returns the first nutrient that fails the check
    pub fn validate(&self) -> Result<(), Nutrient> {
        Nutrient::ALL
            .into_iter()
            .find(|&nutrient| {
                let amount = self.value(nutrient);
                !amount.is_finite() || amount < 0.0
            })
            .map_or(Ok(()), Err)
    }
}

impl Add for NutritionFacts {
    type Output = Self;

    /// Sums the tracked nutrients; sugars are dropped from aggregates
    fn add(self, rhs: Self) -> Self {
        Self {
            energy: self.energy + rhs.energy,
            protein: self.protein + rhs.protein,
            fat: self.fat + rhs.fat,
            carbohydrate: self.carbohydrate + rhs.carbohydrate,
            fiber: self.fiber + rhs.fiber,
            sodium: self.sodium + rhs.sodium,
            sugars: None,
        }
    }
}

const fn missing_amount() -> f64 {
    f64::NAN
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawAmount {
    fn into_amount(self) -> f64 {
        match self {
            Self::Number(value) => value,
            Self::Text(text) => text.trim().parse().unwrap_or(f64::NAN),
            Self::Other(_) => f64::NAN,
        }
    }
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RawAmount::deserialize(deserializer)?.into_amount())
}

fn lenient_optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = Option::<RawAmount>::deserialize(deserializer)?.map(RawAmount::into_amount);
    Ok(amount.filter(|value| value.is_finite()))
}

/// Recommended daily intake for one buyer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Carbohydrate (g)
    pub carbs: f64,
    /// Fiber (g)
    pub fiber: f64,
    /// Sodium (mg)
    pub sodium: f64,
}

impl NutritionTargets {
    /// Daily target for one tracked nutrient
    #[must_use]
    pub const fn value(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Energy => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Carbohydrate => self.carbs,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sodium => self.sodium,
        }
    }
}
