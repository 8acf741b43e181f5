// ABOUTME: Core data models shared by the scoring engine and the server
// ABOUTME: Re-exports buyer, product, and nutrition types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

/// Buyer profiles, account kinds, and age arithmetic
pub mod buyer;
/// Nutrition facts and daily targets
pub mod nutrition;
/// Product listings and coordinates
pub mod product;

pub use buyer::{age_on, AccountKind, BiologicalSex, BuyerContext, BuyerProfile};
pub use nutrition::{Nutrient, NutritionFacts, NutritionTargets};
pub use product::{optional_nutrition, GeoPoint, ProductRecord};
