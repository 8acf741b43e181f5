// ABOUTME: Shared fixtures for scoring engine integration tests
// ABOUTME: Builders for listings, nutrition facts, and buyer contexts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]

use chrono::NaiveDate;
use foodbridge_core::models::{
    BiologicalSex, BuyerContext, BuyerProfile, GeoPoint, NutritionFacts, ProductRecord,
};
use uuid::Uuid;

/// Nutrition facts with the given energy and otherwise modest values
pub fn facts(energy: f64, protein: f64, fat: f64, carbohydrate: f64) -> NutritionFacts {
    NutritionFacts {
        energy,
        protein,
        fat,
        carbohydrate,
        fiber: 5.0,
        sodium: 500.0,
        sugars: None,
    }
}

/// A listing priced at `price` (no discount) with the given nutrition
pub fn product(name: &str, price: f64, nutrition: Option<NutritionFacts>) -> ProductRecord {
    ProductRecord {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        description: None,
        quantity: 1,
        address: format!("{name} street"),
        latitude: None,
        longitude: None,
        expiry_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        original_price: price,
        discount_rate: 1.0,
        nutrition,
        store_id: Uuid::nil(),
    }
}

/// Same listing pinned at a position
pub fn located(mut product: ProductRecord, position: GeoPoint) -> ProductRecord {
    product.latitude = Some(position.latitude);
    product.longitude = Some(position.longitude);
    product
}

/// `count` distinct listings with varied nutrition and prices
pub fn varied_pool(count: usize) -> Vec<ProductRecord> {
    (0..count)
        .map(|i| {
            let step = i as f64;
            product(
                &format!("item-{i}"),
                10.0 + step * 5.0,
                Some(facts(
                    400.0 + step * 60.0,
                    10.0 + step * 2.0,
                    8.0 + step,
                    60.0 + step * 9.0,
                )),
            )
        })
        .collect()
}

/// Consumer without recorded age, sex, or position
pub fn anonymous_buyer() -> BuyerContext {
    BuyerContext::Consumer(BuyerProfile::default())
}

/// Consumer with age and sex
pub fn buyer(age: u32, sex: BiologicalSex, position: Option<GeoPoint>) -> BuyerContext {
    BuyerContext::Consumer(BuyerProfile {
        age: Some(age),
        sex: Some(sex),
        position,
    })
}
