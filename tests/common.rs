// ABOUTME: Shared test utilities and fixtures for root crate integration tests
// ABOUTME: Quiet logging, catalog fixtures, and router construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `foodbridge_server`

use axum::Router;
use chrono::NaiveDate;
use foodbridge_core::models::{NutritionFacts, ProductRecord};
use foodbridge_server::catalog::{Account, CatalogSnapshot, InMemoryCatalog};
use foodbridge_server::config::{Environment, ServerConfig};
use foodbridge_server::geocoding::Place;
use foodbridge_server::resources::ServerResources;
use foodbridge_server::routes;
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed "today" so ages never drift
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        reference_date: Some(reference_date()),
        environment: Environment::Testing,
        ..ServerConfig::default()
    }
}

pub fn facts(energy: f64, protein: f64, fat: f64, carbohydrate: f64) -> NutritionFacts {
    NutritionFacts {
        energy,
        protein,
        fat,
        carbohydrate,
        fiber: 5.0,
        sodium: 500.0,
        sugars: Some(4.0),
    }
}

pub fn listing(
    name: &str,
    address: &str,
    original_price: f64,
    discount_rate: f64,
    position: Option<(f64, f64)>,
    nutrition: Option<NutritionFacts>,
) -> ProductRecord {
    ProductRecord {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        description: None,
        quantity: 10,
        address: address.to_owned(),
        latitude: position.map(|(lat, _)| lat),
        longitude: position.map(|(_, lon)| lon),
        expiry_date: NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
        original_price,
        discount_rate,
        nutrition,
        store_id: Uuid::nil(),
    }
}

pub fn account(
    username: &str,
    is_store: bool,
    gender: Option<&str>,
    birthdate: Option<NaiveDate>,
) -> Account {
    Account {
        id: Uuid::new_v4(),
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        is_store,
        gender: gender.map(str::to_owned),
        birthdate,
    }
}

pub const TAIPEI_MAIN: (f64, f64) = (25.0478, 121.5170);
pub const XIMENDING: (f64, f64) = (25.0421, 121.5081);
pub const KAOHSIUNG: (f64, f64) = (22.6394, 120.3022);

/// Demo catalog: one store, three buyers, six listings, two places
pub struct Fixture {
    pub snapshot: CatalogSnapshot,
    pub store: Account,
    pub buyer: Account,
    pub senior: Account,
    pub guest: Account,
}

pub fn fixture() -> Fixture {
    let store = account("corner-store", true, Some("M"), None);
    let buyer = account("mei", false, Some("F"), NaiveDate::from_ymd_opt(1998, 4, 12));
    let senior = account("ama", false, Some("F"), NaiveDate::from_ymd_opt(1950, 2, 27));
    let guest = account("guest", false, None, None);

    let products = vec![
        listing(
            "Chicken bento",
            "Taipei Main Station",
            120.0,
            0.5,
            Some(TAIPEI_MAIN),
            Some(facts(720.0, 32.0, 24.0, 92.0)),
        ),
        listing(
            "Salmon onigiri",
            "Ximending",
            45.0,
            0.6,
            Some(XIMENDING),
            Some(facts(210.0, 7.0, 3.5, 38.0)),
        ),
        listing(
            "Tofu rice bowl",
            "Taipei Main Station",
            100.0,
            0.7,
            Some(TAIPEI_MAIN),
            Some(facts(520.0, 22.0, 14.0, 76.0)),
        ),
        listing(
            "Beef noodle soup",
            "Kaohsiung Arena",
            160.0,
            0.5,
            Some(KAOHSIUNG),
            Some(facts(610.0, 34.0, 18.0, 72.0)),
        ),
        listing(
            "Fruit cup",
            "Night market stall",
            40.0,
            0.5,
            None,
            Some(facts(90.0, 1.0, 0.3, 23.0)),
        ),
        listing(
            "Mystery box",
            "Ximending",
            30.0,
            0.5,
            Some(XIMENDING),
            None,
        ),
    ];

    let places = vec![
        Place {
            name: "Taipei Main Station".to_owned(),
            latitude: TAIPEI_MAIN.0,
            longitude: TAIPEI_MAIN.1,
        },
        Place {
            name: "Ximending".to_owned(),
            latitude: XIMENDING.0,
            longitude: XIMENDING.1,
        },
    ];

    Fixture {
        snapshot: CatalogSnapshot {
            accounts: vec![store.clone(), buyer.clone(), senior.clone(), guest.clone()],
            products,
            places,
        },
        store,
        buyer,
        senior,
        guest,
    }
}

pub fn router_for(snapshot: CatalogSnapshot) -> Router {
    init_test_logging();
    let catalog = Arc::new(InMemoryCatalog::from_snapshot(snapshot));
    routes::router(Arc::new(ServerResources::new(test_config(), catalog)))
}
