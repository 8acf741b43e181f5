// ABOUTME: Catalog seeder writing a demo snapshot for local development
// ABOUTME: Creates the admin store, demo buyers, gazetteer places, and priced listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

//! Catalog seeder
//!
//! Usage:
//! ```bash
//! # Built-in demo menu
//! cargo run --bin seed-catalog -- --output catalog.json
//!
//! # Listings built from a USDA-style reference table
//! cargo run --bin seed-catalog -- --reference usda/train.csv --limit 200
//! ```

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, Utc};
use clap::Parser;
use foodbridge_core::models::{GeoPoint, NutritionFacts, ProductRecord};
use foodbridge_server::catalog::reference::load_reference_csv;
use foodbridge_server::catalog::{Account, CatalogSnapshot, ReferenceFood};
use foodbridge_server::geocoding::Place;
use foodbridge_server::logging::LoggingConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tracing::info;
use uuid::{Builder, Uuid};

#[derive(Parser)]
#[command(
    name = "seed-catalog",
    about = "Foodbridge catalog seeder",
    long_about = "Write a catalog snapshot with demo accounts and discounted listings"
)]
struct SeedArgs {
    /// Where to write the snapshot
    #[arg(long, short = 'o', default_value = "catalog.json")]
    output: PathBuf,

    /// USDA-style reference CSV to build listings from
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Maximum number of listings
    #[arg(long, default_value = "50")]
    limit: usize,

    /// Seed for prices, discounts, and identifiers
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Gazetteer shipped with the demo catalog
const PLACES: [(&str, f64, f64); 6] = [
    ("Taipei Main Station", 25.0478, 121.5170),
    ("Ximending", 25.0421, 121.5081),
    ("Taipei 101", 25.0340, 121.5645),
    ("National Taiwan University", 25.0174, 121.5397),
    ("Shilin Night Market", 25.0880, 121.5241),
    ("Banqiao Station", 25.0143, 121.4635),
];

/// Built-in menu used when no reference table is given
const DEMO_MENU: [(&str, NutritionFacts); 12] = [
    ("Chicken bento", dish(720.0, 32.0, 24.0, 92.0, 4.0, 6.0, 980.0)),
    ("Salmon onigiri", dish(210.0, 7.0, 3.5, 38.0, 0.8, 1.0, 420.0)),
    ("Tuna sandwich", dish(340.0, 16.0, 13.0, 38.0, 2.5, 4.0, 610.0)),
    ("Garden salad", dish(120.0, 4.0, 6.0, 12.0, 4.5, 5.0, 180.0)),
    ("Beef noodle soup", dish(610.0, 34.0, 18.0, 72.0, 3.0, 5.0, 1900.0)),
    ("Tofu rice bowl", dish(520.0, 22.0, 14.0, 76.0, 5.0, 4.0, 720.0)),
    ("Greek yogurt", dish(150.0, 15.0, 4.0, 12.0, 0.0, 11.0, 60.0)),
    ("Banana bread", dish(330.0, 5.0, 12.0, 52.0, 2.0, 28.0, 290.0)),
    ("Vegetable dumplings", dish(430.0, 14.0, 15.0, 58.0, 4.0, 3.0, 880.0)),
    ("Soy milk", dish(130.0, 8.0, 4.0, 15.0, 1.5, 9.0, 90.0)),
    ("Fruit cup", dish(90.0, 1.0, 0.3, 23.0, 2.5, 19.0, 5.0)),
    ("Pork bun", dish(280.0, 11.0, 10.0, 36.0, 1.5, 7.0, 510.0)),
];

const fn dish(
    energy: f64,
    protein: f64,
    fat: f64,
    carbohydrate: f64,
    fiber: f64,
    sugars: f64,
    sodium: f64,
) -> NutritionFacts {
    NutritionFacts {
        energy,
        protein,
        fat,
        carbohydrate,
        fiber,
        sodium,
        sugars: Some(sugars),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    LoggingConfig {
        level: if args.verbose { "debug" } else { "info" }.to_owned(),
        ..LoggingConfig::from_env()
    }
    .init()?;

    let mut rng = StdRng::seed_from_u64(args.seed);
    let today = Utc::now().date_naive();

    let foods = match &args.reference {
        Some(path) => {
            let import = load_reference_csv(path)
                .await
                .with_context(|| format!("Failed to import {}", path.display()))?;
            info!(
                foods.count = import.foods.len(),
                rows.skipped = import.skipped_rows,
                "Imported reference nutrition table"
            );
            import.foods
        }
        None => demo_foods(),
    };

    let admin = admin_account(&mut rng)?;
    let places: Vec<Place> = PLACES
        .iter()
        .map(|&(name, latitude, longitude)| Place {
            name: name.to_owned(),
            latitude,
            longitude,
        })
        .collect();

    let products: Vec<ProductRecord> = foods
        .into_iter()
        .take(args.limit)
        .map(|food| listing(&mut rng, food, admin.id, &places, today))
        .collect();

    let mut accounts = vec![admin];
    accounts.extend(demo_buyers(&mut rng)?);

    let snapshot = CatalogSnapshot {
        accounts,
        products,
        places,
    };
    snapshot.save(&args.output).await?;

    info!(
        output = %args.output.display(),
        accounts.count = snapshot.accounts.len(),
        products.count = snapshot.products.len(),
        "Catalog snapshot written"
    );
    Ok(())
}

fn seeded_id(rng: &mut StdRng) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("Invalid date {year}-{month}-{day}"))
}

fn admin_account(rng: &mut StdRng) -> Result<Account> {
    Ok(Account {
        id: seeded_id(rng),
        username: "admin".to_owned(),
        email: "admin@example.com".to_owned(),
        is_store: true,
        gender: Some("M".to_owned()),
        birthdate: Some(date(1990, 1, 1)?),
    })
}

fn demo_buyers(rng: &mut StdRng) -> Result<Vec<Account>> {
    let buyers = [
        ("mei", "F", date(1998, 4, 12)?),
        ("jun", "M", date(1984, 11, 3)?),
        ("ama", "F", date(1956, 2, 27)?),
    ];

    let mut accounts: Vec<Account> = buyers
        .into_iter()
        .map(|(username, gender, birthdate)| Account {
            id: seeded_id(rng),
            username: username.to_owned(),
            email: format!("{username}@example.com"),
            is_store: false,
            gender: Some(gender.to_owned()),
            birthdate: Some(birthdate),
        })
        .collect();

    // A buyer with nothing recorded gets the default targets
    accounts.push(Account {
        id: seeded_id(rng),
        username: "guest".to_owned(),
        email: "guest@example.com".to_owned(),
        is_store: false,
        gender: None,
        birthdate: None,
    });

    Ok(accounts)
}

fn demo_foods() -> Vec<ReferenceFood> {
    DEMO_MENU
        .iter()
        .enumerate()
        .map(|(index, &(name, nutrition))| ReferenceFood {
            food_id: format!("demo-{index}"),
            name: name.to_owned(),
            nutrition,
            position: None,
        })
        .collect()
}

fn listing(
    rng: &mut StdRng,
    food: ReferenceFood,
    store_id: Uuid,
    places: &[Place],
    today: NaiveDate,
) -> ProductRecord {
    let place = &places[rng.gen_range(0..places.len())];
    let position = food
        .position
        .unwrap_or_else(|| GeoPoint::new(place.latitude, place.longitude));
    let original_price = f64::from(rng.gen_range(5_u32..=30) * 10);
    let discount_rate = f64::from(rng.gen_range(3_u32..=9)) / 10.0;

    ProductRecord {
        id: seeded_id(rng),
        name: food.name,
        description: Some(format!("Reference food {}", food.food_id)),
        quantity: 10,
        address: place.name.clone(),
        latitude: Some(position.latitude),
        longitude: Some(position.longitude),
        expiry_date: today + Duration::days(rng.gen_range(1..=7)),
        original_price,
        discount_rate,
        nutrition: Some(food.nutrition),
        store_id,
    }
}
