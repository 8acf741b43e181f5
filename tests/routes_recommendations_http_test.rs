// ABOUTME: HTTP integration tests for the recommendation route
// ABOUTME: Buyer resolution, eligibility, positions, price ceilings, and error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::{fixture, router_for, Fixture, TAIPEI_MAIN};
use foodbridge_server::catalog::CatalogSnapshot;
use foodbridge_server::routes::views::RecommendationResponse;
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use std::collections::HashSet;
use uuid::Uuid;

async fn recommend(snapshot: CatalogSnapshot, body: Value) -> (u16, Value) {
    let response = AxumTestRequest::post("/api/recommendations")
        .json(&body)
        .send(router_for(snapshot))
        .await;
    (response.status(), response.json())
}

async fn recommend_ok(fixture: Fixture, body: Value) -> RecommendationResponse {
    let (status, json) = recommend(fixture.snapshot, body).await;
    assert_eq!(status, 200, "unexpected body: {json}");
    serde_json::from_value(json).unwrap()
}

#[tokio::test]
async fn test_located_buyer_gets_three_listings_and_two_sets() {
    let fixture = fixture();
    let buyer_id = fixture.buyer.id;
    let response = recommend_ok(
        fixture,
        json!({
            "buyer_id": buyer_id,
            "latitude": TAIPEI_MAIN.0,
            "longitude": TAIPEI_MAIN.1
        }),
    )
    .await;

    assert_eq!(response.individual_recommendations.len(), 3);
    assert_eq!(response.set_recommendations.len(), 2);
    assert!(response
        .individual_recommendations
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));

    for set in &response.set_recommendations {
        let ids: HashSet<_> = set.products.iter().map(|product| product.id).collect();
        assert_eq!(ids.len(), 3);
    }
}

#[tokio::test]
async fn test_targets_follow_buyer_age_and_sex() {
    // Born 1998-04-12, 27 on the fixed reference date
    let fixture = fixture();
    let buyer_id = fixture.buyer.id;
    let response = recommend_ok(fixture, json!({ "buyer_id": buyer_id })).await;
    assert!((response.nutrition_needs.calories - 2100.0).abs() < f64::EPSILON);
    assert!((response.nutrition_needs.protein - 50.0).abs() < f64::EPSILON);

    // Born 1950, past seventy
    let fixture = common::fixture();
    let senior_id = fixture.senior.id;
    let response = recommend_ok(fixture, json!({ "buyer_id": senior_id })).await;
    assert!((response.nutrition_needs.calories - 1600.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_buyer_without_profile_gets_default_targets() {
    let fixture = fixture();
    let guest_id = fixture.guest.id;
    let response = recommend_ok(fixture, json!({ "buyer_id": guest_id })).await;

    let needs = response.nutrition_needs;
    assert!((needs.calories - 2000.0).abs() < f64::EPSILON);
    assert!((needs.protein - 65.0).abs() < f64::EPSILON);
    assert!((needs.fat - 55.0).abs() < f64::EPSILON);
    assert!((needs.carbs - 300.0).abs() < f64::EPSILON);
    assert!((needs.fiber - 25.0).abs() < f64::EPSILON);
    assert!((needs.sodium - 2000.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_listing_without_nutrition_is_never_recommended() {
    let fixture = fixture();
    let buyer_id = fixture.buyer.id;
    let response = recommend_ok(fixture, json!({ "buyer_id": buyer_id })).await;

    let mut recommended = response
        .individual_recommendations
        .iter()
        .map(|item| item.product.name.as_str())
        .chain(
            response
                .set_recommendations
                .iter()
                .flat_map(|set| set.products.iter().map(|product| product.name.as_str())),
        );
    assert!(recommended.all(|name| name != "Mystery box"));
}

#[tokio::test]
async fn test_unlocated_buyer_has_no_distances() {
    let fixture = fixture();
    let buyer_id = fixture.buyer.id;
    let response = recommend_ok(fixture, json!({ "buyer_id": buyer_id })).await;

    assert!(response
        .individual_recommendations
        .iter()
        .all(|item| item.distance.is_none()));
    assert!(response
        .set_recommendations
        .iter()
        .all(|set| set.avg_distance.abs() < f64::EPSILON));
}

#[tokio::test]
async fn test_address_is_geocoded_when_coordinates_are_missing() {
    let fixture = fixture();
    let buyer_id = fixture.buyer.id;
    let response = recommend_ok(
        fixture,
        json!({ "buyer_id": buyer_id, "address": "  taipei main STATION " }),
    )
    .await;

    let located: Vec<_> = response
        .individual_recommendations
        .iter()
        .filter(|item| item.product.latitude.is_some())
        .collect();
    assert!(!located.is_empty());
    assert!(located.iter().all(|item| item.distance.is_some()));
}

#[tokio::test]
async fn test_unknown_address_falls_back_to_unlocated_scoring() {
    let fixture = fixture();
    let buyer_id = fixture.buyer.id;
    let response = recommend_ok(
        fixture,
        json!({ "buyer_id": buyer_id, "address": "Somewhere unmapped" }),
    )
    .await;

    assert!(response
        .individual_recommendations
        .iter()
        .all(|item| item.distance.is_none()));
}

#[tokio::test]
async fn test_price_ceiling_excludes_expensive_listings() {
    let fixture = fixture();
    let buyer_id = fixture.buyer.id;
    let response = recommend_ok(fixture, json!({ "buyer_id": buyer_id, "max_price": 30 })).await;

    let names: Vec<&str> = response
        .individual_recommendations
        .iter()
        .map(|item| item.product.name.as_str())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"Salmon onigiri"));
    assert!(names.contains(&"Fruit cup"));
    assert!(response.set_recommendations.is_empty());
}

#[tokio::test]
async fn test_zero_price_ceiling_means_no_ceiling() {
    let fixture = fixture();
    let buyer_id = fixture.buyer.id;
    let response = recommend_ok(fixture, json!({ "buyer_id": buyer_id, "max_price": 0 })).await;
    assert_eq!(response.individual_recommendations.len(), 3);
}

#[tokio::test]
async fn test_store_account_is_forbidden() {
    let fixture = fixture();
    let store_id = fixture.store.id;
    let (status, body) = recommend(fixture.snapshot, json!({ "buyer_id": store_id })).await;

    assert_eq!(status, 403);
    assert_eq!(body["error"]["code"], "PERMISSION_DENIED");
    assert_eq!(
        body["error"]["message"],
        "Store accounts cannot use recommendations"
    );
}

#[tokio::test]
async fn test_unknown_buyer_is_not_found() {
    let (status, body) =
        recommend(fixture().snapshot, json!({ "buyer_id": Uuid::new_v4() })).await;

    assert_eq!(status, 404);
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_empty_catalog_reports_no_products() {
    let mut fixture = fixture();
    fixture.snapshot.products.clear();
    let buyer_id = fixture.buyer.id;

    let (status, body) = recommend(fixture.snapshot, json!({ "buyer_id": buyer_id })).await;

    assert_eq!(status, 404);
    assert_eq!(body["error"]["message"], "No products available");
}

#[tokio::test]
async fn test_malformed_nutrition_is_a_data_integrity_error() {
    let fixture = fixture();
    let buyer_id = fixture.buyer.id;

    let mut snapshot = serde_json::to_value(&fixture.snapshot).unwrap();
    snapshot["products"][0]["nutrition_info"]["energy"] = json!("plenty");
    let snapshot: CatalogSnapshot = serde_json::from_value(snapshot).unwrap();

    let (status, body) = recommend(snapshot, json!({ "buyer_id": buyer_id })).await;

    assert_eq!(status, 500);
    assert_eq!(body["error"]["code"], "DATA_INTEGRITY");
    assert_eq!(body["error"]["details"]["nutrient"], "energy");
}

#[tokio::test]
async fn test_blank_nutrition_listing_does_not_break_recommendations() {
    let fixture = fixture();
    let buyer_id = fixture.buyer.id;

    let mut snapshot = serde_json::to_value(&fixture.snapshot).unwrap();
    snapshot["products"][0]["nutrition_info"] = json!({});
    let snapshot: CatalogSnapshot = serde_json::from_value(snapshot).unwrap();
    let blank_id = snapshot.products[0].id;

    let (status, body) = recommend(snapshot, json!({ "buyer_id": buyer_id })).await;

    assert_eq!(status, 200, "unexpected body: {body}");
    let response: RecommendationResponse = serde_json::from_value(body).unwrap();
    assert_eq!(response.individual_recommendations.len(), 3);
    assert!(response
        .individual_recommendations
        .iter()
        .all(|item| item.product.id != blank_id));
}
