// ABOUTME: Listing search filters for the marketplace browse page
// ABOUTME: Name/address text match, effective price cap, and radius around the buyer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

use foodbridge_core::models::{GeoPoint, ProductRecord};
use foodbridge_intelligence::scoring_constants::{round_to, REPORTED_DECIMALS};
use foodbridge_intelligence::DistanceEvaluator;

/// A listing returned by search, with its distance when one was computed
#[derive(Debug, Clone, PartialEq)]
pub struct ListedProduct {
    /// The listing
    pub product: ProductRecord,
    /// Distance from the search origin in km, rounded to two decimals
    pub distance_km: Option<f64>,
}

/// Filters applied to the listing browse
///
/// Every filter is optional. Non-positive prices and radii are ignored, as is
/// a radius without an origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    /// Case-insensitive substring of the name or address
    pub search: Option<String>,
    /// Highest effective price to keep
    pub max_price: Option<f64>,
    /// Search radius in km around `origin`
    pub radius_km: Option<f64>,
    /// Where the radius is measured from
    pub origin: Option<GeoPoint>,
}

impl ProductQuery {
    /// Apply the filters to `products`, keeping their order
    #[must_use]
    pub fn apply<D: DistanceEvaluator>(
        &self,
        products: &[ProductRecord],
        distance: &D,
    ) -> Vec<ListedProduct> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_lowercase);
        let max_price = self.max_price.filter(|price| *price > 0.0);
        let radius = self.radius_km.filter(|radius| *radius > 0.0).zip(self.origin);

        products
            .iter()
            .filter(|product| {
                needle.as_deref().is_none_or(|needle| {
                    product.name.to_lowercase().contains(needle)
                        || product.address.to_lowercase().contains(needle)
                })
            })
            .filter(|product| max_price.is_none_or(|cap| product.effective_price() <= cap))
            .filter_map(|product| {
                let Some((radius, origin)) = radius else {
                    return Some(ListedProduct {
                        product: product.clone(),
                        distance_km: None,
                    });
                };

                // Listings without coordinates stay visible with an unknown distance
                match distance.distance_km(Some(origin), product.position()) {
                    None => Some(ListedProduct {
                        product: product.clone(),
                        distance_km: None,
                    }),
                    Some(km) if km <= radius => Some(ListedProduct {
                        product: product.clone(),
                        distance_km: Some(round_to(km, REPORTED_DECIMALS)),
                    }),
                    Some(_) => None,
                }
            })
            .collect()
    }
}
