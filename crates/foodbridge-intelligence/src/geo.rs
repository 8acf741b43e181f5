// ABOUTME: Great-circle distance between buyer and listing coordinates
// ABOUTME: DistanceEvaluator seam with a haversine implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Foodbridge Contributors

use foodbridge_core::models::GeoPoint;

/// Mean Earth radius in kilometers (IUGG)
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Computes distances between two optional positions
///
/// Implementations return `None` when either position is unknown. Closer
/// points must never yield larger distances.
pub trait DistanceEvaluator: Send + Sync {
    /// Distance in kilometers, or `None` when it cannot be computed
    fn distance_km(&self, from: Option<GeoPoint>, to: Option<GeoPoint>) -> Option<f64>;
}

/// Haversine great-circle distance on a spherical Earth
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineDistance;

impl DistanceEvaluator for HaversineDistance {
    fn distance_km(&self, from: Option<GeoPoint>, to: Option<GeoPoint>) -> Option<f64> {
        let (from, to) = (from?, to?);

        let dlat = (to.latitude - from.latitude).to_radians();
        let dlon = (to.longitude - from.longitude).to_radians();
        let a = (dlat / 2.0).sin().powi(2)
            + from.latitude.to_radians().cos()
                * to.latitude.to_radians().cos()
                * (dlon / 2.0).sin().powi(2);
        let central_angle = 2.0 * a.sqrt().min(1.0).asin();

        Some(EARTH_RADIUS_KM * central_angle)
    }
}
