use crate::models::{Store, StoreResult};
use std::cmp::Ordering;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Store locator search
///
/// Applies the name search (case-insensitive substring, empty keeps all),
/// computes each store's distance from the given position, drops stores
/// outside `max_distance_km` when set, and sorts ascending by distance with
/// name as the tie-break.
pub fn find_nearby_stores(
    stores: &[Store],
    latitude: f64,
    longitude: f64,
    search_text: &str,
    max_distance_km: Option<f64>,
) -> Vec<StoreResult> {
    let query = search_text.trim().to_lowercase();

    let mut results: Vec<StoreResult> = stores
        .iter()
        .filter(|store| query.is_empty() || store.name.to_lowercase().contains(&query))
        .map(|store| StoreResult {
            store: store.clone(),
            distance_km: haversine_distance(latitude, longitude, store.latitude, store.longitude),
        })
        .filter(|result| max_distance_km.map_or(true, |max| result.distance_km <= max))
        .collect();

    results.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.store.name.cmp(&b.store.name))
    });

    results
}
