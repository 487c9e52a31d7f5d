use super::distance::haversine_km;
use serde::{Deserialize, Serialize};

/// A named point of interest. Coordinates are taken as-is; validation is
/// the supplier's job.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// A waypoint with its enrichment outcome attached. `image_url` absent
/// means the lookup failed or found nothing and the renderer should fall
/// back to a placeholder marker.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EnrichedWaypoint {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

pub type Route = Vec<EnrichedWaypoint>;

/// Great-circle distance of each leg of the route, in visiting order.
/// A route of n stops has n - 1 legs.
pub fn leg_distances_km(route: &Route) -> Vec<f64> {
    route
        .windows(2)
        .map(|pair| haversine_km(pair[0].lat, pair[0].lng, pair[1].lat, pair[1].lng))
        .collect()
}

pub fn total_distance_km(route: &Route) -> f64 {
    leg_distances_km(route).iter().sum()
}
