use super::error::RouteError;
use super::sequencer::nearest_neighbor_order;
use super::waypoint::{EnrichedWaypoint, Route, Waypoint};
use crate::sdk::enrich::cache::ImageCache;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// Builds an ordered, enriched route from a raw waypoint list: fan out
/// one enrichment task per waypoint, join them all, then hand the
/// enriched set to the sequencer.
pub struct RoutePlanner {
    cache: Arc<ImageCache>,
}

impl RoutePlanner {
    pub fn new(cache: Arc<ImageCache>) -> Self {
        Self { cache }
    }

    /// An enrichment failure degrades that one waypoint to an absent
    /// image; only cancellation fails the build as a whole, since the
    /// sequencer needs every waypoint's outcome before it can run.
    pub async fn build_route(
        &self,
        waypoints: &[Waypoint],
        cancel: &CancellationToken,
    ) -> Result<Route, RouteError> {
        if waypoints.is_empty() {
            return Ok(Vec::new());
        }

        log::info!("Enriching {} waypoints", waypoints.len());
        let mut tasks = JoinSet::new();
        for (idx, waypoint) in waypoints.iter().enumerate() {
            let cache = Arc::clone(&self.cache);
            let name = waypoint.name.clone();
            tasks.spawn(async move { (idx, cache.get(&name).await) });
        }

        // Fan-in barrier: completion order is irrelevant because results
        // land back in their input slot. Dropping the JoinSet on the
        // cancel branch aborts whatever is still outstanding.
        let mut images: Vec<Option<String>> = vec![None; waypoints.len()];
        loop {
            tokio::select! {
                _ = cancel.cancelled() => return Err(RouteError::Cancelled),
                joined = tasks.join_next() => match joined {
                    Some(Ok((idx, image))) => images[idx] = image,
                    Some(Err(e)) => log::warn!("Enrichment task failed: {}", e),
                    None => break,
                },
            }
        }

        let enriched: Vec<EnrichedWaypoint> = waypoints
            .iter()
            .zip(images)
            .map(|(w, image_url)| EnrichedWaypoint {
                name: w.name.clone(),
                lat: w.lat,
                lng: w.lng,
                image_url,
            })
            .collect();

        Ok(nearest_neighbor_order(enriched))
    }
}
