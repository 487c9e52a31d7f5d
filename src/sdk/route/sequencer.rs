use super::distance::haversine_km;
use super::waypoint::EnrichedWaypoint;

/// Orders waypoints by greedy nearest-neighbor selection.
///
/// The tour is seeded by the first input element, never by a best-start
/// search. Each step appends the unplaced waypoint closest to the last
/// placed one; the strict `<` comparison means the earliest input index
/// wins when candidates are equidistant. This is a local heuristic, not
/// an optimal tour, and downstream consumers rely on this exact
/// ordering behavior. O(n²), fine for itinerary-sized inputs.
pub fn nearest_neighbor_order(waypoints: Vec<EnrichedWaypoint>) -> Vec<EnrichedWaypoint> {
    if waypoints.len() <= 1 {
        return waypoints;
    }

    let mut remaining = waypoints;
    let mut ordered = Vec::with_capacity(remaining.len());
    ordered.push(remaining.remove(0));

    while !remaining.is_empty() {
        let last = &ordered[ordered.len() - 1];
        let mut nearest = 0;
        let mut best = haversine_km(last.lat, last.lng, remaining[0].lat, remaining[0].lng);
        for (i, candidate) in remaining.iter().enumerate().skip(1) {
            let dist = haversine_km(last.lat, last.lng, candidate.lat, candidate.lng);
            if dist < best {
                best = dist;
                nearest = i;
            }
        }
        ordered.push(remaining.remove(nearest));
    }

    ordered
}
