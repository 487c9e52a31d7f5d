pub mod distance;
pub mod error;
pub mod pipeline;
pub mod sequencer;
pub mod waypoint;

pub use distance::haversine_km;
pub use error::RouteError;
pub use pipeline::RoutePlanner;
pub use sequencer::nearest_neighbor_order;
pub use waypoint::{EnrichedWaypoint, Route, Waypoint};
