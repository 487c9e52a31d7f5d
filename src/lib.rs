pub mod sdk;

pub use sdk::config::EnrichConfig;
pub use sdk::enrich::cache::ImageCache;
pub use sdk::enrich::client::WikiSummaryClient;
pub use sdk::enrich::service::ImageSource;
pub use sdk::route::pipeline::RoutePlanner;
pub use sdk::route::waypoint::{EnrichedWaypoint, Route, Waypoint};
