use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    /// Cancellation fired while enrichment was still outstanding. The
    /// sequencer needs every waypoint's outcome, so no partial route is
    /// returned.
    #[error("Route build cancelled before all enrichments settled")]
    Cancelled,
}
