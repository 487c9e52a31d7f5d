pub mod cache;
pub mod client;
pub mod error;
pub mod service;

pub use cache::ImageCache;
pub use client::WikiSummaryClient;
pub use error::EnrichError;
pub use service::ImageSource;
