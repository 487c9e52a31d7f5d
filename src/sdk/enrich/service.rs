use async_trait::async_trait;

/// Best-effort lookup of a representative thumbnail for a named place.
///
/// Implementations must never treat a single failed lookup as fatal:
/// network errors, bad payloads and missing thumbnails all come back as
/// `None` so one unlucky place cannot take down a whole route build.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn thumbnail(&self, place: &str) -> Option<String>;
}
