use super::service::ImageSource;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

type Entry = Arc<OnceCell<Option<String>>>;

/// In-process memo of image lookups, keyed by place name.
///
/// Outcomes are stored whether or not an image was found, so a failed
/// lookup is not retried for the lifetime of the cache. Concurrent
/// requests for the same uncached name share a single in-flight lookup;
/// distinct names resolve independently.
pub struct ImageCache {
    source: Arc<dyn ImageSource>,
    entries: Mutex<HashMap<String, Entry>>,
}

impl ImageCache {
    pub fn new(source: Arc<dyn ImageSource>) -> Self {
        Self {
            source,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub async fn get(&self, name: &str) -> Option<String> {
        let cell = {
            let mut entries = self.entries.lock().await;
            Arc::clone(entries.entry(name.to_string()).or_default())
        };
        // First caller through runs the lookup; everyone else awaits the
        // same cell and sees the same resolved outcome.
        cell.get_or_init(|| async {
            log::debug!("[CACHE MISS] {}", name);
            self.source.thumbnail(name).await
        })
        .await
        .clone()
    }
}
