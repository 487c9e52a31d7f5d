use super::error::EnrichError;
use super::service::ImageSource;
use crate::sdk::config::EnrichConfig;
use crate::sdk::util::rate_limit::Limiter;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

// --- Data structures for parsing page-summary responses ---
#[derive(Deserialize)]
pub struct SummaryResponse {
    pub thumbnail: Option<Thumbnail>,
}
#[derive(Deserialize)]
pub struct Thumbnail {
    pub source: String,
}

/// Client for the Wikipedia REST `page/summary` endpoint.
pub struct WikiSummaryClient {
    client: Client,
    base_url: String,
    limiter: Limiter,
}

impl WikiSummaryClient {
    pub fn new(config: &EnrichConfig, limiter: Limiter) -> Self {
        Self {
            client: Client::builder().timeout(config.timeout).build().unwrap(),
            base_url: config.base_url.clone(),
            limiter,
        }
    }

    /// One outbound request per call. The summary API canonicalizes page
    /// titles with underscores, so "Taj Mahal" becomes "Taj_Mahal".
    async fn fetch_summary(&self, place: &str) -> Result<Option<String>, EnrichError> {
        self.limiter.until_ready().await;
        let title = place.trim().replace(' ', "_");
        let url = format!("{}/page/summary/{}", self.base_url, title);
        log::debug!("[CLIENT] Fetching summary for \"{}\"", place);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EnrichError::Status(status));
        }

        let summary: SummaryResponse = response.json().await?;
        Ok(summary.thumbnail.map(|t| t.source))
    }
}

#[async_trait]
impl ImageSource for WikiSummaryClient {
    async fn thumbnail(&self, place: &str) -> Option<String> {
        match self.fetch_summary(place).await {
            Ok(image) => image,
            Err(e) => {
                log::warn!("Image lookup failed for \"{}\": {}", place, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_thumbnail_source() {
        let body = r#"{
            "title": "Jaipur",
            "thumbnail": {
                "source": "https://upload.wikimedia.org/jaipur.jpg",
                "width": 320,
                "height": 240
            },
            "extract": "Jaipur is the capital of Rajasthan."
        }"#;
        let summary: SummaryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            summary.thumbnail.map(|t| t.source).as_deref(),
            Some("https://upload.wikimedia.org/jaipur.jpg")
        );
    }

    #[test]
    fn missing_thumbnail_field_is_absent() {
        let body = r#"{"title": "Somewhere", "extract": "No photo here."}"#;
        let summary: SummaryResponse = serde_json::from_str(body).unwrap();
        assert!(summary.thumbnail.is_none());
    }
}
