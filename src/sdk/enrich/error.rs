use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("Summary lookup returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Underlying request failed: {0}")]
    RequestError(#[from] reqwest::Error),
}
