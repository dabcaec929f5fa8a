// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("parameters 'type' and 'ticker' are required")]
    MissingParameter,

    #[error("no data found for the requested ticker")]
    NotFound,

    #[error("upstream returned {status} - {status_text}")]
    Upstream { status: u16, status_text: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unparseable response body: {0}")]
    Parse(String),
}
