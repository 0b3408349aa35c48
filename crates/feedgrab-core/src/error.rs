use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout error: request to {0} timed out")]
    Timeout(String),

    #[error("HTTP error: status {status} for URL: {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Ambiguous request error: {0}")]
    Transport(String),

    #[error("Malformed feed: {0}")]
    MalformedFeed(String),

    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
