pub mod config;
pub mod error;
pub mod feed;
pub mod render;

pub use config::AppConfig;
pub use error::{Error, Result};
