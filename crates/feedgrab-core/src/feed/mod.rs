mod fetcher;
mod models;
mod parser;

pub use fetcher::FeedFetcher;
pub use models::{ArticleRecord, FeedResponse, FeedResult, NO_DESCRIPTION, NO_PUB_DATE};
pub use parser::parse_feed;
