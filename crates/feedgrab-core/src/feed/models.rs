use serde::{Deserialize, Serialize};

/// Sentinel stored when an item has no <pubDate> element
pub const NO_PUB_DATE: &str = "No Publication Date";

/// Sentinel stored when an item has no <description> element
pub const NO_DESCRIPTION: &str = "No Description";

/// A parsed feed: the channel title plus its articles in document order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResult {
    pub title: String,
    pub items: Vec<ArticleRecord>,
}

/// A single news item extracted from the feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    /// Raw feed-supplied date string, or NO_PUB_DATE when absent
    pub pub_date: String,
    pub description: String,
    pub link: String,
}

/// Raw HTTP response handed from the fetcher to the parser
#[derive(Debug, Clone)]
pub struct FeedResponse {
    pub status: u16,
    pub body: String,
}
