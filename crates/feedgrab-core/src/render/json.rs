use serde::{Deserialize, Serialize};

use super::effective_count;
use crate::feed::{ArticleRecord, FeedResult};
use crate::Result;

/// One element of the JSON output array
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonEntry {
    #[serde(rename = "Feed Source")]
    pub feed_source: String,
    #[serde(rename = "News Item")]
    pub news_item: NewsItem,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Link")]
    pub link: String,
}

impl JsonEntry {
    fn new(feed_title: &str, item: &ArticleRecord) -> Self {
        Self {
            feed_source: feed_title.to_string(),
            news_item: NewsItem {
                title: item.title.clone(),
                publication_date: item.pub_date.clone(),
                description: item.description.clone(),
                link: item.link.clone(),
            },
        }
    }
}

/// Serialize the feed as a pretty-printed JSON array with 4-space indentation.
/// A limit of 0 includes every item; an empty feed yields `[]`.
pub fn to_json(feed: &FeedResult, limit: usize) -> Result<String> {
    let count = effective_count(feed.items.len(), limit);
    let entries: Vec<JsonEntry> = feed
        .items
        .iter()
        .take(count)
        .map(|item| JsonEntry::new(&feed.title, item))
        .collect();

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entries.serialize(&mut ser)?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}
