use std::fmt::Write;

use super::effective_count;
use crate::feed::FeedResult;

const DIVIDER: &str =
    "====================================================================================";

/// Render the feed as labeled text blocks, one per article.
/// A limit of 0 prints every item.
pub fn render(feed: &FeedResult, limit: usize) -> String {
    let count = effective_count(feed.items.len(), limit);
    let mut out = String::new();

    let _ = writeln!(out, "\nFeed: {}\n", feed.title);
    for item in feed.items.iter().take(count) {
        let _ = writeln!(out, "Title: {}", item.title);
        let _ = writeln!(out, "Date Published: {}", item.pub_date);
        let _ = writeln!(out, "Description: {}", item.description);
        let _ = writeln!(out, "Link: {}", item.link);
        let _ = writeln!(out, "\n{}\n", DIVIDER);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::{ArticleRecord, NO_DESCRIPTION, NO_PUB_DATE};

    fn sample_feed(item_count: usize) -> FeedResult {
        let items = (1..=item_count)
            .map(|i| ArticleRecord {
                title: format!("Story {}", i),
                pub_date: format!("Day {}", i),
                description: format!("Summary {}", i),
                link: format!("http://example.com/{}", i),
            })
            .collect();
        FeedResult {
            title: "Example Feed".to_string(),
            items,
        }
    }

    #[test]
    fn test_renders_all_items_without_limit() {
        let out = render(&sample_feed(3), 0);
        assert!(out.contains("Feed: Example Feed"));
        assert_eq!(out.matches("Title: ").count(), 3);
        assert_eq!(out.matches(DIVIDER).count(), 3);
        // Feed order preserved
        let first = out.find("Story 1").unwrap();
        let last = out.find("Story 3").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_limit_truncates_to_first_n() {
        let out = render(&sample_feed(5), 2);
        assert!(out.contains("Story 1"));
        assert!(out.contains("Story 2"));
        assert!(!out.contains("Story 3"));
    }

    #[test]
    fn test_limit_beyond_total_prints_all() {
        let out = render(&sample_feed(2), 10);
        assert_eq!(out.matches("Title: ").count(), 2);
    }

    #[test]
    fn test_empty_feed_prints_header_only() {
        let out = render(&sample_feed(0), 0);
        assert!(out.contains("Feed: Example Feed"));
        assert!(!out.contains("Title: "));
        assert!(!out.contains(DIVIDER));
    }

    #[test]
    fn test_sentinels_appear_verbatim() {
        let feed = FeedResult {
            title: "Tech News".to_string(),
            items: vec![ArticleRecord {
                title: "AI breakthrough".to_string(),
                pub_date: NO_PUB_DATE.to_string(),
                description: NO_DESCRIPTION.to_string(),
                link: "http://x/1".to_string(),
            }],
        };

        let out = render(&feed, 0);
        assert!(out.contains("Feed: Tech News"));
        assert!(out.contains("Title: AI breakthrough"));
        assert!(out.contains("Date Published: No Publication Date"));
        assert!(out.contains("Description: No Description"));
        assert!(out.contains("Link: http://x/1"));
    }
}
