use quick_xml::events::Event;
use quick_xml::Reader;

use super::models::{ArticleRecord, FeedResult, NO_DESCRIPTION, NO_PUB_DATE};
use crate::{Error, Result};

/// Fields collected while walking a single <item> element
#[derive(Default)]
struct ItemFields {
    title: Option<String>,
    link: Option<String>,
    pub_date: Option<String>,
    description: Option<String>,
}

impl ItemFields {
    /// Build a record, substituting sentinels for the optional fields.
    /// Returns None when title or link is missing or empty.
    fn build(self) -> Option<ArticleRecord> {
        let title = self.title.filter(|t| !t.is_empty())?;
        let link = self.link.filter(|l| !l.is_empty())?;
        Some(ArticleRecord {
            title,
            pub_date: self.pub_date.unwrap_or_else(|| NO_PUB_DATE.to_string()),
            description: self
                .description
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            link,
        })
    }
}

/// Parse RSS content into the channel title and its items, in document order.
/// Items missing a title or link are skipped with a warning; a feed without
/// a channel title is rejected outright.
pub fn parse_feed(body: &str) -> Result<FeedResult> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<String> = Vec::new();
    let mut feed_title: Option<String> = None;
    let mut feed_title_done = false;
    let mut current: Option<ItemFields> = None;
    let mut items = Vec::new();

    tracing::debug!("Parsing fetched content");

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == "item"
                    && stack.last().map(String::as_str) == Some("channel")
                    && current.is_none()
                {
                    current = Some(ItemFields::default());
                }
                stack.push(name);
            }
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| Error::MalformedFeed(format!("bad text content: {}", e)))?;
                record_text(&stack, &mut feed_title, feed_title_done, &mut current, &text);
            }
            Ok(Event::CData(t)) => {
                let text = String::from_utf8_lossy(&t.into_inner()).to_string();
                record_text(&stack, &mut feed_title, feed_title_done, &mut current, &text);
            }
            Ok(Event::End(_)) => match stack.pop().as_deref() {
                Some("item") => {
                    if let Some(fields) = current.take() {
                        match fields.build() {
                            Some(record) => items.push(record),
                            None => tracing::warn!("Skipping item without title or link"),
                        }
                    }
                }
                Some("title") => {
                    // A later duplicate <title> under <channel> must not append
                    if stack.last().map(String::as_str) == Some("channel")
                        && feed_title.is_some()
                    {
                        feed_title_done = true;
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::MalformedFeed(format!("invalid XML: {}", e))),
            _ => {}
        }
    }

    let title = feed_title
        .ok_or_else(|| Error::MalformedFeed("feed has no channel title".to_string()))?;

    tracing::debug!("Parsing complete, {} items", items.len());

    Ok(FeedResult { title, items })
}

/// Route a text or CDATA fragment to the field owning the enclosing element
fn record_text(
    stack: &[String],
    feed_title: &mut Option<String>,
    feed_title_done: bool,
    current: &mut Option<ItemFields>,
    text: &str,
) {
    let Some(element) = stack.last() else {
        return;
    };
    let parent = stack
        .len()
        .checked_sub(2)
        .and_then(|i| stack.get(i))
        .map(String::as_str);

    if let Some(item) = current.as_mut() {
        // Only direct children of <item> carry article fields
        if parent != Some("item") {
            return;
        }
        let slot = match element.as_str() {
            "title" => &mut item.title,
            "link" => &mut item.link,
            "pubDate" => &mut item.pub_date,
            "description" => &mut item.description,
            _ => return,
        };
        slot.get_or_insert_with(String::new).push_str(text);
    } else if element == "title" && parent == Some("channel") && !feed_title_done {
        feed_title.get_or_insert_with(String::new).push_str(text);
    }
}
