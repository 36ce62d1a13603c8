//! Raw publish-date text per feed entry.
//!
//! `feed-rs` only exposes parsed UTC timestamps, so the text as written in the
//! feed is recovered with a second, shallow pass over the XML.

use quick_xml::events::Event;
use quick_xml::Reader;

const ENTRY_TAGS: [&[u8]; 2] = [b"item", b"entry"];
const DATE_TAGS: [&[u8]; 4] = [b"pubDate", b"published", b"date", b"issued"];

/// Returns one slot per `<item>`/`<entry>` in document order, holding the
/// trimmed text of its first direct date child.
///
/// Returns `None` when the document is not readable XML (e.g. a JSON feed).
pub(crate) fn raw_publish_dates(bytes: &[u8]) -> Option<Vec<Option<String>>> {
    let mut reader = Reader::from_reader(bytes);
    reader.config_mut().trim_text(true);

    let mut dates: Vec<Option<String>> = Vec::new();
    let mut depth = 0usize;
    let mut entry_depth: Option<usize> = None;
    let mut capturing = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                let name = e.local_name();
                match entry_depth {
                    None if ENTRY_TAGS.contains(&name.as_ref()) => {
                        entry_depth = Some(depth);
                        dates.push(None);
                    }
                    Some(d) if depth == d + 1 && DATE_TAGS.contains(&name.as_ref()) => {
                        capturing = dates.last().is_some_and(Option::is_none);
                    }
                    _ => {}
                }
            }
            Ok(Event::End(_)) => {
                if entry_depth == Some(depth) {
                    entry_depth = None;
                }
                capturing = false;
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Empty(e)) => {
                if entry_depth.is_none() && ENTRY_TAGS.contains(&e.local_name().as_ref()) {
                    dates.push(None);
                }
            }
            Ok(Event::Text(e)) if capturing => {
                let text = e.unescape().unwrap_or_default().trim().to_string();
                store(&mut dates, text);
            }
            Ok(Event::CData(e)) if capturing => {
                let text = String::from_utf8_lossy(&e.into_inner()).trim().to_string();
                store(&mut dates, text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(error = %e, "feed is not XML, no raw publish dates");
                return None;
            }
        }
    }

    Some(dates)
}

fn store(dates: &mut [Option<String>], text: String) {
    if let Some(slot) = dates.last_mut() {
        if slot.is_none() && !text.is_empty() {
            *slot = Some(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_pub_date_per_item_in_order() {
        let xml = br#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>t</title>
  <pubDate>Tue, 7 Jan 2025 00:00:00 +0000</pubDate>
  <item><title>a</title><pubDate>Mon, 6 Jan 2025 10:00:00 +1300</pubDate></item>
  <item><title>b</title></item>
  <item><title>c</title><dc:date xmlns:dc="http://purl.org/dc/elements/1.1/">2024-12-14T20:30:00-05:00</dc:date></item>
</channel></rss>"#;
        let dates = raw_publish_dates(xml).expect("xml");
        assert_eq!(
            dates,
            vec![
                Some("Mon, 6 Jan 2025 10:00:00 +1300".to_string()),
                None,
                Some("2024-12-14T20:30:00-05:00".to_string()),
            ]
        );
    }

    #[test]
    fn ignores_dates_nested_below_the_entry() {
        let xml = br#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <source><published>2001-01-01T00:00:00Z</published></source>
    <published>2025-01-06T10:00:00+13:00</published>
  </entry>
</feed>"#;
        let dates = raw_publish_dates(xml).expect("xml");
        assert_eq!(dates, vec![Some("2025-01-06T10:00:00+13:00".to_string())]);
    }

    #[test]
    fn json_feed_yields_no_dates() {
        assert!(raw_publish_dates(br#"{"version": "https://jsonfeed.org/version/1.1"}"#)
            .is_none_or(|dates| dates.is_empty()));
    }
}
