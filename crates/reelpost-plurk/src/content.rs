//! Plurk message formatting.

use reelpost_core::ReviewRecord;

/// Maximum plurk length, in characters.
pub const PLURK_MAX_LENGTH: usize = 360;

/// Plurk qualifier attached to every review post.
pub const QUALIFIER: &str = "watches";

const ELLIPSIS: &str = "...";

/// Format a review as a plurk:
///
/// ```text
/// 🎬 {title}
/// 🔗 {link}
/// 📝 {description}
/// {hashtag}
/// ```
///
/// When the message would exceed `max_len` characters, only the description
/// is shortened: it is cut to the longest prefix that fits and `...` is
/// appended, keeping the title, link and hashtag lines intact. If those lines
/// alone leave no room, the description collapses to just `...`.
#[must_use]
pub fn format_content(review: &ReviewRecord, hashtag: &str, max_len: usize) -> String {
    let header = format!("🎬 {}\n🔗 {}\n📝 ", review.title, review.link);
    let footer = format!("\n{hashtag}");

    let full_len = char_len(&header) + char_len(&review.description) + char_len(&footer);
    if full_len <= max_len {
        return format!("{header}{}{footer}", review.description);
    }

    let budget = max_len
        .saturating_sub(char_len(&footer))
        .saturating_sub(char_len(ELLIPSIS))
        .saturating_sub(char_len(&header));
    let truncated: String = review.description.chars().take(budget).collect();

    format!("{header}{truncated}{ELLIPSIS}{footer}")
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
