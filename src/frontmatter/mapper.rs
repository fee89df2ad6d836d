//! Old-schema to new-schema field mapping.
//!
//! | Old key   | New key       | Transform                        |
//! |-----------|---------------|----------------------------------|
//! | `title`   | `title`       | stringified                      |
//! | `summary` | `description` | stringified                      |
//! | `date`    | `publishDate` | reformatted as `DD Mon YYYY`     |
//! | `tags`    | `tags`        | unchanged                        |
//! | `draft`   | `draft`       | kept only when truthy            |
//!
//! Every other key is dropped and nothing is filled in for missing keys.

use super::date::reformat_date;
use super::value::{FieldValue, Header};

/// Keys of the old schema that carry over.
const OLD_KEYS: &[&str] = &["title", "summary", "date", "tags", "draft"];

/// Map an old-schema header to the new schema.
///
/// Keys are emitted in the order `title, description, publishDate, tags, draft`.
pub fn map_header(old: &Header) -> Header {
    for key in old.keys().filter(|key| !OLD_KEYS.contains(key)) {
        tracing::debug!(key, "dropping unrecognized frontmatter key");
    }

    let mut new = Header::new();

    if let Some(title) = old.get("title") {
        new.insert("title", FieldValue::String(title.to_plain_string()));
    }

    if let Some(summary) = old.get("summary") {
        new.insert("description", FieldValue::String(summary.to_plain_string()));
    }

    if let Some(date) = old.get("date") {
        new.insert("publishDate", map_date(date));
    }

    if let Some(tags) = old.get("tags") {
        new.insert("tags", tags.clone());
    }

    if let Some(draft) = old.get("draft").filter(|d| d.is_truthy()) {
        new.insert("draft", draft.clone());
    }

    new
}

fn map_date(date: &FieldValue) -> FieldValue {
    match date {
        FieldValue::String(s) => FieldValue::String(reformat_date(s)),
        other => other.clone(),
    }
}
