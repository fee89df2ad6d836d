//! Render a header back to text with fixed formatting rules.
//!
//! - strings are double-quoted as-is: `title: "Pointer Problems"`
//! - lists use inline flow style: `tags: [life, programming]`, with numbers
//!   and booleans left bare and strings quoted only when needed
//! - booleans and numbers are written unquoted: `draft: true`
//!
//! Embedded double quotes in strings are not escaped.

use super::value::{FieldValue, Header, ListItem};

/// Render `header` one `key: value` line per entry, in iteration order.
///
/// The result has no trailing newline.
pub fn render_header(header: &Header) -> String {
    header
        .iter()
        .map(|(key, value)| render_line(key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(key: &str, value: &FieldValue) -> String {
    match value {
        FieldValue::String(s) => format!("{key}: \"{s}\""),
        FieldValue::List(items) => format!("{key}: {}", render_flow_list(items)),
        other => format!("{key}: {}", other.to_string().trim_end()),
    }
}

fn render_flow_list(items: &[ListItem]) -> String {
    let rendered: Vec<String> = items.iter().map(render_flow_item).collect();
    format!("[{}]", rendered.join(", "))
}

fn render_flow_item(item: &ListItem) -> String {
    match item {
        ListItem::Bare(s) => s.clone(),
        ListItem::Text(s) if is_plain_safe(s) => s.clone(),
        ListItem::Text(s) => format!("'{}'", s.replace('\'', "''")),
    }
}

/// Whether `s` reads back as the same string when written unquoted inside a
/// flow sequence.
fn is_plain_safe(s: &str) -> bool {
    const INDICATORS: &[char] = &[
        '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%',
        '@', '`',
    ];
    const RESERVED: &[&str] = &["true", "false", "null", "~", "yes", "no", "on", "off"];

    let Some(first) = s.chars().next() else {
        return false;
    };
    if INDICATORS.contains(&first) || s.trim() != s {
        return false;
    }
    if s.contains([',', '[', ']', '{', '}', '\n', '\r', '\t'])
        || s.contains(": ")
        || s.contains(" #")
        || s.ends_with(':')
    {
        return false;
    }
    if RESERVED.contains(&s.to_ascii_lowercase().as_str()) {
        return false;
    }
    s.parse::<f64>().is_err()
}
