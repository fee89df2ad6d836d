//! Split a document into its YAML header and the untouched body.

use serde_yaml::Value;

use super::value::Header;
use crate::error::Result;
use crate::error::frontmatter::missing;

/// Boundary line that opens and closes the header block.
pub const BOUNDARY: &str = "---";

/// A document split into its parsed header and verbatim body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub header: Header,
    pub body: String,
}

/// Locate the header block at the very start of `content`.
///
/// Returns the raw header text and the body that follows the closing
/// boundary line. The closing boundary is the first `---` line after the
/// opening one.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix(BOUNDARY)?.strip_prefix('\n')?;
    let closing = format!("\n{BOUNDARY}\n");
    let end = rest.find(&closing)?;
    Some((&rest[..end], &rest[end + closing.len()..]))
}

/// Parse the header of `content` into a [`Document`].
///
/// A missing opening or closing boundary and an empty header block are both
/// reported as missing frontmatter. Header text that is not valid flat
/// key/value notation is a parse error carrying the parser message.
pub fn extract(content: &str) -> Result<Document> {
    let (raw_header, body) = split_frontmatter(content).ok_or_else(missing)?;
    if raw_header.trim().is_empty() {
        return Err(missing());
    }

    let value: Value = serde_yaml::from_str(raw_header)?;
    if value.is_null() {
        return Err(missing());
    }

    Ok(Document {
        header: Header::from_yaml(value)?,
        body: body.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use crate::frontmatter::value::FieldValue;

    #[test]
    fn parse_no_frontmatter() {
        let err = extract("just body\nno delimiters").unwrap_err();
        assert!(matches!(err, ConvertError::NoFrontmatter { .. }));
    }

    #[test]
    fn test_extract_header_and_body() {
        let doc = extract("---\ntitle: hello\n---\n\nbody here\n").unwrap();
        assert_eq!(
            doc.header.get("title"),
            Some(&FieldValue::String("hello".to_string()))
        );
        assert_eq!(doc.body, "\nbody here\n");
    }

    #[test]
    fn test_body_is_verbatim() {
        let body = "\n\n  # Heading  \n\ttabbed\n---\nnot a header\n\n\n";
        let content = format!("---\ntitle: x\n---\n{body}");
        let doc = extract(&content).unwrap();
        assert_eq!(doc.body, body);
    }

    #[test]
    fn test_closing_boundary_is_first_match() {
        let (header, body) = split_frontmatter("---\na: 1\n---\nb: 2\n---\nrest").unwrap();
        assert_eq!(header, "a: 1");
        assert_eq!(body, "b: 2\n---\nrest");
    }

    #[test]
    fn test_opening_boundary_must_be_at_start() {
        assert!(split_frontmatter("\n---\na: 1\n---\nbody").is_none());
        assert!(split_frontmatter("intro\n---\na: 1\n---\nbody").is_none());
    }

    #[test]
    fn test_opening_boundary_must_be_whole_line() {
        assert!(split_frontmatter("----\na: 1\n---\nbody").is_none());
    }

    #[test]
    fn test_missing_closing_boundary() {
        let err = extract("---\ntitle: x\nno closing line\n").unwrap_err();
        assert!(matches!(err, ConvertError::NoFrontmatter { .. }));
    }

    #[test]
    fn test_closing_boundary_needs_trailing_newline() {
        assert!(split_frontmatter("---\ntitle: x\n---").is_none());
    }

    #[test]
    fn test_empty_header_block_is_missing() {
        let err = extract("---\n\n---\nbody").unwrap_err();
        assert!(matches!(err, ConvertError::NoFrontmatter { .. }));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = extract("---\ntitle: [unclosed\n---\nbody").unwrap_err();
        match err {
            ConvertError::HeaderParse { reason, .. } => assert!(!reason.is_empty()),
            other => panic!("Expected HeaderParse, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_key_is_parse_error() {
        let err = extract("---\ntitle: one\ntitle: two\n---\nbody").unwrap_err();
        match err {
            ConvertError::HeaderParse { reason, .. } => assert!(reason.contains("title")),
            other => panic!("Expected HeaderParse, got {other:?}"),
        }
    }

    #[test]
    fn test_scalar_header_is_parse_error() {
        let err = extract("---\njust a sentence\n---\nbody").unwrap_err();
        assert!(matches!(err, ConvertError::HeaderParse { .. }));
    }
}
