//! # gdocs-markdown
//!
//! Convert Google Docs documents to Markdown with embedded metadata.
//!
//! Documents are read from the JSON returned by the Docs API
//! `documents.get` endpoint. Headings, lists, tables, links and inline
//! styling become Markdown (with limited inline HTML), and information
//! Markdown cannot express is kept in `<!-- tag: {json} -->` comments so
//! the original structure can be recovered.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gdocs_markdown::{json_to_markdown, ConvertOptions};
//!
//! fn main() -> gdocs_markdown::Result<()> {
//!     let json = std::fs::read_to_string("document.json")?;
//!
//!     let markdown = json_to_markdown(&json, &ConvertOptions::default())?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Frontmatter**: document id, title, revision and page size
//! - **Structure preservation**: headings, nested lists, tables, section breaks
//! - **Inline styling**: emphasis, links, colors, fonts, super/subscript
//! - **Metadata annotations**: ranges, heading ids, list ids, layout details
//! - **Presets**: full detail or a minimal mode with essential metadata only

pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Body, BodyContent, Document, InlineElement, Paragraph, ParagraphStyle, StructuralElement,
    Table, TableCell, TableRow, TextRun, TextStyle,
};
pub use render::{
    to_markdown, to_markdown_minimal, to_markdown_with_all_details, to_markdown_with_stats,
    ConversionStats, ConvertOptions, DetailPreset, MarkdownRenderer, MetadataOptions,
    RenderResult,
};

use std::io::Read;

/// Parse a document from Docs API JSON.
///
/// # Example
///
/// ```
/// use gdocs_markdown::parse_json;
///
/// let doc = parse_json(r#"{"documentId": "abc", "title": "Notes"}"#).unwrap();
/// assert_eq!(doc.title.as_deref(), Some("Notes"));
/// ```
pub fn parse_json(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a document from JSON bytes.
pub fn parse_slice(data: &[u8]) -> Result<Document> {
    Ok(serde_json::from_slice(data)?)
}

/// Parse a document from a reader.
///
/// # Example
///
/// ```no_run
/// use gdocs_markdown::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("document.json").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Document> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    parse_json(&json)
}

/// Convert Docs API JSON straight to Markdown.
///
/// # Example
///
/// ```
/// use gdocs_markdown::{json_to_markdown, ConvertOptions};
///
/// let options = ConvertOptions::new().with_metadata(false);
/// let markdown = json_to_markdown(r#"{"title": "Notes"}"#, &options).unwrap();
/// assert_eq!(markdown, "# Notes");
/// ```
pub fn json_to_markdown(json: &str, options: &ConvertOptions) -> Result<String> {
    let doc = parse_json(json)?;
    Ok(to_markdown(&doc, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_empty_object() {
        let doc = parse_json("{}").unwrap();
        assert!(doc.is_empty());
        assert!(doc.document_id.is_none());
    }

    #[test]
    fn test_parse_json_invalid() {
        let result = parse_json("not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_json_wrong_shape() {
        // body.content must be an array
        let result = parse_json(r#"{"body": {"content": 5}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_slice() {
        let doc = parse_slice(br#"{"documentId": "d1"}"#).unwrap();
        assert_eq!(doc.document_id.as_deref(), Some("d1"));
    }

    #[test]
    fn test_parse_reader() {
        let data: &[u8] = br#"{"title": "From reader"}"#;
        let doc = parse_reader(data).unwrap();
        assert_eq!(doc.title.as_deref(), Some("From reader"));
    }

    #[test]
    fn test_json_to_markdown() {
        let json = r#"{
            "documentId": "d1",
            "revisionId": "r7",
            "body": {"content": [
                {"startIndex": 1, "endIndex": 4,
                 "paragraph": {"elements": [{"textRun": {"content": "Hi\n"}}]}}
            ]}
        }"#;
        let markdown = json_to_markdown(json, &ConvertOptions::minimal()).unwrap();
        assert_eq!(
            markdown,
            "---\ndocumentId: d1\ntitle: Untitled\nrevisionId: r7\n---\n\nHi"
        );
    }

    #[test]
    fn test_presets_differ() {
        let mut doc = Document::with_id("d1");
        let mut para = Paragraph::with_named_style("Intro\n", "HEADING_1");
        para.style_mut().heading_id = Some("h.1".to_string());
        doc.add_paragraph(para);

        let full = to_markdown_with_all_details(&doc);
        let minimal = to_markdown_minimal(&doc);
        assert!(full.contains("\"headingId\":\"h.1\""));
        assert!(!minimal.contains("headingId"));
        assert!(minimal.contains("# Intro"));
    }
}
