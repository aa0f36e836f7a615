//! Document-level types.

use super::{null_as_default, Dimension, Paragraph, SectionBreak, Table, TableOfContents};
use serde::{Deserialize, Serialize};

/// A Google Docs document as returned by `documents.get`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    /// Document id
    pub document_id: Option<String>,

    /// Document title
    pub title: Option<String>,

    /// Revision id of this snapshot
    pub revision_id: Option<String>,

    /// Document-wide style
    pub document_style: Option<DocumentStyle>,

    /// Main body
    pub body: Option<Body>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an untitled document with the given id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            document_id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Body elements in document order.
    pub fn content(&self) -> &[StructuralElement] {
        self.body
            .as_ref()
            .map(|b| b.content.as_slice())
            .unwrap_or(&[])
    }

    /// Append a body element.
    pub fn push(&mut self, element: StructuralElement) {
        self.body.get_or_insert_with(Body::default).content.push(element);
    }

    /// Append a paragraph without character offsets.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.push(StructuralElement::paragraph(paragraph));
    }

    /// Check if the document has no body content.
    pub fn is_empty(&self) -> bool {
        self.content().is_empty()
    }
}

/// The document body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Body {
    /// Body elements
    #[serde(deserialize_with = "null_as_default")]
    pub content: Vec<StructuralElement>,
}

/// Document-wide style.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentStyle {
    /// Page size
    pub page_size: Option<Size>,
}

/// A width and height.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Size {
    /// Height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,

    /// Width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
}

/// A body element together with its character range.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawStructuralElement")]
pub struct StructuralElement {
    /// Zero-based start offset
    pub start_index: Option<i64>,

    /// Zero-based end offset, exclusive
    pub end_index: Option<i64>,

    /// The element itself
    pub content: BodyContent,
}

impl StructuralElement {
    /// Wrap content without character offsets.
    pub fn new(content: BodyContent) -> Self {
        Self {
            start_index: None,
            end_index: None,
            content,
        }
    }

    /// Wrap a paragraph without character offsets.
    pub fn paragraph(paragraph: Paragraph) -> Self {
        Self::new(BodyContent::Paragraph(paragraph))
    }

    /// Set the character range and return self.
    pub fn with_range(mut self, start: i64, end: i64) -> Self {
        self.start_index = Some(start);
        self.end_index = Some(end);
        self
    }

    /// The paragraph, if this element is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match &self.content {
            BodyContent::Paragraph(p) => Some(p),
            _ => None,
        }
    }
}

/// Top-level unit of document content.
#[derive(Debug, Clone)]
pub enum BodyContent {
    /// A paragraph
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// A section break
    SectionBreak(SectionBreak),

    /// A table of contents
    TableOfContents(TableOfContents),

    /// Any kind this crate does not render
    Unsupported,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawStructuralElement {
    start_index: Option<i64>,
    end_index: Option<i64>,
    paragraph: Option<Paragraph>,
    table: Option<Table>,
    section_break: Option<SectionBreak>,
    table_of_contents: Option<TableOfContents>,
}

impl From<RawStructuralElement> for StructuralElement {
    fn from(raw: RawStructuralElement) -> Self {
        let content = if let Some(p) = raw.paragraph {
            BodyContent::Paragraph(p)
        } else if let Some(t) = raw.table {
            BodyContent::Table(t)
        } else if let Some(s) = raw.section_break {
            BodyContent::SectionBreak(s)
        } else if let Some(toc) = raw.table_of_contents {
            BodyContent::TableOfContents(toc)
        } else {
            BodyContent::Unsupported
        };

        Self {
            start_index: raw.start_index,
            end_index: raw.end_index,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert!(doc.content().is_empty());
    }

    #[test]
    fn test_document_push() {
        let mut doc = Document::with_id("abc");
        doc.add_paragraph(Paragraph::with_text("Hello"));
        assert_eq!(doc.content().len(), 1);
        assert!(doc.content()[0].as_paragraph().is_some());
    }

    #[test]
    fn test_document_from_wire() {
        let json = r#"{
            "documentId": "doc-1",
            "title": "Plan",
            "body": {"content": [
                {"endIndex": 1, "sectionBreak": {"sectionStyle": {"sectionType": "CONTINUOUS"}}},
                {"startIndex": 1, "endIndex": 7, "paragraph": {"elements": []}},
                {"startIndex": 7, "endIndex": 9, "table": {"rows": 0, "columns": 0, "tableRows": []}},
                {"startIndex": 9, "endIndex": 10, "tableOfContents": {"content": []}},
                {"startIndex": 10, "endIndex": 11}
            ]}
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        let kinds: Vec<_> = doc.content().iter().map(|e| &e.content).collect();

        assert!(matches!(kinds[0], BodyContent::SectionBreak(_)));
        assert!(matches!(kinds[1], BodyContent::Paragraph(_)));
        assert!(matches!(kinds[2], BodyContent::Table(_)));
        assert!(matches!(kinds[3], BodyContent::TableOfContents(_)));
        assert!(matches!(kinds[4], BodyContent::Unsupported));
        assert_eq!(doc.content()[0].start_index, None);
        assert_eq!(doc.content()[1].start_index, Some(1));
    }

    #[test]
    fn test_page_size_serialization() {
        let size = Size {
            height: Some(Dimension::points(792.0)),
            width: Some(Dimension::points(612.0)),
        };
        let json = serde_json::to_string(&size).unwrap();
        assert_eq!(
            json,
            r#"{"height":{"magnitude":792,"unit":"PT"},"width":{"magnitude":612,"unit":"PT"}}"#
        );
    }
}
