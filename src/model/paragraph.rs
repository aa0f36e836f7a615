//! Paragraph and inline-level types.

use serde::{Deserialize, Serialize};

use super::{
    null_as_default, BaselineOffset, Dimension, OptionalColor, WeightedFontFamily,
};

/// A paragraph: a run of inline elements with paragraph-level styling.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paragraph {
    /// Inline elements in document order
    #[serde(deserialize_with = "null_as_default")]
    pub elements: Vec<ParagraphElement>,

    /// Paragraph style
    pub paragraph_style: Option<ParagraphStyle>,

    /// List membership, if this paragraph is a list item
    pub bullet: Option<Bullet>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single plain text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(TextRun::new(text));
        p
    }

    /// Create a paragraph with the given named style (e.g. `HEADING_2`).
    pub fn with_named_style(text: impl Into<String>, style: impl Into<String>) -> Self {
        let mut p = Self::with_text(text);
        p.style_mut().named_style_type = Some(NamedStyleType::new(style));
        p
    }

    /// Add a text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.add_element(InlineElement::TextRun(run));
    }

    /// Add an inline element without character offsets.
    pub fn add_element(&mut self, kind: InlineElement) {
        self.elements.push(ParagraphElement {
            start_index: None,
            end_index: None,
            kind,
        });
    }

    /// Mutable access to the paragraph style, creating it if absent.
    pub fn style_mut(&mut self) -> &mut ParagraphStyle {
        self.paragraph_style.get_or_insert_with(ParagraphStyle::default)
    }

    /// The named style, if any.
    pub fn named_style(&self) -> Option<&NamedStyleType> {
        self.paragraph_style
            .as_ref()
            .and_then(|s| s.named_style_type.as_ref())
    }

    /// Heading level (1-6) derived from the named style.
    pub fn heading_level(&self) -> Option<u8> {
        self.named_style().and_then(NamedStyleType::heading_level)
    }

    /// Check if this paragraph is a list item.
    pub fn is_list_item(&self) -> bool {
        self.bullet.is_some()
    }

    /// List nesting depth derived from indentation, one level per 36pt.
    pub fn indent_level(&self) -> usize {
        let Some(style) = self.paragraph_style.as_ref() else {
            return 0;
        };
        let start = style.indent_start.as_ref().map_or(0.0, Dimension::value);
        let first_line = style.indent_first_line.as_ref().map_or(0.0, Dimension::value);
        let indent = start.max(first_line);
        if indent > 0.0 {
            ((indent / INDENT_UNIT).floor() as usize).min(MAX_INDENT_LEVEL)
        } else {
            0
        }
    }
}

/// Indentation of one list nesting level, in points.
pub const INDENT_UNIT: f64 = 36.0;

/// Upper bound on the indent level derived from indentation magnitudes.
pub const MAX_INDENT_LEVEL: usize = 32;

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParagraphStyle {
    /// Named style (e.g. `NORMAL_TEXT`, `HEADING_1`)
    pub named_style_type: Option<NamedStyleType>,

    /// Heading id, present on heading paragraphs
    pub heading_id: Option<String>,

    /// Text alignment (e.g. `START`, `CENTER`)
    pub alignment: Option<String>,

    /// Line spacing as a percentage of normal
    pub line_spacing: Option<f64>,

    /// Space above the paragraph
    pub space_above: Option<Dimension>,

    /// Space below the paragraph
    pub space_below: Option<Dimension>,

    /// Indentation of the first line
    pub indent_first_line: Option<Dimension>,

    /// Indentation of the leading edge
    pub indent_start: Option<Dimension>,

    /// Indentation of the trailing edge
    pub indent_end: Option<Dimension>,
}

/// A document-defined paragraph role such as `HEADING_3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedStyleType(String);

impl NamedStyleType {
    /// Wrap a named style identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Heading level for `HEADING_1`..`HEADING_6`.
    pub fn heading_level(&self) -> Option<u8> {
        match self.0.as_str() {
            "HEADING_1" => Some(1),
            "HEADING_2" => Some(2),
            "HEADING_3" => Some(3),
            "HEADING_4" => Some(4),
            "HEADING_5" => Some(5),
            "HEADING_6" => Some(6),
            _ => None,
        }
    }

    /// Whether the style name marks a numbered list.
    pub fn is_numbered(&self) -> bool {
        self.0.contains("NUMBERED")
    }
}

/// List membership of a paragraph.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bullet {
    /// Id of the list this paragraph belongs to
    pub list_id: Option<String>,

    /// Nesting level within the list
    pub nesting_level: Option<i64>,

    /// Style applied to the bullet glyph; set on numbered lists
    pub text_style: Option<TextStyle>,
}

/// An inline element together with its character range.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawParagraphElement")]
pub struct ParagraphElement {
    /// Zero-based start offset
    pub start_index: Option<i64>,

    /// Zero-based end offset, exclusive
    pub end_index: Option<i64>,

    /// The element itself
    pub kind: InlineElement,
}

/// Inline content within a paragraph.
#[derive(Debug, Clone)]
pub enum InlineElement {
    /// A run of text with uniform styling
    TextRun(TextRun),

    /// A reference to an embedded object (image, drawing)
    InlineObject(InlineObjectElement),

    /// A horizontal line
    HorizontalRule(HorizontalRule),

    /// A smart chip linking to another Google resource
    RichLink(RichLink),

    /// Any kind this crate does not render (page breaks, footnotes, ...)
    Unsupported,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawParagraphElement {
    start_index: Option<i64>,
    end_index: Option<i64>,
    text_run: Option<TextRun>,
    inline_object_element: Option<InlineObjectElement>,
    horizontal_rule: Option<HorizontalRule>,
    rich_link: Option<RichLink>,
}

impl From<RawParagraphElement> for ParagraphElement {
    fn from(raw: RawParagraphElement) -> Self {
        let kind = if let Some(run) = raw.text_run {
            InlineElement::TextRun(run)
        } else if let Some(object) = raw.inline_object_element {
            InlineElement::InlineObject(object)
        } else if let Some(rule) = raw.horizontal_rule {
            InlineElement::HorizontalRule(rule)
        } else if let Some(link) = raw.rich_link {
            InlineElement::RichLink(link)
        } else {
            InlineElement::Unsupported
        };

        Self {
            start_index: raw.start_index,
            end_index: raw.end_index,
            kind,
        }
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextRun {
    /// The text content
    pub content: Option<String>,

    /// Text styling
    pub text_style: Option<TextStyle>,
}

impl TextRun {
    /// Create a new text run without styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
            text_style: None,
        }
    }

    /// Create a text run with the given style.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            content: Some(text.into()),
            text_style: Some(style),
        }
    }
}

/// Text styling properties.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    /// Bold text
    #[serde(deserialize_with = "null_as_default")]
    pub bold: bool,

    /// Italic text
    #[serde(deserialize_with = "null_as_default")]
    pub italic: bool,

    /// Underlined text
    #[serde(deserialize_with = "null_as_default")]
    pub underline: bool,

    /// Strikethrough text
    #[serde(deserialize_with = "null_as_default")]
    pub strikethrough: bool,

    /// Font size
    pub font_size: Option<Dimension>,

    /// Font family and weight
    pub weighted_font_family: Option<WeightedFontFamily>,

    /// Text color
    pub foreground_color: Option<OptionalColor>,

    /// Highlight color
    pub background_color: Option<OptionalColor>,

    /// Superscript / subscript
    pub baseline_offset: Option<BaselineOffset>,

    /// Hyperlink target
    pub link: Option<Link>,
}

/// A hyperlink target.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Link {
    /// External URL
    pub url: Option<String>,

    /// Heading in this document
    pub heading_id: Option<String>,

    /// Bookmark in this document
    pub bookmark_id: Option<String>,
}

/// Reference to an embedded object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InlineObjectElement {
    /// Id of the referenced inline object
    pub inline_object_id: Option<String>,
}

/// A horizontal rule.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HorizontalRule {
    /// Style of the rule's anchor character
    pub text_style: Option<TextStyle>,
}

/// A smart chip linking to a Google resource.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RichLink {
    /// Id of this link
    pub rich_link_id: Option<String>,

    /// Display properties; absent for links the caller cannot see
    pub rich_link_properties: Option<RichLinkProperties>,
}

/// Display properties of a rich link.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RichLinkProperties {
    /// Title as shown in the chip
    pub title: Option<String>,

    /// Target URI
    pub uri: Option<String>,

    /// MIME type of the target
    pub mime_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_style_heading_level() {
        assert_eq!(NamedStyleType::new("HEADING_1").heading_level(), Some(1));
        assert_eq!(NamedStyleType::new("HEADING_6").heading_level(), Some(6));
        assert_eq!(NamedStyleType::new("TITLE").heading_level(), None);
        assert_eq!(NamedStyleType::new("NORMAL_TEXT").heading_level(), None);
    }

    #[test]
    fn test_indent_level() {
        let mut p = Paragraph::with_text("item");
        assert_eq!(p.indent_level(), 0);

        p.style_mut().indent_start = Some(Dimension::points(72.0));
        assert_eq!(p.indent_level(), 2);

        p.style_mut().indent_first_line = Some(Dimension::points(108.0));
        assert_eq!(p.indent_level(), 3);

        p.style_mut().indent_first_line = Some(Dimension::points(18.0));
        p.style_mut().indent_start = Some(Dimension::points(35.9));
        assert_eq!(p.indent_level(), 0);
    }

    #[test]
    fn test_indent_level_is_capped() {
        let mut p = Paragraph::with_text("deep");
        p.style_mut().indent_start = Some(Dimension::points(1e300));
        assert_eq!(p.indent_level(), MAX_INDENT_LEVEL);

        p.style_mut().indent_start = Some(Dimension::points(f64::INFINITY));
        assert_eq!(p.indent_level(), MAX_INDENT_LEVEL);

        p.style_mut().indent_start = Some(Dimension::points(f64::NAN));
        assert_eq!(p.indent_level(), 0);
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let json = r#"{"elements": null, "paragraphStyle": null, "bullet": null}"#;
        let p: Paragraph = serde_json::from_str(json).unwrap();
        assert!(p.elements.is_empty());

        let json = r#"{"bold": null, "italic": true, "underline": null, "strikethrough": null}"#;
        let style: TextStyle = serde_json::from_str(json).unwrap();
        assert!(!style.bold);
        assert!(style.italic);
    }

    #[test]
    fn test_element_kind_from_wire() {
        let json = r#"{"startIndex": 1, "endIndex": 6, "textRun": {"content": "Hello"}}"#;
        let element: ParagraphElement = serde_json::from_str(json).unwrap();
        assert_eq!(element.start_index, Some(1));
        assert!(matches!(element.kind, InlineElement::TextRun(_)));

        let json = r#"{"startIndex": 6, "endIndex": 7, "pageBreak": {}}"#;
        let element: ParagraphElement = serde_json::from_str(json).unwrap();
        assert!(matches!(element.kind, InlineElement::Unsupported));

        let json = r#"{"horizontalRule": {}}"#;
        let element: ParagraphElement = serde_json::from_str(json).unwrap();
        assert!(matches!(element.kind, InlineElement::HorizontalRule(_)));
    }

    #[test]
    fn test_text_style_defaults() {
        let style: TextStyle = serde_json::from_str(r#"{"italic": true}"#).unwrap();
        assert!(style.italic);
        assert!(!style.bold);
        assert!(style.link.is_none());
    }
}
