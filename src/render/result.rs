//! Rendering result with statistics.

use crate::model::{BodyContent, Document, InlineElement, Paragraph, StructuralElement};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered Markdown
    pub content: String,

    /// Id of the source document, if known
    pub document_id: Option<String>,

    /// Conversion statistics
    pub stats: ConversionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, document_id: Option<String>, stats: ConversionStats) -> Self {
        Self {
            content,
            document_id,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Counts of the elements a conversion encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Paragraphs, including those inside table cells
    pub paragraph_count: u32,

    /// Paragraphs with a heading named style
    pub heading_count: u32,

    /// Paragraphs carrying a bullet
    pub list_item_count: u32,

    /// Tables
    pub table_count: u32,

    /// Section breaks
    pub section_break_count: u32,

    /// Tables of contents
    pub table_of_contents_count: u32,

    /// Inline object references
    pub inline_object_count: u32,

    /// Rich links
    pub rich_link_count: u32,

    /// Horizontal rules
    pub horizontal_rule_count: u32,

    /// Approximate word count of the output (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count of the output (excluding whitespace)
    pub char_count: u32,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the elements of a document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        stats.count_elements(doc.content());
        stats
    }

    fn count_elements(&mut self, elements: &[StructuralElement]) {
        for element in elements {
            match &element.content {
                BodyContent::Paragraph(p) => self.count_paragraph(p),
                BodyContent::Table(table) => {
                    self.table_count += 1;
                    for cell in table.table_rows.iter().flat_map(|r| &r.table_cells) {
                        let mut cell_stats = Self::new();
                        cell_stats.count_elements(&cell.content);
                        self.merge(&cell_stats);
                    }
                }
                BodyContent::SectionBreak(_) => self.section_break_count += 1,
                BodyContent::TableOfContents(_) => self.table_of_contents_count += 1,
                BodyContent::Unsupported => {}
            }
        }
    }

    fn count_paragraph(&mut self, para: &Paragraph) {
        self.paragraph_count += 1;
        if para.heading_level().is_some() {
            self.heading_count += 1;
        }
        if para.is_list_item() {
            self.list_item_count += 1;
        }
        for element in &para.elements {
            match element.kind {
                InlineElement::InlineObject(_) => self.inline_object_count += 1,
                InlineElement::RichLink(_) => self.rich_link_count += 1,
                InlineElement::HorizontalRule(_) => self.horizontal_rule_count += 1,
                InlineElement::TextRun(_) | InlineElement::Unsupported => {}
            }
        }
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ConversionStats) {
        self.paragraph_count += other.paragraph_count;
        self.heading_count += other.heading_count;
        self.list_item_count += other.list_item_count;
        self.table_count += other.table_count;
        self.section_break_count += other.section_break_count;
        self.table_of_contents_count += other.table_of_contents_count;
        self.inline_object_count += other.inline_object_count;
        self.rich_link_count += other.rich_link_count;
        self.horizontal_rule_count += other.horizontal_rule_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
