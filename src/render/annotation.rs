//! Metadata annotations embedded as HTML comments.
//!
//! Each record serializes to compact JSON with camelCase keys in field order;
//! absent values are omitted rather than written as `null`.

use serde::Serialize;

use crate::model::{serialize_number, Dimension, OptionalColor, TableColumnProperties};

/// Render `<!-- tag: {json} -->`.
pub(crate) fn comment<T: Serialize>(tag: &str, payload: &T) -> String {
    compact_json(tag, payload)
        .map(|json| format!("<!-- {}: {} -->", tag, json))
        .unwrap_or_default()
}

/// Serialize to compact JSON, logging and skipping values that fail.
pub(crate) fn compact_json<T: Serialize>(what: &str, value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(json) => Some(json),
        Err(e) => {
            log::warn!("Dropping {} metadata: {}", what, e);
            None
        }
    }
}

/// A character range; either end may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub(crate) struct Range {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
}

impl Range {
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }

    pub fn is_known(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Indent {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub first_line: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub start: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub end: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct Spacing {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub above: Option<f64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub below: Option<f64>,
}

/// Payload of `paragraph-metadata`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ParagraphMetadata<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<Indent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<&'a str>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_number"
    )]
    pub line_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nesting_level: Option<i64>,
}

impl ParagraphMetadata<'_> {
    pub fn is_empty(&self) -> bool {
        self.heading_id.is_none()
            && self.indent.is_none()
            && self.spacing.is_none()
            && self.alignment.is_none()
            && self.line_spacing.is_none()
            && self.range.is_none()
            && self.list_id.is_none()
            && self.nesting_level.is_none()
    }
}

/// Payload of `rich-link`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RichLinkMetadata<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rich_link_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<&'a str>,
}

/// Payload of `table-metadata`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TableMetadata<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<i64>,
    pub range: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TableStyleMetadata<'a>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TableStyleMetadata<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_column_properties: Option<&'a [TableColumnProperties]>,
}

/// Payload of `cell`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CellMetadata<'a> {
    pub row: usize,
    pub col: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_span: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_span: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<&'a OptionalColor>,
}

/// Payload of `section-break`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SectionBreakMetadata<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_separator_style: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_direction: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_header: Option<&'a Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_footer: Option<&'a Dimension>,
    pub range: Range,
}

/// Payload of `toc-metadata`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TocMetadata<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_insertion_ids: Option<&'a [String]>,
}
