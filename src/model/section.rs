//! Section breaks and tables of contents.

use super::{Dimension, StructuralElement};
use serde::Deserialize;

/// Start of a new section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionBreak {
    /// Style of the section that starts here
    pub section_style: Option<SectionStyle>,
}

/// Section-level style.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionStyle {
    /// `CONTINUOUS` or `NEXT_PAGE`
    pub section_type: Option<String>,

    /// Separator between columns
    pub column_separator_style: Option<String>,

    /// `LEFT_TO_RIGHT` or `RIGHT_TO_LEFT`
    pub content_direction: Option<String>,

    /// Header margin
    pub margin_header: Option<Dimension>,

    /// Footer margin
    pub margin_footer: Option<Dimension>,
}

/// A generated table of contents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableOfContents {
    /// Entries as rendered by Docs
    pub content: Option<Vec<StructuralElement>>,

    /// Suggested insertions of this element
    pub suggested_insertion_ids: Option<Vec<String>>,
}
