//! Table types.

use super::{null_as_default, Dimension, OptionalColor, Paragraph, StructuralElement};
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Table {
    /// Declared number of rows
    pub rows: Option<i64>,

    /// Declared number of columns
    pub columns: Option<i64>,

    /// Rows in the table
    #[serde(deserialize_with = "null_as_default")]
    pub table_rows: Vec<TableRow>,

    /// Table-wide style
    pub table_style: Option<TableStyle>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table of plain-text cells, filling in the declared counts.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for row in rows {
            table.add_row(TableRow::from_strings(row));
        }
        table.rows = Some(table.row_count() as i64);
        table.columns = Some(table.column_count() as i64);
        table
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.table_rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.table_rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.table_rows
            .first()
            .map(|r| r.table_cells.len())
            .unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.table_rows.is_empty()
    }
}

/// A table row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableRow {
    /// Cells in the row
    #[serde(deserialize_with = "null_as_default")]
    pub table_cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { table_cells: cells }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }
}

/// A table cell. Its content is a nested sequence of body elements.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableCell {
    /// Cell content
    #[serde(deserialize_with = "null_as_default")]
    pub content: Vec<StructuralElement>,

    /// Cell style
    pub table_cell_style: Option<TableCellStyle>,
}

impl TableCell {
    /// Create a new cell with a single paragraph of text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![StructuralElement::paragraph(Paragraph::with_text(text))],
            table_cell_style: None,
        }
    }

    /// Set the cell style and return self.
    pub fn with_style(mut self, style: TableCellStyle) -> Self {
        self.table_cell_style = Some(style);
        self
    }

    /// Paragraphs directly contained in the cell.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.content.iter().filter_map(StructuralElement::as_paragraph)
    }
}

/// Style of a table cell.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableCellStyle {
    /// Number of rows the cell spans
    pub row_span: Option<i64>,

    /// Number of columns the cell spans
    pub column_span: Option<i64>,

    /// Cell background
    pub background_color: Option<OptionalColor>,
}

/// Table-wide style.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableStyle {
    /// Per-column properties
    pub table_column_properties: Option<Vec<TableColumnProperties>>,
}

/// Properties of one table column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableColumnProperties {
    /// `EVENLY_DISTRIBUTED` or `FIXED_WIDTH`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_type: Option<String>,

    /// Column width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_table_from_rows() {
        let table = Table::from_rows([["Name", "Age"], ["Alice", "30"], ["Bob", "25"]]);

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.rows, Some(3));
        assert_eq!(table.columns, Some(2));
    }

    #[test]
    fn test_cell_paragraphs() {
        let cell = TableCell::text("Hello");
        assert_eq!(cell.paragraphs().count(), 1);
    }

    #[test]
    fn test_cell_from_wire() {
        let json = r#"{
            "content": [{"startIndex": 3, "paragraph": {"elements": []}}],
            "tableCellStyle": {"rowSpan": 1, "columnSpan": 2}
        }"#;
        let cell: TableCell = serde_json::from_str(json).unwrap();
        assert_eq!(cell.paragraphs().count(), 1);
        assert_eq!(cell.table_cell_style.unwrap().column_span, Some(2));
    }
}
