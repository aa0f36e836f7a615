//! Markdown rendering for Google Docs documents.

use crate::model::{
    BaselineOffset, BodyContent, Dimension, Document, InlineElement, InlineObjectElement,
    NamedStyleType, OptionalColor, Paragraph, RichLink, SectionBreak, StructuralElement, Table,
    TableCell, TableOfContents, TextRun,
};

use super::annotation::{
    comment, compact_json, CellMetadata, Indent, ParagraphMetadata, Range, RichLinkMetadata,
    SectionBreakMetadata, Spacing, TableMetadata, TableStyleMetadata, TocMetadata,
};
use super::cleanup::CleanupPipeline;
use super::options::{ConvertOptions, ResolvedOptions};
use super::result::{ConversionStats, RenderResult};

const UNTITLED: &str = "Untitled";
const UNKNOWN_REVISION: &str = "unknown";
const DEFAULT_RICH_LINK_TITLE: &str = "Google Docs Link";
const DEFAULT_RICH_LINK_URI: &str = "#";

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &ConvertOptions) -> String {
    MarkdownRenderer::new(options).render(doc)
}

/// Convert a document to Markdown with every detail included.
pub fn to_markdown_with_all_details(doc: &Document) -> String {
    to_markdown(doc, &ConvertOptions::all_details())
}

/// Convert a document to Markdown with only essential metadata.
pub fn to_markdown_minimal(doc: &Document) -> String {
    to_markdown(doc, &ConvertOptions::minimal())
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &ConvertOptions) -> RenderResult {
    let content = to_markdown(doc, options);
    let mut stats = ConversionStats::from_document(doc);
    stats.count_text(&content);
    RenderResult::new(content, doc.document_id.clone(), stats)
}

/// Markdown renderer.
///
/// Options are resolved once at construction; rendering never mutates the
/// renderer, so one instance can convert any number of documents.
pub struct MarkdownRenderer {
    options: ResolvedOptions,
    cleanup: CleanupPipeline,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: &ConvertOptions) -> Self {
        Self::with_resolved(options.resolve())
    }

    /// Create a renderer from already resolved options.
    pub fn with_resolved(options: ResolvedOptions) -> Self {
        Self {
            options,
            cleanup: CleanupPipeline::new(),
        }
    }

    /// The options this renderer applies.
    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> String {
        let mut output = String::new();

        if self.options.include_metadata {
            if let Some(id) = non_empty(&doc.document_id) {
                render_frontmatter(&mut output, doc, id);
            }
        }

        if let Some(title) = non_empty(&doc.title) {
            output.push_str(&format!("# {}\n", title));
            if self.options.include_metadata {
                output.push_str("<!-- document-title -->\n");
            }
            output.push('\n');
        }

        for element in doc.content() {
            if let Some(fragment) = self.render_element(element) {
                output.push_str(&fragment);
                output.push('\n');
            }
        }

        log::trace!(
            "Rendered {} body elements into {} bytes",
            doc.content().len(),
            output.len()
        );

        self.cleanup.process(&output)
    }

    /// Render a single body element, or `None` for unsupported kinds.
    pub fn render_element(&self, element: &StructuralElement) -> Option<String> {
        let range = Range::new(element.start_index, element.end_index);
        let fragment = match &element.content {
            BodyContent::Paragraph(p) => format_paragraph(p, range, &self.options),
            BodyContent::Table(t) => format_table(t, range, &self.options),
            BodyContent::SectionBreak(s) => format_section_break(s, range, &self.options),
            BodyContent::TableOfContents(toc) => format_table_of_contents(toc, &self.options),
            BodyContent::Unsupported => {
                log::debug!(
                    "Skipping unsupported body element at {:?}..{:?}",
                    element.start_index,
                    element.end_index
                );
                return None;
            }
        };
        Some(fragment)
    }
}

fn render_frontmatter(output: &mut String, doc: &Document, id: &str) {
    output.push_str("---\n");
    output.push_str(&format!("documentId: {}\n", id));
    output.push_str(&format!(
        "title: {}\n",
        non_empty(&doc.title).unwrap_or(UNTITLED)
    ));
    output.push_str(&format!(
        "revisionId: {}\n",
        non_empty(&doc.revision_id).unwrap_or(UNKNOWN_REVISION)
    ));
    let page_size = doc
        .document_style
        .as_ref()
        .and_then(|s| s.page_size.as_ref())
        .and_then(|size| compact_json("pageSize", size));
    if let Some(json) = page_size {
        output.push_str(&format!("pageSize: {}\n", json));
    }
    output.push_str("---\n\n");
}

pub(crate) fn format_paragraph(para: &Paragraph, range: Range, opts: &ResolvedOptions) -> String {
    if para.elements.is_empty() {
        return String::new();
    }

    let mut meta = ParagraphMetadata::default();

    if let Some(style) = para.paragraph_style.as_ref() {
        if opts.heading_ids() {
            meta.heading_id = style.heading_id.as_deref();
        }

        if opts.indent_info() {
            let first_line = magnitude(&style.indent_first_line);
            let start = magnitude(&style.indent_start);
            let end = magnitude(&style.indent_end);
            if [first_line, start, end]
                .iter()
                .any(|m| m.is_some_and(|v| v != 0.0))
            {
                meta.indent = Some(Indent {
                    first_line,
                    start,
                    end,
                });
            }

            if !opts.minimal_mode {
                let above = magnitude(&style.space_above);
                let below = magnitude(&style.space_below);
                if above.is_some() || below.is_some() {
                    meta.spacing = Some(Spacing { above, below });
                }
                meta.alignment = style.alignment.as_deref();
                meta.line_spacing = style.line_spacing;
            }
        }
    }

    if opts.include_metadata && opts.include_ranges && range.is_known() {
        meta.range = Some(range);
    }

    let text: String = para
        .elements
        .iter()
        .map(|e| format_inline(&e.kind, opts))
        .collect();

    // A list item drops any heading markup: the list prefix is applied to
    // the bare text.
    let mut formatted = if let Some(bullet) = para.bullet.as_ref() {
        let indent = "  ".repeat(para.indent_level());
        let numbered = match bullet.list_id.as_deref() {
            Some(list_id) if opts.include_list_info => {
                if opts.include_metadata {
                    meta.list_id = Some(list_id);
                    if !opts.minimal_mode {
                        meta.nesting_level = bullet.nesting_level;
                    }
                }
                bullet.text_style.is_some()
                    || para.named_style().is_some_and(NamedStyleType::is_numbered)
            }
            _ => false,
        };
        let marker = if numbered { "1." } else { "-" };
        format!("{}{} {}", indent, marker, text)
    } else if let Some(level) = para.heading_level() {
        format!("{} {}", "#".repeat(level as usize), text)
    } else {
        text
    };

    if opts.include_metadata && !meta.is_empty() {
        formatted.push('\n');
        formatted.push_str(&comment("paragraph-metadata", &meta));
    }

    formatted
}

fn format_inline(element: &InlineElement, opts: &ResolvedOptions) -> String {
    match element {
        InlineElement::TextRun(run) => format_text_run(run, opts),
        InlineElement::InlineObject(object) => format_inline_object(object),
        InlineElement::HorizontalRule(_) => "---".to_string(),
        InlineElement::RichLink(link) => format_rich_link(link, opts),
        InlineElement::Unsupported => String::new(),
    }
}

pub(crate) fn format_text_run(run: &TextRun, opts: &ResolvedOptions) -> String {
    let Some(content) = run.content.as_deref() else {
        return String::new();
    };
    let style = match run.text_style.as_ref() {
        Some(style) if opts.preserve_all_formatting => style,
        _ => return content.to_string(),
    };

    let mut text = match (style.bold, style.italic) {
        (true, true) => format!("***{}***", content),
        (true, false) => format!("**{}**", content),
        (false, true) => format!("*{}*", content),
        (false, false) => content.to_string(),
    };

    if style.strikethrough {
        text = format!("~~{}~~", text);
    }

    let mut attributes = Vec::new();
    if opts.include_styles {
        if style.underline && style.link.is_none() {
            text = format!("<u>{}</u>", text);
        }

        if let Some(size) = magnitude(&style.font_size).filter(|m| *m != 0.0) {
            attributes.push(format!("font-size:{}pt", size));
        }
        if let Some(family) = style
            .weighted_font_family
            .as_ref()
            .and_then(|f| non_empty(&f.font_family))
        {
            attributes.push(format!("font-family:'{}'", family));
        }
        if let Some(rgb) = style
            .foreground_color
            .as_ref()
            .and_then(OptionalColor::rgb_color)
        {
            attributes.push(format!("color:{}", rgb.to_hex()));
        }
        if let Some(rgb) = style
            .background_color
            .as_ref()
            .and_then(OptionalColor::rgb_color)
        {
            attributes.push(format!("background-color:{}", rgb.to_hex()));
        }

        match style.baseline_offset {
            Some(BaselineOffset::Superscript) => text = format!("<sup>{}</sup>", text),
            Some(BaselineOffset::Subscript) => text = format!("<sub>{}</sub>", text),
            _ => {}
        }
    }

    if !attributes.is_empty() {
        text = format!("<span style=\"{}\">{}</span>", attributes.join(";"), text);
    }

    if let Some(link) = style.link.as_ref() {
        if let Some(url) = non_empty(&link.url) {
            text = format!("[{}]({})", text, url);
            if opts.include_metadata {
                if let Some(heading_id) = non_empty(&link.heading_id) {
                    text.push_str(&format!("<!-- link-heading: {} -->", heading_id));
                }
            }
        }
    }

    text
}

fn format_inline_object(object: &InlineObjectElement) -> String {
    match non_empty(&object.inline_object_id) {
        Some(id) => format!("<!-- inline-object: {} -->", id),
        None => "<!-- inline-object -->".to_string(),
    }
}

fn format_rich_link(link: &RichLink, opts: &ResolvedOptions) -> String {
    let Some(props) = link.rich_link_properties.as_ref() else {
        return String::new();
    };

    let mut text = format!(
        "[{}]({})",
        non_empty(&props.title).unwrap_or(DEFAULT_RICH_LINK_TITLE),
        non_empty(&props.uri).unwrap_or(DEFAULT_RICH_LINK_URI)
    );

    if opts.detailed_metadata() {
        let meta = RichLinkMetadata {
            rich_link_id: link.rich_link_id.as_deref(),
            mime_type: props.mime_type.as_deref(),
            uri: props.uri.as_deref(),
        };
        text.push('\n');
        text.push_str(&comment("rich-link", &meta));
    }

    text
}

pub(crate) fn format_table(table: &Table, range: Range, opts: &ResolvedOptions) -> String {
    if table.is_empty() {
        return String::new();
    }

    let mut output = String::new();

    if opts.detailed_metadata() {
        let meta = TableMetadata {
            rows: table.rows,
            columns: table.columns,
            range,
            style: table.table_style.as_ref().map(|s| TableStyleMetadata {
                table_column_properties: s.table_column_properties.as_deref(),
            }),
        };
        output.push_str(&comment("table-metadata", &meta));
        output.push('\n');
    }

    for (i, row) in table.table_rows.iter().enumerate() {
        if row.table_cells.is_empty() {
            log::debug!("Skipping table row {} without cells", i);
            continue;
        }

        output.push('|');
        for (j, cell) in row.table_cells.iter().enumerate() {
            let text = cell_text(cell, opts);
            let style = cell
                .table_cell_style
                .as_ref()
                .filter(|_| opts.detailed_metadata());
            match style {
                Some(style) => {
                    let meta = CellMetadata {
                        row: i,
                        col: j,
                        row_span: style.row_span,
                        column_span: style.column_span,
                        background_color: style.background_color.as_ref(),
                    };
                    output.push_str(&format!(" {} {} |", text, comment("cell", &meta)));
                }
                None => output.push_str(&format!(" {} |", text)),
            }
        }
        output.push('\n');

        // Row 0 is always the header
        if i == 0 {
            output.push('|');
            for _ in &row.table_cells {
                output.push_str(" --- |");
            }
            output.push('\n');
        }
    }

    output
}

/// Text of a cell's paragraphs. Cells never carry their own annotations.
pub(crate) fn cell_text(cell: &TableCell, opts: &ResolvedOptions) -> String {
    let opts = opts.without_metadata();
    let mut text = String::new();
    let mut paragraphs = 0;
    for para in cell.paragraphs() {
        text.push_str(&format_paragraph(para, Range::default(), &opts));
        text.push(' ');
        paragraphs += 1;
    }
    if paragraphs == 0 {
        log::debug!("Table cell has no paragraphs");
    }
    text.trim().to_string()
}

pub(crate) fn format_section_break(
    section: &SectionBreak,
    range: Range,
    opts: &ResolvedOptions,
) -> String {
    let mut output = String::from("\n---\n");

    if opts.detailed_metadata() {
        if let Some(style) = section.section_style.as_ref() {
            let meta = SectionBreakMetadata {
                section_type: style.section_type.as_deref(),
                column_separator_style: style.column_separator_style.as_deref(),
                content_direction: style.content_direction.as_deref(),
                margin_header: style.margin_header.as_ref(),
                margin_footer: style.margin_footer.as_ref(),
                range,
            };
            output.push_str(&comment("section-break", &meta));
            output.push('\n');
        }
    }

    output
}

pub(crate) fn format_table_of_contents(toc: &TableOfContents, opts: &ResolvedOptions) -> String {
    let mut output = String::from("\n## Table of Contents\n\n");

    if opts.include_metadata && toc.content.is_some() {
        let meta = TocMetadata {
            suggested_insertion_ids: toc.suggested_insertion_ids.as_deref(),
        };
        output.push_str(&comment("toc-metadata", &meta));
        output.push('\n');
    }

    // Entries are not generated, only a placeholder
    output.push_str("<!-- TOC content would be generated here -->\n");

    output
}

fn magnitude(dimension: &Option<Dimension>) -> Option<f64> {
    dimension.as_ref().and_then(|d| d.magnitude)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
