//! Rendering module for converting documents to annotated Markdown.

mod annotation;
mod cleanup;
mod markdown;
mod options;
mod result;

pub use markdown::{
    to_markdown, to_markdown_minimal, to_markdown_with_all_details, to_markdown_with_stats,
    MarkdownRenderer,
};
pub use options::{ConvertOptions, DetailPreset, MetadataOptions, ResolvedOptions};
pub use result::{ConversionStats, RenderResult};
