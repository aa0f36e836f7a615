//! Conversion options and configuration.

use serde::Deserialize;

/// Named option presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailPreset {
    /// Every annotation and style detail
    #[default]
    AllDetails,
    /// No ids, list info or layout metadata
    Minimal,
}

/// Options controlling conversion fidelity.
///
/// Deserializes from camelCase JSON, with any missing key taking its
/// default:
///
/// ```
/// use gdocs_markdown::ConvertOptions;
///
/// let options: ConvertOptions =
///     serde_json::from_str(r#"{"includeStyles": false, "metadataOptions": {"minimalMode": true}}"#)
///         .unwrap();
/// assert!(options.include_metadata);
/// assert!(!options.include_styles);
/// assert!(!options.resolve().include_ranges);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConvertOptions {
    /// Emit frontmatter and annotation comments
    pub include_metadata: bool,

    /// Emit inline HTML styling and layout metadata
    pub include_styles: bool,

    /// Emit heading ids
    pub include_ids: bool,

    /// Apply text run formatting (emphasis, links, spans)
    pub preserve_all_formatting: bool,

    /// Which metadata categories to emit
    #[serde(rename = "metadataOptions")]
    pub metadata: MetadataOptions,
}

/// Selective metadata options. Unset flags cascade from `minimal_mode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetadataOptions {
    /// Character ranges (default: on unless minimal)
    pub include_ranges: Option<bool>,

    /// List ids and nesting levels (default: on)
    pub include_list_info: Option<bool>,

    /// Indentation, spacing and alignment (default: on unless minimal)
    pub include_indent_info: Option<bool>,

    /// Paragraph heading ids (default: on)
    pub include_heading_ids: Option<bool>,

    /// Only essential metadata
    pub minimal_mode: bool,
}

impl ConvertOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options from a preset.
    pub fn from_preset(preset: DetailPreset) -> Self {
        match preset {
            DetailPreset::AllDetails => Self::all_details(),
            DetailPreset::Minimal => Self::minimal(),
        }
    }

    /// Everything on.
    pub fn all_details() -> Self {
        Self {
            include_metadata: true,
            include_styles: true,
            include_ids: true,
            preserve_all_formatting: true,
            metadata: MetadataOptions::default(),
        }
    }

    /// Formatting and essential metadata only: no heading ids, no list ids,
    /// no layout details.
    pub fn minimal() -> Self {
        Self {
            include_metadata: true,
            include_styles: true,
            include_ids: false,
            preserve_all_formatting: true,
            metadata: MetadataOptions {
                include_list_info: Some(false),
                include_heading_ids: Some(false),
                minimal_mode: true,
                ..MetadataOptions::default()
            },
        }
    }

    /// Enable or disable frontmatter and annotations.
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Enable or disable inline styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Enable or disable heading ids.
    pub fn with_ids(mut self, include: bool) -> Self {
        self.include_ids = include;
        self
    }

    /// Enable or disable text run formatting.
    pub fn with_formatting(mut self, preserve: bool) -> Self {
        self.preserve_all_formatting = preserve;
        self
    }

    /// Enable or disable minimal mode.
    pub fn with_minimal_mode(mut self, minimal: bool) -> Self {
        self.metadata.minimal_mode = minimal;
        self
    }

    /// Override character range emission.
    pub fn with_ranges(mut self, include: bool) -> Self {
        self.metadata.include_ranges = Some(include);
        self
    }

    /// Override list info emission.
    pub fn with_list_info(mut self, include: bool) -> Self {
        self.metadata.include_list_info = Some(include);
        self
    }

    /// Override indentation metadata emission.
    pub fn with_indent_info(mut self, include: bool) -> Self {
        self.metadata.include_indent_info = Some(include);
        self
    }

    /// Override heading id emission.
    pub fn with_heading_ids(mut self, include: bool) -> Self {
        self.metadata.include_heading_ids = Some(include);
        self
    }

    /// Resolve cascading defaults into a flat record.
    pub fn resolve(&self) -> ResolvedOptions {
        let minimal = self.metadata.minimal_mode;
        ResolvedOptions {
            include_metadata: self.include_metadata,
            include_styles: self.include_styles,
            include_ids: self.include_ids,
            preserve_all_formatting: self.preserve_all_formatting,
            include_ranges: self.metadata.include_ranges.unwrap_or(!minimal),
            include_list_info: self.metadata.include_list_info.unwrap_or(true),
            include_indent_info: self.metadata.include_indent_info.unwrap_or(!minimal),
            include_heading_ids: self.metadata.include_heading_ids.unwrap_or(true),
            minimal_mode: minimal,
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::all_details()
    }
}

/// Fully resolved options, computed once per conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Emit frontmatter and annotation comments
    pub include_metadata: bool,
    /// Emit inline HTML styling and layout metadata
    pub include_styles: bool,
    /// Emit heading ids
    pub include_ids: bool,
    /// Apply text run formatting
    pub preserve_all_formatting: bool,
    /// Emit character ranges
    pub include_ranges: bool,
    /// Emit list ids and nesting levels
    pub include_list_info: bool,
    /// Emit indentation and layout metadata
    pub include_indent_info: bool,
    /// Emit paragraph heading ids
    pub include_heading_ids: bool,
    /// Only essential metadata
    pub minimal_mode: bool,
}

impl ResolvedOptions {
    /// Structural annotations (tables, sections, rich links) are on.
    pub fn detailed_metadata(&self) -> bool {
        self.include_metadata && !self.minimal_mode
    }

    /// Paragraph heading ids are on.
    pub fn heading_ids(&self) -> bool {
        self.include_ids && self.include_heading_ids
    }

    /// Indentation metadata is on.
    pub fn indent_info(&self) -> bool {
        self.include_styles && self.include_indent_info
    }

    /// The same options with annotation output switched off.
    pub fn without_metadata(self) -> Self {
        Self {
            include_metadata: false,
            ..self
        }
    }
}

impl From<&ConvertOptions> for ResolvedOptions {
    fn from(options: &ConvertOptions) -> Self {
        options.resolve()
    }
}
