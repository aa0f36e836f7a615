//! Document model types mirroring the Google Docs API schema.
//!
//! Only the subset of the schema read by the renderer is modelled. All
//! types deserialize from the API's camelCase JSON, every field is optional
//! on the wire, and the "exactly one of" unions (body element kind, inline
//! element kind) are enums with an explicit `Unsupported` variant for kinds
//! this crate does not render.

mod document;
mod paragraph;
mod section;
mod style;
mod table;

pub use document::{Body, BodyContent, Document, DocumentStyle, Size, StructuralElement};
pub use paragraph::{
    Bullet, HorizontalRule, InlineElement, InlineObjectElement, Link, NamedStyleType, Paragraph,
    ParagraphElement, ParagraphStyle, RichLink, RichLinkProperties, TextRun, TextStyle,
    INDENT_UNIT, MAX_INDENT_LEVEL,
};
pub use section::{SectionBreak, SectionStyle, TableOfContents};
pub use style::{BaselineOffset, Color, Dimension, OptionalColor, RgbColor, WeightedFontFamily};
pub use table::{Table, TableCell, TableCellStyle, TableColumnProperties, TableRow, TableStyle};

pub(crate) use style::{null_as_default, serialize_number};
