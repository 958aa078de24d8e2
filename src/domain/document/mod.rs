//! Report document module - classification, parsing and rendering of the
//! plain-text report body.

mod block;
mod classifier;
mod parser;
mod printable;
mod renderer;

pub use block::{
    Block, BlockKind, DateValue, MetadataValue, METADATA_PREFIXES, PROJECT_NAME_KEY,
    REPORTING_PERIOD_KEY, REPORT_DATE_KEY,
};
pub use classifier::{classify, parse_date};
pub use parser::parse;
pub use printable::{printable_base_filename, to_printable_document, FOOTER_ATTRIBUTION};
pub use renderer::{
    html_escape, render, to_html, PresentationNode, BULLET_MARKER, PERIOD_SEPARATOR_GLYPH,
};
