//! Minimal Office Open XML word-processing package writer.
//!
//! Covers the subset the resume renderer needs: headings, plain paragraphs,
//! bullet items backed by an embedded numbering part, and external hyperlinks.

pub mod document;
pub mod error;
pub mod numbering;
pub mod package;
pub mod relationships;
mod xml;

pub use document::{Alignment, Document};
pub use error::DocxError;
pub use package::DOCX_CONTENT_TYPE;
