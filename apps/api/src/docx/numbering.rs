//! Default bullet list definition embedded into every package.
//!
//! Bullet paragraphs reference `NUMBERING_ID`; the part defines bullet glyphs
//! and indentation for all nine levels WordprocessingML allows.

/// `w:numId` every bullet paragraph points at.
pub const NUMBERING_ID: u32 = 1;

/// Deepest `w:ilvl` defined by the embedded part.
pub const MAX_LEVEL: u8 = 8;

/// `word/numbering.xml`, loaded from assets/numbering.xml at compile time.
pub const NUMBERING_XML: &str = include_str!("../../assets/numbering.xml");
