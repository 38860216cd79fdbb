//! In-memory document body: an ordered list of blocks plus the relationships
//! they reference.

use crate::docx::error::DocxError;
use crate::docx::numbering::{MAX_LEVEL, NUMBERING_ID};
use crate::docx::relationships::Relationships;
use crate::docx::xml::escape;

/// Paragraph alignment (`w:jc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// One body-level paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Bold run at `size` half-points.
    Heading {
        text: String,
        size: u32,
        alignment: Alignment,
    },
    Paragraph {
        text: String,
        bold: bool,
        alignment: Alignment,
    },
    /// List item referencing the embedded numbering definition.
    Bullet { text: String, level: u8 },
    /// Optional plain `label` run followed by a clickable `text` run.
    Hyperlink {
        label: Option<String>,
        text: String,
        rel_id: String,
    },
}

impl Block {
    /// Visible text of the block, as a reader would see it.
    #[cfg(test)]
    pub fn text(&self) -> String {
        match self {
            Block::Heading { text, .. }
            | Block::Paragraph { text, .. }
            | Block::Bullet { text, .. } => text.clone(),
            Block::Hyperlink { label, text, .. } => {
                format!("{}{}", label.as_deref().unwrap_or_default(), text)
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    blocks: Vec<Block>,
    relationships: Relationships,
    title: Option<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Sets the `dc:title` written to the core properties part.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn add_heading(&mut self, text: impl Into<String>, size: u32, alignment: Alignment) {
        self.blocks.push(Block::Heading {
            text: text.into(),
            size,
            alignment,
        });
    }

    pub fn add_paragraph(&mut self, text: impl Into<String>) {
        self.add_styled_paragraph(text, false, Alignment::Left);
    }

    pub fn add_styled_paragraph(
        &mut self,
        text: impl Into<String>,
        bold: bool,
        alignment: Alignment,
    ) {
        self.blocks.push(Block::Paragraph {
            text: text.into(),
            bold,
            alignment,
        });
    }

    /// Levels beyond the numbering definition are clamped to the deepest one.
    pub fn add_bullet(&mut self, text: impl Into<String>, level: u8) {
        self.blocks.push(Block::Bullet {
            text: text.into(),
            level: level.min(MAX_LEVEL),
        });
    }

    pub fn add_bullets<I, S>(&mut self, items: I, level: u8)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for item in items {
            self.add_bullet(item, level);
        }
    }

    /// Appends a paragraph holding a hyperlink to `url`.
    ///
    /// Fails without touching the document when `url` is not absolute.
    pub fn add_hyperlink(
        &mut self,
        label: Option<&str>,
        text: impl Into<String>,
        url: &str,
    ) -> Result<(), DocxError> {
        let rel_id = self.relationships.add_hyperlink(url)?;
        self.blocks.push(Block::Hyperlink {
            label: label.map(str::to_string),
            text: text.into(),
            rel_id,
        });
        Ok(())
    }

    /// Serializes `word/document.xml`.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from(concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#,
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
            "<w:body>"
        ));
        for block in &self.blocks {
            write_block(&mut xml, block);
        }
        // US letter, 1" margins (twentieths of a point).
        xml.push_str(concat!(
            r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/>"#,
            r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/>"#,
            "</w:sectPr></w:body></w:document>"
        ));
        xml
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Block serialization
// ────────────────────────────────────────────────────────────────────────────

fn write_block(xml: &mut String, block: &Block) {
    xml.push_str("<w:p>");
    match block {
        Block::Heading {
            text,
            size,
            alignment,
        } => {
            write_paragraph_properties(xml, *alignment, None);
            write_run(
                xml,
                text,
                &format!(r#"<w:b/><w:sz w:val="{size}"/><w:szCs w:val="{size}"/>"#),
            );
        }
        Block::Paragraph {
            text,
            bold,
            alignment,
        } => {
            write_paragraph_properties(xml, *alignment, None);
            write_run(xml, text, if *bold { "<w:b/>" } else { "" });
        }
        Block::Bullet { text, level } => {
            write_paragraph_properties(xml, Alignment::Left, Some(*level));
            write_run(xml, text, "");
        }
        Block::Hyperlink {
            label,
            text,
            rel_id,
        } => {
            if let Some(label) = label {
                write_run(xml, label, "");
            }
            xml.push_str(&format!(r#"<w:hyperlink r:id="{rel_id}" w:history="1">"#));
            write_run(
                xml,
                text,
                r#"<w:color w:val="0563C1"/><w:u w:val="single"/>"#,
            );
            xml.push_str("</w:hyperlink>");
        }
    }
    xml.push_str("</w:p>");
}

fn write_paragraph_properties(xml: &mut String, alignment: Alignment, list_level: Option<u8>) {
    if alignment == Alignment::Left && list_level.is_none() {
        return;
    }
    xml.push_str("<w:pPr>");
    if let Some(level) = list_level {
        xml.push_str(&format!(
            r#"<w:numPr><w:ilvl w:val="{level}"/><w:numId w:val="{NUMBERING_ID}"/></w:numPr>"#
        ));
    }
    if alignment == Alignment::Center {
        xml.push_str(r#"<w:jc w:val="center"/>"#);
    }
    xml.push_str("</w:pPr>");
}

/// Embedded newlines become `w:br` line breaks inside a single run.
fn write_run(xml: &mut String, text: &str, run_properties: &str) {
    xml.push_str("<w:r>");
    if !run_properties.is_empty() {
        xml.push_str("<w:rPr>");
        xml.push_str(run_properties);
        xml.push_str("</w:rPr>");
    }
    let normalized = text.replace("\r\n", "\n");
    for (i, line) in normalized.split('\n').enumerate() {
        if i > 0 {
            xml.push_str("<w:br/>");
        }
        xml.push_str(r#"<w:t xml:space="preserve">"#);
        xml.push_str(&escape(line));
        xml.push_str("</w:t>");
    }
    xml.push_str("</w:r>");
}
