//! Relationship registry for the main document part
//! (`word/_rels/document.xml.rels`).
//!
//! `rId1` is always the numbering part. Hyperlinks are allocated from `rId2`
//! upwards and deduplicated by target.

use url::Url;

use crate::docx::error::DocxError;
use crate::docx::xml::escape;

const NUMBERING_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
const HYPERLINK_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";

/// Schemes a resume link may point at.
const LINK_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: &'static str,
    pub target: String,
    pub external: bool,
}

#[derive(Debug, Clone)]
pub struct Relationships {
    entries: Vec<Relationship>,
}

impl Default for Relationships {
    fn default() -> Self {
        Self {
            entries: vec![Relationship {
                id: "rId1".to_string(),
                rel_type: NUMBERING_TYPE,
                target: "numbering.xml".to_string(),
                external: false,
            }],
        }
    }
}

impl Relationships {
    /// Registers an external hyperlink and returns its relationship id.
    ///
    /// The target must parse as an absolute `http`, `https` or `mailto` URL;
    /// anything else is rejected before it can end up in the package.
    pub fn add_hyperlink(&mut self, target: &str) -> Result<String, DocxError> {
        let url = Url::parse(target.trim())
            .ok()
            .filter(|url| LINK_SCHEMES.contains(&url.scheme()))
            .ok_or_else(|| DocxError::InvalidHyperlink(target.to_string()))?;
        let target = url.to_string();

        if let Some(existing) = self
            .entries
            .iter()
            .find(|r| r.rel_type == HYPERLINK_TYPE && r.target == target)
        {
            return Ok(existing.id.clone());
        }

        let id = format!("rId{}", self.entries.len() + 1);
        self.entries.push(Relationship {
            id: id.clone(),
            rel_type: HYPERLINK_TYPE,
            target,
            external: true,
        });
        Ok(id)
    }

    #[cfg(test)]
    pub fn hyperlinks(&self) -> impl Iterator<Item = &Relationship> {
        self.entries.iter().filter(|r| r.rel_type == HYPERLINK_TYPE)
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for rel in &self.entries {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"{}/>"#,
                rel.id,
                rel.rel_type,
                escape(&rel.target),
                if rel.external {
                    r#" TargetMode="External""#
                } else {
                    ""
                }
            ));
        }
        xml.push_str("</Relationships>");
        xml
    }
}
