//! Layout policies for the two resume templates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Template selection
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    /// Left-aligned header, derived heading sizes, no hyperlinks.
    One,
    /// Centered header, fixed heading sizes, nested key features, clickable links.
    #[default]
    Two,
}

impl FromStr for TemplateVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one" | "1" => Ok(TemplateVariant::One),
            "two" | "2" => Ok(TemplateVariant::Two),
            other => Err(format!("unknown template '{other}' (expected 'one' or 'two')")),
        }
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateVariant::One => write!(f, "one"),
            TemplateVariant::Two => write!(f, "two"),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Policy
// ────────────────────────────────────────────────────────────────────────────

/// Heading nesting: the candidate's name, section titles, entries within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    Title = 1,
    Section = 2,
    Entry = 3,
}

/// Heading font sizes, in half-points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingScale {
    /// `base - (level - 1) * step`
    Derived { base: u32, step: u32 },
    /// Explicit sizes for title, section and entry headings.
    Fixed([u32; 3]),
}

impl HeadingScale {
    pub fn size(&self, level: HeadingLevel) -> u32 {
        let index = level as u32 - 1;
        match *self {
            HeadingScale::Derived { base, step } => base.saturating_sub(index * step),
            HeadingScale::Fixed(sizes) => sizes[index as usize],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    /// Name heading (skipped when absent) and a single contact paragraph.
    Plain,
    /// Centered bold name and one centered line each for address, email, phone.
    Centered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFeatureStyle {
    /// "Key Features:" paragraph followed by top-level bullets.
    Flat,
    /// "Key Features:" bullet with the features nested one level below it.
    Nested,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPolicy {
    pub header: HeaderStyle,
    pub headings: HeadingScale,
    pub key_features: KeyFeatureStyle,
    /// Render certification and LinkedIn URLs as clickable links.
    pub hyperlinks: bool,
    /// Emit the PROFILE heading even when there is no profile text.
    pub always_show_profile: bool,
}

impl LayoutPolicy {
    pub fn template_one() -> Self {
        Self {
            header: HeaderStyle::Plain,
            headings: HeadingScale::Derived { base: 32, step: 4 },
            key_features: KeyFeatureStyle::Flat,
            hyperlinks: false,
            always_show_profile: true,
        }
    }

    pub fn template_two() -> Self {
        Self {
            header: HeaderStyle::Centered,
            headings: HeadingScale::Fixed([36, 28, 24]),
            key_features: KeyFeatureStyle::Nested,
            hyperlinks: true,
            always_show_profile: false,
        }
    }

    pub fn heading_size(&self, level: HeadingLevel) -> u32 {
        self.headings.size(level)
    }
}

impl From<TemplateVariant> for LayoutPolicy {
    fn from(variant: TemplateVariant) -> Self {
        match variant {
            TemplateVariant::One => LayoutPolicy::template_one(),
            TemplateVariant::Two => LayoutPolicy::template_two(),
        }
    }
}
