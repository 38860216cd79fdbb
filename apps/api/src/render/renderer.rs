//! Walks a [`Resume`] and appends its sections to a [`Document`].
//!
//! Section order is fixed for every template:
//! name → contact lines → objective → projects → work experience → profile →
//! education → skills → certifications → contact information → referee.

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::docx::{Alignment, Document, DocxError};
use crate::models::resume::{Certification, Resume};
use crate::render::layout::{HeaderStyle, HeadingLevel, KeyFeatureStyle, LayoutPolicy};

/// Renders the resume into an in-memory `.docx` archive.
pub fn render_resume(resume: &Resume, policy: &LayoutPolicy) -> Result<Vec<u8>, DocxError> {
    build_document(resume, policy).to_bytes()
}

/// Builds the document body without packaging it.
pub fn build_document(resume: &Resume, policy: &LayoutPolicy) -> Document {
    let mut renderer = ResumeRenderer {
        doc: Document::new(),
        policy,
    };
    renderer.header(resume);
    renderer.objective(resume);
    renderer.projects(resume);
    renderer.work_experience(resume);
    renderer.profile(resume);
    renderer.education(resume);
    renderer.skills(resume);
    renderer.certifications(resume);
    renderer.contact_information(resume);
    renderer.referee(resume);
    renderer.doc
}

/// Profile text split into bullet items. Blank lines are dropped.
pub fn profile_items(profile: &str) -> Vec<&str> {
    profile
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Year of the certification date, or "N/A" when undated.
pub fn certification_year(date: Option<NaiveDate>) -> String {
    date.map(|d| d.year().to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Section traversal
// ────────────────────────────────────────────────────────────────────────────

struct ResumeRenderer<'a> {
    doc: Document,
    policy: &'a LayoutPolicy,
}

impl ResumeRenderer<'_> {
    fn heading(&mut self, text: impl Into<String>, level: HeadingLevel) {
        let size = self.policy.heading_size(level);
        self.doc.add_heading(text, size, Alignment::Left);
    }

    fn header(&mut self, resume: &Resume) {
        if let Some(name) = &resume.name {
            self.doc.set_title(name.clone());
        }

        match self.policy.header {
            HeaderStyle::Plain => {
                if let Some(name) = &resume.name {
                    self.heading(name.clone(), HeadingLevel::Title);
                }
                self.doc.add_paragraph(format!(
                    "{}\n{}\n{}",
                    resume.address, resume.email, resume.phone_number
                ));
            }
            HeaderStyle::Centered => {
                let size = self.policy.heading_size(HeadingLevel::Title);
                self.doc.add_heading(
                    resume.name.clone().unwrap_or_default(),
                    size,
                    Alignment::Center,
                );
                for line in [&resume.address, &resume.email, &resume.phone_number] {
                    self.doc
                        .add_styled_paragraph(line.clone(), false, Alignment::Center);
                }
            }
        }
    }

    fn objective(&mut self, resume: &Resume) {
        if let Some(objective) = &resume.objective {
            self.heading("OBJECTIVE", HeadingLevel::Section);
            self.doc.add_paragraph(objective.clone());
        }
    }

    fn projects(&mut self, resume: &Resume) {
        self.heading("PROJECTS", HeadingLevel::Section);
        for project in &resume.projects {
            self.heading(
                format!("Product Name: {}", project.name),
                HeadingLevel::Entry,
            );
            self.doc.add_paragraph(format!(
                "Technologies: {}",
                project.technologies.join(", ")
            ));
            self.doc
                .add_paragraph(format!("Description: {}", project.description));

            if project.key_features.is_empty() {
                continue;
            }
            match self.policy.key_features {
                KeyFeatureStyle::Flat => {
                    self.doc.add_paragraph("Key Features:");
                    self.doc.add_bullets(project.key_features.iter().cloned(), 0);
                }
                KeyFeatureStyle::Nested => {
                    self.doc.add_bullet("Key Features:", 0);
                    self.doc.add_bullets(project.key_features.iter().cloned(), 1);
                }
            }
        }
    }

    fn work_experience(&mut self, resume: &Resume) {
        self.heading("WORK EXPERIENCE", HeadingLevel::Section);
        for experience in &resume.work_experience {
            self.heading(experience.company.clone(), HeadingLevel::Entry);
            self.doc
                .add_paragraph(format!("Position: {}", experience.position));
            self.doc
                .add_bullets(experience.responsibilities.iter().cloned(), 0);
        }
    }

    fn profile(&mut self, resume: &Resume) {
        if resume.profile.is_none() && !self.policy.always_show_profile {
            return;
        }
        self.heading("PROFILE", HeadingLevel::Section);
        if let Some(profile) = &resume.profile {
            self.doc.add_bullets(profile_items(profile), 0);
        }
    }

    fn education(&mut self, resume: &Resume) {
        self.heading("EDUCATION", HeadingLevel::Section);
        for education in &resume.education {
            self.doc.add_paragraph(format!(
                "{}\n{}",
                education.institution, education.degree
            ));
        }
    }

    fn skills(&mut self, resume: &Resume) {
        self.heading("SKILLS", HeadingLevel::Section);
        self.doc.add_paragraph(resume.skills.join(", "));
    }

    fn certifications(&mut self, resume: &Resume) {
        self.heading("CERTIFICATION", HeadingLevel::Section);
        for certification in &resume.certifications {
            self.doc.add_paragraph(format!(
                "{} - {} {}",
                certification.name,
                certification.organization,
                certification_year(certification.date)
            ));
            self.verification_link(certification);
        }
    }

    fn verification_link(&mut self, certification: &Certification) {
        if !self.policy.hyperlinks {
            self.doc.add_paragraph(format!(
                "Verify online: {}",
                certification.verification_link.as_deref().unwrap_or_default()
            ));
            return;
        }
        if let Some(url) = certification.verification_url() {
            self.link(None, "Verify online", url, format!("Verify online: {url}"));
        }
    }

    fn contact_information(&mut self, resume: &Resume) {
        self.heading("CONTACT INFORMATION:", HeadingLevel::Section);
        let contact = &resume.contact_information;
        match contact.linkedin_url() {
            Some(url) if self.policy.hyperlinks => {
                self.link(Some("LinkedIn: "), url, url, format!("LinkedIn: {url}"));
            }
            _ => {
                self.doc.add_paragraph(format!(
                    "LinkedIn: {}",
                    contact.linkedin.as_deref().unwrap_or_default()
                ));
            }
        }
    }

    fn referee(&mut self, resume: &Resume) {
        self.heading("REFEREE", HeadingLevel::Section);
        self.doc.add_paragraph(resume.referee.clone());
    }

    /// Adds a hyperlink, degrading to `fallback` text when `url` is not absolute.
    fn link(&mut self, label: Option<&str>, text: &str, url: &str, fallback: String) {
        if let Err(e) = self.doc.add_hyperlink(label, text, url) {
            warn!("{e}, rendering as plain text");
            self.doc.add_paragraph(fallback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::document::Block;
    use crate::models::resume::{ContactInformation, Education, Project, WorkExperience};

    fn texts(doc: &Document) -> Vec<String> {
        doc.blocks().iter().map(Block::text).collect()
    }

    fn headings(doc: &Document) -> Vec<String> {
        doc.blocks()
            .iter()
            .filter_map(|b| match b {
                Block::Heading { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn bullets(doc: &Document) -> Vec<(String, u8)> {
        doc.blocks()
            .iter()
            .filter_map(|b| match b {
                Block::Bullet { text, level } => Some((text.clone(), *level)),
                _ => None,
            })
            .collect()
    }

    fn full_resume() -> Resume {
        Resume {
            name: Some("Ada Lovelace".to_string()),
            address: "12 Analytical Way".to_string(),
            phone_number: "555-0100".to_string(),
            email: "ada@example.com".to_string(),
            objective: Some("Build engines".to_string()),
            skills: vec!["Go".into(), "Rust".into(), "C++".into()],
            work_experience: vec![WorkExperience {
                company: "Babbage & Co".to_string(),
                position: "Analyst".to_string(),
                responsibilities: vec!["Wrote programs".into(), "Reviewed designs".into()],
                ..Default::default()
            }],
            education: vec![Education {
                institution: "University of London".to_string(),
                degree: "Mathematics".to_string(),
                graduation_date: None,
            }],
            projects: vec![Project {
                name: "Engine".to_string(),
                technologies: vec!["Brass".into(), "Steam".into()],
                description: "A difference engine".to_string(),
                key_features: vec!["Loops".into(), "Punch cards".into()],
            }],
            profile: Some("Led team\n  Delivered project  \n".to_string()),
            certifications: vec![
                Certification {
                    name: "CKA".to_string(),
                    organization: "CNCF".to_string(),
                    date: NaiveDate::from_ymd_opt(2022, 8, 14),
                    verification_link: Some("https://verify.example.com/cka".to_string()),
                },
                Certification {
                    name: "OSCP".to_string(),
                    organization: "OffSec".to_string(),
                    date: None,
                    verification_link: Some("   ".to_string()),
                },
            ],
            contact_information: ContactInformation {
                linkedin: Some("https://linkedin.com/in/ada".to_string()),
            },
            referee: "Available on request".to_string(),
        }
    }

    const ALL_SECTIONS_ONE: [&str; 8] = [
        "PROJECTS",
        "WORK EXPERIENCE",
        "PROFILE",
        "EDUCATION",
        "SKILLS",
        "CERTIFICATION",
        "CONTACT INFORMATION:",
        "REFEREE",
    ];

    #[test]
    fn test_empty_resume_renders_every_section_heading() {
        let resume = Resume::default();

        let one = build_document(&resume, &LayoutPolicy::template_one());
        assert_eq!(headings(&one), ALL_SECTIONS_ONE.to_vec());
        assert!(bullets(&one).is_empty());

        let two = build_document(&resume, &LayoutPolicy::template_two());
        assert_eq!(
            headings(&two),
            vec![
                "",
                "PROJECTS",
                "WORK EXPERIENCE",
                "EDUCATION",
                "SKILLS",
                "CERTIFICATION",
                "CONTACT INFORMATION:",
                "REFEREE",
            ]
        );

        for policy in [LayoutPolicy::template_one(), LayoutPolicy::template_two()] {
            let bytes = render_resume(&resume, &policy).unwrap();
            assert!(!bytes.is_empty());
        }
    }

    #[test]
    fn test_section_order_is_fixed() {
        let doc = build_document(&full_resume(), &LayoutPolicy::template_one());
        let sections: Vec<String> = headings(&doc)
            .into_iter()
            .filter(|h| h.chars().all(|c| !c.is_lowercase()))
            .collect();
        assert_eq!(
            sections,
            vec![
                "OBJECTIVE",
                "PROJECTS",
                "WORK EXPERIENCE",
                "PROFILE",
                "EDUCATION",
                "SKILLS",
                "CERTIFICATION",
                "CONTACT INFORMATION:",
                "REFEREE",
            ]
        );
    }

    #[test]
    fn test_objective_omitted_when_absent() {
        let resume = Resume {
            objective: None,
            ..full_resume()
        };
        for policy in [LayoutPolicy::template_one(), LayoutPolicy::template_two()] {
            let doc = build_document(&resume, &policy);
            assert!(!headings(&doc).contains(&"OBJECTIVE".to_string()));
        }
    }

    #[test]
    fn test_certification_year_or_na() {
        assert_eq!(certification_year(None), "N/A");
        assert_eq!(certification_year(NaiveDate::from_ymd_opt(2022, 8, 14)), "2022");

        let doc = build_document(&full_resume(), &LayoutPolicy::template_one());
        let texts = texts(&doc);
        assert!(texts.contains(&"CKA - CNCF 2022".to_string()));
        assert!(texts.contains(&"OSCP - OffSec N/A".to_string()));
    }

    #[test]
    fn test_skills_are_comma_joined() {
        let doc = build_document(&full_resume(), &LayoutPolicy::template_two());
        assert!(texts(&doc).contains(&"Go, Rust, C++".to_string()));
    }

    #[test]
    fn test_profile_blank_lines_are_filtered() {
        assert_eq!(
            profile_items("Led team\n  Delivered project  \n"),
            vec!["Led team", "Delivered project"]
        );
        assert_eq!(profile_items("a\r\n\r\nb"), vec!["a", "b"]);
        assert!(profile_items("\n \n").is_empty());
    }

    #[test]
    fn test_profile_heading_policy() {
        let resume = Resume {
            profile: None,
            ..full_resume()
        };
        let one = build_document(&resume, &LayoutPolicy::template_one());
        assert!(headings(&one).contains(&"PROFILE".to_string()));
        let two = build_document(&resume, &LayoutPolicy::template_two());
        assert!(!headings(&two).contains(&"PROFILE".to_string()));
    }

    #[test]
    fn test_key_features_flat_in_template_one() {
        let doc = build_document(&full_resume(), &LayoutPolicy::template_one());
        assert!(doc.blocks().contains(&Block::Paragraph {
            text: "Key Features:".to_string(),
            bold: false,
            alignment: Alignment::Left,
        }));
        let bullets = bullets(&doc);
        assert!(bullets.contains(&("Loops".to_string(), 0)));
        assert!(bullets.contains(&("Punch cards".to_string(), 0)));
    }

    #[test]
    fn test_key_features_nested_in_template_two() {
        let doc = build_document(&full_resume(), &LayoutPolicy::template_two());
        let bullets = bullets(&doc);
        assert!(bullets.contains(&("Key Features:".to_string(), 0)));
        assert!(bullets.contains(&("Loops".to_string(), 1)));
        assert!(bullets.contains(&("Punch cards".to_string(), 1)));
    }

    #[test]
    fn test_empty_key_features_are_omitted() {
        let mut resume = full_resume();
        resume.projects[0].key_features.clear();
        for policy in [LayoutPolicy::template_one(), LayoutPolicy::template_two()] {
            let doc = build_document(&resume, &policy);
            assert!(!texts(&doc).iter().any(|t| t == "Key Features:"));
        }
    }

    #[test]
    fn test_template_one_never_hyperlinks() {
        let doc = build_document(&full_resume(), &LayoutPolicy::template_one());
        assert_eq!(doc.relationships().hyperlinks().count(), 0);
        let texts = texts(&doc);
        assert!(texts.contains(&"Verify online: https://verify.example.com/cka".to_string()));
        assert!(texts.contains(&"LinkedIn: https://linkedin.com/in/ada".to_string()));
    }

    #[test]
    fn test_template_two_hyperlinks_non_blank_urls() {
        let doc = build_document(&full_resume(), &LayoutPolicy::template_two());
        // CKA link and LinkedIn; the blank OSCP link is skipped.
        assert_eq!(doc.relationships().hyperlinks().count(), 2);

        let links: Vec<&Block> = doc
            .blocks()
            .iter()
            .filter(|b| matches!(b, Block::Hyperlink { .. }))
            .collect();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].text(), "Verify online");
        assert_eq!(links[1].text(), "LinkedIn: https://linkedin.com/in/ada");
    }

    #[test]
    fn test_blank_links_create_no_relationships() {
        let mut resume = full_resume();
        resume.certifications[0].verification_link = Some("  ".to_string());
        resume.contact_information.linkedin = Some("\t".to_string());

        let doc = build_document(&resume, &LayoutPolicy::template_two());
        assert_eq!(doc.relationships().hyperlinks().count(), 0);
        assert!(texts(&doc).contains(&"LinkedIn: \t".to_string()));
    }

    #[test]
    fn test_relative_link_falls_back_to_text() {
        let mut resume = full_resume();
        resume.contact_information.linkedin = Some("linkedin.com/in/ada".to_string());

        let doc = build_document(&resume, &LayoutPolicy::template_two());
        assert!(texts(&doc).contains(&"LinkedIn: linkedin.com/in/ada".to_string()));
        assert_eq!(doc.relationships().hyperlinks().count(), 1);
    }

    #[test]
    fn test_non_web_scheme_falls_back_to_text() {
        let mut resume = full_resume();
        resume.contact_information.linkedin = Some("localhost:3000/in/ada".to_string());
        resume.certifications[0].verification_link = Some("javascript:alert(1)".to_string());

        let doc = build_document(&resume, &LayoutPolicy::template_two());
        let texts = texts(&doc);
        assert!(texts.contains(&"LinkedIn: localhost:3000/in/ada".to_string()));
        assert!(texts.contains(&"Verify online: javascript:alert(1)".to_string()));
        assert_eq!(doc.relationships().hyperlinks().count(), 0);
    }

    #[test]
    fn test_header_styles() {
        let resume = full_resume();

        let one = build_document(&resume, &LayoutPolicy::template_one());
        assert_eq!(
            one.blocks()[0],
            Block::Heading {
                text: "Ada Lovelace".to_string(),
                size: 32,
                alignment: Alignment::Left,
            }
        );
        assert_eq!(
            one.blocks()[1].text(),
            "12 Analytical Way\nada@example.com\n555-0100"
        );

        let two = build_document(&resume, &LayoutPolicy::template_two());
        assert_eq!(
            two.blocks()[0],
            Block::Heading {
                text: "Ada Lovelace".to_string(),
                size: 36,
                alignment: Alignment::Center,
            }
        );
        for (block, expected) in two.blocks()[1..4]
            .iter()
            .zip(["12 Analytical Way", "ada@example.com", "555-0100"])
        {
            assert_eq!(
                *block,
                Block::Paragraph {
                    text: expected.to_string(),
                    bold: false,
                    alignment: Alignment::Center,
                }
            );
        }
    }

    #[test]
    fn test_missing_name_skips_heading_in_template_one() {
        let resume = Resume {
            name: None,
            ..full_resume()
        };
        let doc = build_document(&resume, &LayoutPolicy::template_one());
        assert!(matches!(doc.blocks()[0], Block::Paragraph { .. }));
        assert!(doc.title().is_none());
    }

    #[test]
    fn test_entries_render_under_their_sections() {
        let doc = build_document(&full_resume(), &LayoutPolicy::template_one());
        let texts = texts(&doc);
        for expected in [
            "Product Name: Engine",
            "Technologies: Brass, Steam",
            "Description: A difference engine",
            "Babbage & Co",
            "Position: Analyst",
            "University of London\nMathematics",
            "Available on request",
        ] {
            assert!(texts.contains(&expected.to_string()), "missing {expected}");
        }
        let bullets = bullets(&doc);
        assert!(bullets.contains(&("Wrote programs".to_string(), 0)));
        assert!(bullets.contains(&("Led team".to_string(), 0)));
        assert!(bullets.contains(&("Delivered project".to_string(), 0)));
    }
}
