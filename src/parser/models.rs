// src/parser/models.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sentinel returned when no person name could be extracted.
pub const UNRECOGNIZED_NAME: &str = "未识别";

// ============================================================================
// Parse Result Models
// ============================================================================

/// Structured record produced by one parse call. Constructed once, returned
/// immediately, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: String,
    pub contact: Contact,
    pub skills: BTreeSet<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
}

impl Default for ParsedResume {
    fn default() -> Self {
        Self {
            name: UNRECOGNIZED_NAME.to_string(),
            contact: Contact::default(),
            skills: BTreeSet::new(),
            education: Vec::new(),
            experience: Vec::new(),
            projects: Vec::new(),
        }
    }
}

/// Contact details found anywhere in the document. Absent fields stay empty,
/// they are never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    pub emails: BTreeSet<String>,
    pub phones: BTreeSet<String>,
    /// Only a single WeChat id is retained even when several match.
    pub wechat: String,
}

/// One education block. Fields are filled opportunistically as evidence
/// appears in successive sentences; once set, a field is never overwritten
/// for the current entry (first wins).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
}

impl EducationEntry {
    pub fn is_empty(&self) -> bool {
        self.institution.is_none()
            && self.date_range.is_none()
            && self.degree.is_none()
            && self.major.is_none()
    }
}

/// One employment block, scoped between detected section boundaries.
/// Same first-wins accumulation policy as [`EducationEntry`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl ExperienceEntry {
    pub fn is_empty(&self) -> bool {
        self.company.is_none() && self.date_range.is_none() && self.position.is_none()
    }
}

/// One project block. The description grows by concatenating successive
/// sentences until a segment boundary closes the entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub technologies: BTreeSet<String>,
    pub description: String,
}
