// src/parser/names.rs
//! Specialized Chinese name-extraction capability.
//!
//! Highest-precision rung of the name fallback chain: candidates found here
//! win over generic PERSON entities and label lookups.

use regex::Regex;

/// One candidate structure from a name scan. The `name` field may be absent
/// when the scan recognized something person-like without a usable surface.
#[derive(Debug, Clone, Default)]
pub struct NameCandidate {
    pub name: Option<String>,
}

pub trait NameScanner: Send + Sync {
    /// Scans raw text and returns zero or more candidates.
    fn scan(&self, text: &str) -> Vec<NameCandidate>;
}

/// Label-anchored scanner: a 姓名/名字 label followed by a 2–4 character
/// han sequence is taken as the candidate's name.
pub struct LabelNameScanner {
    labelled: Regex,
}

impl Default for LabelNameScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelNameScanner {
    pub fn new() -> Self {
        Self {
            labelled: Regex::new(r"(?:姓名|名字)[:：]?\s*([\x{4e00}-\x{9fa5}]{2,4})")
                .expect("valid name label pattern"),
        }
    }
}

impl NameScanner for LabelNameScanner {
    fn scan(&self, text: &str) -> Vec<NameCandidate> {
        self.labelled
            .captures_iter(text)
            .map(|caps| NameCandidate {
                name: caps.get(1).map(|m| m.as_str().to_string()),
            })
            .collect()
    }
}
