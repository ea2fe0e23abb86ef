// src/parser/name.rs
//! Person-name extraction.
//!
//! Ordered fallback chain, first success wins, reflecting decreasing
//! precision: specialized name scan, then PERSON entities filtered to
//! typical Chinese name length, then a literal 姓名/名字 label lookup,
//! then the sentinel.

use crate::parser::annotate::{AnnotatedDoc, EntityLabel, Token};
use crate::parser::models::UNRECOGNIZED_NAME;
use crate::parser::names::NameScanner;

pub fn extract_name(scanner: &dyn NameScanner, doc: &AnnotatedDoc) -> String {
    // 1. Specialized scan over the raw text; only the first candidate is
    //    consulted, and only if it actually carries a name.
    if let Some(candidate) = scanner.scan(&doc.text).into_iter().next() {
        if let Some(name) = candidate.name {
            return name;
        }
    }

    // 2. First PERSON entity of plausible name length (2–4 characters).
    for entity in doc.entities() {
        if entity.label == EntityLabel::Person {
            let len = entity.text.chars().count();
            if (2..=4).contains(&len) {
                return entity.text.clone();
            }
        }
    }

    // 3. Token immediately following a literal name label.
    let tokens: Vec<&Token> = doc.tokens().collect();
    for pair in tokens.windows(2) {
        if pair[0].text == "姓名" || pair[0].text == "名字" {
            return pair[1].text.clone();
        }
    }

    UNRECOGNIZED_NAME.to_string()
}
