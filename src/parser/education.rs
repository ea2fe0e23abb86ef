// src/parser/education.rs
//! Education history extraction.
//!
//! A single accumulator walks the sentence sequence. A fresh
//! education-institution mention while the accumulator already holds an
//! institution flushes it; every field obeys first-wins. Time expressions
//! are resolved once for the whole document before the loop.

use crate::parser::annotate::{AnnotatedDoc, DepLabel, PartOfSpeech};
use crate::parser::keywords::{KeywordMatcher, DEGREE_KEYWORDS};
use crate::parser::models::EducationEntry;
use crate::parser::temporal::TemporalParser;

pub fn extract_education(
    edu_matcher: &KeywordMatcher,
    temporal: &dyn TemporalParser,
    doc: &AnnotatedDoc,
    base_year: i32,
) -> Vec<EducationEntry> {
    let sentence_texts: Vec<&str> = doc.sentences.iter().map(|s| s.text.as_str()).collect();
    let time_expressions = temporal.parse(&sentence_texts, base_year);

    let mut entries = Vec::new();
    let mut current = EducationEntry::default();

    for sentence in &doc.sentences {
        let text = &sentence.text;

        if !edu_matcher.extract(text).is_empty() {
            // A new institution mention closes the running entry.
            if current.institution.is_some() {
                entries.push(std::mem::take(&mut current));
            }
            if current.institution.is_none() {
                current.institution = sentence
                    .noun_chunks
                    .iter()
                    .filter(|chunk| chunk.contains("大学") || chunk.contains("学院"))
                    .max_by_key(|chunk| chunk.chars().count())
                    .cloned();
            }
        }

        if current.date_range.is_none() {
            if let Some(expr) = time_expressions.iter().find(|e| text.contains(&e.text)) {
                current.date_range = Some(expr.value.clone());
            }
        }

        if current.degree.is_none() {
            for (idx, token) in sentence.tokens.iter().enumerate() {
                if DEGREE_KEYWORDS.contains(&token.text.as_str()) {
                    current.degree = Some(token.text.clone());
                    current.major = sentence
                        .children_of(idx)
                        .find(|child| {
                            child.dep == DepLabel::NominalModifier
                                && child.pos == PartOfSpeech::Noun
                        })
                        .map(|child| child.text.clone());
                    break;
                }
            }
        }
    }

    if !current.is_empty() {
        entries.push(current);
    }
    entries
}
