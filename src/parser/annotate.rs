// src/parser/annotate.rs
//! Linguistic annotation contract consumed by the extraction pipeline.
//!
//! The pipeline never loads a model itself; it asks an [`Annotator`] for
//! sentence boundaries, tokens, part-of-speech tags, dependency heads,
//! named entities and noun-phrase chunks, then re-scans the annotated
//! document from each field extractor. Annotation failure is the one fatal
//! error in the pipeline and propagates to the caller unchanged.

use thiserror::Error;

/// Fatal pipeline errors. Heuristic misses are never represented here; an
/// absent field becomes an empty/default value instead.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("annotation failed: {0}")]
    Annotation(String),
}

/// Coarse part-of-speech tags, only as fine-grained as the extractors need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Number,
    Particle,
    Punctuation,
    Other,
}

/// Dependency labels used by the extractors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepLabel {
    /// Nominal modifier of its head, e.g. a major modifying a degree word.
    NominalModifier,
    Root,
    Other,
}

/// Entity type labels. Only PERSON is load-bearing for extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
    Other,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    pub pos: PartOfSpeech,
    /// Index of the governing head token within the same sentence. A token
    /// that governs itself is its own head.
    pub head: usize,
    pub dep: DepLabel,
}

#[derive(Debug, Clone)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
}

#[derive(Debug, Clone)]
pub struct Sentence {
    pub text: String,
    pub tokens: Vec<Token>,
    pub entities: Vec<Entity>,
    /// Maximal noun-headed spans, used for multi-token names such as
    /// institutions and companies.
    pub noun_chunks: Vec<String>,
}

impl Sentence {
    /// Tokens whose dependency head is the token at `head`.
    pub fn children_of(&self, head: usize) -> impl Iterator<Item = &Token> {
        self.tokens
            .iter()
            .enumerate()
            .filter(move |(i, t)| t.head == head && *i != head)
            .map(|(_, t)| t)
    }

    /// The governing head token of the token at `i`.
    pub fn head_of(&self, i: usize) -> &Token {
        &self.tokens[self.tokens[i].head]
    }
}

/// A fully annotated document, shared read-only by all field extractors.
#[derive(Debug, Clone, Default)]
pub struct AnnotatedDoc {
    pub text: String,
    pub sentences: Vec<Sentence>,
}

impl AnnotatedDoc {
    /// Named entities across all sentences, in document order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.sentences.iter().flat_map(|s| s.entities.iter())
    }

    /// Flattened token stream across sentence boundaries.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(|s| s.tokens.iter())
    }
}

/// Black-box linguistic capability: cleaned text in, annotated document out.
///
/// The shipped implementation is the rule-based [`LexicalAnnotator`]; a
/// model-backed annotator can be swapped in without touching the extractors.
///
/// [`LexicalAnnotator`]: crate::parser::lexical::LexicalAnnotator
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Result<AnnotatedDoc, ParseError>;
}
