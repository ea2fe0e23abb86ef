// src/parser/mod.rs
//
// Chinese resume extraction pipeline. The parser is built once at service
// start; dictionaries, patterns and the injected linguistic capabilities
// are immutable afterwards and shared read-only across parse calls.

pub mod annotate;
pub mod contact;
pub mod education;
pub mod experience;
pub mod keywords;
pub mod lexical;
pub mod models;
pub mod name;
pub mod names;
pub mod normalize;
pub mod projects;
pub mod skills;
pub mod temporal;

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Datelike, Utc};
use regex::Regex;

use self::annotate::Annotator;
use self::contact::ContactPatterns;
use self::keywords::KeywordMatcher;
use self::lexical::LexicalAnnotator;
use self::names::{LabelNameScanner, NameScanner};
use self::projects::ProjectPatterns;
use self::temporal::{RegexTemporalParser, TemporalParser};

pub use self::annotate::ParseError;
pub use self::models::{
    Contact, EducationEntry, ExperienceEntry, ParsedResume, ProjectEntry, UNRECOGNIZED_NAME,
};

/// Immutable extraction context. Normalizes the input, annotates it once,
/// then runs the five field extractors over the shared annotated document
/// and assembles their partial outputs into one [`ParsedResume`].
pub struct ResumeParser {
    skill_matcher: KeywordMatcher,
    company_suffixes: KeywordMatcher,
    edu_keywords: KeywordMatcher,
    stopwords: HashSet<String>,
    contact_patterns: ContactPatterns,
    project_patterns: ProjectPatterns,
    date_pattern: Regex,
    annotator: Arc<dyn Annotator>,
    temporal: Arc<dyn TemporalParser>,
    name_scanner: Arc<dyn NameScanner>,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser {
    /// Builds the parser with the shipped rule-based capabilities.
    pub fn new() -> Self {
        Self::with_capabilities(
            Arc::new(LexicalAnnotator::new()),
            Arc::new(RegexTemporalParser::new()),
            Arc::new(LabelNameScanner::new()),
        )
    }

    /// Builds the parser around injected linguistic capabilities. This is
    /// the seam a model-backed annotator (or a test double) plugs into.
    pub fn with_capabilities(
        annotator: Arc<dyn Annotator>,
        temporal: Arc<dyn TemporalParser>,
        name_scanner: Arc<dyn NameScanner>,
    ) -> Self {
        Self {
            skill_matcher: keywords::skill_matcher(),
            company_suffixes: keywords::company_suffix_matcher(),
            edu_keywords: keywords::education_keyword_matcher(),
            stopwords: keywords::stopwords(),
            contact_patterns: ContactPatterns::new(),
            project_patterns: ProjectPatterns::new(),
            date_pattern: experience::experience_date_pattern(),
            annotator,
            temporal,
            name_scanner,
        }
    }

    /// Number of registered skill keywords, aliases included.
    pub fn skill_keyword_count(&self) -> usize {
        self.skill_matcher.len()
    }

    /// Parses one resume text into a structured record.
    ///
    /// Heuristic misses surface as empty/default fields, never as errors;
    /// the only failure mode is the annotator itself failing, which
    /// propagates unchanged.
    pub fn parse(&self, resume_text: &str) -> Result<ParsedResume, ParseError> {
        let clean = normalize::clean_text(resume_text);
        let doc = self.annotator.annotate(&clean)?;

        Ok(ParsedResume {
            name: name::extract_name(self.name_scanner.as_ref(), &doc),
            contact: contact::extract_contact(&self.contact_patterns, &clean),
            skills: skills::extract_skills(&self.skill_matcher, &self.stopwords, &clean),
            education: education::extract_education(
                &self.edu_keywords,
                self.temporal.as_ref(),
                &doc,
                Utc::now().year(),
            ),
            experience: experience::extract_experience(
                &self.company_suffixes,
                &self.date_pattern,
                &doc,
            ),
            projects: projects::extract_projects(
                &self.project_patterns,
                &self.skill_matcher,
                &doc,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::annotate::AnnotatedDoc;

    #[test]
    fn test_full_pipeline_on_small_resume() {
        let parser = ResumeParser::new();
        let text = "姓名：张伟。熟悉Python、Docker和MySQL。\
                    毕业于北京大学，2016年9月至2020年6月，计算机科学与技术学士。\
                    工作经历；2020年7月入职腾讯科技公司，担任后端开发工程师，负责订单服务。完。\
                    项目经历；项目名称：订单中台？使用Redis缓存热点数据。";
        let parsed = parser.parse(text).unwrap();

        assert_eq!(parsed.name, "张伟");
        assert!(parsed.skills.contains("Python"));
        assert!(parsed.skills.contains("Docker"));
        assert!(parsed.skills.contains("MySQL"));

        assert_eq!(parsed.education.len(), 1);
        assert_eq!(parsed.education[0].institution.as_deref(), Some("北京大学"));
        assert_eq!(parsed.education[0].degree.as_deref(), Some("学士"));

        assert_eq!(parsed.experience.len(), 1);
        assert_eq!(
            parsed.experience[0].company.as_deref(),
            Some("腾讯科技公司")
        );
        assert_eq!(parsed.experience[0].position.as_deref(), Some("工程师"));

        assert_eq!(parsed.projects.len(), 1);
        assert_eq!(parsed.projects[0].title.as_deref(), Some("订单中台？"));
        assert!(parsed.projects[0].technologies.contains("Redis"));
    }

    #[test]
    fn test_empty_input_gives_defaults_not_errors() {
        let parser = ResumeParser::new();
        let parsed = parser.parse("").unwrap();
        assert_eq!(parsed.name, UNRECOGNIZED_NAME);
        assert!(parsed.contact.emails.is_empty());
        assert!(parsed.skills.is_empty());
        assert!(parsed.education.is_empty());
        assert!(parsed.experience.is_empty());
        assert!(parsed.projects.is_empty());
    }

    #[test]
    fn test_annotator_failure_propagates() {
        struct FailingAnnotator;
        impl Annotator for FailingAnnotator {
            fn annotate(&self, _text: &str) -> Result<AnnotatedDoc, ParseError> {
                Err(ParseError::Annotation("model unavailable".to_string()))
            }
        }
        let parser = ResumeParser::with_capabilities(
            Arc::new(FailingAnnotator),
            Arc::new(RegexTemporalParser::new()),
            Arc::new(LabelNameScanner::new()),
        );
        assert!(parser.parse("任意文本").is_err());
    }

    #[test]
    fn test_parser_is_shareable_across_threads() {
        let parser = Arc::new(ResumeParser::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let parser = Arc::clone(&parser);
                std::thread::spawn(move || parser.parse("熟悉Python。").unwrap())
            })
            .collect();
        for handle in handles {
            let parsed = handle.join().unwrap();
            assert!(parsed.skills.contains("Python"));
        }
    }
}
