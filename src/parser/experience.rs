// src/parser/experience.rs
//! Work-experience extraction.
//!
//! Entries only accumulate after a 工作经历/工作经验 section header has
//! been seen; the header sentence itself is skipped. Each field obeys
//! first-wins. The running entry closes on a short line (a paragraph-break
//! signal) or when the next sentence already mentions a company suffix.
//! There is deliberately no final flush after the loop; a trailing
//! in-progress entry is dropped, matching the behavior this extractor
//! was specified against.

use regex::Regex;

use crate::parser::annotate::AnnotatedDoc;
use crate::parser::keywords::{KeywordMatcher, POSITION_KEYWORDS};
use crate::parser::models::ExperienceEntry;

/// Sentences shorter than this are treated as paragraph breaks.
const PARAGRAPH_BREAK_LEN: usize = 10;

pub fn extract_experience(
    company_matcher: &KeywordMatcher,
    date_pattern: &Regex,
    doc: &AnnotatedDoc,
) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    let mut current = ExperienceEntry::default();
    let mut in_section = false;

    let sentences = &doc.sentences;
    for (i, sentence) in sentences.iter().enumerate() {
        let text = &sentence.text;

        if text.contains("工作经历") || text.contains("工作经验") {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }

        if current.company.is_none() {
            let suffixes = company_matcher.extract(text);
            if !suffixes.is_empty() {
                current.company = sentence
                    .noun_chunks
                    .iter()
                    .filter(|chunk| suffixes.iter().any(|s| chunk.contains(s.as_str())))
                    .max_by_key(|chunk| chunk.chars().count())
                    .cloned();
            }
        }

        if current.date_range.is_none() {
            if let Some(m) = date_pattern.find(text) {
                current.date_range = Some(m.as_str().to_string());
            }
        }

        if current.position.is_none() {
            for (idx, token) in sentence.tokens.iter().enumerate() {
                if POSITION_KEYWORDS.contains(&token.text.as_str()) {
                    // The syntactic head word, not the keyword itself.
                    current.position = Some(sentence.head_of(idx).text.clone());
                    break;
                }
            }
        }

        let next_opens_company = sentences
            .get(i + 1)
            .map(|next| !company_matcher.extract(&next.text).is_empty())
            .unwrap_or(false);

        if text.trim().chars().count() < PARAGRAPH_BREAK_LEN || next_opens_company {
            if !current.is_empty() {
                entries.push(std::mem::take(&mut current));
            }
        }
    }

    entries
}

/// The date shapes accepted for an experience date range:
/// 2020年3月, 2020.3, 2020-03 and 2020/3.
pub fn experience_date_pattern() -> Regex {
    Regex::new(r"\d{4}年\d{1,2}月|\d{4}\.\d{1,2}|\d{4}-\d{2}|\d{4}/\d{1,2}")
        .expect("valid experience date pattern")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::annotate::Annotator;
    use crate::parser::keywords::company_suffix_matcher;
    use crate::parser::lexical::LexicalAnnotator;

    fn extract(text: &str) -> Vec<ExperienceEntry> {
        let annotator = LexicalAnnotator::new();
        let doc = annotator.annotate(text).unwrap();
        extract_experience(&company_suffix_matcher(), &experience_date_pattern(), &doc)
    }

    #[test]
    fn test_nothing_before_section_header() {
        let entries = extract("曾就职于阿里巴巴集团，担任开发工程师。完。");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_header_sentence_itself_is_skipped() {
        // The header line carries a suffix-free company mention that must
        // not leak into an entry.
        let entries = extract("工作经历；完。");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_company_date_and_position() {
        let entries = extract(
            "工作经历；2020年3月入职腾讯科技公司，担任后端开发工程师，负责微服务架构。完。",
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company.as_deref(), Some("腾讯科技公司"));
        assert_eq!(entries[0].date_range.as_deref(), Some("2020年3月"));
        // Position is the head of the compound title, not the first keyword.
        assert_eq!(entries[0].position.as_deref(), Some("工程师"));
    }

    #[test]
    fn test_flush_on_short_line_without_following_company() {
        let entries = extract(
            "工作经历；2019年7月加入阿里巴巴集团担任数据分析师，负责报表体系建设与维护工作。完。",
        );
        // The trailing short sentence closes the entry exactly once.
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company.as_deref(), Some("阿里巴巴集团"));
        assert_eq!(entries[0].date_range.as_deref(), Some("2019年7月"));
    }

    #[test]
    fn test_new_company_sentence_closes_previous_entry() {
        let entries = extract(
            "工作经历；2018年1月在百度科技公司担任软件工程师，负责搜索服务的开发维护。\
             2021年2月加入字节跳动有限公司担任后端架构师，负责基础设施建设。完。",
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company.as_deref(), Some("百度科技公司"));
        assert_eq!(entries[1].company.as_deref(), Some("字节跳动有限公司"));
        assert_eq!(entries[1].date_range.as_deref(), Some("2021年2月"));
    }

    #[test]
    fn test_trailing_entry_without_flush_signal_is_dropped() {
        // No short line and no following company sentence: the in-progress
        // entry is silently lost. Documented quirk, kept on purpose.
        let entries = extract(
            "工作经历；2022年5月入职美团有限公司担任高级开发经理，负责交易平台的整体研发工作",
        );
        assert!(entries.is_empty());
    }

    #[test]
    fn test_date_shapes() {
        let pattern = experience_date_pattern();
        for sample in ["2020年3月", "2020.3", "2020-03", "2020/3"] {
            assert!(pattern.is_match(sample), "should match {}", sample);
        }
        assert!(!pattern.is_match("202年3月"));
    }
}
