// src/parser/projects.rs
//! Project history extraction.
//!
//! Gated behind a 项目经历/项目经验 header. A title is taken from a
//! 项目[名称]： label or a leading enumeration like "1."; technologies come
//! from the skill matcher; the description accumulates sentence text until
//! a short or full-stop-terminated sentence closes the entry.

use regex::Regex;

use crate::parser::annotate::AnnotatedDoc;
use crate::parser::keywords::KeywordMatcher;
use crate::parser::models::ProjectEntry;

/// Sentences at or above this length keep a project open unless they end
/// with a Chinese full stop.
const SEGMENT_BREAK_LEN: usize = 50;

pub struct ProjectPatterns {
    title_label: Regex,
    enumeration: Regex,
}

impl Default for ProjectPatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectPatterns {
    pub fn new() -> Self {
        Self {
            title_label: Regex::new(r"项目(?:名称)?[:：]\s*").expect("valid title label pattern"),
            enumeration: Regex::new(r"^[0-9]+\.\s*").expect("valid enumeration pattern"),
        }
    }
}

pub fn extract_projects(
    patterns: &ProjectPatterns,
    skill_matcher: &KeywordMatcher,
    doc: &AnnotatedDoc,
) -> Vec<ProjectEntry> {
    let mut entries = Vec::new();
    let mut current = ProjectEntry::default();
    let mut in_section = false;

    for sentence in &doc.sentences {
        let text = &sentence.text;

        if text.contains("项目经历") || text.contains("项目经验") {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }

        if current.title.is_none()
            && (patterns.title_label.is_match(text) || patterns.enumeration.is_match(text))
        {
            let stripped = patterns.title_label.replace(text, "");
            let stripped = patterns.enumeration.replace(&stripped, "");
            current.title = Some(stripped.trim().to_string());
            // The title sentence contributes nothing else.
            continue;
        }

        if current.technologies.is_empty() {
            let techs = skill_matcher.extract(text);
            if !techs.is_empty() {
                current.technologies = techs.into_iter().collect();
            }
        }

        if current.description.is_empty() {
            current.description = text.clone();
        } else {
            current.description.push(' ');
            current.description.push_str(text);
        }

        let segment_break = text.chars().count() < SEGMENT_BREAK_LEN || text.ends_with('。');
        if segment_break && current.title.is_some() {
            entries.push(std::mem::take(&mut current));
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::annotate::Annotator;
    use crate::parser::keywords::skill_matcher;
    use crate::parser::lexical::LexicalAnnotator;

    fn extract(text: &str) -> Vec<ProjectEntry> {
        let annotator = LexicalAnnotator::new();
        let doc = annotator.annotate(text).unwrap();
        extract_projects(&ProjectPatterns::new(), &skill_matcher(), &doc)
    }

    #[test]
    fn test_nothing_before_section_header() {
        assert!(extract("项目名称：电商平台。使用Python开发。").is_empty());
    }

    #[test]
    fn test_labelled_title_and_technologies() {
        let entries = extract("项目经历；项目名称：电商平台？使用Python和Redis完成订单服务。");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title.as_deref(), Some("电商平台？"));
        let techs: Vec<&str> = entries[0].technologies.iter().map(|s| s.as_str()).collect();
        assert_eq!(techs, vec!["Python", "Redis"]);
        assert_eq!(entries[0].description, "使用Python和Redis完成订单服务。");
    }

    #[test]
    fn test_enumerated_title() {
        let entries = extract("项目经验；1. 智能问答系统！基于自然语言处理完成检索。");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title.as_deref(), Some("智能问答系统！"));
    }

    #[test]
    fn test_description_accumulates_until_segment_break() {
        let entries = extract(
            "项目经历；项目：日志平台？负责采集端与存储端的设计实现，支撑每天百亿级写入，并完成查询加速与冷热分层整体方案的落地验证与容量规划等相关工作；核心模块上线。",
        );
        assert_eq!(entries.len(), 1);
        // The long sentence keeps the entry open; the short full-stop
        // sentence closes it with both sentences joined.
        assert_eq!(
            entries[0].description,
            "负责采集端与存储端的设计实现，支撑每天百亿级写入，并完成查询加速与冷热分层整体方案的落地验证与容量规划等相关工作； 核心模块上线。"
        );
    }

    #[test]
    fn test_no_flush_without_title() {
        // Sentences inside the section with no recognizable title never
        // produce an entry.
        assert!(extract("项目经历；做过一些内部工具。").is_empty());
    }

    #[test]
    fn test_two_projects_in_order() {
        let entries = extract(
            "项目经历；1. 推荐系统！使用PyTorch训练模型。2. 监控平台！使用Docker部署服务。",
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title.as_deref(), Some("推荐系统！"));
        assert_eq!(entries[1].title.as_deref(), Some("监控平台！"));
        assert!(entries[0].technologies.contains("PyTorch"));
        assert!(entries[1].technologies.contains("Docker"));
    }
}
