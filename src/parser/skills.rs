// src/parser/skills.rs
//! Skill extraction over the cleaned text.

use std::collections::{BTreeSet, HashSet};

use crate::parser::keywords::KeywordMatcher;

/// Runs the skill matcher over `text`, keeps canonical forms only, and
/// filters stopwords and degenerate one-character values. Set semantics:
/// duplicates and alias spellings collapse.
pub fn extract_skills(
    matcher: &KeywordMatcher,
    stopwords: &HashSet<String>,
    text: &str,
) -> BTreeSet<String> {
    matcher
        .extract(text)
        .into_iter()
        .filter(|canonical| canonical.chars().count() >= 2 && !stopwords.contains(canonical))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::keywords::{skill_matcher, stopwords};
    use crate::parser::normalize::clean_text;

    #[test]
    fn test_alias_and_canonical_collapse_to_one_entry() {
        let matcher = skill_matcher();
        let stop = stopwords();
        let skills = extract_skills(&matcher, &stop, "熟悉JS，精通JavaScript开发");
        assert_eq!(skills.iter().collect::<Vec<_>>(), vec!["JavaScript"]);
    }

    #[test]
    fn test_mixed_skill_set() {
        let matcher = skill_matcher();
        let stop = stopwords();
        let skills = extract_skills(
            &matcher,
            &stop,
            "技能：Python、Docker、MySQL，做过NLP相关项目",
        );
        let expected: Vec<&str> = vec!["Docker", "MySQL", "Python", "自然语言处理"];
        assert_eq!(skills.iter().map(|s| s.as_str()).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_idempotent_over_normalized_text() {
        let matcher = skill_matcher();
        let stop = stopwords();
        let raw = "技能*Python□Docker\n\nK8s与Kubernetes！";
        let cleaned = clean_text(raw);
        let first = extract_skills(&matcher, &stop, &cleaned);
        let second = extract_skills(&matcher, &stop, &clean_text(&cleaned));
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_skills_yields_empty_set() {
        let matcher = skill_matcher();
        let stop = stopwords();
        assert!(extract_skills(&matcher, &stop, "热爱生活，喜欢旅行").is_empty());
    }
}
