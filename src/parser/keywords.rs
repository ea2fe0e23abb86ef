// src/parser/keywords.rs
//! Dictionary-based multi-pattern matchers.
//!
//! Built once when the parser is constructed and shared read-only across
//! parse calls. Matching is substring-based with two rules:
//!
//! - Longest match wins when keywords overlap at the same position, so
//!   "JavaScript" beats "Java" and "JS".
//! - Keywords that start or end with an ASCII word character only match at
//!   ASCII word boundaries, so "Go" never fires inside "Google".

use std::collections::HashSet;

struct Pattern {
    chars: Vec<char>,
    canonical: String,
}

/// Maps surface keywords to canonical values and extracts every canonical
/// match found while scanning a text once. Total over any input: no match
/// means an empty result, never a failure.
pub struct KeywordMatcher {
    case_insensitive: bool,
    /// Sorted by pattern length, longest first.
    patterns: Vec<Pattern>,
}

fn fold_char(c: char) -> char {
    // One-to-one lowercase mapping keeps indices aligned with the input.
    c.to_lowercase().next().unwrap_or(c)
}

impl KeywordMatcher {
    pub fn new(case_insensitive: bool) -> Self {
        Self {
            case_insensitive,
            patterns: Vec::new(),
        }
    }

    /// Registers a keyword that maps to itself.
    pub fn add_keyword(&mut self, keyword: &str) {
        self.add_alias(keyword, keyword);
    }

    /// Registers a surface form that resolves to a different canonical value.
    pub fn add_alias(&mut self, surface: &str, canonical: &str) {
        let chars: Vec<char> = if self.case_insensitive {
            surface.chars().map(fold_char).collect()
        } else {
            surface.chars().collect()
        };
        if chars.is_empty() {
            return;
        }
        self.patterns.push(Pattern {
            chars,
            canonical: canonical.to_string(),
        });
        self.patterns.sort_by(|a, b| b.chars.len().cmp(&a.chars.len()));
    }

    pub fn add_keywords(&mut self, keywords: &[&str]) {
        for kw in keywords {
            self.add_keyword(kw);
        }
    }

    /// Scans `text` once and returns the canonical value of every keyword
    /// occurrence, in document order. Occurrences never overlap; at each
    /// position the longest registered keyword is taken.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let original: Vec<char> = text.chars().collect();
        let folded: Vec<char> = if self.case_insensitive {
            original.iter().map(|&c| fold_char(c)).collect()
        } else {
            original.clone()
        };

        let mut found = Vec::new();
        let mut i = 0;
        while i < folded.len() {
            match self.match_at(&folded, i) {
                Some(p) => {
                    found.push(p.canonical.clone());
                    i += p.chars.len();
                }
                None => i += 1,
            }
        }
        found
    }

    fn match_at(&self, chars: &[char], i: usize) -> Option<&Pattern> {
        self.patterns.iter().find(|p| {
            let end = i + p.chars.len();
            if end > chars.len() || chars[i..end] != p.chars[..] {
                return false;
            }
            // ASCII word-boundary guard on either side of the keyword.
            let first = p.chars[0];
            let last = p.chars[p.chars.len() - 1];
            if first.is_ascii_alphanumeric() && i > 0 && chars[i - 1].is_ascii_alphanumeric() {
                return false;
            }
            if last.is_ascii_alphanumeric()
                && end < chars.len()
                && chars[end].is_ascii_alphanumeric()
            {
                return false;
            }
            true
        })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

// ============================================================================
// Seed Dictionaries
// ============================================================================

/// IT skill keywords grouped by category, matched case-insensitively.
const SKILL_KEYWORDS: &[&str] = &[
    // Programming languages
    "Python", "Java", "JavaScript", "C++", "Go", "TypeScript", "SQL",
    // Frontend frameworks
    "React", "Vue", "Angular", "jQuery", "Bootstrap",
    // Backend frameworks
    "Django", "Flask", "Spring", "Node.js", "Express", "FastAPI",
    // Databases
    "MySQL", "PostgreSQL", "MongoDB", "Redis", "Oracle", "SQLite",
    // Cloud
    "AWS", "阿里云", "腾讯云", "Docker", "Kubernetes", "Azure",
    // Data science
    "Pandas", "NumPy", "Scikit-learn", "TensorFlow", "PyTorch", "数据分析",
    // Tooling
    "Git", "Jenkins", "Linux", "Shell", "RESTful API", "微服务",
];

/// Alias surface forms and the canonical skill they resolve to. The result
/// set never contains the alias spelling.
const SKILL_ALIASES: &[(&str, &str)] = &[
    ("JS", "JavaScript"),
    ("NLP", "自然语言处理"),
    ("CV", "计算机视觉"),
];

const COMPANY_SUFFIXES: &[&str] = &["有限公司", "科技公司", "集团", "股份公司", "研究所"];

const EDUCATION_KEYWORDS: &[&str] = &["大学", "学院", "学校"];

/// Literal degree tokens scanned for in education sentences.
pub const DEGREE_KEYWORDS: &[&str] = &["学士", "硕士", "博士", "本科", "研究生", "MBA"];

/// Literal position-title tokens scanned for in experience sentences.
pub const POSITION_KEYWORDS: &[&str] = &["工程师", "开发", "经理", "总监", "分析师", "架构师"];

/// Builds the skill matcher: seed keywords plus alias entries,
/// case-insensitive.
pub fn skill_matcher() -> KeywordMatcher {
    let mut m = KeywordMatcher::new(true);
    m.add_keywords(SKILL_KEYWORDS);
    for (surface, canonical) in SKILL_ALIASES {
        m.add_alias(surface, canonical);
    }
    m
}

/// Company suffix tokens, matched case-sensitively.
pub fn company_suffix_matcher() -> KeywordMatcher {
    let mut m = KeywordMatcher::new(false);
    m.add_keywords(COMPANY_SUFFIXES);
    m
}

/// Education institution tokens, matched case-sensitively.
pub fn education_keyword_matcher() -> KeywordMatcher {
    let mut m = KeywordMatcher::new(false);
    m.add_keywords(EDUCATION_KEYWORDS);
    m
}

/// Chinese stopwords filtered out of the skill set.
pub fn stopwords() -> HashSet<String> {
    [
        "的", "了", "在", "是", "我", "有", "和", "就", "不", "人", "都", "一个", "上", "也",
        "很", "到", "说", "要", "去", "会", "着", "没有", "看", "好", "自己", "这",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_match_wins_over_shorter_overlap() {
        let m = skill_matcher();
        let found = m.extract("精通JavaScript开发");
        assert_eq!(found, vec!["JavaScript".to_string()]);
    }

    #[test]
    fn test_alias_resolves_to_canonical() {
        let m = skill_matcher();
        assert_eq!(m.extract("熟悉JS框架"), vec!["JavaScript".to_string()]);
        assert_eq!(m.extract("做过NLP项目"), vec!["自然语言处理".to_string()]);
    }

    #[test]
    fn test_case_insensitive_skill_matching() {
        let m = skill_matcher();
        assert_eq!(m.extract("python和DOCKER"), vec!["Python", "Docker"]);
    }

    #[test]
    fn test_ascii_word_boundary() {
        let m = skill_matcher();
        // "Go" must not fire inside "Google".
        assert!(m.extract("在Google工作").is_empty());
        assert_eq!(m.extract("使用Go语言"), vec!["Go".to_string()]);
    }

    #[test]
    fn test_company_suffix_is_case_sensitive_exact() {
        let m = company_suffix_matcher();
        assert_eq!(m.extract("阿里巴巴集团工作"), vec!["集团".to_string()]);
        assert!(m.extract("没有后缀的句子").is_empty());
    }

    #[test]
    fn test_education_keywords() {
        let m = education_keyword_matcher();
        assert_eq!(m.extract("毕业于北京大学"), vec!["大学".to_string()]);
        assert_eq!(m.extract("上海交通学院和中学校区"), vec!["学院", "学校"]);
    }

    #[test]
    fn test_matches_returned_in_document_order() {
        let m = skill_matcher();
        assert_eq!(
            m.extract("Redis缓存，MySQL存储，Python脚本"),
            vec!["Redis", "MySQL", "Python"]
        );
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        let m = skill_matcher();
        assert!(m.extract("").is_empty());
    }
}
