// src/parser/temporal.rs
//! Temporal-expression parsing capability.
//!
//! Given a batch of sentence texts and a reference year, returns the matched
//! date-expression substring and its resolved value for every sentence that
//! carries one. The education extractor runs this once per document before
//! its sentence loop.

use regex::Regex;

/// One recognized date expression. `text` is the exact substring as it
/// appeared; `value` is the resolved, normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeExpression {
    pub text: String,
    pub value: String,
}

pub trait TemporalParser: Send + Sync {
    fn parse(&self, sentences: &[&str], base_year: i32) -> Vec<TimeExpression>;
}

/// Regex-backed implementation covering the date shapes seen in Chinese
/// resumes: 2018年9月, 2018.9, 2018-09, and ranges joined by -, ~, 至 or 到,
/// with 至今/现在 resolved against the reference year.
pub struct RegexTemporalParser {
    range: Regex,
    single: Regex,
}

impl Default for RegexTemporalParser {
    fn default() -> Self {
        Self::new()
    }
}

const POINT: &str = r"\d{4}(?:年\d{1,2}月?|[./-]\d{1,2})?";

impl RegexTemporalParser {
    pub fn new() -> Self {
        // The separator is required so a bare digit run (a phone number)
        // never reads as a range. 至今 appears as separator 至 + end 今.
        let range = Regex::new(&format!(
            r"({point})\s*[-~—至到]+\s*(今|现在|至今|{point})",
            point = POINT
        ))
        .expect("valid range pattern");
        // A single point needs its month suffix; a lone 4-digit run is
        // ambiguous with ids and phone fragments.
        let single =
            Regex::new(r"\d{4}年\d{1,2}月?|\d{4}[./-]\d{1,2}").expect("valid point pattern");
        Self { range, single }
    }

    fn resolve_point(point: &str, base_year: i32) -> String {
        if matches!(point, "今" | "至今" | "现在") {
            return base_year.to_string();
        }
        point.to_string()
    }
}

impl TemporalParser for RegexTemporalParser {
    fn parse(&self, sentences: &[&str], base_year: i32) -> Vec<TimeExpression> {
        let mut found = Vec::new();
        for sentence in sentences {
            if let Some(caps) = self.range.captures(sentence) {
                let whole = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
                let start = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
                let end = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
                found.push(TimeExpression {
                    text: whole.to_string(),
                    value: format!(
                        "{}-{}",
                        Self::resolve_point(start, base_year),
                        Self::resolve_point(end, base_year)
                    ),
                });
                continue;
            }
            if let Some(m) = self.single.find(sentence) {
                found.push(TimeExpression {
                    text: m.as_str().to_string(),
                    value: m.as_str().to_string(),
                });
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range() {
        let parser = RegexTemporalParser::new();
        let found = parser.parse(&["北京大学 2018-2022 学士"], 2026);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "2018-2022");
        assert_eq!(found[0].value, "2018-2022");
    }

    #[test]
    fn test_chinese_month_range() {
        let parser = RegexTemporalParser::new();
        let found = parser.parse(&["2018年9月至2022年6月就读"], 2026);
        assert_eq!(found[0].text, "2018年9月至2022年6月");
        assert_eq!(found[0].value, "2018年9月-2022年6月");
    }

    #[test]
    fn test_open_range_resolves_against_base_year() {
        let parser = RegexTemporalParser::new();
        let found = parser.parse(&["2019至今 在职"], 2026);
        assert_eq!(found[0].value, "2019-2026");
    }

    #[test]
    fn test_single_point_fallback() {
        let parser = RegexTemporalParser::new();
        let found = parser.parse(&["入学时间 2018年9月"], 2026);
        assert_eq!(found[0].text, "2018年9月");
        assert_eq!(found[0].value, "2018年9月");
    }

    #[test]
    fn test_sentences_without_dates_yield_nothing() {
        let parser = RegexTemporalParser::new();
        assert!(parser.parse(&["没有日期的句子"], 2026).is_empty());
    }
}
