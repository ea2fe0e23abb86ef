// src/parser/contact.rs
//! Contact extraction: emails, Chinese mobile numbers and a WeChat id.

use regex::Regex;
use std::collections::BTreeSet;

use crate::parser::models::Contact;

/// Precompiled contact patterns, built once with the parser.
pub struct ContactPatterns {
    email: Regex,
    phone: Regex,
    wechat: Regex,
}

impl Default for ContactPatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactPatterns {
    pub fn new() -> Self {
        Self {
            email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
                .expect("valid email pattern"),
            // 11-digit mobile number: leading 1, second digit 3-9.
            phone: Regex::new(r"\b1[3-9]\d{9}\b").expect("valid phone pattern"),
            wechat: Regex::new(r"微信[:：]?\s*([A-Za-z0-9_-]{6,20})").expect("valid wechat pattern"),
        }
    }
}

/// Scans `text` for contact details. Absence of any field is not an error;
/// the corresponding set stays empty and the WeChat id stays "".
pub fn extract_contact(patterns: &ContactPatterns, text: &str) -> Contact {
    let emails: BTreeSet<String> = patterns
        .email
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    let phones: BTreeSet<String> = patterns
        .phone
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    // Only one WeChat id is retained even when several match; which one is
    // kept is deliberately unspecified (here: the lexicographically first).
    let wechats: BTreeSet<String> = patterns
        .wechat
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect();
    let wechat = wechats.into_iter().next().unwrap_or_default();

    Contact {
        emails,
        phones,
        wechat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_contact_line() {
        let patterns = ContactPatterns::new();
        let contact =
            extract_contact(&patterns, "联系邮箱 zhang@example.com 电话 13912345678 微信:abcxyz123");
        assert_eq!(
            contact.emails.iter().collect::<Vec<_>>(),
            vec!["zhang@example.com"]
        );
        assert_eq!(contact.phones.iter().collect::<Vec<_>>(), vec!["13912345678"]);
        assert_eq!(contact.wechat, "abcxyz123");
    }

    #[test]
    fn test_emails_deduplicated() {
        let patterns = ContactPatterns::new();
        let contact = extract_contact(&patterns, "a@b.com 以及 a@b.com 和 c@d.org");
        assert_eq!(contact.emails.len(), 2);
    }

    #[test]
    fn test_phone_must_be_chinese_mobile_shape() {
        let patterns = ContactPatterns::new();
        let contact = extract_contact(&patterns, "12912345678 和 13012345678 和 0101234567");
        // 12... has an invalid second digit; the landline is not 11 digits
        // starting with 1.
        assert_eq!(contact.phones.iter().collect::<Vec<_>>(), vec!["13012345678"]);
    }

    #[test]
    fn test_wechat_with_fullwidth_colon_and_length_bounds() {
        let patterns = ContactPatterns::new();
        let contact = extract_contact(&patterns, "微信：my_wechat-01");
        assert_eq!(contact.wechat, "my_wechat-01");

        let too_short = extract_contact(&patterns, "微信: abc12");
        assert_eq!(too_short.wechat, "");
    }

    #[test]
    fn test_missing_fields_stay_empty() {
        let patterns = ContactPatterns::new();
        let contact = extract_contact(&patterns, "没有任何联系方式的文本");
        assert!(contact.emails.is_empty());
        assert!(contact.phones.is_empty());
        assert_eq!(contact.wechat, "");
    }
}
