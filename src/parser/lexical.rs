// src/parser/lexical.rs
//! Rule-based [`Annotator`] implementation.
//!
//! A lexicon-driven segmenter/tokenizer that produces just enough structure
//! for the extractors: sentence boundaries at Chinese sentence-final
//! punctuation and known section headers, greedy longest-match tokenization
//! against a small vocabulary, noun chunks from contiguous noun tokens, a
//! surname-based PERSON tagger, and two targeted dependency heuristics
//! (major → degree, compound position titles).

use std::collections::HashSet;

use crate::parser::annotate::{
    AnnotatedDoc, Annotator, DepLabel, Entity, EntityLabel, ParseError, PartOfSpeech, Sentence,
    Token,
};
use crate::parser::keywords::{DEGREE_KEYWORDS, POSITION_KEYWORDS};

/// Section headers that open a new sentence even without punctuation.
const SECTION_HEADERS: &[&str] = &[
    "工作经历", "工作经验", "项目经历", "项目经验", "教育经历", "教育背景",
];

/// Vocabulary with part-of-speech tags. Longest entries win during
/// tokenization, so 工作经历 is matched before 工作.
#[rustfmt::skip]
const LEXICON: &[(&str, PartOfSpeech)] = &[
    // Section headers
    ("工作经历", PartOfSpeech::Noun), ("工作经验", PartOfSpeech::Noun),
    ("项目经历", PartOfSpeech::Noun), ("项目经验", PartOfSpeech::Noun),
    ("教育经历", PartOfSpeech::Noun), ("教育背景", PartOfSpeech::Noun),
    ("项目名称", PartOfSpeech::Noun), ("专业技能", PartOfSpeech::Noun),
    ("联系方式", PartOfSpeech::Noun),
    // Field labels
    ("姓名", PartOfSpeech::Noun), ("名字", PartOfSpeech::Noun),
    ("微信", PartOfSpeech::Noun), ("电话", PartOfSpeech::Noun),
    ("邮箱", PartOfSpeech::Noun),
    // Education vocabulary
    ("大学", PartOfSpeech::Noun), ("学院", PartOfSpeech::Noun),
    ("学校", PartOfSpeech::Noun), ("学士", PartOfSpeech::Noun),
    ("硕士", PartOfSpeech::Noun), ("博士", PartOfSpeech::Noun),
    ("本科", PartOfSpeech::Noun), ("研究生", PartOfSpeech::Noun),
    ("MBA", PartOfSpeech::Noun), ("专业", PartOfSpeech::Noun),
    ("学位", PartOfSpeech::Noun),
    // Position titles
    ("工程师", PartOfSpeech::Noun), ("架构师", PartOfSpeech::Noun),
    ("分析师", PartOfSpeech::Noun), ("经理", PartOfSpeech::Noun),
    ("总监", PartOfSpeech::Noun), ("开发", PartOfSpeech::Noun),
    // Company suffixes
    ("有限公司", PartOfSpeech::Noun), ("科技公司", PartOfSpeech::Noun),
    ("股份公司", PartOfSpeech::Noun), ("集团", PartOfSpeech::Noun),
    ("研究所", PartOfSpeech::Noun), ("公司", PartOfSpeech::Noun),
    // Verbs that break noun chunks
    ("毕业于", PartOfSpeech::Verb), ("就读于", PartOfSpeech::Verb),
    ("任职于", PartOfSpeech::Verb), ("就职于", PartOfSpeech::Verb),
    ("担任", PartOfSpeech::Verb), ("负责", PartOfSpeech::Verb),
    ("入职", PartOfSpeech::Verb), ("加入", PartOfSpeech::Verb),
    ("进入", PartOfSpeech::Verb), ("供职", PartOfSpeech::Verb),
    ("参与", PartOfSpeech::Verb), ("使用", PartOfSpeech::Verb),
    ("熟悉", PartOfSpeech::Verb), ("精通", PartOfSpeech::Verb),
    ("掌握", PartOfSpeech::Verb), ("获得", PartOfSpeech::Verb),
    ("工作", PartOfSpeech::Verb), ("叫", PartOfSpeech::Verb),
    ("是", PartOfSpeech::Verb), ("有", PartOfSpeech::Verb),
    // Particles, pronouns, date units
    ("的", PartOfSpeech::Particle), ("了", PartOfSpeech::Particle),
    ("在", PartOfSpeech::Particle), ("我", PartOfSpeech::Particle),
    ("和", PartOfSpeech::Particle), ("就", PartOfSpeech::Particle),
    ("于", PartOfSpeech::Particle), ("曾", PartOfSpeech::Particle),
    ("并", PartOfSpeech::Particle),
    ("年", PartOfSpeech::Other), ("月", PartOfSpeech::Other),
    ("日", PartOfSpeech::Other), ("至", PartOfSpeech::Other),
    ("到", PartOfSpeech::Other), ("至今", PartOfSpeech::Other),
];

/// Common Chinese surnames used by the PERSON tagger.
const SURNAMES: &str = "王李张刘陈杨黄赵吴周徐孙马朱胡郭何高林罗郑梁谢宋唐许韩冯邓曹彭曾肖田董袁潘蒋蔡余杜叶程苏魏吕丁任沈姚卢姜崔钟谭陆汪范金石廖贾夏韦付方白邹孟熊秦邱江尹薛闫段雷侯龙史陶黎贺顾毛郝龚邵万钱严覃武戴莫孔向汤";

struct LexEntry {
    chars: Vec<char>,
    pos: PartOfSpeech,
}

pub struct LexicalAnnotator {
    /// Sorted by entry length, longest first.
    lexicon: Vec<LexEntry>,
    surnames: HashSet<char>,
}

impl Default for LexicalAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

impl LexicalAnnotator {
    pub fn new() -> Self {
        let mut lexicon: Vec<LexEntry> = LEXICON
            .iter()
            .map(|(surface, pos)| LexEntry {
                chars: surface.chars().collect(),
                pos: *pos,
            })
            .collect();
        lexicon.sort_by(|a, b| b.chars.len().cmp(&a.chars.len()));
        Self {
            lexicon,
            surnames: SURNAMES.chars().collect(),
        }
    }

    fn lexicon_at(&self, chars: &[char], i: usize) -> Option<&LexEntry> {
        self.lexicon.iter().find(|e| {
            let end = i + e.chars.len();
            end <= chars.len() && chars[i..end] == e.chars[..]
        })
    }

    /// Splits at sentence-final punctuation and before/after section
    /// headers, so a header like 工作经历 forms its own sentence even in
    /// text whose newlines were collapsed by normalization.
    fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut cut = vec![false; chars.len() + 1];
        for (i, c) in chars.iter().enumerate() {
            if matches!(c, '。' | '！' | '？' | '；') {
                cut[i + 1] = true;
            }
        }
        for header in SECTION_HEADERS {
            let hc: Vec<char> = header.chars().collect();
            let mut i = 0;
            while i + hc.len() <= chars.len() {
                if chars[i..i + hc.len()] == hc[..] {
                    cut[i] = true;
                    let mut end = i + hc.len();
                    if end < chars.len() && matches!(chars[end], '：' | ':') {
                        end += 1;
                    }
                    cut[end] = true;
                    i = end;
                } else {
                    i += 1;
                }
            }
        }

        let mut sentences = Vec::new();
        let mut start = 0;
        for i in 1..=chars.len() {
            if cut[i] || i == chars.len() {
                let raw: String = chars[start..i].iter().collect();
                let trimmed = raw
                    .trim()
                    .trim_start_matches(['。', '！', '？', '；'])
                    .trim();
                if !trimmed.is_empty() {
                    sentences.push(trimmed.to_string());
                }
                start = i;
            }
        }
        sentences
    }

    /// Greedy longest-match tokenization. Returns tokens plus a flag for
    /// whether each token came from the lexicon.
    fn tokenize(&self, sentence: &str) -> Vec<(Token, bool)> {
        let chars: Vec<char> = sentence.chars().collect();
        let mut tokens: Vec<(Token, bool)> = Vec::new();
        let mut unknown: String = String::new();

        let flush_unknown = |unknown: &mut String, tokens: &mut Vec<(Token, bool)>| {
            if !unknown.is_empty() {
                tokens.push((
                    Token {
                        text: std::mem::take(unknown),
                        pos: PartOfSpeech::Noun,
                        head: 0,
                        dep: DepLabel::Other,
                    },
                    false,
                ));
            }
        };

        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            if c.is_whitespace() {
                flush_unknown(&mut unknown, &mut tokens);
                i += 1;
                continue;
            }
            if c.is_ascii_alphanumeric() {
                flush_unknown(&mut unknown, &mut tokens);
                let start = i;
                while i < chars.len() && chars[i].is_ascii_alphanumeric() {
                    i += 1;
                }
                let text: String = chars[start..i].iter().collect();
                let all_digits = text.chars().all(|c| c.is_ascii_digit());
                let pos = if all_digits {
                    PartOfSpeech::Number
                } else if let Some(entry) = self.lexicon_at(&chars, start) {
                    // ASCII lexicon entries such as MBA.
                    if entry.chars.len() == i - start {
                        entry.pos
                    } else {
                        PartOfSpeech::Noun
                    }
                } else {
                    PartOfSpeech::Noun
                };
                tokens.push((
                    Token {
                        text,
                        pos,
                        head: 0,
                        dep: DepLabel::Other,
                    },
                    false,
                ));
                continue;
            }
            if is_cjk(c) {
                if let Some(entry) = self.lexicon_at(&chars, i) {
                    flush_unknown(&mut unknown, &mut tokens);
                    tokens.push((
                        Token {
                            text: entry.chars.iter().collect(),
                            pos: entry.pos,
                            head: 0,
                            dep: DepLabel::Other,
                        },
                        true,
                    ));
                    i += entry.chars.len();
                } else {
                    unknown.push(c);
                    i += 1;
                }
                continue;
            }
            // Punctuation or any other symbol.
            flush_unknown(&mut unknown, &mut tokens);
            tokens.push((
                Token {
                    text: c.to_string(),
                    pos: PartOfSpeech::Punctuation,
                    head: 0,
                    dep: DepLabel::Other,
                },
                false,
            ));
            i += 1;
        }
        flush_unknown(&mut unknown, &mut tokens);

        // Every token starts as its own head.
        for (idx, (token, _)) in tokens.iter_mut().enumerate() {
            token.head = idx;
        }
        tokens
    }

    /// Attaches the two dependency relations the extractors rely on.
    fn attach_dependencies(&self, tokens: &mut [(Token, bool)]) {
        // A non-lexicon noun directly before a degree word modifies it:
        // 计算机科学与技术 学士. Transparent words like 专业 are skipped,
        // anything else stops the search.
        let degree_idx: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, (t, _))| DEGREE_KEYWORDS.contains(&t.text.as_str()))
            .map(|(i, _)| i)
            .collect();
        for d in degree_idx {
            let mut j = d;
            while j > 0 {
                j -= 1;
                let (token, lexical) = &tokens[j];
                if matches!(token.text.as_str(), "专业" | "学位") {
                    continue;
                }
                if token.pos == PartOfSpeech::Noun && !lexical {
                    tokens[j].0.head = d;
                    tokens[j].0.dep = DepLabel::NominalModifier;
                }
                break;
            }
        }

        // Compound titles: 开发 工程师 → 开发 is governed by 工程师.
        for i in 0..tokens.len().saturating_sub(1) {
            let here = tokens[i].0.text.clone();
            let next = tokens[i + 1].0.text.clone();
            if POSITION_KEYWORDS.contains(&here.as_str())
                && POSITION_KEYWORDS.contains(&next.as_str())
            {
                tokens[i].0.head = i + 1;
            }
        }
    }

    /// Tags 2–4 character unknown noun tokens that start with a common
    /// surname as PERSON. Only the document head (first two sentences) and
    /// sentences carrying a name label are considered, which is where
    /// resumes put the candidate's name.
    fn tag_entities(
        &self,
        tokens: &[(Token, bool)],
        sentence_index: usize,
        has_name_label: bool,
    ) -> Vec<Entity> {
        if sentence_index >= 2 && !has_name_label {
            return Vec::new();
        }
        tokens
            .iter()
            .filter(|(t, lexical)| {
                if *lexical || t.pos != PartOfSpeech::Noun {
                    return false;
                }
                let len = t.text.chars().count();
                if !(2..=4).contains(&len) {
                    return false;
                }
                let mut chars = t.text.chars();
                let first = match chars.next() {
                    Some(c) => c,
                    None => return false,
                };
                self.surnames.contains(&first) && t.text.chars().all(is_cjk)
            })
            .map(|(t, _)| Entity {
                text: t.text.clone(),
                label: EntityLabel::Person,
            })
            .collect()
    }

    /// Noun chunks are maximal runs of noun tokens. Number and date-unit
    /// tokens break a chunk so 2018年9月 never glues onto an institution,
    /// and institution/company suffixes close the chunk they end: the run
    /// 北京大学本科 yields 北京大学 and 本科, not one span.
    fn noun_chunks(&self, tokens: &[(Token, bool)]) -> Vec<String> {
        const CLOSING_SUFFIXES: &[&str] = &[
            "大学", "学院", "学校", "有限公司", "科技公司", "股份公司", "集团", "研究所", "公司",
        ];
        let mut chunks = Vec::new();
        let mut current = String::new();
        for (token, _) in tokens {
            if token.pos == PartOfSpeech::Noun {
                current.push_str(&token.text);
                if CLOSING_SUFFIXES.contains(&token.text.as_str()) {
                    chunks.push(std::mem::take(&mut current));
                }
            } else if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            chunks.push(current);
        }
        chunks
    }
}

impl Annotator for LexicalAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedDoc, ParseError> {
        let mut sentences = Vec::new();
        for (index, sentence_text) in self.segment(text).into_iter().enumerate() {
            let mut tagged = self.tokenize(&sentence_text);
            self.attach_dependencies(&mut tagged);
            let has_name_label = tagged
                .iter()
                .any(|(t, _)| t.text == "姓名" || t.text == "名字");
            let entities = self.tag_entities(&tagged, index, has_name_label);
            let noun_chunks = self.noun_chunks(&tagged);
            let tokens: Vec<Token> = tagged.into_iter().map(|(t, _)| t).collect();
            sentences.push(Sentence {
                text: sentence_text,
                tokens,
                entities,
                noun_chunks,
            });
        }
        Ok(AnnotatedDoc {
            text: text.to_string(),
            sentences,
        })
    }
}
