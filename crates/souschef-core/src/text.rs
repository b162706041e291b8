//! Instruction text tidying for display.
//!
//! Scraped instruction text arrives with HTML entities, non-breaking
//! spaces and erratic punctuation spacing. [`tidy_instruction`] normalizes
//! it for display without touching the wording itself, so duration
//! extraction keeps operating on the raw text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static ENTITY: Lazy<Regex> = Lazy::new(|| re(r"&(#x?[0-9a-fA-F]+|[a-zA-Z]+);"));
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| re(r"\s{2,}"));
static COMMA: Lazy<Regex> = Lazy::new(|| re(r"\s*,\s*"));
static SEMICOLON: Lazy<Regex> = Lazy::new(|| re(r"\s*;\s*"));
static COMMA_AFTER_OPEN: Lazy<Regex> = Lazy::new(|| re(r"\(\s*,\s*"));
static COMMA_BEFORE_CLOSE: Lazy<Regex> = Lazy::new(|| re(r",\s*\)"));
static SPACE_AFTER_OPEN: Lazy<Regex> = Lazy::new(|| re(r"\(\s+"));
static SPACE_BEFORE_CLOSE: Lazy<Regex> = Lazy::new(|| re(r"\s+\)"));
static WORD_THEN_OPEN: Lazy<Regex> = Lazy::new(|| re(r"(\w)\("));
static DIGIT_THEN_LETTER: Lazy<Regex> = Lazy::new(|| re(r"(\d)([A-Za-z])"));
static FRACTION_THEN_LETTER: Lazy<Regex> =
    Lazy::new(|| re(r"([¼½¾⅐⅑⅒⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞])([A-Za-z])"));
static SLASH_BETWEEN_WORDS: Lazy<Regex> = Lazy::new(|| re(r"([A-Za-z])\s*/\s*([A-Za-z])"));
static SLASH_BETWEEN_DIGITS: Lazy<Regex> = Lazy::new(|| re(r"(\d)\s*/\s*(\d)"));
static SPACE_BEFORE_PERIOD: Lazy<Regex> = Lazy::new(|| re(r"\s+\."));

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("tidy pattern is valid")
}

/// Decode the HTML entities that survive recipe scraping: a small named
/// set (including the fraction entities) plus decimal and hex numeric
/// references. Unknown entities pass through untouched.
fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let code = &caps[1];
            if let Some(numeric) = code.strip_prefix('#') {
                let (digits, radix) = if numeric.starts_with(&['x', 'X'][..]) {
                    (&numeric[1..], 16)
                } else {
                    (numeric, 10)
                };
                return u32::from_str_radix(digits, radix)
                    .ok()
                    .and_then(char::from_u32)
                    .map(String::from)
                    .unwrap_or_else(|| caps[0].to_string());
            }
            named_entity(&code.to_ascii_lowercase())
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<&'static str> {
    Some(match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => " ",
        "ndash" => "\u{2013}",
        "mdash" => "\u{2014}",
        "middot" => "·",
        "bull" => "•",
        "hellip" => "…",
        "frac12" => "½",
        "frac14" => "¼",
        "frac34" => "¾",
        "frac13" => "⅓",
        "frac23" => "⅔",
        "frac15" => "⅕",
        "frac25" => "⅖",
        "frac35" => "⅗",
        "frac45" => "⅘",
        "frac16" => "⅙",
        "frac56" => "⅚",
        "frac18" => "⅛",
        "frac38" => "⅜",
        "frac58" => "⅝",
        "frac78" => "⅞",
        _ => return None,
    })
}

/// Tidy one instruction step for display.
pub fn tidy_instruction(text: &str) -> String {
    let mut s = decode_entities(text);
    s = s.replace('\u{a0}', " ");
    s = MULTI_SPACE.replace_all(&s, " ").into_owned();

    // Commas: no space before, single space after. Semicolons likewise.
    s = COMMA.replace_all(&s, ", ").into_owned();
    s = SEMICOLON.replace_all(&s, "; ").into_owned();

    // Parenthesis repair: "(, foo)" -> "(foo)", "(foo ,)" -> "(foo)",
    // no space just inside, space before "(" when stuck to a word.
    s = COMMA_AFTER_OPEN.replace_all(&s, "(").into_owned();
    s = COMMA_BEFORE_CLOSE.replace_all(&s, ")").into_owned();
    s = SPACE_AFTER_OPEN.replace_all(&s, "(").into_owned();
    s = SPACE_BEFORE_CLOSE.replace_all(&s, ")").into_owned();
    s = WORD_THEN_OPEN.replace_all(&s, "$1 (").into_owned();

    // "3lb" -> "3 lb", "½cup" -> "½ cup".
    s = DIGIT_THEN_LETTER.replace_all(&s, "$1 $2").into_owned();
    s = FRACTION_THEN_LETTER.replace_all(&s, "$1 $2").into_owned();

    // Slashes stay tight between words ("and/or") and numeric fractions.
    s = SLASH_BETWEEN_WORDS.replace_all(&s, "$1/$2").into_owned();
    s = SLASH_BETWEEN_DIGITS.replace_all(&s, "$1/$2").into_owned();

    s = SPACE_BEFORE_PERIOD.replace_all(&s, ".").into_owned();

    MULTI_SPACE.replace_all(&s, " ").trim().to_string()
}
