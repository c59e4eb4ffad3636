//! Key casing rules shared by the codec and the CLI.
//!
//! `snake_to_camel` and `camel_to_snake` are simple character-level rules and are
//! not inverses for every input: runs of capitals such as `ABC` and single
//! trailing capitals segment lossily.

use serde_json::{Map, Value};

/// `snake_in_value` → `snakeInValue`, `value_2_to_3_values` → `value2To3Values`.
///
/// The first `_`-separated segment is lower-cased; every following segment is
/// title-cased (a letter after a non-letter is upper-cased, the rest lower-cased)
/// and appended without a separator. Empty segments contribute nothing.
pub fn snake_to_camel(key: &str) -> String {
    let mut segments = key.split('_');
    let mut out = String::with_capacity(key.len());

    if let Some(first) = segments.next() {
        out.push_str(&first.to_lowercase());
    }
    for segment in segments {
        push_title_case(&mut out, segment);
    }
    out
}

fn push_title_case(out: &mut String, segment: &str) {
    let mut after_letter = false;
    for ch in segment.chars() {
        if ch.is_alphabetic() {
            if after_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(ch);
            after_letter = false;
        }
    }
}

/// `snakeInValue` → `snake_in_value`, `IDValue` → `id_value`, `value2To3Values` →
/// `value_2_to_3_values`.
///
/// At each position the first matching rule wins:
/// 1. an optional capital followed by one or more lower-case letters;
/// 2. two or more capitals followed by a capital+lower-case pair, a digit, a
///    non-word character or the end (the longest such run);
/// 3. a run of digits.
///
/// Characters matching no rule are dropped. Matches are lower-cased and joined
/// with `_`.
///
/// Letter case and digits are ASCII only: non-ASCII letters and non-ASCII
/// decimal digits (e.g. Arabic-Indic `٣`) never start a segment and are dropped.
pub fn camel_to_snake(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let matched = match_word(&chars, pos)
            .or_else(|| match_acronym(&chars, pos))
            .or_else(|| match_digits(&chars, pos));

        match matched {
            Some(end) => {
                let word: String = chars[pos..end].iter().collect();
                words.push(word.to_lowercase());
                pos = end;
            }
            None => pos += 1,
        }
    }

    words.join("_")
}

fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn match_word(chars: &[char], pos: usize) -> Option<usize> {
    let mut i = pos;
    if is_upper(chars[i]) && chars.get(i + 1).copied().is_some_and(is_lower) {
        i += 1;
    }
    let start = i;
    while i < chars.len() && is_lower(chars[i]) {
        i += 1;
    }
    (i > start).then_some(i)
}

fn match_acronym(chars: &[char], pos: usize) -> Option<usize> {
    let mut end = pos;
    while end < chars.len() && is_upper(chars[end]) {
        end += 1;
    }
    // Longest run first, shrinking until the boundary condition holds.
    while end - pos >= 2 {
        if acronym_boundary(chars, end) {
            return Some(end);
        }
        end -= 1;
    }
    None
}

fn acronym_boundary(chars: &[char], at: usize) -> bool {
    let Some(&next) = chars.get(at) else {
        return true;
    };
    (is_upper(next) && chars.get(at + 1).copied().is_some_and(is_lower))
        || next.is_ascii_digit()
        || !is_word(next)
}

fn match_digits(chars: &[char], pos: usize) -> Option<usize> {
    let mut i = pos;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    (i > pos).then_some(i)
}

/// Rewrite every mapping key in the graph with `convert`, recursing through
/// mappings and sequences. Scalars are returned unchanged.
pub fn rewrite_keys(value: Value, convert: fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, child) in map {
                out.insert(convert(&key), rewrite_keys(child, convert));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| rewrite_keys(item, convert))
                .collect(),
        ),
        scalar => scalar,
    }
}
