//! Identifier validation and case conversion for generated Go code.

use crate::error::{Result, ScaffoldError};
use regex::Regex;
use std::sync::LazyLock;

static MODEL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").expect("Invalid regex pattern"));

static FIELD_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("Invalid regex pattern"));

/// Validate a model name and return it in exported (upper camel) form.
pub fn model_name(raw: &str) -> Result<String> {
    if !MODEL_NAME.is_match(raw) {
        return Err(ScaffoldError::InvalidName(raw.to_string()));
    }
    Ok(exported(raw))
}

pub fn is_field_name(raw: &str) -> bool {
    FIELD_NAME.is_match(raw)
}

/// Upper-case the first letter; `user` -> `User`.
pub fn exported(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `first_name` / `firstName` -> `FirstName`.
pub fn camel(name: &str) -> String {
    name.split('_').filter(|p| !p.is_empty()).map(exported).collect()
}

/// `BlogPost` -> `blog_post`, `HTTPLog` -> `http_log`.
pub fn snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_lower = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit());
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if i > 0 && (prev_lower || (next_lower && chars[i - 1].is_uppercase())) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Naive English plural for collection names.
pub fn plural(word: &str) -> String {
    if word.ends_with('s') || word.ends_with('x') || word.ends_with("ch") || word.ends_with("sh") {
        format!("{}es", word)
    } else if let Some(stem) = word.strip_suffix('y')
        && !stem.ends_with(['a', 'e', 'i', 'o', 'u'])
    {
        format!("{}ies", stem)
    } else {
        format!("{}s", word)
    }
}
