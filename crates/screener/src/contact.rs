//! Contact details and candidate name pulled from resume text.
//!
//! Everything here is pattern matching over plain text: no dictionaries and
//! no language models. The name heuristic in particular is crude and is kept
//! behind [`NameExtractor`] so it can be swapped out.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Placeholder stored when no email or phone number is present.
pub const NOT_FOUND: &str = "Not found";

/// Indian mobile number, optionally prefixed with `+91` and one separator.
static RE_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+91[\s\-]?[6-9]\d{9}|\b[6-9]\d{9}\b").unwrap()
});

static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9_.+\-]+@[a-zA-Z0-9\-]+\.[a-zA-Z0-9\-.]+").unwrap()
});

/// Any decimal digit, in any script. Numerals such as `Ⅳ` or `½` are not digits.
static RE_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").unwrap());

/// A candidate name split into its parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    pub full_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
}

impl ParsedName {
    /// Splits a name line on whitespace.
    ///
    /// Three tokens fill first/middle/last, two fill first/last, one fills
    /// first only. Any other count keeps just `full_name`.
    pub fn from_line(line: &str) -> Self {
        let full_name = line.trim().to_string();
        let parts: Vec<&str> = full_name.split_whitespace().collect();

        let (first, middle, last) = match parts.as_slice() {
            [first, middle, last] => (*first, *middle, *last),
            [first, last] => (*first, "", *last),
            [first] => (*first, "", ""),
            _ => ("", "", ""),
        };

        Self {
            first_name: first.to_string(),
            middle_name: middle.to_string(),
            last_name: last.to_string(),
            full_name,
        }
    }
}

pub trait NameExtractor: Send + Sync {
    fn extract_name(&self, text: &str) -> Option<ParsedName>;
}

/// Takes the first non-blank line that holds no `@` and no digit.
///
/// A resume that opens with a heading such as "Objective" gets that heading
/// as its name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLineNameExtractor;

impl NameExtractor for FirstLineNameExtractor {
    fn extract_name(&self, text: &str) -> Option<ParsedName> {
        text.trim()
            .split('\n')
            .map(str::trim)
            .find(|line| {
                !line.is_empty() && !line.contains('@') && !RE_DIGIT.is_match(line)
            })
            .map(ParsedName::from_line)
    }
}

/// Identity fields of a candidate record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub full_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            first_name: String::new(),
            middle_name: String::new(),
            last_name: String::new(),
            email: NOT_FOUND.to_string(),
            phone: NOT_FOUND.to_string(),
        }
    }
}

impl ContactInfo {
    pub fn from_text(text: &str) -> Self {
        extract_contact(text, &FirstLineNameExtractor)
    }
}

pub fn extract_contact(text: &str, names: &dyn NameExtractor) -> ContactInfo {
    let mut info = ContactInfo::default();

    if let Some(phone) = find_phone(text) {
        info.phone = phone.to_string();
    }

    if let Some(email) = find_email(text) {
        info.email = email.to_string();
    }

    if let Some(name) = names.extract_name(text) {
        info.full_name = name.full_name;
        info.first_name = name.first_name;
        info.middle_name = name.middle_name;
        info.last_name = name.last_name;
    }

    info
}

pub fn find_phone(text: &str) -> Option<&str> {
    RE_PHONE.find(text).map(|m| m.as_str())
}

pub fn find_email(text: &str) -> Option<&str> {
    RE_EMAIL.find(text).map(|m| m.as_str())
}
