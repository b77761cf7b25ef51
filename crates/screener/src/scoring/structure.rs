use std::path::Path;

use crate::error::ProcessError;
use crate::processor::{DocumentFormat, ProcessorRegistry};

const BASE_SCORE: i32 = 3;
const SECTION_KEYWORDS: [&str; 5] = ["skills", "experience", "education", "projects", "summary"];
const MAX_SECTION_BONUS: i32 = 3;
const MIN_WORDS: usize = 300;
const MAX_WORDS: usize = 1000;
const BULLET: char = '•';

/// Heuristic layout quality on a 1–10 scale.
///
/// Starts at 3, adds one point per recognised section heading (at most
/// three), one for a word count within 300..=1000, and one for bullet
/// characters in a PDF.
pub fn structure_score(text: &str, format: Option<DocumentFormat>) -> u8 {
    let lowered = text.to_lowercase();

    let sections = SECTION_KEYWORDS
        .iter()
        .filter(|section| lowered.contains(*section))
        .count() as i32;

    let mut score = BASE_SCORE + sections.min(MAX_SECTION_BONUS);

    let word_count = text.split_whitespace().count();
    if (MIN_WORDS..=MAX_WORDS).contains(&word_count) {
        score += 1;
    }

    if format == Some(DocumentFormat::Pdf) && text.contains(BULLET) {
        score += 1;
    }

    score.clamp(1, 10) as u8
}

/// Extracts the document at `path` and scores it.
pub fn score_document(path: &Path) -> Result<u8, ProcessError> {
    let extracted = ProcessorRegistry::new().extract(path)?;
    Ok(structure_score(&extracted.text, extracted.format))
}
