use crate::config::Keywords;

use super::round1;

/// Share of configured keywords that appear in `text`, scaled to 0–10.
///
/// Matching is a case-insensitive substring test against the whole text, in
/// both search modes. With no keywords configured the score is 0.
pub fn content_score(text: &str, keywords: &Keywords) -> f64 {
    let total = keywords.len();
    if total == 0 {
        return 0.0;
    }

    let haystack = text.to_lowercase();
    let matched = keywords
        .iter()
        .filter(|keyword| haystack.contains(&keyword.to_lowercase()))
        .count();

    round1(matched as f64 / total as f64 * 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Requirements;

    const RESUME: &str = "Jane Doe\nSkills: Rust, PostgreSQL, Docker\nExperience: 5 years backend";

    #[test]
    fn test_all_keywords_present() {
        let req = Requirements::flat(["rust", "POSTGRESQL", "Docker"], 6.0);
        assert_eq!(content_score(RESUME, &req.requirements), 10.0);
    }

    #[test]
    fn test_no_keywords_present() {
        let req = Requirements::flat(["Kotlin", "Swift"], 6.0);
        assert_eq!(content_score(RESUME, &req.requirements), 0.0);
    }

    #[test]
    fn test_partial_match_rounds_to_one_decimal() {
        let req = Requirements::flat(["Rust", "Go", "Java"], 6.0);
        assert_eq!(content_score(RESUME, &req.requirements), 3.3);

        let req = Requirements::flat(["Rust", "Docker", "Java"], 6.0);
        assert_eq!(content_score(RESUME, &req.requirements), 6.7);
    }

    #[test]
    fn test_substring_matching() {
        // "SQL" is found inside "PostgreSQL"
        let req = Requirements::flat(["SQL", "end"], 6.0);
        assert_eq!(content_score(RESUME, &req.requirements), 10.0);
    }

    #[test]
    fn test_empty_configuration_scores_zero() {
        let flat = Requirements::flat(Vec::<String>::new(), 6.0);
        assert_eq!(content_score(RESUME, &flat.requirements), 0.0);

        let sections = Requirements::sections([("backend", Vec::<String>::new())], 6.0);
        assert_eq!(content_score(RESUME, &sections.requirements), 0.0);
    }

    #[test]
    fn test_section_keywords_match_whole_text() {
        // "Docker" sits on the skills line but is configured under "experience"
        let req = Requirements::sections(
            [
                ("skills", vec!["Rust", "Haskell"]),
                ("experience", vec!["Docker", "backend"]),
            ],
            6.0,
        );
        assert_eq!(content_score(RESUME, &req.requirements), 7.5);
    }

    #[test]
    fn test_flat_and_section_agree_on_same_keywords() {
        let flat = Requirements::flat(["Rust", "Haskell", "Docker", "backend", "Kafka"], 6.0);
        let sections = Requirements::sections(
            [
                ("languages", vec!["Rust", "Haskell"]),
                ("platform", vec!["Docker", "backend", "Kafka"]),
            ],
            6.0,
        );

        assert_eq!(
            content_score(RESUME, &flat.requirements),
            content_score(RESUME, &sections.requirements)
        );
        assert_eq!(content_score(RESUME, &flat.requirements), 6.0);
    }
}
