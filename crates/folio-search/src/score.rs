//! Relevance scoring — a fixed additive heuristic, not a ranking model.
//!
//! The constants are a compatibility contract: 0.5 floor for any hit,
//! +0.3 for lowercase containment, +0.2 for a whole-word match, −0.1 for
//! lines over 100 characters, plus min(0.2, occurrences × 0.05), clamped
//! to [0.0, 1.0].

use regex::Regex;

use crate::matcher;

/// Scores matched lines against one query. Build once per search so the
/// word-boundary regex is compiled a single time.
pub struct RelevanceScorer {
    needle: String,
    word_re: Option<Regex>,
}

impl RelevanceScorer {
    pub fn new(query: &str) -> Self {
        let trimmed = query.trim();
        let word_re = if trimmed.is_empty() {
            None
        } else {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(trimmed))).ok()
        };
        Self {
            needle: trimmed.to_lowercase(),
            word_re,
        }
    }

    /// Score one line. Always in [0.0, 1.0].
    pub fn score(&self, line: &str) -> f64 {
        let mut score: f64 = 0.5;

        if !self.needle.is_empty() && line.to_lowercase().contains(&self.needle) {
            score += 0.3;
        }
        if self.word_re.as_ref().is_some_and(|re| re.is_match(line)) {
            score += 0.2;
        }
        if line.len() > 100 {
            score -= 0.1;
        }

        let occurrences = matcher::occurrence_count(line, &self.needle);
        score += (occurrences as f64 * 0.05).min(0.2);

        score.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_scores_full() {
        let scorer = RelevanceScorer::new("cat");
        // 0.5 + 0.3 + 0.2 + 0.05 = 1.05 → clamped to 1.0
        assert_eq!(scorer.score("The cat sat."), 1.0);
    }

    #[test]
    fn test_substring_only_skips_word_bonus() {
        let scorer = RelevanceScorer::new("cat");
        // 0.5 + 0.3 + 0.05 = 0.85
        let score = scorer.score("concatenate");
        assert!((score - 0.85).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_long_line_penalty() {
        let scorer = RelevanceScorer::new("cat");
        let long = format!("cat {}", "filler ".repeat(20));
        assert!(long.len() > 100);
        let short = "cat here".to_string();
        assert!(scorer.score(&long) < scorer.score(&short));
    }

    #[test]
    fn test_frequency_bonus_caps_at_point_two() {
        let scorer = RelevanceScorer::new("cat");
        // 10 glued occurrences (no word match) padded past the length
        // penalty: 0.5 + 0.3 − 0.1 + capped 0.2 = 0.9. Uncapped the bonus
        // would be +0.5 and the clamp would hide the difference.
        let line = format!("{}{}", "cat".repeat(10), "x".repeat(100));
        let score = scorer.score(&line);
        assert!((score - 0.9).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn test_score_always_in_unit_range() {
        let scorer = RelevanceScorer::new("cat");
        let cases = [
            "".to_string(),
            "cat".to_string(),
            "CAT CAT CAT CAT CAT".to_string(),
            "x".repeat(500),
            format!("cat {}", "y".repeat(200)),
        ];
        for line in &cases {
            let s = scorer.score(line);
            assert!((0.0..=1.0).contains(&s), "score {s} out of range for {line:?}");
        }
    }

    #[test]
    fn test_spec_example_ranking() {
        // A >100-char line with one plain occurrence scores below a short
        // line containing the query as a whole word.
        let scorer = RelevanceScorer::new("cat");
        let long = format!("The cat ran {}", "x".repeat(100));
        let short = "A cat ran far.";
        assert!(scorer.score(&long) < scorer.score(short));
    }

    #[test]
    fn test_query_trimmed_for_scoring() {
        let scorer = RelevanceScorer::new("  cat  ");
        assert_eq!(scorer.score("the cat sat"), 1.0);
    }
}
