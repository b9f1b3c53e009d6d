//! Response parser for generative API output.
//!
//! The model is asked for one `"<ordinal>. <statement> - True|False"` line
//! per question. Anything that does not match that shape is dropped. This
//! single-pattern contract over free text is the highest-risk integration
//! point in the system: a model that drifts from the requested format
//! produces fewer (or zero) questions, never a parse error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{Answer, Question};

/// A candidate question line: ordinal, period, whitespace, statement,
/// `" - "` separator, trailing true/false and nothing else.
static QUESTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*\d+\.\s+.+ - (?:true|false)\s*$").unwrap());

static ORDINAL_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// Parse the raw model response into questions, in line order.
///
/// Lines that do not match the expected shape are silently discarded.
pub fn parse_questions(response: &str) -> Vec<Question> {
    response
        .lines()
        .filter(|line| QUESTION_LINE.is_match(line))
        .filter_map(|line| {
            let (raw_question, raw_answer) = line.trim().split_once(" - ")?;
            Some(Question {
                question: clean_question_text(raw_question),
                answer: Answer::normalize(raw_answer),
            })
        })
        .collect()
}

/// Strip the leading ordinal prefix, remove `?`/`¿`, and trim whitespace.
pub fn clean_question_text(raw: &str) -> String {
    ORDINAL_PREFIX
        .replace(raw.trim(), "")
        .replace(['?', '¿'], "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_line() {
        let questions = parse_questions("3. El proceso ocurre en 1920 - False");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "El proceso ocurre en 1920");
        assert_eq!(questions[0].answer, Answer::False);
    }

    #[test]
    fn keeps_line_order_and_drops_noise() {
        let response = "Here are your questions:\n\
                        1. The treaty was signed in June - True\n\
                        \n\
                        2. The treaty had twelve signatories - False\n\
                        I hope these are useful!";
        let questions = parse_questions(response);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "The treaty was signed in June");
        assert_eq!(questions[0].answer, Answer::True);
        assert_eq!(questions[1].question, "The treaty had twelve signatories");
        assert_eq!(questions[1].answer, Answer::False);
    }

    #[test]
    fn answer_token_is_case_insensitive() {
        let questions = parse_questions("1. Water expands when it freezes - TRUE\n2. Sound travels faster than light - fAlSe");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].answer, Answer::True);
        assert_eq!(questions[1].answer, Answer::False);
    }

    #[test]
    fn rejects_trailing_content_after_answer() {
        let questions = parse_questions("1. The sun is a star - True (obviously)");
        assert!(questions.is_empty());
    }

    #[test]
    fn rejects_lines_without_ordinal_or_separator() {
        let response = "The sun is a star - True\n\
                        1. The sun is a star: True\n\
                        1.The sun is a star - True";
        assert!(parse_questions(response).is_empty());
    }

    #[test]
    fn allows_leading_whitespace_and_multi_digit_ordinals() {
        let questions = parse_questions("   12. Oxygen is the most abundant element in the crust - true");
        assert_eq!(questions.len(), 1);
        assert_eq!(
            questions[0].question,
            "Oxygen is the most abundant element in the crust"
        );
    }

    #[test]
    fn splits_on_the_first_separator_occurrence() {
        // The text after the first " - " is treated as the answer; anything
        // that is not literally "true" canonicalizes to False.
        let questions = parse_questions("2. Madrid - not Barcelona - is the capital - True");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Madrid");
        assert_eq!(questions[0].answer, Answer::False);
    }

    #[test]
    fn removes_question_marks_from_text() {
        let questions = parse_questions("1. ¿El agua hierve a 100 grados? - True");
        assert_eq!(questions[0].question, "El agua hierve a 100 grados");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let cleaned = clean_question_text("  7. ¿Is this cleaned? ");
        assert_eq!(cleaned, "Is this cleaned");
        assert_eq!(clean_question_text(&cleaned), cleaned);
    }
}
