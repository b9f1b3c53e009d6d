//! Core data model types for quizsmith.
//!
//! These are the fundamental types the entire quizsmith system uses to
//! represent generated quiz questions and their answers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A true/false answer, serialized as exactly `"True"` or `"False"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    True,
    False,
}

impl Answer {
    /// Canonicalize free-form model output: anything that is not a
    /// case-insensitive `"true"` becomes `False`.
    pub fn normalize(raw: &str) -> Answer {
        if raw.trim().eq_ignore_ascii_case("true") {
            Answer::True
        } else {
            Answer::False
        }
    }

    /// The canonical string literal for this answer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::True => "True",
            Answer::False => "False",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Answer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "true" | "t" => Ok(Answer::True),
            "false" | "f" => Ok(Answer::False),
            other => Err(format!("not a true/false answer: {other}")),
        }
    }
}

/// A single generated quiz question.
///
/// Created only by the response parser. The question text never contains
/// `?` or `¿` characters and never carries a leading `"<digits>. "` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question statement, to be judged true or false.
    pub question: String,
    /// The correct answer.
    pub answer: Answer,
}

impl Question {
    pub fn new(question: impl Into<String>, answer: Answer) -> Self {
        Self {
            question: question.into(),
            answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_display_and_parse() {
        assert_eq!(Answer::True.to_string(), "True");
        assert_eq!(Answer::False.to_string(), "False");
        assert_eq!("true".parse::<Answer>().unwrap(), Answer::True);
        assert_eq!("FALSE".parse::<Answer>().unwrap(), Answer::False);
        assert_eq!("t".parse::<Answer>().unwrap(), Answer::True);
        assert_eq!("f".parse::<Answer>().unwrap(), Answer::False);
        assert!("maybe".parse::<Answer>().is_err());
        assert!("".parse::<Answer>().is_err());
    }

    #[test]
    fn answer_normalize_maps_everything_else_to_false() {
        assert_eq!(Answer::normalize("true"), Answer::True);
        assert_eq!(Answer::normalize("TRUE"), Answer::True);
        assert_eq!(Answer::normalize(" True "), Answer::True);
        assert_eq!(Answer::normalize("false"), Answer::False);
        assert_eq!(Answer::normalize("verdadero"), Answer::False);
        assert_eq!(Answer::normalize(""), Answer::False);
    }

    #[test]
    fn answer_serializes_as_literal_string() {
        assert_eq!(serde_json::to_string(&Answer::True).unwrap(), "\"True\"");
        assert_eq!(serde_json::to_string(&Answer::False).unwrap(), "\"False\"");
        let back: Answer = serde_json::from_str("\"True\"").unwrap();
        assert_eq!(back, Answer::True);
    }

    #[test]
    fn question_serde_roundtrip() {
        let q = Question::new("El proceso ocurre en 1920", Answer::False);
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("\"answer\":\"False\""));
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }
}
