//! Quiz session state machine.
//!
//! A linear walkthrough: `Idle` until questions are loaded, then
//! `Presenting(i)` for each question in order, then `Finished` with scoring.
//! Answering is permissive: advancing without a choice leaves the question
//! unanswered rather than blocking.
//!
//! Scoring is signed: +1 per correct answer, -1 per incorrect answer, 0 per
//! unanswered question. The total may be negative and is never floored.

use serde::Serialize;

use crate::model::{Answer, Question};

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// No questions loaded.
    Idle,
    /// Presenting the question at this index.
    Presenting(usize),
    /// Past the last question; results are available.
    Finished,
}

/// How a single question was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Incorrect,
    Unanswered,
}

/// Per-question outcome in the final results.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionOutcome {
    /// The question text.
    pub question: String,
    /// The correct answer.
    pub correct_answer: Answer,
    /// The user's answer, if one was recorded.
    pub given: Option<Answer>,
    pub verdict: Verdict,
}

/// Final results computed on entering `Finished`.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResults {
    pub outcomes: Vec<QuestionOutcome>,
    /// Signed score: correct minus incorrect. May be negative.
    pub score: i32,
    pub total: usize,
}

/// A single user's walkthrough of a loaded question list.
///
/// Answers are recorded by question position, so skipped questions stay
/// unanswered instead of shifting later answers.
#[derive(Debug, Default)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    answers: Vec<Option<Answer>>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a question list, moving `Idle -> Presenting(0)`.
    ///
    /// An empty list leaves the session idle.
    pub fn load(&mut self, questions: Vec<Question>) {
        self.answers = vec![None; questions.len()];
        self.questions = questions;
        self.current = 0;
    }

    pub fn state(&self) -> QuizState {
        if self.questions.is_empty() {
            QuizState::Idle
        } else if self.current < self.questions.len() {
            QuizState::Presenting(self.current)
        } else {
            QuizState::Finished
        }
    }

    /// The question currently being presented, if any.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// One-based position and total, for display.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match self.state() {
            QuizState::Presenting(i) => Some((i + 1, self.questions.len())),
            _ => None,
        }
    }

    /// Record `choice` for the current question (if one was made) and move
    /// on. Advancing past the last question finishes the quiz.
    pub fn advance(&mut self, choice: Option<Answer>) {
        if let QuizState::Presenting(i) = self.state() {
            if let Some(answer) = choice {
                self.answers[i] = Some(answer);
            }
            self.current += 1;
        }
    }

    /// Compute results. Only available once the session is finished.
    pub fn results(&self) -> Option<QuizResults> {
        if self.state() != QuizState::Finished {
            return None;
        }

        let mut score = 0i32;
        let outcomes = self
            .questions
            .iter()
            .zip(&self.answers)
            .map(|(question, given)| {
                let verdict = match given {
                    None => Verdict::Unanswered,
                    Some(answer) if *answer == question.answer => {
                        score += 1;
                        Verdict::Correct
                    }
                    Some(_) => {
                        score -= 1;
                        Verdict::Incorrect
                    }
                };
                QuestionOutcome {
                    question: question.question.clone(),
                    correct_answer: question.answer,
                    given: *given,
                    verdict,
                }
            })
            .collect();

        Some(QuizResults {
            outcomes,
            score,
            total: self.questions.len(),
        })
    }

    /// Clear everything and return to `Idle`.
    pub fn restart(&mut self) {
        self.questions.clear();
        self.answers.clear();
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_questions() -> Vec<Question> {
        vec![
            Question::new("The sky is blue", Answer::True),
            Question::new("Fire is cold", Answer::False),
            Question::new("Water is wet", Answer::True),
        ]
    }

    #[test]
    fn starts_idle_and_presents_after_load() {
        let mut session = QuizSession::new();
        assert_eq!(session.state(), QuizState::Idle);
        assert!(session.current_question().is_none());

        session.load(three_questions());
        assert_eq!(session.state(), QuizState::Presenting(0));
        assert_eq!(session.current_question().unwrap().question, "The sky is blue");
        assert_eq!(session.progress(), Some((1, 3)));
    }

    #[test]
    fn loading_empty_list_stays_idle() {
        let mut session = QuizSession::new();
        session.load(vec![]);
        assert_eq!(session.state(), QuizState::Idle);
        assert!(session.results().is_none());
    }

    #[test]
    fn walks_through_all_questions_then_finishes() {
        let mut session = QuizSession::new();
        session.load(three_questions());

        session.advance(Some(Answer::True));
        assert_eq!(session.state(), QuizState::Presenting(1));
        session.advance(Some(Answer::False));
        assert_eq!(session.state(), QuizState::Presenting(2));
        session.advance(Some(Answer::True));
        assert_eq!(session.state(), QuizState::Finished);

        let results = session.results().unwrap();
        assert_eq!(results.score, 3);
        assert_eq!(results.total, 3);
        assert!(results.outcomes.iter().all(|o| o.verdict == Verdict::Correct));
    }

    #[test]
    fn correct_incorrect_unanswered_scores_to_zero() {
        let mut session = QuizSession::new();
        session.load(three_questions());

        session.advance(Some(Answer::True)); // correct
        session.advance(Some(Answer::True)); // incorrect
        session.advance(None); // unanswered

        let results = session.results().unwrap();
        assert_eq!(results.score, 0);
        assert_eq!(results.outcomes[0].verdict, Verdict::Correct);
        assert_eq!(results.outcomes[1].verdict, Verdict::Incorrect);
        assert_eq!(results.outcomes[2].verdict, Verdict::Unanswered);
        assert_eq!(results.outcomes[2].given, None);
    }

    #[test]
    fn score_can_go_negative() {
        let mut session = QuizSession::new();
        session.load(three_questions());

        session.advance(Some(Answer::False));
        session.advance(Some(Answer::True));
        session.advance(Some(Answer::False));

        assert_eq!(session.results().unwrap().score, -3);
    }

    #[test]
    fn skipping_does_not_shift_later_answers() {
        let mut session = QuizSession::new();
        session.load(three_questions());

        session.advance(None);
        session.advance(Some(Answer::False));
        session.advance(None);

        let results = session.results().unwrap();
        assert_eq!(results.outcomes[0].verdict, Verdict::Unanswered);
        assert_eq!(results.outcomes[1].verdict, Verdict::Correct);
        assert_eq!(results.outcomes[2].verdict, Verdict::Unanswered);
        assert_eq!(results.score, 1);
    }

    #[test]
    fn results_unavailable_mid_quiz() {
        let mut session = QuizSession::new();
        session.load(three_questions());
        session.advance(Some(Answer::True));
        assert!(session.results().is_none());
    }

    #[test]
    fn advancing_when_finished_is_a_no_op() {
        let mut session = QuizSession::new();
        session.load(vec![Question::new("The sky is blue", Answer::True)]);
        session.advance(Some(Answer::True));
        assert_eq!(session.state(), QuizState::Finished);
        session.advance(Some(Answer::False));
        assert_eq!(session.state(), QuizState::Finished);
        assert_eq!(session.results().unwrap().score, 1);
    }

    #[test]
    fn restart_returns_to_idle() {
        let mut session = QuizSession::new();
        session.load(three_questions());
        session.advance(Some(Answer::True));
        session.restart();

        assert_eq!(session.state(), QuizState::Idle);
        assert!(session.current_question().is_none());
        assert!(session.results().is_none());

        // A restarted session can be reused.
        session.load(three_questions());
        assert_eq!(session.state(), QuizState::Presenting(0));
    }
}
