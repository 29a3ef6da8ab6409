use std::fmt;

use serde::Serialize;

use super::session::Session;
use crate::models::Question;

/// Qualitative feedback derived from the final score.
///
/// The cutoffs are absolute scores and do not scale with the number of
/// questions in the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Suggestion {
    Excellent,
    GoodJob,
    NeedsPractice,
}

impl Suggestion {
    pub fn for_score(score: usize) -> Self {
        match score {
            s if s > 7 => Suggestion::Excellent,
            s if s > 4 => Suggestion::GoodJob,
            _ => Suggestion::NeedsPractice,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Suggestion::Excellent => "Excellent!",
            Suggestion::GoodJob => "Good job! Keep practicing.",
            Suggestion::NeedsPractice => "You need more practice.",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOutcome {
    pub question: Question,
    pub correct_answer: String,
    /// `None` when the question was never answered.
    pub selected_answer: Option<String>,
    pub is_correct: bool,
}

/// Final read-out of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub per_question: Vec<QuestionOutcome>,
    pub suggestion: Suggestion,
}

impl QuizResult {
    pub(crate) fn from_session(session: &Session) -> Self {
        let per_question = session
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let selected_answer = session.selected_answer(index).map(str::to_string);
                let is_correct = selected_answer.as_deref() == Some(question.correct_answer.as_str());
                QuestionOutcome {
                    question: question.clone(),
                    correct_answer: question.correct_answer.clone(),
                    selected_answer,
                    is_correct,
                }
            })
            .collect();

        Self {
            score: session.score(),
            total: session.total(),
            per_question,
            suggestion: Suggestion::for_score(session.score()),
        }
    }

    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.score as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }

    pub fn answered(&self) -> usize {
        self.per_question
            .iter()
            .filter(|outcome| outcome.selected_answer.is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_thresholds() {
        assert_eq!(Suggestion::for_score(0), Suggestion::NeedsPractice);
        assert_eq!(Suggestion::for_score(4), Suggestion::NeedsPractice);
        assert_eq!(Suggestion::for_score(5), Suggestion::GoodJob);
        assert_eq!(Suggestion::for_score(7), Suggestion::GoodJob);
        assert_eq!(Suggestion::for_score(8), Suggestion::Excellent);
        assert_eq!(Suggestion::for_score(25), Suggestion::Excellent);
    }

    #[test]
    fn suggestion_messages() {
        assert_eq!(Suggestion::Excellent.to_string(), "Excellent!");
        assert_eq!(Suggestion::GoodJob.to_string(), "Good job! Keep practicing.");
        assert_eq!(Suggestion::NeedsPractice.to_string(), "You need more practice.");
    }
}
