use std::io;

use async_trait::async_trait;
use thiserror::Error;

use crate::error::QuizError;
use crate::models::{Question, Subject};

/// Errors emitted by a question source.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    #[error("Failed to fetch questions from the internet.")]
    HttpStatus(reqwest::StatusCode),
    #[error("Failed to fetch questions from the internet: {0}")]
    Http(#[from] reqwest::Error),
    #[error("No questions available for the selected topic.")]
    NoQuestions,
    #[error("Failed to read questions: {0}")]
    Read(#[from] io::Error),
    #[error("Failed to parse questions: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Anything that can hand over a finished list of questions.
///
/// A source either returns every question it was able to produce or fails as
/// a whole; partial lists are never reported as errors.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch(&self, subject: Subject, count: usize) -> Result<Vec<Question>, SourceError>;
}

/// Fetch from `source`, turning an empty answer into a failure.
pub async fn fetch_questions(
    source: &dyn QuestionSource,
    subject: Subject,
    count: usize,
) -> Result<Vec<Question>, QuizError> {
    if count == 0 {
        return Err(QuizError::invalid_input(
            "Please enter a valid number of questions.",
        ));
    }

    let questions = match source.fetch(subject, count).await {
        Ok(questions) => questions,
        Err(err) => {
            log::warn!("fetching {} {} questions failed: {}", count, subject, err);
            return Err(err.into());
        }
    };
    if questions.is_empty() {
        log::warn!("source returned no {} questions", subject);
        return Err(SourceError::NoQuestions.into());
    }

    log::info!("fetched {} {} questions", questions.len(), subject);
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(Vec<Question>);

    #[async_trait]
    impl QuestionSource for FixedSource {
        async fn fetch(&self, _: Subject, count: usize) -> Result<Vec<Question>, SourceError> {
            Ok(self.0.iter().take(count).cloned().collect())
        }
    }

    struct BrokenSource;

    #[async_trait]
    impl QuestionSource for BrokenSource {
        async fn fetch(&self, _: Subject, _: usize) -> Result<Vec<Question>, SourceError> {
            Err(SourceError::HttpStatus(reqwest::StatusCode::BAD_GATEWAY))
        }
    }

    #[tokio::test]
    async fn passes_questions_through() {
        let source = FixedSource(vec![
            Question::new("A?", "a", ["b"]),
            Question::new("B?", "b", ["a"]),
        ]);
        let questions = fetch_questions(&source, Subject::Jee, 1).await.unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[tokio::test]
    async fn empty_answer_is_an_external_failure() {
        let source = FixedSource(Vec::new());
        let err = fetch_questions(&source, Subject::Neet, 3).await.unwrap_err();
        assert!(matches!(err, QuizError::ExternalSource(SourceError::NoQuestions)));
    }

    #[tokio::test]
    async fn source_failure_is_surfaced_unchanged() {
        let err = fetch_questions(&BrokenSource, Subject::Jee, 3).await.unwrap_err();
        assert!(matches!(
            err,
            QuizError::ExternalSource(SourceError::HttpStatus(status)) if status == reqwest::StatusCode::BAD_GATEWAY
        ));
        assert_eq!(err.to_string(), "Failed to fetch questions from the internet.");
    }

    #[tokio::test]
    async fn zero_count_is_invalid_input() {
        let source = FixedSource(vec![Question::new("A?", "a", ["b"])]);
        let err = fetch_questions(&source, Subject::Jee, 0).await.unwrap_err();
        assert!(matches!(err, QuizError::InvalidInput(_)));
    }
}
