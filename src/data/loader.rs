use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::source::{QuestionSource, SourceError};
use crate::models::{Question, Subject};

/// Read a JSON array of questions from `path`.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, SourceError> {
    let path = path.as_ref();
    let json_content = fs::read_to_string(path)?;
    let questions: Vec<Question> = serde_json::from_str(&json_content)?;

    if questions.is_empty() {
        return Err(SourceError::NoQuestions);
    }

    log::debug!("loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

/// Offline source backed by a JSON file. The subject is ignored; the file is
/// read again on every fetch.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileSource {
    async fn fetch(&self, _subject: Subject, count: usize) -> Result<Vec<Question>, SourceError> {
        let path = self.path.clone();
        let questions = tokio::task::spawn_blocking(move || load_questions_from_json(path))
            .await
            .map_err(|err| SourceError::Read(std::io::Error::other(err)))??;
        Ok(questions.into_iter().take(count).collect())
    }
}
