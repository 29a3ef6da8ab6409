use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::source::{QuestionSource, SourceError};
use crate::models::{Question, QuestionMeta, Subject};

const YEAR_RANGE: std::ops::RangeInclusive<u16> = 2000..=2023;

/// Client for the Open Trivia Database `api.php` endpoint.
#[derive(Debug, Clone)]
pub struct OpenTdbClient {
    client: Client,
    base_url: String,
}

impl OpenTdbClient {
    /// # Errors
    ///
    /// Returns `SourceError::Http` when the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api.php", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl QuestionSource for OpenTdbClient {
    async fn fetch(&self, subject: Subject, count: usize) -> Result<Vec<Question>, SourceError> {
        let url = self.endpoint();
        log::debug!("requesting {} questions from {} (category {})", count, url, subject.category_id());

        let response = self
            .client
            .get(&url)
            .query(&[
                ("amount", count.to_string()),
                ("category", subject.category_id().to_string()),
                ("type", "multiple".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SourceError::HttpStatus(status));
        }

        let body: ApiResponse = response.json().await?;
        body.into_questions(&mut rand::rng())
    }
}

/// Open Trivia DB escapes prompts and answers as HTML.
fn decode(text: &str) -> String {
    html_escape::decode_html_entities(text).to_string()
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    response_code: u8,
    #[serde(default)]
    results: Vec<ApiQuestion>,
}

#[derive(Debug, Deserialize)]
struct ApiQuestion {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    question: String,
    correct_answer: String,
    #[serde(default)]
    incorrect_answers: Vec<String>,
}

impl ApiResponse {
    fn into_questions<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Vec<Question>, SourceError> {
        if self.response_code != 0 || self.results.is_empty() {
            return Err(SourceError::NoQuestions);
        }

        Ok(self
            .results
            .into_iter()
            .map(|raw| {
                let metadata = QuestionMeta {
                    year: Some(rng.random_range(YEAR_RANGE)),
                    category: raw.category.as_deref().map(decode),
                    difficulty: raw.difficulty,
                };
                Question::new(
                    decode(&raw.question),
                    decode(&raw.correct_answer),
                    raw.incorrect_answers.iter().map(|answer| decode(answer)),
                )
                .with_metadata(metadata)
            })
            .collect())
    }
}
