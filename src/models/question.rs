use serde::{Deserialize, Serialize};

/// A multiple-choice question as delivered by a question source.
///
/// Strings are expected to be plain text already; entity decoding happens in
/// the source that produced the question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub correct_answer: String,
    #[serde(default)]
    pub distractor_answers: Vec<String>,
    #[serde(default)]
    pub metadata: QuestionMeta,
}

/// Decorative data carried alongside a question. Never used for scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl Question {
    pub fn new(
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        distractor_answers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            correct_answer: correct_answer.into(),
            distractor_answers: distractor_answers.into_iter().map(Into::into).collect(),
            metadata: QuestionMeta::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: QuestionMeta) -> Self {
        self.metadata = metadata;
        self
    }

    /// All answer choices, correct answer last, duplicates removed.
    pub fn choices(&self) -> Vec<String> {
        let mut choices: Vec<String> = Vec::with_capacity(self.distractor_answers.len() + 1);
        for answer in self
            .distractor_answers
            .iter()
            .chain(std::iter::once(&self.correct_answer))
        {
            if !choices.contains(answer) {
                choices.push(answer.clone());
            }
        }
        choices
    }

    /// Prompt prefixed with its number and year, e.g. `Q2: (2011) ...`.
    pub fn heading(&self, number: usize) -> String {
        match self.metadata.year {
            Some(year) => format!("Q{}: ({}) {}", number, year, self.prompt),
            None => format!("Q{}: {}", number, self.prompt),
        }
    }
}
