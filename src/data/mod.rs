//! Question sources: the Open Trivia Database client and an offline JSON file.

mod loader;
mod opentdb;
mod source;

pub use loader::{load_questions_from_json, FileSource};
pub use opentdb::OpenTdbClient;
pub use source::{fetch_questions, QuestionSource, SourceError};
