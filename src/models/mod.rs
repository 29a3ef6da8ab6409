mod question;
mod subject;

pub use question::{Question, QuestionMeta};
pub use subject::{Subject, SUBJECT_PLACEHOLDER};
