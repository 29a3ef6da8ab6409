use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::models::Subject;

pub const DEFAULT_SECONDS_PER_QUESTION: u32 = 60;
pub const DEFAULT_QUESTION_COUNT: usize = 5;
pub const DEFAULT_API_URL: &str = "https://opentdb.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub seconds_per_question: u32,
    pub default_question_count: usize,
    /// Subject pre-selected on the setup screen.
    pub default_subject: Option<Subject>,
    pub api_url: String,
    pub request_timeout: Duration,
    pub log_file: PathBuf,
    /// Offline question file; the trivia API is used when unset.
    pub questions_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            seconds_per_question: env::var("MOCK_TEST_SECONDS_PER_QUESTION")
                .ok()
                .and_then(|s| s.parse::<u32>().ok())
                .filter(|&s| s > 0)
                .unwrap_or(DEFAULT_SECONDS_PER_QUESTION),
            default_question_count: env::var("MOCK_TEST_DEFAULT_COUNT")
                .ok()
                .and_then(|c| c.parse::<usize>().ok())
                .filter(|&c| c > 0)
                .unwrap_or(DEFAULT_QUESTION_COUNT),
            default_subject: env::var("MOCK_TEST_SUBJECT")
                .ok()
                .and_then(|s| s.parse::<Subject>().ok()),
            api_url: env::var("MOCK_TEST_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            request_timeout: Duration::from_secs(
                env::var("MOCK_TEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse::<u64>().ok())
                    .unwrap_or(10),
            ),
            log_file: env::var_os("MOCK_TEST_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| env::temp_dir().join("mock-test.log")),
            questions_file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seconds_per_question: DEFAULT_SECONDS_PER_QUESTION,
            default_question_count: DEFAULT_QUESTION_COUNT,
            default_subject: None,
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            log_file: env::temp_dir().join("mock-test.log"),
            questions_file: None,
        }
    }
}
