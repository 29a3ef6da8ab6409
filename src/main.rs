use std::path::PathBuf;

use clap::Parser;
use mock_test::{logging, Config, MockTest, Subject};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to take questions from instead of the trivia API
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Seconds allowed per question
    #[arg(short = 't', long, value_parser = clap::value_parser!(u32).range(1..))]
    seconds_per_question: Option<u32>,

    /// Question count pre-filled on the setup screen
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    count: Option<u16>,

    /// Subject pre-selected on the setup screen
    #[arg(long, value_enum)]
    subject: Option<Subject>,

    /// Base URL of the trivia API
    #[arg(long)]
    api_url: Option<String>,

    /// File that receives the log output
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Config {
        let mut config = Config::from_env();
        if let Some(seconds) = self.seconds_per_question {
            config.seconds_per_question = seconds;
        }
        if let Some(count) = self.count {
            config.default_question_count = usize::from(count);
        }
        if let Some(subject) = self.subject {
            config.default_subject = Some(subject);
        }
        if let Some(api_url) = self.api_url {
            config.api_url = api_url;
        }
        if let Some(log_file) = self.log_file {
            config.log_file = log_file;
        }
        config.questions_file = self.questions;
        config
    }
}

#[tokio::main]
async fn main() {
    let config = Args::parse().into_config();

    if let Err(e) = logging::init(&config.log_file) {
        eprintln!("Logging disabled, cannot open {}: {}", config.log_file.display(), e);
    }

    let test = match MockTest::from_config(config) {
        Ok(test) => test,
        Err(e) => {
            eprintln!("Failed to set up mock test: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = test.run().await {
        eprintln!("Error running mock test: {}", e);
        std::process::exit(1);
    }
}
