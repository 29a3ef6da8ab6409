use tokio::task::JoinHandle;

use crate::config::Config;
use crate::data::{fetch_questions, QuestionSource};
use crate::error::QuizError;
use crate::models::{Subject, SUBJECT_PLACEHOLDER};
use crate::session::{
    parse_question_count, spawn_ticker, Direction, QuizController, SessionStatus,
    SharedController, TICK_PERIOD,
};

const MAX_COUNT_DIGITS: usize = 3;

/// Which screen the terminal shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Loading,
    Quiz,
    Result,
}

/// Subject and question count as typed on the setup screen.
#[derive(Debug, Clone)]
pub struct SetupForm {
    /// 0 is the placeholder, `n` is `Subject::ALL[n - 1]`.
    subject_index: usize,
    count_input: String,
    default_count: usize,
    default_subject: Option<Subject>,
    error: Option<String>,
}

impl SetupForm {
    pub fn new(default_count: usize, default_subject: Option<Subject>) -> Self {
        let subject_index = default_subject
            .and_then(|subject| Subject::ALL.iter().position(|&s| s == subject))
            .map_or(0, |i| i + 1);
        Self {
            subject_index,
            count_input: default_count.to_string(),
            default_count,
            default_subject,
            error: None,
        }
    }

    pub fn subject(&self) -> Option<Subject> {
        self.subject_index
            .checked_sub(1)
            .and_then(|i| Subject::ALL.get(i).copied())
    }

    pub fn subject_label(&self) -> &'static str {
        self.subject().map_or(SUBJECT_PLACEHOLDER, Subject::label)
    }

    pub fn count_input(&self) -> &str {
        &self.count_input
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn next_subject(&mut self) {
        self.subject_index = (self.subject_index + 1) % (Subject::ALL.len() + 1);
        self.error = None;
    }

    pub fn previous_subject(&mut self) {
        let slots = Subject::ALL.len() + 1;
        self.subject_index = (self.subject_index + slots - 1) % slots;
        self.error = None;
    }

    pub fn push_digit(&mut self, c: char) {
        if c.is_ascii_digit() && self.count_input.len() < MAX_COUNT_DIGITS {
            self.count_input.push(c);
            self.error = None;
        }
    }

    pub fn pop_digit(&mut self) {
        self.count_input.pop();
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Check the form, returning what to fetch.
    pub fn validate(&self) -> Result<(Subject, usize), QuizError> {
        let subject = self
            .subject()
            .ok_or_else(|| QuizError::invalid_input("Please select a topic."))?;
        let count = parse_question_count(&self.count_input)?;
        Ok((subject, count))
    }

    pub fn clear(&mut self) {
        *self = Self::new(self.default_count, self.default_subject);
    }
}

/// Presentation state around the shared quiz controller.
pub struct App {
    controller: SharedController,
    config: Config,
    pub setup: SetupForm,
    loading: bool,
    option_cursor: usize,
    result_scroll: usize,
    ticker: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_controller(config, QuizController::new())
    }

    pub fn with_controller(config: Config, controller: QuizController) -> Self {
        Self {
            controller: controller.shared(),
            setup: SetupForm::new(config.default_question_count, config.default_subject),
            config,
            loading: false,
            option_cursor: 0,
            result_scroll: 0,
            ticker: None,
        }
    }

    pub fn controller(&self) -> SharedController {
        SharedController::clone(&self.controller)
    }

    pub fn screen(&self, controller: &QuizController) -> Screen {
        match controller.status() {
            SessionStatus::NotStarted if self.loading => Screen::Loading,
            SessionStatus::NotStarted => Screen::Setup,
            SessionStatus::InProgress => Screen::Quiz,
            SessionStatus::Finished => Screen::Result,
        }
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// Show the loading screen until the next `start_test` finishes.
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.setup.error = None;
    }

    /// Fetch questions for `subject` and start a timed session with them.
    ///
    /// Bad input and question-bank failures end up as the setup form's error
    /// message. Anything else is returned and stops the application.
    pub async fn start_test(
        &mut self,
        source: &dyn QuestionSource,
        subject: Subject,
        count: usize,
    ) -> Result<(), QuizError> {
        self.loading = true;
        let outcome = match fetch_questions(source, subject, count).await {
            Ok(questions) => {
                let shared = self.controller();
                let mut controller = shared.lock().await;
                match controller.start(questions, self.config.seconds_per_question) {
                    Ok(handle) => {
                        let ticker = spawn_ticker(SharedController::clone(&shared), handle, TICK_PERIOD);
                        self.ticker = Some(ticker);
                        Ok(())
                    }
                    Err(err) => Err(err),
                }
            }
            Err(err) => Err(err),
        };
        self.loading = false;

        match outcome {
            Ok(()) => {
                self.option_cursor = 0;
                self.result_scroll = 0;
                Ok(())
            }
            Err(err) if err.is_user_facing() => {
                log::warn!("could not start test: {}", err);
                self.setup.set_error(err.to_string());
                Ok(())
            }
            Err(err) => {
                log::error!("could not start test: {}", err);
                Err(err)
            }
        }
    }

    pub fn move_cursor_down(&mut self, controller: &QuizController) {
        let count = controller.current_options().map_or(0, <[String]>::len);
        if count > 0 {
            self.option_cursor = (self.option_cursor + 1) % count;
        }
    }

    pub fn move_cursor_up(&mut self, controller: &QuizController) {
        let count = controller.current_options().map_or(0, <[String]>::len);
        if count > 0 {
            self.option_cursor = (self.option_cursor + count - 1) % count;
        }
    }

    /// Mark the option under the cursor as the chosen answer.
    pub fn choose_option(&self, controller: &mut QuizController) {
        let chosen = controller
            .current_options()
            .and_then(|options| options.get(self.option_cursor))
            .cloned();
        if let Some(value) = chosen {
            controller.select_option(value);
        }
    }

    pub fn navigate(&mut self, controller: &mut QuizController, direction: Direction) {
        if controller.advance(direction) {
            self.option_cursor = cursor_for_selection(controller);
        }
    }

    /// Submit from the last question. Elsewhere the key does nothing.
    pub fn submit(&mut self, controller: &mut QuizController) {
        if !controller.is_last_question() {
            return;
        }
        if let Err(err) = controller.submit() {
            log::error!("submit failed: {}", err);
            return;
        }
        self.stop_ticker();
        self.result_scroll = 0;
    }

    pub fn scroll_results_down(&mut self, controller: &QuizController) {
        let max_scroll = controller
            .result()
            .map_or(0, |result| result.per_question.len().saturating_sub(1));
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Throw the finished session away and go back to a fresh setup form.
    pub fn restart(&mut self, controller: &mut QuizController) {
        self.stop_ticker();
        controller.reset();
        self.setup.clear();
        self.option_cursor = 0;
        self.result_scroll = 0;
    }

    pub fn shutdown(&mut self) {
        self.stop_ticker();
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

fn cursor_for_selection(controller: &QuizController) -> usize {
    let (Some(options), Some(selected)) =
        (controller.current_options(), controller.pending_selection())
    else {
        return 0;
    };
    options
        .iter()
        .position(|option| option == selected)
        .unwrap_or(0)
}
