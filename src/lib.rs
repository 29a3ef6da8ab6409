//! # mock-test
//!
//! A terminal mock-test application: multiple-choice trivia questions from
//! the Open Trivia Database (or a local JSON file), answered against a
//! countdown and scored at the end.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mock_test::{Config, MockTest, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let test = MockTest::from_config(Config::from_env())?;
//!     test.run().await
//! }
//! ```
//!
//! The session state machine in [`session`] has no terminal dependencies and
//! can be driven directly:
//!
//! ```rust
//! use mock_test::models::Question;
//! use mock_test::session::{Direction, QuizController};
//!
//! let mut controller = QuizController::new();
//! controller
//!     .start(vec![Question::new("Capital of France?", "Paris", ["Lyon", "Nice"])], 60)
//!     .unwrap();
//! controller.select_option("Paris");
//! assert!(!controller.advance(Direction::Next));
//!
//! let result = controller.submit().unwrap();
//! assert_eq!(result.score, 1);
//! assert_eq!(result.suggestion.message(), "You need more practice.");
//! ```

mod app;
pub mod config;
pub mod data;
mod error;
pub mod logging;
pub mod models;
pub mod session;
pub mod terminal;
mod ui;

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Screen, SetupForm};
pub use config::Config;
pub use data::{FileSource, OpenTdbClient, QuestionSource, SourceError};
pub use error::QuizError;
pub use models::{Question, Subject};
pub use session::{QuizController, QuizResult};
pub use ui::format_time;

use session::Direction;
use terminal::{AppTerminal, TerminalGuard};

const INPUT_POLL: Duration = Duration::from_millis(50);

/// A mock test that can be run in the terminal.
pub struct MockTest {
    app: App,
    source: Box<dyn QuestionSource>,
}

impl MockTest {
    pub fn new(config: Config, source: Box<dyn QuestionSource>) -> Self {
        Self {
            app: App::new(config),
            source,
        }
    }

    /// Pick the question source named by `config`: the offline file when one
    /// is set, the trivia API otherwise.
    pub fn from_config(config: Config) -> Result<Self, QuizError> {
        let source: Box<dyn QuestionSource> = match &config.questions_file {
            Some(path) => {
                log::info!("using offline questions from {}", path.display());
                Box::new(FileSource::new(path))
            }
            None => {
                log::info!("using trivia API at {}", config.api_url);
                Box::new(OpenTdbClient::new(&config.api_url, config.request_timeout)?)
            }
        };
        Ok(Self::new(config, source))
    }

    /// Run the mock test in the terminal.
    ///
    /// This takes over the terminal and returns when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut guard = TerminalGuard::enter()?;
        let result = run_event_loop(guard.terminal(), &mut self.app, self.source.as_ref()).await;
        self.app.shutdown();
        result
    }
}

enum Action {
    Continue,
    Quit,
    Start(Subject, usize),
}

async fn run_event_loop(
    terminal: &mut AppTerminal,
    app: &mut App,
    source: &dyn QuestionSource,
) -> Result<(), QuizError> {
    let shared = app.controller();

    loop {
        {
            let controller = shared.lock().await;
            terminal.draw(|frame| ui::render(frame, app, &controller))?;
        }

        // Redraw at least every poll interval so the timer stays current.
        if !event::poll(INPUT_POLL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let action = {
            let mut controller = shared.lock().await;
            handle_input(app, &mut controller, key.code)
        };

        match action {
            Action::Continue => {}
            Action::Quit => break,
            Action::Start(subject, count) => {
                app.begin_loading();
                {
                    let controller = shared.lock().await;
                    terminal.draw(|frame| ui::render(frame, app, &controller))?;
                }
                app.start_test(source, subject, count).await?;
            }
        }
    }

    Ok(())
}

fn handle_input(app: &mut App, controller: &mut QuizController, key: KeyCode) -> Action {
    match app.screen(controller) {
        Screen::Setup => handle_setup_input(app, key),
        Screen::Loading => Action::Continue,
        Screen::Quiz => handle_quiz_input(app, controller, key),
        Screen::Result => handle_result_input(app, controller, key),
    }
}

fn handle_setup_input(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.setup.previous_subject(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.setup.next_subject(),
        KeyCode::Char(c) if c.is_ascii_digit() => app.setup.push_digit(c),
        KeyCode::Backspace => app.setup.pop_digit(),
        KeyCode::Enter => match app.setup.validate() {
            Ok((subject, count)) => return Action::Start(subject, count),
            Err(err) => app.setup.set_error(err.to_string()),
        },
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return Action::Quit,
        _ => {}
    }
    Action::Continue
}

fn handle_quiz_input(app: &mut App, controller: &mut QuizController, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(controller),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(controller),
        KeyCode::Enter | KeyCode::Char(' ') => app.choose_option(controller),
        KeyCode::Right | KeyCode::Char('n') => app.navigate(controller, Direction::Next),
        KeyCode::Left | KeyCode::Char('p') => app.navigate(controller, Direction::Previous),
        KeyCode::Char('s') | KeyCode::Char('S') => app.submit(controller),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Action::Quit,
        _ => {}
    }
    Action::Continue
}

fn handle_result_input(app: &mut App, controller: &mut QuizController, key: KeyCode) -> Action {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(controller),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(controller),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Action::Quit,
        _ => {}
    }
    Action::Continue
}
