//! The quiz session state machine.
//!
//! [`QuizController`] owns at most one [`Session`] at a time together with
//! the [`Countdown`] that bounds it. The presentation layer feeds events in
//! (`start`, `select_option`, `advance`, `submit`, `reset`) and reads the
//! session and the final [`QuizResult`] back out.

mod controller;
mod result;
#[allow(clippy::module_inception)]
mod session;
pub mod timer;

pub use controller::{parse_question_count, QuizController, SharedController, TickOutcome};
pub use result::{QuestionOutcome, QuizResult, Suggestion};
pub use session::{Direction, Session, SessionStatus};
pub use timer::{spawn_ticker, Countdown, TimerEvent, TimerHandle, TICK_PERIOD};
