use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::Mutex;

use super::result::QuizResult;
use super::session::{Direction, Session, SessionStatus};
use super::timer::{Countdown, TimerEvent, TimerHandle};
use crate::error::QuizError;
use crate::models::Question;

/// Controller shared between the UI loop and the ticker task. Holding the lock
/// makes every controller operation run to completion on its own.
pub type SharedController = Arc<Mutex<QuizController>>;

/// What a timer tick did to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Ticked(u32),
    /// Time ran out and the session was submitted.
    Expired,
    /// The handle belongs to a disarmed or replaced countdown.
    Stale,
}

pub struct QuizController {
    session: Option<Session>,
    result: Option<QuizResult>,
    countdown: Countdown,
    rng: StdRng,
}

impl QuizController {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Controller with a caller-supplied shuffle source.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            session: None,
            result: None,
            countdown: Countdown::new(),
            rng,
        }
    }

    pub fn shared(self) -> SharedController {
        Arc::new(Mutex::new(self))
    }

    pub fn status(&self) -> SessionStatus {
        self.session
            .as_ref()
            .map_or(SessionStatus::NotStarted, Session::status)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Begin a new session and arm its countdown.
    ///
    /// Nothing changes when the input is rejected.
    pub fn start(
        &mut self,
        questions: Vec<Question>,
        per_question_seconds: u32,
    ) -> Result<TimerHandle, QuizError> {
        if self.session.is_some() {
            return Err(QuizError::InvalidState(
                "a session already exists and must be reset first",
            ));
        }

        let session = Session::new(questions, per_question_seconds, &mut self.rng)?;
        let handle = self.countdown.arm(session.time_remaining());
        log::info!(
            "session {} started: {} questions, {}s on the clock",
            session.id(),
            session.total(),
            session.time_remaining()
        );

        self.session = Some(session);
        Ok(handle)
    }

    /// Buffer the choice shown as selected for the visible question.
    pub fn select_option(&mut self, value: impl Into<String>) {
        if let Some(session) = self.session.as_mut() {
            session.select(value.into());
        }
    }

    pub fn record_answer(&mut self, selected: &str) {
        if let Some(session) = self.session.as_mut() {
            session.record_answer(selected);
        }
    }

    /// Commit the buffered selection, then move one question in `direction`.
    /// Returns `false` when already at that end of the test.
    pub fn advance(&mut self, direction: Direction) -> bool {
        match self.session.as_mut() {
            Some(session) => session.advance(direction, &mut self.rng),
            None => false,
        }
    }

    /// Finish the session and return its result. Repeated calls return the
    /// stored result untouched.
    pub fn submit(&mut self) -> Result<&QuizResult, QuizError> {
        let session = self
            .session
            .as_mut()
            .ok_or(QuizError::InvalidState("no session to submit"))?;

        if self.result.is_none() {
            self.countdown.disarm();
            let result = session.finish();
            log::info!(
                "session {} submitted: {}/{} ({} answered, {}s left)",
                session.id(),
                result.score,
                result.total,
                result.answered(),
                session.time_remaining()
            );
            self.result = Some(result);
        }

        self.result
            .as_ref()
            .ok_or(QuizError::InvalidState("finished session has no result"))
    }

    /// Apply one countdown tick, submitting the session when time runs out.
    pub fn tick(&mut self, handle: TimerHandle) -> TickOutcome {
        let events = self.countdown.tick(handle);
        if events.is_empty() {
            return TickOutcome::Stale;
        }
        let Some(session) = self.session.as_mut() else {
            return TickOutcome::Stale;
        };

        let mut outcome = TickOutcome::Stale;
        for event in events {
            match event {
                TimerEvent::Tick { remaining } => {
                    session.set_time_remaining(remaining);
                    outcome = TickOutcome::Ticked(remaining);
                }
                TimerEvent::Expired => {
                    log::info!("session {} ran out of time", session.id());
                    if let Err(err) = self.submit() {
                        log::error!("timed submit failed: {}", err);
                    }
                    return TickOutcome::Expired;
                }
            }
        }
        outcome
    }

    /// Drop the session and its result.
    pub fn reset(&mut self) {
        self.countdown.disarm();
        self.result = None;
        if let Some(session) = self.session.take() {
            log::info!("session {} discarded", session.id());
        }
    }

    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.as_ref().map(Session::current_question)
    }

    pub fn current_options(&self) -> Option<&[String]> {
        self.session.as_ref().map(Session::current_options)
    }

    pub fn pending_selection(&self) -> Option<&str> {
        self.session.as_ref().and_then(Session::pending)
    }

    pub fn time_remaining(&self) -> Option<u32> {
        self.session.as_ref().map(Session::time_remaining)
    }

    pub fn can_go_previous(&self) -> bool {
        self.session.as_ref().is_some_and(Session::can_go_previous)
    }

    pub fn can_go_next(&self) -> bool {
        self.session.as_ref().is_some_and(Session::can_go_next)
    }

    pub fn is_last_question(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_last_question)
    }
}

impl Default for QuizController {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate the question count typed on the setup screen.
pub fn parse_question_count(input: &str) -> Result<usize, QuizError> {
    let input = input.trim();
    let invalid = || QuizError::invalid_input("Please enter a valid number of questions.");

    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match input.parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(invalid()),
    }
}
