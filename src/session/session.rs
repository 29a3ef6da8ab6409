use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Uuid;

use super::result::QuizResult;
use crate::error::QuizError;
use crate::models::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    NotStarted,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// One attempt at a quiz, from start until the controller is reset.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    questions: Vec<Question>,
    /// Shuffled choices per question, fixed the first time it is shown.
    display_options: Vec<Option<Vec<String>>>,
    current_index: usize,
    selected_answers: BTreeMap<usize, String>,
    /// Selection buffered for the visible question, committed on navigation
    /// and on submit.
    pending: Option<String>,
    score: usize,
    time_remaining: u32,
    status: SessionStatus,
}

impl Session {
    pub(crate) fn new<R: Rng + ?Sized>(
        questions: Vec<Question>,
        per_question_seconds: u32,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::invalid_input(
                "No questions available for the selected topic.",
            ));
        }
        if per_question_seconds == 0 {
            return Err(QuizError::invalid_input(
                "Time per question must be at least one second.",
            ));
        }
        let time_remaining = u32::try_from(questions.len())
            .ok()
            .and_then(|count| count.checked_mul(per_question_seconds))
            .ok_or_else(|| QuizError::invalid_input("Test duration is too long."))?;

        let mut session = Self {
            id: Uuid::new_v4(),
            display_options: vec![None; questions.len()],
            questions,
            current_index: 0,
            selected_answers: BTreeMap::new(),
            pending: None,
            score: 0,
            time_remaining,
            status: SessionStatus::InProgress,
        };
        session.reveal(0, rng);
        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    /// Choices of a question in display order, once it has been shown.
    pub fn display_options(&self, index: usize) -> Option<&[String]> {
        self.display_options.get(index)?.as_deref()
    }

    pub fn current_options(&self) -> &[String] {
        self.display_options(self.current_index).unwrap_or_default()
    }

    pub fn selected_answer(&self, index: usize) -> Option<&str> {
        self.selected_answers.get(&index).map(String::as_str)
    }

    pub fn selected_answers(&self) -> &BTreeMap<usize, String> {
        &self.selected_answers
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Zero until the session is finished.
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn can_go_previous(&self) -> bool {
        self.status == SessionStatus::InProgress && self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.status == SessionStatus::InProgress && !self.is_last_question()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// Number of questions whose recorded answer equals the correct answer.
    pub fn compute_score(&self) -> usize {
        self.selected_answers
            .iter()
            .filter(|(index, answer)| {
                self.questions
                    .get(**index)
                    .is_some_and(|question| question.correct_answer == **answer)
            })
            .count()
    }

    pub(crate) fn select(&mut self, value: String) {
        if self.status == SessionStatus::InProgress {
            self.pending = Some(value);
        }
    }

    /// Record `selected` for the visible question. An empty string marks it
    /// unanswered again.
    pub(crate) fn record_answer(&mut self, selected: &str) {
        if self.status != SessionStatus::InProgress {
            return;
        }
        if selected.is_empty() {
            self.selected_answers.remove(&self.current_index);
        } else {
            self.selected_answers
                .insert(self.current_index, selected.to_string());
        }
    }

    pub(crate) fn advance<R: Rng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> bool {
        if self.status != SessionStatus::InProgress {
            return false;
        }
        self.commit_pending();

        let target = match direction {
            Direction::Next if self.can_go_next() => self.current_index + 1,
            Direction::Previous if self.can_go_previous() => self.current_index - 1,
            _ => return false,
        };

        self.current_index = target;
        self.reveal(target, rng);
        self.pending = self.selected_answers.get(&target).cloned();
        true
    }

    pub(crate) fn set_time_remaining(&mut self, seconds: u32) {
        if self.status == SessionStatus::InProgress {
            self.time_remaining = seconds;
        }
    }

    /// Commit the buffered selection, freeze the session and score it.
    pub(crate) fn finish(&mut self) -> QuizResult {
        self.commit_pending();
        self.pending = None;
        self.status = SessionStatus::Finished;
        self.score = self.compute_score();
        QuizResult::from_session(self)
    }

    fn commit_pending(&mut self) {
        if let Some(value) = self.pending.clone() {
            self.record_answer(&value);
        }
    }

    fn reveal<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) {
        if let Some(slot) = self.display_options.get_mut(index) {
            if slot.is_none() {
                let mut options = self.questions[index].choices();
                options.shuffle(rng);
                *slot = Some(options);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn questions(count: usize) -> Vec<Question> {
        (0..count)
            .map(|i| {
                Question::new(
                    format!("Question {}", i + 1),
                    format!("right {}", i + 1),
                    [format!("wrong {}a", i + 1), format!("wrong {}b", i + 1)],
                )
            })
            .collect()
    }

    fn session(count: usize) -> (Session, StdRng) {
        let mut rng = StdRng::seed_from_u64(42);
        let session = Session::new(questions(count), 60, &mut rng).unwrap();
        (session, rng)
    }

    #[test]
    fn new_session_starts_at_first_question() {
        let (session, _) = session(3);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.time_remaining(), 180);
        assert_eq!(session.score(), 0);
        assert!(session.selected_answers().is_empty());
        assert_eq!(session.current_options().len(), 3);
        assert!(session.display_options(1).is_none());
    }

    #[test]
    fn rejects_empty_question_list_and_zero_time() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            Session::new(Vec::new(), 60, &mut rng),
            Err(QuizError::InvalidInput(_))
        ));
        assert!(matches!(
            Session::new(questions(2), 0, &mut rng),
            Err(QuizError::InvalidInput(_))
        ));
    }

    #[test]
    fn record_answer_keeps_latest_value() {
        let (mut session, _) = session(2);
        session.record_answer("wrong 1a");
        session.record_answer("right 1");
        assert_eq!(session.selected_answer(0), Some("right 1"));

        session.record_answer("");
        assert_eq!(session.selected_answer(0), None);
    }

    #[test]
    fn options_stay_fixed_on_revisit() {
        let (mut session, mut rng) = session(3);
        let first = session.current_options().to_vec();

        assert!(session.advance(Direction::Next, &mut rng));
        let second = session.current_options().to_vec();
        assert!(session.advance(Direction::Previous, &mut rng));
        assert_eq!(session.current_options(), first.as_slice());
        assert!(session.advance(Direction::Next, &mut rng));
        assert_eq!(session.current_options(), second.as_slice());
    }

    #[test]
    fn advance_commits_pending_and_restores_it_on_return() {
        let (mut session, mut rng) = session(2);
        session.select("wrong 1b".into());
        session.advance(Direction::Next, &mut rng);

        assert_eq!(session.selected_answer(0), Some("wrong 1b"));
        assert_eq!(session.pending(), None);

        session.advance(Direction::Previous, &mut rng);
        assert_eq!(session.pending(), Some("wrong 1b"));
    }

    #[test]
    fn navigation_is_bounded() {
        let (mut session, mut rng) = session(2);
        assert!(!session.advance(Direction::Previous, &mut rng));
        assert_eq!(session.current_index(), 0);

        assert!(session.advance(Direction::Next, &mut rng));
        assert!(session.is_last_question());
        assert!(!session.advance(Direction::Next, &mut rng));
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn score_uses_exact_case_sensitive_match() {
        let (mut session, mut rng) = session(3);
        session.record_answer("right 1");
        session.advance(Direction::Next, &mut rng);
        session.record_answer("RIGHT 2");
        session.advance(Direction::Next, &mut rng);
        session.record_answer("right 3 ");

        assert_eq!(session.compute_score(), 1);
    }

    #[test]
    fn finished_session_ignores_further_input() {
        let (mut session, mut rng) = session(2);
        session.select("right 1".into());
        let result = session.finish();
        assert_eq!(result.score, 1);

        session.record_answer("wrong 1a");
        session.select("wrong 1a".into());
        assert!(!session.advance(Direction::Next, &mut rng));
        session.set_time_remaining(3);

        assert_eq!(session.selected_answer(0), Some("right 1"));
        assert_eq!(session.time_remaining(), 120);
        assert_eq!(session.status(), SessionStatus::Finished);
    }
}
