use mock_test::models::Question;
use mock_test::session::{
    Direction, QuizController, SessionStatus, Suggestion, TickOutcome,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn controller(seed: u64) -> QuizController {
    QuizController::with_rng(StdRng::seed_from_u64(seed))
}

fn numbered_questions(count: usize) -> Vec<Question> {
    (1..=count)
        .map(|n| {
            Question::new(
                format!("Question {}", n),
                format!("answer {}", n),
                [format!("decoy {}a", n), format!("decoy {}b", n), format!("decoy {}c", n)],
            )
        })
        .collect()
}

#[test]
fn single_correct_answer_scores_one() {
    let mut controller = controller(1);
    controller
        .start(vec![Question::new("Capital of France?", "Paris", ["Rome", "Madrid", "Berlin"])], 60)
        .unwrap();
    controller.select_option("Paris");

    let result = controller.submit().unwrap();
    assert_eq!(result.score, 1);
    assert_eq!(result.total, 1);
    assert_eq!(result.suggestion, Suggestion::NeedsPractice);
    assert_eq!(result.suggestion.message(), "You need more practice.");
}

#[test]
fn skipped_question_is_reported_unanswered() {
    let mut controller = controller(2);
    controller.start(numbered_questions(3), 60).unwrap();

    controller.select_option("answer 1");
    assert!(controller.advance(Direction::Next));
    assert!(controller.advance(Direction::Next));
    assert!(controller.is_last_question());

    let result = controller.submit().unwrap();
    assert_eq!(result.score, 1);
    assert_eq!(result.per_question[1].selected_answer, None);
    assert!(!result.per_question[1].is_correct);
    assert!(result.per_question[0].is_correct);
}

#[test]
fn timeout_submits_with_partial_answers() {
    let mut controller = controller(3);
    let handle = controller.start(numbered_questions(5), 1).unwrap();

    controller.select_option("answer 1");
    controller.advance(Direction::Next);
    controller.select_option("decoy 2a");

    let mut expirations = 0;
    let mut last_remaining = controller.time_remaining().unwrap();
    for _ in 0..10 {
        match controller.tick(handle) {
            TickOutcome::Ticked(remaining) => {
                assert_eq!(remaining, last_remaining - 1);
                last_remaining = remaining;
            }
            TickOutcome::Expired => expirations += 1,
            TickOutcome::Stale => {}
        }
    }
    assert_eq!(expirations, 1);
    assert_eq!(controller.status(), SessionStatus::Finished);
    assert_eq!(controller.time_remaining(), Some(0));

    let result = controller.submit().unwrap();
    assert_eq!(result.total, 5);
    assert_eq!(result.score, 1);
    assert_eq!(result.answered(), 2);
    assert!(result.per_question[2..]
        .iter()
        .all(|outcome| outcome.selected_answer.is_none() && !outcome.is_correct));
}

#[test]
fn reset_starts_over_from_a_clean_session() {
    let mut controller = controller(4);
    controller.start(numbered_questions(3), 60).unwrap();
    controller.select_option("answer 1");
    controller.advance(Direction::Next);
    controller.submit().unwrap();
    controller.reset();

    controller.start(numbered_questions(2), 30).unwrap();
    let session = controller.session().unwrap();
    assert_eq!(session.current_index(), 0);
    assert!(session.selected_answers().is_empty());
    assert_eq!(session.score(), 0);
    assert_eq!(session.total(), 2);
    assert_eq!(session.time_remaining(), 60);
    assert!(controller.result().is_none());
}

#[test]
fn repeated_submit_is_byte_identical() {
    let mut controller = controller(5);
    controller.start(numbered_questions(4), 60).unwrap();
    controller.select_option("answer 1");
    controller.advance(Direction::Next);
    controller.select_option("decoy 2b");

    let first = serde_json::to_vec(controller.submit().unwrap()).unwrap();
    let second = serde_json::to_vec(controller.submit().unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn navigation_stops_at_both_ends() {
    let mut controller = controller(6);
    controller.start(numbered_questions(3), 60).unwrap();

    assert!(!controller.advance(Direction::Previous));
    assert_eq!(controller.session().unwrap().current_index(), 0);

    controller.advance(Direction::Next);
    controller.advance(Direction::Next);
    assert!(!controller.advance(Direction::Next));
    assert_eq!(controller.session().unwrap().current_index(), 2);
}

#[test]
fn revisiting_keeps_shuffle_and_answer() {
    let mut controller = controller(7);
    controller.start(numbered_questions(2), 60).unwrap();
    let first_options = controller.current_options().unwrap().to_vec();
    controller.select_option("decoy 1c");

    controller.advance(Direction::Next);
    controller.advance(Direction::Previous);

    assert_eq!(controller.current_options().unwrap(), first_options.as_slice());
    assert_eq!(controller.pending_selection(), Some("decoy 1c"));

    let mut sorted = first_options.clone();
    sorted.sort();
    assert_eq!(sorted, vec!["answer 1", "decoy 1a", "decoy 1b", "decoy 1c"]);
}

#[test]
fn score_matches_reference_count_for_random_walks() {
    let mut rng = StdRng::seed_from_u64(99);

    for seed in 0..50 {
        let count = rng.random_range(1..=12);
        let questions = numbered_questions(count);
        let mut controller = controller(seed);
        controller.start(questions.clone(), 60).unwrap();

        for _ in 0..rng.random_range(0..40) {
            match rng.random_range(0..4) {
                0 => controller.advance(Direction::Next),
                1 => controller.advance(Direction::Previous),
                _ => {
                    let options = controller.current_options().unwrap();
                    let pick = options[rng.random_range(0..options.len())].clone();
                    controller.select_option(pick);
                    true
                }
            };
        }

        if let Some(pending) = controller.pending_selection().map(str::to_string) {
            controller.record_answer(&pending);
        }
        let expected = controller
            .session()
            .unwrap()
            .selected_answers()
            .iter()
            .filter(|(index, answer)| questions[**index].correct_answer == **answer)
            .count();

        let result = controller.submit().unwrap();
        assert!(result.score <= result.total);
        assert_eq!(result.score, expected);
        assert_eq!(result.suggestion, Suggestion::for_score(expected));
    }
}
