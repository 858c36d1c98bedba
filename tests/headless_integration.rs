use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mathdash::{
    app::{App, AppState, Flow},
    runtime::{FixedTicker, QuizEvent, Runner, TestEventSource},
    Category, Difficulty, SessionConfig,
};

fn config(number_of_questions: usize, number_of_secs: u32) -> SessionConfig {
    SessionConfig {
        user_name: "headless".to_string(),
        categories: [Category::Addition, Category::AscendingSort].into_iter().collect(),
        difficulty: Difficulty::Easy,
        number_of_questions,
        number_of_secs,
        shuffle: true,
        skip_repeats: false,
    }
}

fn key(c: char) -> QuizEvent {
    QuizEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

// Headless integration using the internal runtime + App without a TTY
// Verifies that a typed session completes via Runner/TestEventSource.
#[test]
fn headless_answer_flow_completes() {
    let mut app = App::new(config(3, 30)).unwrap();

    // Channel for the test event source
    let (tx, rx) = mpsc::channel();

    // Producer: type every correct answer followed by Enter
    for question in app.quiz.questions() {
        for c in question.answer.to_string().chars() {
            tx.send(key(c)).unwrap();
        }
        tx.send(QuizEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)))
            .unwrap();
    }

    // Tick interval far longer than the test so only keys drive the session
    let mut runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_secs(60)),
    );

    for _ in 0..200u32 {
        match runner.step() {
            QuizEvent::Tick => app.on_tick(),
            QuizEvent::Resize => {}
            QuizEvent::Key(key) => {
                assert_eq!(app.on_key(key).unwrap(), Flow::Continue);
            }
        }
        if app.state == AppState::Results {
            break;
        }
    }

    assert_eq!(app.state, AppState::Results);
    let report = app.quiz.report().unwrap();
    assert_eq!(report.total, 3);
    assert_eq!(report.total_correct, 3);
    assert_eq!(report.percentage, 100.0);
    assert_eq!(report.status.to_string(), "Passed");
}

#[test]
fn headless_timed_session_finishes_by_ticks() {
    let mut app = App::new(config(2, 1)).unwrap();

    let (_tx, rx) = mpsc::channel();
    let mut runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    for _ in 0..50u32 {
        if let QuizEvent::Tick = runner.step() {
            app.on_tick();
        }
        if app.state == AppState::Results {
            break;
        }
    }

    assert_eq!(app.state, AppState::Results, "timed session should finish by timeout");
    let report = app.quiz.report().unwrap();
    assert_eq!(report.total_correct, 0);
    assert!(report
        .answers
        .iter()
        .all(|a| a.user_answer == "Unanswered" && !a.is_correct));
}
