use ratatui::Frame;

use crate::app::{App, AppState};

/// A UI Screen boundary: responsible for rendering one app state
pub trait Screen {
    fn render(&self, app: &App, f: &mut Frame);
}

/// Question screen - prompt, countdown and the answer being typed
pub struct QuestionScreen;

impl Screen for QuestionScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        f.render_widget(app, f.area());
    }
}

/// Results screen - score, pass/fail and the review table
pub struct ResultsScreen;

impl Screen for ResultsScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        f.render_widget(app, f.area());
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: &AppState) -> Box<dyn Screen> {
    match state {
        AppState::Question => Box::new(QuestionScreen),
        AppState::Results => Box::new(ResultsScreen),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{quiz::Quiz, session::SessionConfig};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn draws_current_screen_into_terminal() {
        let config = SessionConfig {
            user_name: "ada".into(),
            number_of_questions: 1,
            ..SessionConfig::default()
        };
        let mut app = App::with_quiz(config.clone(), Quiz::start(config).unwrap());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal
            .draw(|f| current_screen(&app.state).render(&app, f))
            .unwrap();
        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(rendered.contains("Question 1/1"));

        app.quiz.submit("");
        app.state = AppState::Results;
        terminal
            .draw(|f| current_screen(&app.state).render(&app, f))
            .unwrap();
        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(rendered.contains("Score: 0/1 (0.00%)"));
    }
}
