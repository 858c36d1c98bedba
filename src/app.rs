use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{error::QuizError, quiz::Quiz, session::SessionConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Question,
    Results,
}

/// What the event loop should do after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub session_config: SessionConfig,
    pub quiz: Quiz,
    pub state: AppState,
    pub review_offset: usize,
}

impl App {
    pub fn new(session_config: SessionConfig) -> Result<Self, QuizError> {
        let quiz = Quiz::start(session_config.clone())?;
        Ok(Self::with_quiz(session_config, quiz))
    }

    pub fn with_quiz(session_config: SessionConfig, quiz: Quiz) -> Self {
        let state = if quiz.is_finished() {
            AppState::Results
        } else {
            AppState::Question
        };
        Self {
            session_config,
            quiz,
            state,
            review_offset: 0,
        }
    }

    /// Start a fresh session with the same settings
    pub fn reset(&mut self) -> Result<(), QuizError> {
        self.quiz = Quiz::start(self.session_config.clone())?;
        self.state = AppState::Question;
        self.review_offset = 0;
        Ok(())
    }

    pub fn on_tick(&mut self) {
        self.quiz.tick();
        self.sync_state();
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Result<Flow, QuizError> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Flow::Quit);
        }

        match self.state {
            AppState::Question => match key.code {
                KeyCode::Esc => return Ok(Flow::Quit),
                KeyCode::Enter => self.quiz.submit_staged(),
                KeyCode::Backspace => self.quiz.backspace(),
                KeyCode::Char(c) if is_answer_char(c) => self.quiz.input_char(c),
                _ => {}
            },
            AppState::Results => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => return Ok(Flow::Quit),
                KeyCode::Char('n') => self.reset()?,
                KeyCode::Up => self.review_offset = self.review_offset.saturating_sub(1),
                KeyCode::Down => {
                    // clamped again when rendering
                    let last = self.quiz.answers().len().saturating_sub(1);
                    self.review_offset = (self.review_offset + 1).min(last);
                }
                KeyCode::Home => self.review_offset = 0,
                _ => {}
            },
        }

        self.sync_state();
        Ok(Flow::Continue)
    }

    fn sync_state(&mut self) {
        if self.quiz.is_finished() && self.state == AppState::Question {
            self.state = AppState::Results;
        }
    }
}

fn is_answer_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '.' | ',' | ' ')
}
