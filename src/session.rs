use crate::{
    error::ConfigError,
    grading::Outcome,
    question::{Category, Difficulty, QuestionRecord},
    question_generator::QuestionGenConfig,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Upper bound on questions per session
pub const MAX_QUESTIONS: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub user_name: String,
    pub categories: BTreeSet<Category>,
    pub difficulty: Difficulty,
    pub number_of_questions: usize,
    pub number_of_secs: u32,
    pub shuffle: bool,
    pub skip_repeats: bool,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user_name.trim().is_empty() {
            return Err(ConfigError::MissingUserName);
        }
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }
        if self.number_of_questions == 0 {
            return Err(ConfigError::ZeroQuestionCount);
        }
        if self.number_of_questions > MAX_QUESTIONS {
            return Err(ConfigError::TooManyQuestions { max: MAX_QUESTIONS });
        }
        if self.number_of_secs == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(())
    }

    pub fn to_question_gen_config(&self) -> QuestionGenConfig {
        QuestionGenConfig {
            categories: self.categories.clone(),
            difficulty: self.difficulty,
            number_of_questions: self.number_of_questions,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            categories: Category::ALL.into_iter().collect(),
            difficulty: Difficulty::Easy,
            number_of_questions: 10,
            number_of_secs: 10,
            shuffle: true,
            skip_repeats: false,
        }
    }
}

/// One graded answer, kept for the review table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: String,
    pub correct_answer: String,
    pub user_answer: String,
    pub is_correct: bool,
}

impl AnswerRecord {
    pub fn new(question: &QuestionRecord, user_answer: String, outcome: Outcome) -> Self {
        Self {
            question: question.prompt.clone(),
            correct_answer: question.answer.to_string(),
            user_answer,
            is_correct: outcome.is_correct(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    InQuestion(usize),
    Finished,
}

/// Per-question countdown; only one is ever armed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    limit: u32,
    remaining: u32,
    armed: bool,
}

impl Countdown {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            remaining: limit,
            armed: false,
        }
    }

    /// Reset to the full limit and start counting
    pub fn arm(&mut self) {
        self.remaining = self.limit;
        self.armed = true;
    }

    pub fn stop(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Count down one second. Returns true exactly once, when an armed
    /// countdown reaches zero; the countdown disarms itself at that point.
    pub fn tick(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.armed = false;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub questions: Vec<QuestionRecord>,
    pub current_index: usize,
    pub countdown: Countdown,
    pub answers: Vec<AnswerRecord>,
    pub correct_count: usize,
    // Text typed for the current question but not yet recorded
    pub staged_input: String,
}

impl SessionState {
    pub fn new(questions: Vec<QuestionRecord>, number_of_secs: u32) -> Self {
        Self {
            questions,
            current_index: 0,
            countdown: Countdown::new(number_of_secs),
            answers: Vec::new(),
            correct_count: 0,
            staged_input: String::new(),
        }
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.current_index)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn is_current_recorded(&self) -> bool {
        self.answers.len() > self.current_index
    }
}
