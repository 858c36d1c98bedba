use crate::{question::Difficulty, session::AnswerRecord, util::percentage};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Percentage a session has to exceed to pass
pub const PASS_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
pub enum Status {
    Passed,
    Failed,
}

impl Status {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > PASS_THRESHOLD {
            Status::Passed
        } else {
            Status::Failed
        }
    }
}

/// Final score handed to the presentation layer once a session finishes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub user_name: String,
    pub difficulty: Difficulty,
    pub total_correct: usize,
    pub total: usize,
    pub percentage: f64,
    pub status: Status,
    pub answers: Vec<AnswerRecord>,
    pub finished_at: DateTime<Local>,
}

impl SessionReport {
    pub fn new(
        user_name: String,
        difficulty: Difficulty,
        total_correct: usize,
        answers: Vec<AnswerRecord>,
    ) -> Self {
        let total = answers.len();
        let percentage = percentage(total_correct, total).unwrap_or(0.0);

        Self {
            user_name,
            difficulty,
            total_correct,
            total,
            percentage,
            status: Status::from_percentage(percentage),
            answers,
            finished_at: Local::now(),
        }
    }

    /// One-line score summary, e.g. "Score: 2/3 (66.67%)"
    pub fn score_line(&self) -> String {
        format!(
            "Score: {}/{} ({:.2}%)",
            self.total_correct, self.total, self.percentage
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
