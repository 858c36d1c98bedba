use crate::{
    error::{ConfigError, QuizError},
    grading::{captured_text, grade},
    question::QuestionRecord,
    question_generator::QuestionGenerator,
    report::SessionReport,
    session::{AnswerRecord, SessionConfig, SessionPhase, SessionState},
};
use rand::{seq::SliceRandom, Rng};
use std::collections::HashSet;
use tracing::{debug, info};

/// A running quiz session: owns the question sequence, the countdown and the
/// answer history, and only changes through `tick`, `submit` and `advance`.
#[derive(Debug)]
pub struct Quiz {
    config: SessionConfig,
    state: SessionState,
    phase: SessionPhase,
    report: Option<SessionReport>,
}

impl Quiz {
    /// Validate `config`, generate its questions and show the first one
    pub fn start(config: SessionConfig) -> Result<Self, QuizError> {
        Self::start_with_rng(config, &mut rand::thread_rng())
    }

    pub fn start_with_rng<R: Rng + ?Sized>(
        config: SessionConfig,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        config.validate()?;

        let mut questions =
            QuestionGenerator::new(config.to_question_gen_config()).generate_with(rng);
        if config.shuffle {
            questions.shuffle(rng);
        }

        Self::from_questions(config, questions)
    }

    /// Start a session over an already built question sequence
    pub fn from_questions(
        config: SessionConfig,
        questions: Vec<QuestionRecord>,
    ) -> Result<Self, QuizError> {
        config.validate()?;

        let questions = if config.skip_repeats {
            drop_repeats(questions)
        } else {
            questions
        };
        if questions.is_empty() {
            return Err(ConfigError::ZeroQuestionCount.into());
        }

        info!(
            user = %config.user_name,
            difficulty = %config.difficulty,
            categories = ?config.categories,
            questions = questions.len(),
            "session started"
        );

        let mut state = SessionState::new(questions, config.number_of_secs);
        state.countdown.arm();

        let quiz = Self {
            config,
            state,
            phase: SessionPhase::InQuestion(0),
            report: None,
        };
        quiz.log_question_shown();
        Ok(quiz)
    }

    /// One elapsed second. On expiry the staged text is recorded and the
    /// session moves on.
    pub fn tick(&mut self) {
        if self.is_finished() {
            return;
        }

        if self.state.countdown.tick() {
            debug!(index = self.state.current_index, "countdown expired");
            let staged = std::mem::take(&mut self.state.staged_input);
            self.record(&staged);
            self.advance();
        }
    }

    /// Record `raw` for the current question and move on
    pub fn submit(&mut self, raw: &str) {
        if self.is_finished() {
            return;
        }
        self.record(raw);
        self.advance();
    }

    pub fn submit_staged(&mut self) {
        let staged = std::mem::take(&mut self.state.staged_input);
        self.submit(&staged);
    }

    /// Stop the current countdown and show the next question, or finish the
    /// session after the last one. An unrecorded question is recorded first
    /// from the staged text.
    pub fn advance(&mut self) {
        if self.is_finished() {
            return;
        }

        self.state.countdown.stop();
        if !self.state.is_current_recorded() {
            let staged = std::mem::take(&mut self.state.staged_input);
            self.record(&staged);
        }

        if self.state.is_last_question() {
            self.finish();
            return;
        }

        self.state.current_index += 1;
        self.state.staged_input.clear();
        self.state.countdown.arm();
        self.phase = SessionPhase::InQuestion(self.state.current_index);
        self.log_question_shown();
    }

    /// At most one record per question; later attempts are ignored
    fn record(&mut self, raw: &str) {
        if self.state.is_current_recorded() {
            return;
        }
        let Some(question) = self.state.current_question() else {
            return;
        };

        let outcome = grade(question.category, &question.answer, raw);
        let record = AnswerRecord::new(question, captured_text(raw), outcome);
        debug!(
            index = self.state.current_index,
            answer = %record.user_answer,
            correct = record.is_correct,
            "answer recorded"
        );

        if outcome.is_correct() {
            self.state.correct_count += 1;
        }
        self.state.answers.push(record);
    }

    fn finish(&mut self) {
        self.phase = SessionPhase::Finished;
        self.state.staged_input.clear();

        let report = SessionReport::new(
            self.config.user_name.clone(),
            self.config.difficulty,
            self.state.correct_count,
            self.state.answers.clone(),
        );
        info!(
            user = %report.user_name,
            correct = report.total_correct,
            total = report.total,
            percentage = report.percentage,
            status = %report.status,
            "session finished"
        );
        self.report = Some(report);
    }

    fn log_question_shown(&self) {
        if let Some(question) = self.state.current_question() {
            debug!(
                index = self.state.current_index,
                category = %question.category,
                prompt = %question.prompt,
                "question shown"
            );
        }
    }

    /// The final report; only available once the session has finished
    pub fn report(&self) -> Option<&SessionReport> {
        self.report.as_ref()
    }

    pub fn input_char(&mut self, c: char) {
        if !self.is_finished() {
            self.state.staged_input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.state.staged_input.pop();
    }

    pub fn clear_input(&mut self) {
        self.state.staged_input.clear();
    }

    pub fn staged_input(&self) -> &str {
        &self.state.staged_input
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    pub fn current_prompt(&self) -> Option<&str> {
        match self.phase {
            SessionPhase::InQuestion(_) => {
                self.state.current_question().map(|q| q.prompt.as_str())
            }
            SessionPhase::Finished => None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The full question sequence in the order it is asked
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.state.questions
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        match self.phase {
            SessionPhase::InQuestion(_) => self.state.current_question(),
            SessionPhase::Finished => None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn total(&self) -> usize {
        self.state.questions.len()
    }

    pub fn seconds_remaining(&self) -> Option<u32> {
        match self.phase {
            SessionPhase::InQuestion(_) => Some(self.state.countdown.remaining()),
            SessionPhase::Finished => None,
        }
    }

    pub fn correct_count(&self) -> usize {
        self.state.correct_count
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.state.answers
    }
}

/// Keep only the first occurrence of each prompt
fn drop_repeats(questions: Vec<QuestionRecord>) -> Vec<QuestionRecord> {
    let mut seen = HashSet::new();
    questions
        .into_iter()
        .filter(|q| seen.insert(q.prompt.clone()))
        .collect()
}
