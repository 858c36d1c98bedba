// Library surface for the binary, headless integration tests and reuse.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod grading;
pub mod logging;
pub mod question;
pub mod question_generator;
pub mod quiz;
pub mod report;
pub mod runtime;
pub mod session;
pub mod ui;
pub mod util;

pub use error::{ConfigError, QuizError};
pub use question::{Answer, Category, Difficulty, QuestionRecord};
pub use quiz::Quiz;
pub use report::{SessionReport, Status};
pub use session::SessionConfig;
