use thiserror::Error;

/// Reasons a session configuration is rejected before the session starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a player name is required")]
    MissingUserName,
    #[error("at least one category must be selected")]
    NoCategories,
    #[error("the number of questions must be positive")]
    ZeroQuestionCount,
    #[error("at most {max} questions fit in one session")]
    TooManyQuestions { max: usize },
    #[error("the time per question must be positive")]
    ZeroTimeLimit,
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
