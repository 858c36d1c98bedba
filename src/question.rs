use clap::ValueEnum;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of practice problem a question is drawn from
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Squares,
    #[serde(rename = "series")]
    #[value(name = "series")]
    #[strum(to_string = "Series")]
    SeriesCompletion,
    #[serde(rename = "ascending")]
    #[value(name = "ascending")]
    #[strum(to_string = "Ascending")]
    AscendingSort,
    #[serde(rename = "descending")]
    #[value(name = "descending")]
    #[strum(to_string = "Descending")]
    DescendingSort,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Addition,
        Category::Subtraction,
        Category::Multiplication,
        Category::Division,
        Category::Squares,
        Category::SeriesCompletion,
        Category::AscendingSort,
        Category::DescendingSort,
    ];

    /// Sort categories are graded as ordered lists, everything else as a number
    pub fn is_list_valued(&self) -> bool {
        matches!(self, Category::AscendingSort | Category::DescendingSort)
    }

    /// Plain arithmetic categories, whose answers compare by numeric value
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Category::Addition
                | Category::Subtraction
                | Category::Multiplication
                | Category::Division
                | Category::Squares
        )
    }
}

/// Named magnitude profile for operand draws
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn max_range(&self) -> u32 {
        match self {
            Difficulty::Easy => 20,
            Difficulty::Medium => 100,
            Difficulty::Hard => 1000,
        }
    }
}

/// Expected answer of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Number(i64),
    Sequence(Vec<i64>),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{n}"),
            Answer::Sequence(values) => write!(f, "{}", values.iter().join(", ")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub category: Category,
    pub prompt: String,
    pub answer: Answer,
}

impl QuestionRecord {
    pub fn new(category: Category, prompt: String, answer: Answer) -> Self {
        Self {
            category,
            prompt,
            answer,
        }
    }
}
