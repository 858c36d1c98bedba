use crate::question::{Answer, Category};

/// Marker recorded in place of an empty answer
pub const UNANSWERED: &str = "Unanswered";

#[derive(Clone, Debug, Copy, PartialEq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn is_correct(&self) -> bool {
        *self == Outcome::Correct
    }
}

/// Strip every whitespace character
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Text stored for a captured answer: the trimmed input, or the unanswered marker
pub fn captured_text(raw: &str) -> String {
    match raw.trim() {
        "" => UNANSWERED.to_string(),
        trimmed => trimmed.to_string(),
    }
}

/// Grade a raw user answer to a question of `category`.
///
/// Arithmetic answers compare by floating point value so "42.0" matches 42.
/// Series terms and sorted lists compare their whitespace-free canonical
/// strings. Empty input never matches.
pub fn grade(category: Category, expected: &Answer, raw: &str) -> Outcome {
    let given = normalize(raw);
    if given.is_empty() {
        return Outcome::Incorrect;
    }

    let matched = match expected {
        Answer::Number(n) if category.is_numeric() => {
            given.parse::<f64>().is_ok_and(|v| v == *n as f64)
        }
        _ => given == normalize(&expected.to_string()),
    };

    if matched {
        Outcome::Correct
    } else {
        Outcome::Incorrect
    }
}
