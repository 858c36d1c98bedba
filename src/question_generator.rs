use crate::{
    question::{Answer, Category, Difficulty, QuestionRecord},
    util::isqrt,
};
use itertools::Itertools;
use rand::{seq::SliceRandom, Rng};
use std::collections::BTreeSet;

const SERIES_LENGTH: usize = 5;
const SERIES_MAX_STEP: i64 = 10;
const SERIES_PLACEHOLDER: &str = "...";
const SORT_LENGTH: usize = 5;

/// Configuration for question generation
#[derive(Debug, Clone)]
pub struct QuestionGenConfig {
    pub categories: BTreeSet<Category>,
    pub difficulty: Difficulty,
    pub number_of_questions: usize,
}

/// Handles all question synthesis
pub struct QuestionGenerator {
    config: QuestionGenConfig,
}

impl QuestionGenerator {
    pub fn new(config: QuestionGenConfig) -> Self {
        Self { config }
    }

    /// Generate the configured number of questions using the thread rng
    pub fn generate(&self) -> Vec<QuestionRecord> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate exactly `number_of_questions` records, picking a category
    /// uniformly from the selected set for each one.
    ///
    /// Duplicate prompts are allowed. An empty category set yields no questions.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<QuestionRecord> {
        let categories: Vec<Category> = self.config.categories.iter().copied().collect();
        let max_range = self.config.difficulty.max_range();

        let mut questions = Vec::new();
        while questions.len() < self.config.number_of_questions {
            let Some(&category) = categories.choose(rng) else {
                break;
            };
            questions.push(synthesize(category, max_range, rng));
        }
        questions
    }
}

/// Uniform draw from `[1, bound]`; bounds below one collapse to one
fn draw<R: Rng + ?Sized>(rng: &mut R, bound: u32) -> i64 {
    rng.gen_range(1..=bound.max(1)) as i64
}

/// Build a single question of `category` with operands capped by `max_range`
pub fn synthesize<R: Rng + ?Sized>(
    category: Category,
    max_range: u32,
    rng: &mut R,
) -> QuestionRecord {
    let root = isqrt(max_range);

    match category {
        Category::Addition => {
            let (a, b) = (draw(rng, max_range), draw(rng, max_range));
            QuestionRecord::new(category, format!("{a} + {b}"), Answer::Number(a + b))
        }
        Category::Subtraction => {
            let (a, b) = (draw(rng, max_range), draw(rng, max_range));
            let (hi, lo) = (a.max(b), a.min(b));
            QuestionRecord::new(category, format!("{hi} - {lo}"), Answer::Number(hi - lo))
        }
        Category::Multiplication => {
            let (a, b) = (draw(rng, root), draw(rng, root));
            QuestionRecord::new(category, format!("{a} × {b}"), Answer::Number(a * b))
        }
        Category::Division => {
            let quotient = draw(rng, max_range);
            let divisor = draw(rng, max_range);
            QuestionRecord::new(
                category,
                format!("{} ÷ {}", quotient * divisor, divisor),
                Answer::Number(quotient),
            )
        }
        Category::Squares => {
            let n = draw(rng, root);
            QuestionRecord::new(category, format!("Square of {n}"), Answer::Number(n * n))
        }
        Category::SeriesCompletion => {
            let start = draw(rng, max_range);
            let step = rng.gen_range(1..=SERIES_MAX_STEP);
            let missing = rng.gen_range(0..SERIES_LENGTH);
            let terms: Vec<i64> = (0..SERIES_LENGTH as i64).map(|i| start + i * step).collect();

            let shown = terms
                .iter()
                .enumerate()
                .map(|(i, term)| {
                    if i == missing {
                        SERIES_PLACEHOLDER.to_string()
                    } else {
                        term.to_string()
                    }
                })
                .join(", ");

            QuestionRecord::new(
                category,
                format!("Complete the series: {shown}"),
                Answer::Number(terms[missing]),
            )
        }
        Category::AscendingSort | Category::DescendingSort => {
            let mut values: Vec<i64> = (0..SORT_LENGTH).map(|_| draw(rng, max_range)).collect();
            values.shuffle(rng);
            let shown = values.iter().join(", ");

            let (label, sorted): (&str, Vec<i64>) = if category == Category::AscendingSort {
                ("ascending", values.into_iter().sorted().collect())
            } else {
                ("descending", values.into_iter().sorted_by(|a, b| b.cmp(a)).collect())
            };

            QuestionRecord::new(
                category,
                format!("Sort in {label} order: {shown}"),
                Answer::Sequence(sorted),
            )
        }
    }
}
