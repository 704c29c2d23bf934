pub mod breakdown;
pub mod engine;
pub mod value;

pub use breakdown::{
    breakdown, category_max, category_score, percent_of, question_max, CategoryBreakdown,
    Rating,
};
pub use engine::{score_question, score_total, LIKERT_POINTS};
pub use value::{ResponseValue, Responses};
