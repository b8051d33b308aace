use serde::Serialize;

pub const MIN_POINTS: i64 = 1;
pub const MAX_POINTS: i64 = 5;

/// A single generated quiz question. `points` always sits in
/// [`MIN_POINTS`, `MAX_POINTS`]; construction clamps anything outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub answer: String,
    pub points: i64,
}

impl QuizQuestion {
    pub fn new(question: String, answer: String, points: i64) -> Self {
        Self {
            question,
            answer,
            points: points.clamp(MIN_POINTS, MAX_POINTS),
        }
    }
}
