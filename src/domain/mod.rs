mod document;
mod quiz_question;

pub use document::Document;
pub use quiz_question::{QuizQuestion, MAX_POINTS, MIN_POINTS};
