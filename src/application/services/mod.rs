mod question_service;

pub use question_service::{GenerationError, QuestionService, QUESTION_COUNT};
