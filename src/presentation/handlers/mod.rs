mod generate_questions;
mod health;
mod upload;

pub use generate_questions::generate_questions_handler;
pub use health::health_handler;
pub use upload::upload_handler;

use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
