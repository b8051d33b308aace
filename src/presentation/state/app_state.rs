use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::QuestionService;

pub struct AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub file_loader: Arc<F>,
    pub question_service: Arc<QuestionService<L>>,
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            file_loader: Arc::clone(&self.file_loader),
            question_service: Arc::clone(&self.question_service),
        }
    }
}
