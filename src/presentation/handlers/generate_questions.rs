use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::QuizQuestion;
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct GenerateQuestionsRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<QuizQuestion>,
}

#[tracing::instrument(skip(state, request))]
pub async fn generate_questions_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    if request.text.is_empty() {
        tracing::warn!("Generation request with empty text");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No text provided".to_string(),
            }),
        )
            .into_response();
    }

    match state.question_service.generate(&request.text).await {
        Ok(questions) => {
            tracing::info!(count = questions.len(), "Generation successful");
            (
                StatusCode::OK,
                Json(GenerateQuestionsResponse { questions }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
