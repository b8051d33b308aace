use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use quizgen::application::services::QuestionService;
use quizgen::infrastructure::llm::OpenAiClient;
use quizgen::infrastructure::observability::init_tracing;
use quizgen::infrastructure::text_processing::PdfAdapter;
use quizgen::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(settings.logging.json_format);

    if settings.llm.api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; question generation will fail");
    }

    let file_loader = Arc::new(PdfAdapter::new());
    let llm_client = Arc::new(OpenAiClient::new(
        settings.llm.api_key.clone(),
        settings.llm.model.clone(),
    ));
    let question_service = Arc::new(QuestionService::new(llm_client));

    let state = AppState {
        file_loader,
        question_service,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
