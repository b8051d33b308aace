use std::sync::Arc;

use quizgen::application::ports::{LlmClient, LlmClientError};
use quizgen::application::services::{GenerationError, QuestionService};

struct CannedLlmClient {
    content: String,
}

impl CannedLlmClient {
    fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for CannedLlmClient {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmClientError> {
        Ok(self.content.clone())
    }
}

struct FailingLlmClient;

#[async_trait::async_trait]
impl LlmClient for FailingLlmClient {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmClientError> {
        Err(LlmClientError::ApiRequestFailed(
            "connection reset".to_string(),
        ))
    }
}

fn service(content: &str) -> QuestionService<CannedLlmClient> {
    QuestionService::new(Arc::new(CannedLlmClient::new(content)))
}

#[tokio::test]
async fn given_five_valid_entries_when_generating_then_returns_five_questions() {
    let svc = service(
        r#"[
            {"question": "Q1", "answer": "A1", "points": 1},
            {"question": "Q2", "answer": "A2", "points": 2},
            {"question": "Q3", "answer": "A3", "points": 3},
            {"question": "Q4", "answer": "A4", "points": 4},
            {"question": "Q5", "answer": "A5", "points": 5}
        ]"#,
    );

    let questions = svc.generate("some text").await.unwrap();

    assert_eq!(questions.len(), 5);
    assert_eq!(questions[0].question, "Q1");
    assert_eq!(questions[4].answer, "A5");
}

#[tokio::test]
async fn given_entry_missing_answer_when_generating_then_entry_is_dropped() {
    let svc = service(
        r#"[
            {"question": "Q1", "answer": "A1", "points": 2},
            {"question": "Q2", "points": 2}
        ]"#,
    );

    let questions = svc.generate("some text").await.unwrap();

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].question, "Q1");
}

#[tokio::test]
async fn given_out_of_range_points_when_generating_then_points_are_clamped() {
    let svc = service(
        r#"[
            {"question": "Q1", "answer": "A1", "points": 10},
            {"question": "Q2", "answer": "A2", "points": 0},
            {"question": "Q3", "answer": "A3", "points": -4}
        ]"#,
    );

    let questions = svc.generate("some text").await.unwrap();

    assert_eq!(questions.len(), 3);
    assert_eq!(questions[0].points, 5);
    assert_eq!(questions[1].points, 1);
    assert_eq!(questions[2].points, 1);
}

#[tokio::test]
async fn given_non_integer_points_when_generating_then_points_are_coerced() {
    let svc = service(
        r#"[
            {"question": "Q1", "answer": "A1", "points": 3.7},
            {"question": "Q2", "answer": "A2", "points": "4"}
        ]"#,
    );

    let questions = svc.generate("some text").await.unwrap();

    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].points, 3);
    assert_eq!(questions[1].points, 4);
}

#[tokio::test]
async fn given_unparseable_points_when_generating_then_entry_is_dropped() {
    let svc = service(
        r#"[
            {"question": "Q1", "answer": "A1", "points": "several"},
            {"question": "Q2", "answer": "A2", "points": 2}
        ]"#,
    );

    let questions = svc.generate("some text").await.unwrap();

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].question, "Q2");
}

#[tokio::test]
async fn given_fenced_json_when_generating_then_fences_are_stripped() {
    let svc = service(
        "```json\n[{\"question\": \"Q1\", \"answer\": \"A1\", \"points\": 2}]\n```",
    );

    let questions = svc.generate("some text").await.unwrap();

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].points, 2);
}

#[tokio::test]
async fn given_non_json_content_when_generating_then_returns_malformed_response() {
    let svc = service("Here are your questions:\n1. What is Rust?");

    let result = svc.generate("some text").await;

    assert!(matches!(result, Err(GenerationError::MalformedResponse(_))));
}

#[tokio::test]
async fn given_json_object_instead_of_array_when_generating_then_returns_malformed_response() {
    let svc = service(r#"{"questions": []}"#);

    let result = svc.generate("some text").await;

    assert!(matches!(result, Err(GenerationError::MalformedResponse(_))));
}

#[tokio::test]
async fn given_failing_client_when_generating_then_returns_api_error() {
    let svc = QuestionService::new(Arc::new(FailingLlmClient));

    let result = svc.generate("some text").await;

    assert!(matches!(result, Err(GenerationError::Api(_))));
}

#[tokio::test]
async fn given_model_order_when_generating_then_order_is_preserved() {
    let svc = service(
        r#"[
            {"question": "first", "answer": "A", "points": 1},
            {"question": "second", "answer": "B", "points": 1},
            {"question": "third", "answer": "C", "points": 1}
        ]"#,
    );

    let questions = svc.generate("some text").await.unwrap();

    let order: Vec<&str> = questions.iter().map(|q| q.question.as_str()).collect();
    assert_eq!(order, vec!["first", "second", "third"]);
}
