use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{QuizQuestion, MAX_POINTS, MIN_POINTS};

/// Number of questions the prompt asks the model for. The response is
/// filtered afterwards, so fewer may come back.
pub const QUESTION_COUNT: usize = 5;

pub struct QuestionService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
}

impl<L> QuestionService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    #[tracing::instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn generate(&self, text: &str) -> Result<Vec<QuizQuestion>, GenerationError> {
        let prompt = build_prompt(text);

        let content = self
            .llm_client
            .complete(&prompt)
            .await
            .map_err(GenerationError::Api)?;

        let questions = parse_questions(&content)?;

        tracing::info!(count = questions.len(), "Quiz questions generated");

        Ok(questions)
    }
}

fn build_prompt(text: &str) -> String {
    format!(
        "Generate exactly {count} quiz questions from the following text.\n\
         Respond with only a JSON array of {count} objects, each shaped as\n\
         {{\"question\": string, \"answer\": string, \"points\": integer between {min} and {max}}}.\n\
         Do not include any text outside the JSON array.\n\n\
         Text:\n{text}",
        count = QUESTION_COUNT,
        min = MIN_POINTS,
        max = MAX_POINTS,
    )
}

/// Parse the model's content into validated questions. Entries missing any
/// of the three required fields are dropped; points are coerced to an
/// integer and clamped.
fn parse_questions(content: &str) -> Result<Vec<QuizQuestion>, GenerationError> {
    let stripped = strip_code_fences(content.trim());

    let entries: Vec<serde_json::Value> = serde_json::from_str(stripped)
        .map_err(|e| GenerationError::MalformedResponse(format!("not a JSON array: {e}")))?;

    let total = entries.len();
    let questions: Vec<QuizQuestion> = entries
        .iter()
        .filter_map(|entry| {
            let question = entry.get("question")?.as_str()?;
            let answer = entry.get("answer")?.as_str()?;
            let points = coerce_points(entry.get("points")?)?;
            Some(QuizQuestion::new(
                question.to_string(),
                answer.to_string(),
                points,
            ))
        })
        .collect();

    if questions.len() < total {
        tracing::warn!(
            dropped = total - questions.len(),
            "Dropped incomplete question entries from model response"
        );
    }

    Ok(questions)
}

fn coerce_points(value: &serde_json::Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    if let Some(f) = value.as_f64() {
        return Some(f as i64);
    }
    value.as_str().and_then(|s| s.trim().parse().ok())
}

/// Models frequently wrap JSON in a markdown code fence despite being told
/// not to; accept that shape.
fn strip_code_fences(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("```") else {
        return content;
    };

    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_start_matches(['\r', '\n'])
        .strip_suffix("```")
        .map(str::trim_end)
        .unwrap_or(content)
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("completion request failed: {0}")]
    Api(LlmClientError),
    #[error("malformed model response: {0}")]
    MalformedResponse(String),
}
