use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{info, warn};

use crate::llm::{build_quiz_prompt, CompletionBackend, CompletionOptions, QUIZ_SYSTEM_PROMPT};
use crate::models::{ChatMessage, Question};
use crate::normalize::normalize;

/// Generate assessment questions for a topic and its concepts
pub async fn generate_questions(
    backend: &impl CompletionBackend,
    topic: &str,
    concepts: &[String],
) -> Result<Vec<Question>> {
    if topic.trim().is_empty() || concepts.is_empty() {
        anyhow::bail!("Invalid input: topic and concepts are required");
    }

    let messages = vec![
        ChatMessage::system(QUIZ_SYSTEM_PROMPT),
        ChatMessage::user(build_quiz_prompt(topic, concepts)),
    ];
    let raw = backend
        .complete(&messages, &CompletionOptions::new(0.7))
        .await
        .context("Failed to generate test questions")?;

    let questions = parse_questions(&raw)?;
    info!("Quiz: {} questions for {}", questions.len(), topic);
    Ok(questions)
}

/// Read the completion as an array of questions.
///
/// Anything that is not an array yields no questions. Questions the model
/// left without an id are numbered `q1`, `q2`, ... by position.
fn parse_questions(raw: &str) -> Result<Vec<Question>> {
    let normalized = normalize(raw);
    let value = normalized
        .to_value()
        .context("Failed to parse questions JSON")?;

    let Value::Array(items) = value else {
        warn!("Quiz completion was not an array: {}", normalized.as_str());
        return Ok(Vec::new());
    };

    let mut questions: Vec<Question> = serde_json::from_value(Value::Array(items))
        .context("Failed to parse questions JSON")?;
    for (index, question) in questions.iter_mut().enumerate() {
        if question.id.trim().is_empty() {
            question.id = format!("q{}", index + 1);
        }
    }
    Ok(questions)
}
