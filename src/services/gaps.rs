use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{info, warn};

use crate::llm::{build_gaps_prompt, CompletionBackend, CompletionOptions, GAPS_SYSTEM_PROMPT};
use crate::models::{Answers, ChatMessage, Question};
use crate::normalize::normalize;

/// Identify knowledge gaps from a set of answered questions
pub async fn analyze_gaps(
    backend: &impl CompletionBackend,
    questions: &[Question],
    answers: &Answers,
) -> Result<Vec<String>> {
    if questions.is_empty() {
        anyhow::bail!("Invalid input: questions are required");
    }

    let messages = vec![
        ChatMessage::system(GAPS_SYSTEM_PROMPT),
        ChatMessage::user(build_gaps_prompt(questions, answers)),
    ];
    let raw = backend
        .complete(&messages, &CompletionOptions::new(0.0))
        .await
        .context("Failed to analyze knowledge gaps")?;

    let gaps = parse_gaps(&raw);
    info!("Gap analysis: {} gaps from {} questions", gaps.len(), questions.len());
    Ok(gaps)
}

/// String items of a JSON array; anything else yields no gaps
fn parse_gaps(raw: &str) -> Vec<String> {
    let normalized = normalize(raw);
    match normalized.to_value() {
        Ok(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(gap) if !gap.trim().is_empty() => Some(gap),
                _ => None,
            })
            .collect(),
        _ => {
            warn!("Gap completion was not an array: {}", normalized.as_str());
            Vec::new()
        }
    }
}
