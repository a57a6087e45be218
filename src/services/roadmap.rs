use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::llm::{CompletionBackend, CompletionOptions, ROADMAP_SYSTEM_PROMPT};
use crate::models::{ChatMessage, Roadmap};
use crate::normalize::{normalize, Normalized};

/// Build a personalized roadmap from the learner's side of the conversation.
///
/// Every entry becomes a user message after the curriculum-designer system
/// prompt. The completion is normalized and must deserialize as a
/// [`Roadmap`]; a normalizer fallback is an error, not an empty roadmap.
pub async fn generate_roadmap(
    backend: &impl CompletionBackend,
    conversation: &[String],
) -> Result<Roadmap> {
    let mut messages = Vec::with_capacity(conversation.len() + 1);
    messages.push(ChatMessage::system(ROADMAP_SYSTEM_PROMPT));
    messages.extend(conversation.iter().map(ChatMessage::user));

    let options = CompletionOptions::new(0.7).with_max_tokens(1200);
    let raw = backend
        .complete(&messages, &options)
        .await
        .context("Failed to generate roadmap")?;

    let roadmap = parse_roadmap(&normalize(&raw))?;
    info!(
        "Roadmap: {} milestones, {} topics",
        roadmap.milestones.len(),
        roadmap.topic_count()
    );
    Ok(roadmap)
}

fn parse_roadmap(normalized: &Normalized) -> Result<Roadmap> {
    if normalized.is_fallback() {
        warn!("Roadmap completion was not JSON: {}", normalized.as_str());
        anyhow::bail!("Invalid JSON from LLM: {}", normalized.as_str());
    }
    normalized
        .deserialize()
        .with_context(|| format!("Invalid roadmap from LLM: {}", normalized.as_str()))
}
