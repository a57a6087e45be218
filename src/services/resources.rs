use anyhow::{Context, Result};
use tracing::info;

use crate::llm::{
    build_resource_prompt, CompletionBackend, CompletionOptions, RESOURCES_SYSTEM_PROMPT,
};
use crate::models::{ChatMessage, Task};

/// Write a markdown study resource for each knowledge gap, in order
pub async fn generate_resources(
    backend: &impl CompletionBackend,
    gaps: &[String],
) -> Result<Vec<Task>> {
    let mut tasks = Vec::with_capacity(gaps.len());

    for gap in gaps {
        let messages = vec![
            ChatMessage::system(RESOURCES_SYSTEM_PROMPT),
            ChatMessage::user(build_resource_prompt(gap)),
        ];
        let explanation = backend
            .complete(&messages, &CompletionOptions::new(0.7))
            .await
            .with_context(|| format!("Failed to generate resource for {:?}", gap))?;

        info!("Resource for {:?}: {} chars", gap, explanation.len());
        tasks.push(Task::new(gap.as_str(), explanation.trim()));
    }

    Ok(tasks)
}

/// A topic is mastered once every task for it is completed
pub fn check_mastery(tasks: &[Task]) -> bool {
    tasks.iter().all(|task| task.completed)
}
