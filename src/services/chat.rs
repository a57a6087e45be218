use anyhow::{Context, Result};
use tracing::info;

use crate::llm::{CompletionBackend, CompletionOptions, CHAT_SYSTEM_PROMPT};
use crate::models::ChatMessage;

/// Continue the information-gathering conversation and return the next reply
pub async fn execute_chat(
    backend: &impl CompletionBackend,
    conversation: &[ChatMessage],
) -> Result<String> {
    if conversation.is_empty() {
        anyhow::bail!("Invalid input: conversation must contain at least one message");
    }

    let mut messages = Vec::with_capacity(conversation.len() + 1);
    messages.push(ChatMessage::system(CHAT_SYSTEM_PROMPT));
    messages.extend_from_slice(conversation);

    info!("Chat: sending {} conversation messages", conversation.len());

    let reply = backend
        .complete(&messages, &CompletionOptions::new(0.7))
        .await
        .context("Failed to generate chat response")?;

    Ok(reply.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LlmError;
    use crate::models::Role;
    use crate::services::testing::ScriptedBackend;

    #[tokio::test]
    async fn test_chat_prepends_system_prompt() {
        let backend = ScriptedBackend::new(&["  How many hours a week can you study?  "]);
        let conversation = vec![
            ChatMessage::assistant("Hi! What would you like to learn?"),
            ChatMessage::user("Rust"),
        ];

        let reply = execute_chat(&backend, &conversation).await.unwrap();

        assert_eq!(reply, "How many hours a week can you study?");
        let (messages, options) = backend.call(0);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[2], ChatMessage::user("Rust"));
        assert_eq!(options.temperature, 0.7);
    }

    #[tokio::test]
    async fn test_chat_rejects_empty_conversation() {
        let backend = ScriptedBackend::new(&[]);
        assert!(execute_chat(&backend, &[]).await.is_err());
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_chat_propagates_transport_failure() {
        let backend = ScriptedBackend::failing(LlmError::Api {
            status: 503,
            message: "unavailable".to_string(),
        });
        let err = execute_chat(&backend, &[ChatMessage::user("hi")])
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("503"));
    }
}
