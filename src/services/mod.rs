pub mod chat;
pub mod gaps;
pub mod measure;
pub mod quiz;
pub mod resources;
pub mod roadmap;

pub use chat::*;
pub use gaps::*;
pub use measure::*;
pub use quiz::*;
pub use resources::*;
pub use roadmap::*;

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm::{CompletionBackend, CompletionOptions, LlmError};
    use crate::models::ChatMessage;

    /// Replays canned completions in order and records every request
    pub struct ScriptedBackend {
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
        pub calls: Mutex<Vec<(Vec<ChatMessage>, CompletionOptions)>>,
    }

    impl ScriptedBackend {
        pub fn new(replies: &[&str]) -> Self {
            Self {
                replies: Mutex::new(replies.iter().map(|r| Ok(r.to_string())).collect()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(error: LlmError) -> Self {
            Self {
                replies: Mutex::new(VecDeque::from([Err(error)])),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn call(&self, index: usize) -> (Vec<ChatMessage>, CompletionOptions) {
            self.calls.lock().unwrap()[index].clone()
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn complete(
            &self,
            messages: &[ChatMessage],
            options: &CompletionOptions,
        ) -> Result<String, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((messages.to_vec(), options.clone()));
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(LlmError::EmptyContent))
        }
    }
}
