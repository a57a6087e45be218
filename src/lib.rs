pub mod io;
pub mod llm;
pub mod models;
pub mod normalize;
pub mod services;

pub use io::{load_json, parse_list, read_text, write_json, write_task_markdown};
pub use llm::{ChatClient, CompletionBackend, CompletionOptions, LlmConfig, LlmError};
pub use models::{
    Answers, ChatMessage, KnowledgeAssessment, Milestone, Question, Roadmap, Role, Task, Video,
};
pub use normalize::{normalize, normalize_text, Normalized};
pub use services::{
    analyze_gaps, check_mastery, execute_chat, generate_questions, generate_resources,
    generate_roadmap, measure_understanding,
};
