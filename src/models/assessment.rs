use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Learner answers keyed by question id
pub type Answers = BTreeMap<String, String>;

fn default_question_type() -> String {
    "open".to_string()
}

/// Accept string or numeric ids; anything else reads as missing
fn deserialize_question_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(id)) => id,
        Some(Value::Number(id)) => id.to_string(),
        _ => String::new(),
    })
}

/// A quiz question generated for a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Assigned after generation when the model omits it
    #[serde(default, deserialize_with = "deserialize_question_id")]
    pub id: String,
    pub question: String,
    #[serde(rename = "type", default = "default_question_type")]
    pub question_type: String,
}

impl Question {
    pub fn new(id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            question_type: default_question_type(),
        }
    }
}

/// Assessment of a single free-text answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeAssessment {
    /// 0-100, completeness of understanding
    pub understanding_score: f64,
    pub identified_gaps: Vec<String>,
    /// Conversational feedback for the learner
    pub feedback: String,
    /// What to study next
    pub next_steps: String,
    pub ready_to_progress: bool,
}

impl KnowledgeAssessment {
    /// Placeholder returned when the completion cannot be read as an assessment
    pub fn fallback() -> Self {
        Self {
            understanding_score: 0.0,
            identified_gaps: vec!["Unable to process your answer".to_string()],
            feedback: "I couldn't analyze your answer properly. Could you try explaining in a different way?"
                .to_string(),
            next_steps: "Please review the main concepts and try again with a clearer response"
                .to_string(),
            ready_to_progress: false,
        }
    }
}
