use serde::{Deserialize, Serialize};

/// A video link attached to a study task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub url: String,
}

impl Video {
    /// Stand-in entry until real video search exists
    pub fn placeholder(topic: &str) -> Self {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        Self {
            id: format!(
                "vid-{}-{}",
                chrono::Utc::now().timestamp_millis(),
                &suffix[..8]
            ),
            title: format!("Learn {} - Placeholder", topic),
            url: "#".to_string(),
        }
    }
}

/// Study material generated for one knowledge gap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub topic: String,
    #[serde(default)]
    pub videos: Vec<Video>,
    /// Markdown explanation
    pub explanation: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(topic: impl Into<String>, explanation: impl Into<String>) -> Self {
        let topic = topic.into();
        Self {
            videos: vec![Video::placeholder(&topic)],
            topic,
            explanation: explanation.into(),
            completed: false,
        }
    }
}
