use serde::{Deserialize, Serialize};

/// A stage of the learning path with the topics it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Personalized learning path built from the learner's conversation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub milestones: Vec<Milestone>,
}

impl Roadmap {
    /// Total number of topics across all milestones
    pub fn topic_count(&self) -> usize {
        self.milestones.iter().map(|m| m.topics.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roadmap() {
        let json = r#"{
            "milestones": [
                {"name": "Foundations", "topics": ["Ownership", "Borrowing"]},
                {"name": "Async Services", "topics": ["Tokio"]},
                {"name": "Capstone"}
            ]
        }"#;

        let roadmap: Roadmap = serde_json::from_str(json).unwrap();

        assert_eq!(roadmap.milestones.len(), 3);
        assert_eq!(roadmap.milestones[0].name, "Foundations");
        assert!(roadmap.milestones[2].topics.is_empty());
        assert_eq!(roadmap.topic_count(), 3);
        assert!(!roadmap.is_empty());
    }

    #[test]
    fn test_missing_milestones_rejected() {
        assert!(serde_json::from_str::<Roadmap>(r#"{"correct": false}"#).is_err());
    }
}
