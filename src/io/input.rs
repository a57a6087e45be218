use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Read a whole file, or stdin when no path is given
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {:?}", path)),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

/// Read and deserialize a JSON file
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON in {:?}", path))
}

/// Parse a comma-separated list, dropping blank entries
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answers, ChatMessage, Question};

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("traits, generics,  closures"), vec!["traits", "generics", "closures"]);
        assert_eq!(parse_list("  a  , , b "), vec!["a", "b"]);
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_load_conversation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conversation.json");
        std::fs::write(
            &path,
            r#"[{"role": "user", "content": "I know some Python"}]"#,
        )
        .unwrap();

        let conversation: Vec<ChatMessage> = load_json(&path).unwrap();

        assert_eq!(conversation, vec![ChatMessage::user("I know some Python")]);
    }

    #[test]
    fn test_load_questions_and_answers() {
        let dir = tempfile::tempdir().unwrap();
        let questions_path = dir.path().join("questions.json");
        let answers_path = dir.path().join("answers.json");
        std::fs::write(&questions_path, r#"[{"id": "q1", "question": "What is a slice?"}]"#).unwrap();
        std::fs::write(&answers_path, r#"{"q1": "A view into a sequence"}"#).unwrap();

        let questions: Vec<Question> = load_json(&questions_path).unwrap();
        let answers: Answers = load_json(&answers_path).unwrap();

        assert_eq!(questions[0].id, "q1");
        assert_eq!(answers["q1"], "A view into a sequence");
    }

    #[test]
    fn test_load_json_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_json::<Answers>(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));

        let missing = dir.path().join("missing.json");
        assert!(read_text(Some(missing.as_path())).is_err());
    }

    #[test]
    fn test_read_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reply.txt");
        std::fs::write(&path, "```json\n{}\n```").unwrap();
        assert_eq!(read_text(Some(path.as_path())).unwrap(), "```json\n{}\n```");
    }
}
