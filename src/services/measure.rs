use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::llm::{
    build_measure_prompt, CompletionBackend, CompletionOptions, MEASURE_SYSTEM_PROMPT,
};
use crate::models::{ChatMessage, KnowledgeAssessment};
use crate::normalize::normalize;

/// Assess how well an answer shows understanding of the question.
///
/// An unreadable completion degrades to [`KnowledgeAssessment::fallback`];
/// only invalid input and transport failures are errors.
pub async fn measure_understanding(
    backend: &impl CompletionBackend,
    question: &str,
    answer: &str,
    context: &str,
) -> Result<KnowledgeAssessment> {
    if question.trim().is_empty() {
        anyhow::bail!("Invalid input: question and answer are required");
    }

    let messages = vec![
        ChatMessage::system(MEASURE_SYSTEM_PROMPT),
        ChatMessage::user(build_measure_prompt(question, answer, context)),
    ];
    let options = CompletionOptions::new(0.2).with_max_tokens(500).json();
    let raw = backend
        .complete(&messages, &options)
        .await
        .context("Failed to measure understanding")?;

    let assessment = parse_assessment(&raw);
    info!(
        "Assessment: score {:.0}, {} gaps, ready={}",
        assessment.understanding_score,
        assessment.identified_gaps.len(),
        assessment.ready_to_progress
    );
    Ok(assessment)
}

fn parse_assessment(raw: &str) -> KnowledgeAssessment {
    let normalized = normalize(raw);
    match normalized.deserialize::<KnowledgeAssessment>() {
        Ok(mut assessment) if normalized.is_clean() => {
            assessment.understanding_score = assessment.understanding_score.clamp(0.0, 100.0);
            assessment
        }
        Ok(_) => KnowledgeAssessment::fallback(),
        Err(e) => {
            warn!("Assessment completion missing required fields: {}", e);
            debug!("Raw completion: {}", raw);
            KnowledgeAssessment::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::ScriptedBackend;

    const REPLY: &str = r#"{
        "understandingScore": 85,
        "identifiedGaps": ["drop order"],
        "feedback": "Great job! What happens at the end of a scope?",
        "nextSteps": "Read about Drop",
        "readyToProgress": True
    }"#;

    #[tokio::test]
    async fn test_measure_understanding() {
        let backend = ScriptedBackend::new(&[REPLY]);

        let assessment = measure_understanding(
            &backend,
            "What does ownership guarantee?",
            "Memory is freed once",
            "Ownership",
        )
        .await
        .unwrap();

        assert_eq!(assessment.understanding_score, 85.0);
        assert_eq!(assessment.identified_gaps, vec!["drop order"]);
        assert!(assessment.ready_to_progress);

        let (messages, options) = backend.call(0);
        assert!(messages[1].content.starts_with("Question: What does ownership guarantee?\nContext: Ownership\nAnswer: Memory is freed once"));
        assert!(options.json_mode);
        assert_eq!(options.max_tokens, Some(500));
    }

    #[tokio::test]
    async fn test_measure_requires_question() {
        let backend = ScriptedBackend::new(&[REPLY]);
        assert!(measure_understanding(&backend, "", "x", "").await.is_err());
    }

    #[test]
    fn test_parse_assessment_missing_fields() {
        let assessment = parse_assessment(r#"{"understandingScore": 40, "feedback": "ok"}"#);
        assert_eq!(assessment, KnowledgeAssessment::fallback());
    }

    #[test]
    fn test_parse_assessment_recovered_feedback_is_fallback() {
        let assessment = parse_assessment("oops \"feedback\": \"try again\"");
        assert_eq!(assessment, KnowledgeAssessment::fallback());
    }

    #[test]
    fn test_parse_assessment_clamps_score() {
        let raw = r#"{"understandingScore": 140, "identifiedGaps": [], "feedback": "",
            "nextSteps": "", "readyToProgress": true}"#;
        assert_eq!(parse_assessment(raw).understanding_score, 100.0);
    }
}
