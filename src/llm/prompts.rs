use crate::models::{Answers, Question};

/// System prompt for the information-gathering chat
pub const CHAT_SYSTEM_PROMPT: &str = "You are an information gatherer. Chat with the user in a \
friendly, human-like style, like talking over coffee, to learn about their current skills, \
learning goals, and available time. Do NOT teach or suggest; just ask open-ended questions until \
you have what you need to build a personalized roadmap.";

/// System prompt for roadmap generation
pub const ROADMAP_SYSTEM_PROMPT: &str = r#"You are an expert curriculum designer who creates personalized learning paths.

TASK:
Analyze the user's conversation to identify their specific needs, including:
1. What they want to learn (topic, skills, technologies)
2. Their timeline expectations (how quickly they need to learn)
3. Their background and experience level
4. Their ultimate goal (job, project, etc.)
5. How in-depth they want to go

Then generate a personalized JSON roadmap with milestones. Each milestone should have:
- A clear, specific "name" that shows progression
- An array of "topics" that build skills incrementally
- Topics appropriate to their experience level and timeline
- Practical, applicable content aligned with their goals

FORMAT:
The output must be valid JSON only, with this structure:
{
  "milestones": [
    {
      "name": "Milestone Name That Shows Progression",
      "topics": ["Specific Topic 1", "Specific Topic 2"]
    }
  ]
}

GUIDELINES:
- For beginners: include more fundamentals and smaller steps
- For experienced learners: skip basics and focus on advanced topics
- For quick timelines: streamline to essential, practical knowledge
- For in-depth learning: include theoretical foundations
- For job seekers: emphasize industry-relevant skills and projects
- For hobbyists: focus on creative applications and quick wins

Return only valid JSON, no additional text."#;

/// System prompt for quiz generation
pub const QUIZ_SYSTEM_PROMPT: &str = "Generate 2-3 assessment questions for the user. Output ONLY \
a JSON array of question objects, each with \"id\", \"question\" and \"type\" fields.";

/// System prompt for gap analysis over a set of answers
pub const GAPS_SYSTEM_PROMPT: &str = "Provide a JSON array of knowledge gap strings based on the \
following Q&A. No additional explanation.";

/// System prompt for measuring understanding of a single answer
pub const MEASURE_SYSTEM_PROMPT: &str = r#"ALWAYS use simple English suitable for a 10-year-old child. Use short words, short sentences, and explain all concepts in the simplest possible way. Avoid technical jargon unless absolutely necessary, and when you must use it, define it immediately in plain language.

You are a knowledge gap analyzer for personalized learning. Your goal is NOT to judge answers as right or wrong, but to identify specific gaps in understanding.

For each answer, analyze:
1. What concepts the learner understands correctly
2. What specific knowledge gaps or misconceptions exist
3. How complete their understanding is (as a percentage)
4. What targeted resources would help address those gaps

YOUR RESPONSE MUST BE VALID JSON with this exact format:
{
  "understandingScore": number,
  "identifiedGaps": ["specific gap 1", "specific gap 2"],
  "feedback": "conversational feedback with questions",
  "nextSteps": "specific recommendation",
  "readyToProgress": boolean
}

"understandingScore" is 0-100 and reflects how complete their understanding is.
"identifiedGaps" lists specific concepts that need clarification.
"feedback" is conversational and kid-friendly, as if talking to a 10-year-old.
"nextSteps" gives clear direction on what to study next.
Set "readyToProgress" to true when understanding is sufficient (70%+ score with no critical gaps)."#;

/// System prompt for resource writing
pub const RESOURCES_SYSTEM_PROMPT: &str =
    "You are an educational AI specializing in creating learning resources.";

pub fn build_quiz_prompt(topic: &str, concepts: &[String]) -> String {
    format!(
        "Topic: {}\nConcepts: {}\nOutput JSON array:",
        topic,
        concepts.join(", ")
    )
}

/// Format each question with the learner's answer, one block per question
pub fn build_gaps_prompt(questions: &[Question], answers: &Answers) -> String {
    let pairs = questions
        .iter()
        .map(|q| {
            let answer = answers
                .get(&q.id)
                .map(String::as_str)
                .filter(|a| !a.trim().is_empty())
                .unwrap_or("No answer provided");
            format!("Question: {}\nAnswer: {}", q.question, answer)
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("Questions and Answers:\n\n{}\n\nReturn ONLY the JSON array.", pairs)
}

pub fn build_measure_prompt(question: &str, answer: &str, context: &str) -> String {
    format!(
        "Question: {}\nContext: {}\nAnswer: {}\n\n\
         Analyze this answer to identify knowledge gaps. Respond with ONLY valid JSON in the required format.",
        question, context, answer
    )
}

pub fn build_resource_prompt(gap: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "Generate a comprehensive learning resource for the concept \"{}\".\n",
        gap
    ));
    prompt.push_str("Include:\n");
    prompt.push_str("1. A clear explanation in 2-3 paragraphs\n");
    prompt.push_str("2. 2-3 practical examples\n");
    prompt.push_str("3. Common misconceptions\n");
    prompt.push_str("4. A brief practice exercise\n\n");
    prompt.push_str("Format your response with markdown headings and structure.");

    prompt
}
