use std::sync::LazyLock;

use regex::Regex;

static OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[\w+-]*\s*").expect("valid opening fence regex"));
static CLOSING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*```$").expect("valid closing fence regex"));
static SINGLE_QUOTED_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']+)':").expect("valid single-quoted key regex"));
static PYTHON_TRUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s*True\b").expect("valid True regex"));
static PYTHON_FALSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s*False\b").expect("valid False regex"));
static FEEDBACK_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""feedback":\s*"((?:[^"\\]|\\.)*)""#).expect("valid feedback regex"));

/// Strip a markdown code fence: the opening ```` ``` ```` with an optional
/// language tag, and the closing ```` ``` ````. Either side may be missing.
pub fn strip_code_fence(text: &str) -> String {
    let opened = OPENING_FENCE.replace(text, "");
    CLOSING_FENCE.replace(&opened, "").into_owned()
}

/// Strip one backtick from each end when the text is wrapped in inline code.
pub fn strip_backticks(text: &str) -> String {
    if text.len() >= 2 && text.starts_with('`') && text.ends_with('`') {
        text[1..text.len() - 1].trim().to_string()
    } else {
        text.to_string()
    }
}

/// Locate the first `{` or `[` that has a closer of the same kind somewhere
/// after it, and return the span up to the last such closer.
///
/// The span is not brace-balanced: `{"a": 1} and {"b": 2}` yields the whole
/// string from the first `{` to the final `}`.
pub fn extract_json_span(text: &str) -> Option<&str> {
    let last_brace = text.rfind('}');
    let last_bracket = text.rfind(']');

    text.char_indices().find_map(|(start, c)| {
        let end = match c {
            '{' => last_brace,
            '[' => last_bracket,
            _ => None,
        }?;
        (end > start).then(|| &text[start..=end])
    })
}

/// Rewrite `'key':` as `"key":`.
pub fn quote_single_keys(text: &str) -> String {
    SINGLE_QUOTED_KEY.replace_all(text, "\"$1\":").into_owned()
}

/// Rewrite Python-style `: True` / `: False` as JSON booleans.
pub fn lowercase_booleans(text: &str) -> String {
    let text = PYTHON_TRUE.replace_all(text, ": true");
    PYTHON_FALSE.replace_all(&text, ": false").into_owned()
}

/// Pull the string value of a `"feedback"` field out of text that failed to
/// parse as a whole. JSON escapes in the value are decoded.
pub fn recover_feedback(text: &str) -> Option<String> {
    if !text.contains("\"feedback\"") {
        return None;
    }
    let escaped = FEEDBACK_FIELD.captures(text)?.get(1)?.as_str();
    let feedback = serde_json::from_str::<String>(&format!("\"{}\"", escaped))
        .unwrap_or_else(|_| escaped.to_string());
    Some(feedback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence_with_language() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_strip_code_fence_other_language_tag() {
        assert_eq!(strip_code_fence("```javascript\n[1]\n```"), "[1]");
    }

    #[test]
    fn test_strip_code_fence_closing_only() {
        assert_eq!(strip_code_fence("{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_strip_code_fence_untouched_without_fence() {
        assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn test_strip_backticks() {
        assert_eq!(strip_backticks("`[1,2,3]`"), "[1,2,3]");
        assert_eq!(strip_backticks("` {} `"), "{}");
        assert_eq!(strip_backticks("`"), "`");
        assert_eq!(strip_backticks("`open"), "`open");
    }

    #[test]
    fn test_extract_json_span_from_prose() {
        let text = "Here you go: {\"a\": true} Hope that helps!";
        assert_eq!(extract_json_span(text), Some("{\"a\": true}"));
    }

    #[test]
    fn test_extract_json_span_array() {
        assert_eq!(extract_json_span("gaps: [\"x\", \"y\"]."), Some("[\"x\", \"y\"]"));
    }

    #[test]
    fn test_extract_json_span_skips_unclosed_opener() {
        // The `{` has no closing brace, so the scan moves on to the array.
        assert_eq!(extract_json_span("a { b [1] c"), Some("[1]"));
    }

    #[test]
    fn test_extract_json_span_is_first_to_last() {
        let text = "{\"a\": 1} and {\"b\": 2}";
        assert_eq!(extract_json_span(text), Some(text));
    }

    #[test]
    fn test_extract_json_span_none() {
        assert_eq!(extract_json_span("gibberish"), None);
        assert_eq!(extract_json_span("} backwards {"), None);
    }

    #[test]
    fn test_quote_single_keys() {
        assert_eq!(quote_single_keys("{'a': 1, 'b c': 2}"), "{\"a\": 1, \"b c\": 2}");
    }

    #[test]
    fn test_lowercase_booleans() {
        assert_eq!(
            lowercase_booleans("{\"a\": True, \"b\":False}"),
            "{\"a\": true, \"b\": false}"
        );
        assert_eq!(lowercase_booleans("{\"a\": Trueish}"), "{\"a\": Trueish}");
    }

    #[test]
    fn test_recover_feedback() {
        assert_eq!(
            recover_feedback("not json but \"feedback\": \"try again\""),
            Some("try again".to_string())
        );
        assert_eq!(recover_feedback("\"feedback\": 42"), None);
        assert_eq!(
            recover_feedback(r#"oops "feedback": "say \"hi\" now\n""#),
            Some("say \"hi\" now\n".to_string())
        );
        assert_eq!(recover_feedback("nothing here"), None);
    }
}
