use lazy_static::lazy_static;
use regex::Regex;

use super::LlmResponse;

lazy_static! {
    /// Regex for trailing commas before } or ]
    static ref TRAILING_COMMA_RE: Regex = Regex::new(r",(\s*[}\]])").unwrap();

    /// Regex for JavaScript string concatenation ("str1" + "str2")
    static ref JS_STRING_CONCAT_RE: Regex = Regex::new(r#""\s*\+\s*""#).unwrap();
}

/// Extract JSON string from model output (handles multiple formats)
///
/// Tries in order:
/// 1. JSON in markdown code block: ```json ... ```
/// 2. Generic markdown code block: ``` ... ```
/// 3. Plain JSON starting with {
/// 4. JSON embedded anywhere in text (first { to last })
pub fn extract_json_string(text: &str) -> Result<String, String> {
    if text.contains("```json") {
        return text
            .split("```json")
            .nth(1)
            .and_then(|s| s.split("```").next())
            .map(|s| s.trim().to_string())
            .ok_or_else(|| "Failed to extract JSON from markdown code block".to_string());
    }

    if text.contains("```") {
        if let Some(start) = text.find("```") {
            let block_start = start + 3;
            // Skip optional language identifier on the same line
            if let Some(newline_offset) = text[block_start..].find('\n') {
                let json_start = block_start + newline_offset + 1;
                if let Some(end_offset) = text[json_start..].find("```") {
                    return Ok(text[json_start..json_start + end_offset].trim().to_string());
                }
            }
        }
    }

    let trimmed = text.trim();
    if trimmed.starts_with('{') {
        return Ok(trimmed.to_string());
    }

    let start = text
        .find('{')
        .ok_or_else(|| "No JSON object found in response".to_string())?;
    let end = text
        .rfind('}')
        .ok_or_else(|| "Incomplete JSON object in response".to_string())?;

    if start < end {
        Ok(text[start..=end].to_string())
    } else {
        Err("Invalid JSON boundaries in response".to_string())
    }
}

/// Fix common structural mistakes in model-emitted JSON: trailing commas and
/// JavaScript-style string concatenation.
fn apply_quick_fixes(json_str: &str) -> String {
    let fixed = JS_STRING_CONCAT_RE.replace_all(json_str, "").to_string();
    TRAILING_COMMA_RE.replace_all(&fixed, "$1").to_string()
}

/// Attempt to repair JSON using the llm_json crate
fn repair_json(json_str: &str) -> Option<String> {
    let options = llm_json::RepairOptions::default();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        llm_json::repair_json(json_str, &options)
    }));

    match result {
        Ok(Ok(repaired)) => Some(repaired),
        Ok(Err(e)) => {
            tracing::debug!("JSON repair failed: {:?}", e);
            None
        }
        Err(_) => {
            tracing::warn!("JSON repair panicked");
            None
        }
    }
}

/// Try to parse text as the target type using multiple strategies
///
/// Pipeline: extract JSON string, direct parse, quick fixes, llm_json repair.
fn try_parse<T>(text: &str) -> Result<T, String>
where
    T: LlmResponse,
{
    let json_str = extract_json_string(text)?;

    if let Ok(parsed) = serde_json::from_str::<T>(&json_str) {
        return Ok(parsed);
    }

    let fixed_json = apply_quick_fixes(&json_str);
    if let Ok(parsed) = serde_json::from_str::<T>(&fixed_json) {
        return Ok(parsed);
    }

    if let Some(repaired) = repair_json(&json_str) {
        if let Ok(parsed) = serde_json::from_str::<T>(&repaired) {
            return Ok(parsed);
        }
    }

    Err(format!(
        "Failed to parse JSON after all repair attempts. Original: {}",
        json_str.chars().take(200).collect::<String>()
    ))
}

/// Parse LLM response text with graceful fallback
///
/// Attempts to parse the text into the target type; if every strategy fails
/// the type's default value is returned with the error message attached via
/// [`LlmResponse::mark_as_fallback`].
pub fn parse_with_fallback<T>(text: &str) -> T
where
    T: LlmResponse,
{
    match try_parse::<T>(text) {
        Ok(parsed) => parsed,
        Err(error_msg) => {
            tracing::warn!("LLM response parsing failed, using fallback: {}", error_msg);
            let mut fallback = T::default();
            fallback.mark_as_fallback(error_msg);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::JsonSchema;
    use serde::Deserialize;

    fn default_true() -> bool {
        true
    }

    #[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
    struct TranslationReply {
        pub sql: String,
        pub explanation: String,

        #[serde(default = "default_true")]
        #[schemars(skip)]
        pub is_llm_success: bool,

        #[serde(skip_serializing_if = "Option::is_none")]
        #[schemars(skip)]
        pub llm_error_message: Option<String>,
    }

    impl LlmResponse for TranslationReply {
        fn mark_as_fallback(&mut self, error_message: String) {
            self.is_llm_success = false;
            self.llm_error_message = Some(error_message);
        }

        fn is_success(&self) -> bool {
            self.is_llm_success
        }
    }

    #[test]
    fn test_extract_json_string_with_json_code_block() {
        let response = r#"Here is the translation:

```json
{
    "sql": "SELECT * FROM accounts",
    "explanation": "Selects every account"
}
```

Let me know if you need anything else."#;

        let json = extract_json_string(response).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.ends_with('}'));
        assert!(json.contains("\"sql\""));
    }

    #[test]
    fn test_extract_json_string_with_generic_code_block() {
        let response = "```\n{\"sql\": \"SELECT 1\", \"explanation\": \"one\"}\n```";

        let json = extract_json_string(response).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.ends_with('}'));
    }

    #[test]
    fn test_extract_json_string_embedded() {
        let response = "Sure! {\"sql\": \"SELECT 1\", \"explanation\": \"one\"} Hope that helps.";

        let json = extract_json_string(response).unwrap();
        assert_eq!(json, r#"{"sql": "SELECT 1", "explanation": "one"}"#);
    }

    #[test]
    fn test_extract_json_string_no_json() {
        let result = extract_json_string("I cannot translate that request.");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_with_fallback_valid_json() {
        let input = r#"{"sql": "SELECT name FROM customers", "explanation": "Lists customer names"}"#;

        let result: TranslationReply = parse_with_fallback(input);

        assert!(result.is_success());
        assert_eq!(result.sql, "SELECT name FROM customers");
        assert_eq!(result.explanation, "Lists customer names");
        assert!(result.llm_error_message.is_none());
    }

    #[test]
    fn test_parse_with_fallback_trailing_comma() {
        let input = r#"{"sql": "SELECT 1", "explanation": "one",}"#;

        let result: TranslationReply = parse_with_fallback(input);

        assert!(result.is_success());
        assert_eq!(result.sql, "SELECT 1");
    }

    #[test]
    fn test_parse_with_fallback_string_concat() {
        let input = r#"{"sql": "SELECT " + "1", "explanation": "one"}"#;

        let result: TranslationReply = parse_with_fallback(input);

        assert!(result.is_success());
        assert_eq!(result.sql, "SELECT 1");
    }

    #[test]
    fn test_parse_with_fallback_invalid_returns_fallback() {
        let result: TranslationReply = parse_with_fallback("This is not JSON at all");

        assert!(!result.is_success());
        assert!(result.llm_error_message.is_some());
        assert!(result.sql.is_empty());
    }

    #[test]
    fn test_json_schema_string_skips_internal_fields() {
        let schema = TranslationReply::json_schema_string();

        assert!(schema.contains("sql"));
        assert!(schema.contains("explanation"));
        assert!(!schema.contains("is_llm_success"));
        assert!(!schema.contains("llm_error_message"));
    }
}
