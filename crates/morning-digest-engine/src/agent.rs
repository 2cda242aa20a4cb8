//! Talking to the agent-invocation service: building the digest instruction
//! and digging the analysis text out of its loosely shaped response.

use std::collections::VecDeque;

use serde_json::Value;

use crate::error::DigestError;

/// Keys searched, in order, when nothing in the known locations holds text.
const TEXT_KEYS: [&str; 5] = ["text", "content", "message", "response", "result"];

const DEFAULT_FAILURE: &str = "Failed to get analysis from agent.";

/// Builds the natural-language instruction sent to the agent.
pub fn digest_instruction(tickers: &[String]) -> Result<String, DigestError> {
    if tickers.is_empty() {
        return Err(DigestError::EmptyWatchlist);
    }
    Ok(format!(
        "Analyze the following stocks and provide a morning digest summary: {}. \
         Include current price movements, technical indicators, news sentiment, \
         and buy/hold/sell recommendations for each. Do NOT send any email, \
         just provide the analysis.",
        tickers.join(", ")
    ))
}

/// Parses a raw response body and extracts the analysis text.
pub fn extract_analysis_from_str(body: &str) -> Result<String, DigestError> {
    let payload: Value = serde_json::from_str(body)?;
    extract_analysis(&payload)
}

/// Extracts the analysis text from an agent response payload.
///
/// Lookup order: `response.message`, `response.result` as a string, then
/// `response.result.{response,text,raw_text}`, then any text found under
/// `response`, and finally `raw_response`.
pub fn extract_analysis(payload: &Value) -> Result<String, DigestError> {
    if payload.get("success").and_then(Value::as_bool) != Some(true) {
        let msg = payload
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_FAILURE);
        return Err(DigestError::AgentFailed(msg.to_string()));
    }

    let response = payload.get("response");
    let mut text = from_response(response).unwrap_or_default();

    if text.is_empty()
        && let Some(raw) = payload.get("raw_response")
    {
        text = from_raw_response(raw).unwrap_or_default();
    }

    if text.is_empty() {
        return Err(DigestError::EmptyAnalysis);
    }
    Ok(text)
}

fn from_response(response: Option<&Value>) -> Option<String> {
    let response = response?;

    if let Some(msg) = response.get("message").and_then(Value::as_str)
        && !msg.is_empty()
    {
        return Some(msg.to_string());
    }

    let result = response.get("result");
    if let Some(r) = result.and_then(Value::as_str) {
        return Some(r.to_string());
    }
    if let Some(r) = result {
        for key in ["response", "text", "raw_text"] {
            if let Some(s) = r.get(key).and_then(Value::as_str)
                && !s.is_empty()
            {
                return Some(s.to_string());
            }
        }
    }

    find_text(response)
}

fn from_raw_response(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(Value::String(inner)) => Some(inner),
            Ok(parsed) => parsed
                .get("response")
                .and_then(Value::as_str)
                .map(str::to_string),
            Err(_) => Some(s.clone()),
        },
        other => other
            .get("response")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

/// Breadth-first search for the first non-empty string under one of
/// [`TEXT_KEYS`]. A bare string value counts as text.
fn find_text(root: &Value) -> Option<String> {
    let mut queue = VecDeque::from([root]);
    while let Some(v) = queue.pop_front() {
        match v {
            Value::String(s) if !s.is_empty() => return Some(s.clone()),
            Value::Object(map) => {
                for key in TEXT_KEYS {
                    if let Some(child) = map.get(key) {
                        queue.push_back(child);
                    }
                }
            }
            Value::Array(items) => queue.extend(items.iter()),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tickers(ts: &[&str]) -> Vec<String> {
        ts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn instruction_lists_tickers() {
        let msg = digest_instruction(&tickers(&["AAPL", "MSFT"])).unwrap();
        assert!(msg.starts_with(
            "Analyze the following stocks and provide a morning digest summary: AAPL, MSFT. Include"
        ));
        assert!(msg.ends_with("Do NOT send any email, just provide the analysis."));
    }

    #[test]
    fn instruction_requires_tickers() {
        assert!(matches!(
            digest_instruction(&[]),
            Err(DigestError::EmptyWatchlist)
        ));
    }

    #[test]
    fn message_wins_over_result() {
        let p = json!({"success": true, "response": {"message": "# From message", "result": "ignored"}});
        assert_eq!(extract_analysis(&p).unwrap(), "# From message");
    }

    #[test]
    fn empty_message_falls_through_to_string_result() {
        let p = json!({"success": true, "response": {"message": "", "result": "plain result"}});
        assert_eq!(extract_analysis(&p).unwrap(), "plain result");
    }

    #[test]
    fn nested_result_fields() {
        let p = json!({"success": true, "response": {"result": {"text": "from text"}}});
        assert_eq!(extract_analysis(&p).unwrap(), "from text");

        let p = json!({"success": true, "response": {"result": {"raw_text": "from raw_text"}}});
        assert_eq!(extract_analysis(&p).unwrap(), "from raw_text");

        let p = json!({"success": true, "response": {"result": {"response": "first", "text": "second"}}});
        assert_eq!(extract_analysis(&p).unwrap(), "first");
    }

    #[test]
    fn deep_search_finds_content() {
        let p = json!({"success": true, "response": {"result": {"data": 1, "content": [{"text": "deep"}]}}});
        assert_eq!(extract_analysis(&p).unwrap(), "deep");
    }

    #[test]
    fn raw_response_json_string() {
        let p = json!({"success": true, "response": {}, "raw_response": "{\"response\": \"raw json\"}"});
        assert_eq!(extract_analysis(&p).unwrap(), "raw json");
    }

    #[test]
    fn raw_response_unparseable_string_is_used_verbatim() {
        let p = json!({"success": true, "raw_response": "## not json"});
        assert_eq!(extract_analysis(&p).unwrap(), "## not json");
    }

    #[test]
    fn raw_response_object() {
        let p = json!({"success": true, "response": null, "raw_response": {"response": "obj"}});
        assert_eq!(extract_analysis(&p).unwrap(), "obj");
    }

    #[test]
    fn failure_carries_service_error() {
        let p = json!({"success": false, "error": "quota exceeded"});
        let err = extract_analysis(&p).unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn failure_without_error_uses_default_message() {
        let err = extract_analysis(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), DEFAULT_FAILURE);
    }

    #[test]
    fn nothing_found_is_empty_analysis() {
        let p = json!({"success": true, "response": {"result": {"score": 3}}});
        assert!(matches!(extract_analysis(&p), Err(DigestError::EmptyAnalysis)));
    }

    #[test]
    fn invalid_body_is_reported() {
        assert!(matches!(
            extract_analysis_from_str("not json"),
            Err(DigestError::InvalidPayload(_))
        ));
    }
}
