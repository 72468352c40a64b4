use crate::types::{ChatReply, ClientError, Result};
use serde_json::{Map, Value};

/// Extracts the answer from a chat response body.
///
/// The body must be a JSON object. The answer is read from `response`, then
/// `content`; the first non-empty string wins. Anything else is a malformed
/// response.
pub fn normalize_reply(body: &str) -> Result<ChatReply> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ClientError::MalformedResponse(format!("Failed to parse reply: {}", e)))?;
    let Value::Object(fields) = value else {
        return Err(ClientError::MalformedResponse(
            "Reply is not a JSON object".into(),
        ));
    };

    let content = ["response", "content"]
        .into_iter()
        .filter_map(|key| fields.get(key))
        .find_map(non_empty_str)
        .ok_or_else(|| {
            ClientError::MalformedResponse("Reply has no `response` or `content` field".into())
        })?;

    Ok(ChatReply {
        content,
        conversation_id: conversation_id(&fields),
    })
}

fn conversation_id(fields: &Map<String, Value>) -> Option<String> {
    match fields.get("conversation_id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_empty_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}
