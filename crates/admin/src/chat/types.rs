//! Chat API request and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_data: Option<ContextData>,
}

/// Extra context slots the chat API accepts alongside a query.
///
/// The API requires the three slots to be present; each currently carries a
/// single empty object.
#[derive(Debug, Clone, Serialize)]
pub struct ContextData {
    #[serde(rename = "additionalProp1")]
    pub additional_prop1: Vec<Map<String, Value>>,
    #[serde(rename = "additionalProp2")]
    pub additional_prop2: Vec<Map<String, Value>>,
    #[serde(rename = "additionalProp3")]
    pub additional_prop3: Vec<Map<String, Value>>,
}

impl Default for ContextData {
    fn default() -> Self {
        Self {
            additional_prop1: vec![Map::new()],
            additional_prop2: vec![Map::new()],
            additional_prop3: vec![Map::new()],
        }
    }
}

impl ChatRequest {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            context_data: Some(ContextData::default()),
        }
    }
}

/// Body returned by `POST /chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_wire_format() {
        let body = serde_json::to_value(ChatRequest::new("where is order 17?")).unwrap();
        assert_eq!(
            body,
            json!({
                "query": "where is order 17?",
                "context_data": {
                    "additionalProp1": [{}],
                    "additionalProp2": [{}],
                    "additionalProp3": [{}]
                }
            })
        );
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let response: ChatResponse =
            serde_json::from_value(json!({"response": "In transit", "latency_ms": 12})).unwrap();
        assert_eq!(response.response, "In transit");
    }
}
