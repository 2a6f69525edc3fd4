use serde::{Deserialize, Serialize};

/// POST /api/chat request
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// POST /api/chat response
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// GET /health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_missing_message() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(req.message.is_none());
    }

    #[test]
    fn test_chat_request_null_message() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": null}"#).unwrap();
        assert!(req.message.is_none());
    }

    #[test]
    fn test_chat_response_serialization() {
        let json = serde_json::to_string(&ChatResponse {
            reply: "hi".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"reply":"hi"}"#);
    }
}
