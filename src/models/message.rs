use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub text: String,
}

#[derive(Deserialize, Validate, Debug)]
pub struct CreateMessageRequest {
    pub id: Option<String>,
    #[validate(length(min = 1, message = "The message text must not be empty"))]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_deserializes_without_id() {
        let request: CreateMessageRequest = serde_json::from_str(r#"{"text": "Hello!"}"#).unwrap();
        assert_eq!(request.id, None);
        assert_eq!(request.text, "Hello!");
    }

    #[test]
    fn create_request_deserializes_with_id() {
        let request: CreateMessageRequest =
            serde_json::from_str(r#"{"id": "greeting", "text": "Hello!"}"#).unwrap();
        assert_eq!(request.id.as_deref(), Some("greeting"));
        assert_eq!(request.text, "Hello!");
    }

    #[test]
    fn create_request_rejects_missing_text() {
        let result = serde_json::from_str::<CreateMessageRequest>(r#"{"id": "greeting"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_request_rejects_empty_text_on_validation() {
        let request: CreateMessageRequest = serde_json::from_str(r#"{"text": ""}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn message_serializes_to_id_and_text() {
        let message = Message {
            id: "greeting".to_string(),
            text: "Hello!".to_string(),
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value, serde_json::json!({ "id": "greeting", "text": "Hello!" }));
    }
}
