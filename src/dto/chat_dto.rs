use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::chat_message::ChatMessage;
use crate::utils::validation::not_blank;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitReplyPayload {
    /// Absent and `null` both count as empty.
    #[serde(default)]
    #[validate(
        required(message = "Message cannot be empty"),
        custom(function = "not_blank")
    )]
    pub mensagem: Option<String>,
}

impl SubmitReplyPayload {
    pub fn text(&self) -> &str {
        self.mensagem.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct ThreadResponse {
    pub mensagens: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct SubmitReplyResponse {
    pub success: bool,
    pub message: String,
    pub mensagem: ChatMessage,
}

#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub unread_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_body_fails_validation() {
        let missing: SubmitReplyPayload = serde_json::from_str("{}").unwrap();
        assert!(missing.validate().is_err());
        assert_eq!(missing.text(), "");

        let null: SubmitReplyPayload = serde_json::from_str(r#"{"mensagem":null}"#).unwrap();
        assert!(null.validate().is_err());

        let blank: SubmitReplyPayload = serde_json::from_str(r#"{"mensagem":"   "}"#).unwrap();
        assert!(blank.validate().is_err());

        let ok: SubmitReplyPayload =
            serde_json::from_str(r#"{"mensagem":"We'll look into it"}"#).unwrap();
        assert!(ok.validate().is_ok());
        assert_eq!(ok.text(), "We'll look into it");
    }
}
