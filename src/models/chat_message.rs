use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    #[serde(rename = "usuario")]
    User,
    #[serde(rename = "admin")]
    Admin,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Sender::User => "usuario",
            Sender::Admin => "admin",
        }
    }
}

impl FromStr for Sender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "usuario" => Ok(Sender::User),
            "admin" => Ok(Sender::Admin),
            other => Err(Error::Internal(format!("Unknown message sender: {}", other))),
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a ticket thread, serialized with the column names of
/// `mensagens_chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub feedback_id: i64,
    #[serde(rename = "remetente")]
    pub sender: Sender,
    #[serde(rename = "mensagem")]
    pub body: String,
    #[serde(rename = "data")]
    pub sent_at: DateTime<Utc>,
    #[serde(rename = "lida")]
    pub read: bool,
}

#[derive(Debug, FromRow)]
pub struct ChatMessageRow {
    pub id: i64,
    pub feedback_id: i64,
    pub remetente: String,
    pub mensagem: String,
    pub data: DateTime<Utc>,
    pub lida: bool,
}

impl TryFrom<ChatMessageRow> for ChatMessage {
    type Error = Error;

    fn try_from(row: ChatMessageRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            feedback_id: row.feedback_id,
            sender: row.remetente.parse()?,
            body: row.mensagem,
            sent_at: row.data,
            read: row.lida,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(remetente: &str) -> ChatMessageRow {
        ChatMessageRow {
            id: 7,
            feedback_id: 42,
            remetente: remetente.to_string(),
            mensagem: "hi".to_string(),
            data: DateTime::parse_from_rfc3339("2026-03-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            lida: false,
        }
    }

    #[test]
    fn sender_round_trips_through_persisted_form() {
        assert_eq!("usuario".parse::<Sender>().unwrap(), Sender::User);
        assert_eq!("admin".parse::<Sender>().unwrap(), Sender::Admin);
        assert_eq!(Sender::User.as_str(), "usuario");
        assert!("user".parse::<Sender>().is_err());
    }

    #[test]
    fn message_serializes_with_column_names() {
        let msg = ChatMessage::try_from(row("usuario")).unwrap();
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "feedback_id": 42,
                "remetente": "usuario",
                "mensagem": "hi",
                "data": "2026-03-01T10:00:00Z",
                "lida": false,
            })
        );
    }

    #[test]
    fn unknown_sender_in_row_is_rejected() {
        let err = ChatMessage::try_from(row("bot")).unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }
}
