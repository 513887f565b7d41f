//! API request and response types

use leitner_core::{Card, Category, NewCard};
use serde::{Deserialize, Serialize};

/// Card as exposed on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardResponse {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub category: Category,
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self {
            id: card.id.to_string(),
            question: card.question,
            answer: card.answer,
            tag: card.tag,
            category: card.category,
        }
    }
}

/// Convert a list of cards for a response body
pub fn to_responses(cards: Vec<Card>) -> Vec<CardResponse> {
    cards.into_iter().map(CardResponse::from).collect()
}

// Card types
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateCardRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

impl CreateCardRequest {
    /// Missing fields become empty strings and fail core validation.
    pub fn into_new_card(self) -> NewCard {
        NewCard {
            question: self.question.unwrap_or_default(),
            answer: self.answer.unwrap_or_default(),
            tag: self.tag,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AnswerRequest {
    #[serde(rename = "isValid", default)]
    pub is_valid: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use leitner_core::CardId;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_card_response_omits_missing_tag() {
        let card = Card::create(CardId::from("c1"), NewCard::new("Q?", "A", None::<String>)).unwrap();
        let value = serde_json::to_value(CardResponse::from(card)).unwrap();
        assert_eq!(
            value,
            json!({ "id": "c1", "question": "Q?", "answer": "A", "category": "FIRST" })
        );
    }

    #[test]
    fn test_card_response_includes_tag() {
        let card = Card::create(CardId::from("c2"), NewCard::new("Q?", "A", Some("OOP"))).unwrap();
        let value = serde_json::to_value(CardResponse::from(card)).unwrap();
        assert_eq!(value["tag"], "OOP");
    }

    #[test]
    fn test_answer_request_uses_camel_case() {
        let request: AnswerRequest = serde_json::from_value(json!({ "isValid": true })).unwrap();
        assert_eq!(request.is_valid, Some(true));

        let empty: AnswerRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.is_valid, None);
    }

    #[test]
    fn test_create_request_missing_fields_become_blank() {
        let request: CreateCardRequest =
            serde_json::from_value(json!({ "answer": "A", "tag": "Tag" })).unwrap();
        let new_card = request.into_new_card();
        assert_eq!(new_card.question, "");
        assert!(new_card.validate().is_err());
    }
}
