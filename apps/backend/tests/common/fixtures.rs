//! Test fixtures and factory functions for request bodies.

use serde_json::json;

/// Create a card creation request body.
pub fn create_card_request(question: &str, answer: &str, tag: Option<&str>) -> serde_json::Value {
    match tag {
        Some(t) => json!({ "question": question, "answer": answer, "tag": t }),
        None => json!({ "question": question, "answer": answer }),
    }
}

/// Create an answer request body.
pub fn answer_request(is_valid: bool) -> serde_json::Value {
    json!({ "isValid": is_valid })
}

/// Path of the answer endpoint for a card.
pub fn answer_path(card_id: &str) -> String {
    format!("/cards/{}/answer", card_id)
}
