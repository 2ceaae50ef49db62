use serde::{Deserialize, Serialize};

use crate::names;

#[derive(Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Payload for creating a question. Every field except `difficulty` is
/// required; a missing or mistyped field fails deserialization.
#[derive(Clone, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    #[serde(default = "default_difficulty")]
    pub difficulty: i64,
}

fn default_difficulty() -> i64 {
    names::DEFAULT_DIFFICULTY
}
