use crate::rules::{AnswerMap, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

/// Represents one run's answer payload, matching the expected JSON format
/// for a submission: field id to scalar or array.
#[derive(Serialize, Deserialize, Debug)]
pub struct SampleAnswers {
    pub answers: HashMap<String, serde_json::Value>,
}

impl SampleAnswers {
    /// Load sample answers from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let data = serde_json::from_str(&content)?;
        Ok(data)
    }

    /// Creates default mock answers when no file is provided.
    pub fn default() -> Self {
        let mut answers = HashMap::new();
        answers.insert("age".to_string(), serde_json::json!(65));
        answers.insert("plan".to_string(), serde_json::json!("basic"));
        answers.insert("budget".to_string(), serde_json::json!(250));
        answers.insert(
            "coverage".to_string(),
            serde_json::json!(["dental", "vision"]),
        );

        Self { answers }
    }

    /// Lowers the raw JSON payload into the typed answer map.
    pub fn to_answer_map(&self) -> AnswerMap {
        self.answers
            .iter()
            .map(|(field, raw)| (field.clone(), Value::from(raw)))
            .collect()
    }
}
