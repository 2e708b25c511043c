//! Captured form submissions

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A captured contact-form submission.
///
/// Holds everything a future delivery path needs; until one exists the
/// record only lives in the handler's capture log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// Unique identifier
    pub id: String,
    /// Field name to value; later values win for repeated names
    pub fields: HashMap<String, String>,
    /// When the submission was captured
    pub received_at: DateTime<Utc>,
}

impl Submission {
    /// Fold raw field pairs into a submission record.
    pub fn capture(pairs: &[(String, String)]) -> Self {
        let mut fields = HashMap::new();
        for (name, value) in pairs {
            fields.insert(name.clone(), value.clone());
        }

        Self {
            id: Uuid::new_v4().to_string(),
            fields,
            received_at: Utc::now(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
