//! Shell configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Location the page is served from
    pub base_url: String,
    /// Section adopted when the URL names none
    pub home_section: String,
    /// Field names the contact form starts with; empty means no form
    pub contact_form_fields: Vec<String>,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            home_section: "home".to_string(),
            contact_form_fields: vec![
                "name".to_string(),
                "email".to_string(),
                "message".to_string(),
            ],
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("https://docs.example.com/")
    }
}
