//! Section display metadata

use serde::{Deserialize, Serialize};

/// Static display metadata for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    /// Header title shown while the section is active
    pub title: String,
    /// Header subtitle
    pub subtitle: String,
    /// Browser tab title
    pub page_title: String,
}

impl SectionDescriptor {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        page_title: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            page_title: page_title.into(),
        }
    }
}
