//! Window history emulation
//!
//! Mirrors the browser history contract the shell depends on: a stack of
//! entries with a cursor, each entry holding the location URL and an
//! optional state payload. Pushing truncates the forward stack; replace
//! swaps the current entry in place; traversal hands back the payload at
//! the new position the way a popstate event delivers it.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::Result;

/// State payload attached to each history entry, used to recover the
/// active section on back/forward traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub section: String,
}

impl HistoryRecord {
    pub fn new(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
        }
    }
}

/// History operations the navigation controller performs.
pub trait HistoryDriver {
    /// Append a new entry carrying `record`, with the location fragment set.
    fn push(&mut self, record: HistoryRecord, fragment: &str);

    /// Swap the current entry for one carrying `record` and the fragment.
    fn replace(&mut self, record: HistoryRecord, fragment: &str);

    /// Fragment of the current location, without the leading `#`.
    /// Empty fragments count as absent.
    fn fragment(&self) -> Option<String>;
}

#[derive(Debug, Clone)]
struct HistoryEntry {
    url: Url,
    record: Option<HistoryRecord>,
}

/// In-memory history stack. Always holds at least one entry: the
/// location the page was loaded from, with no payload attached.
#[derive(Debug, Clone)]
pub struct WindowHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl WindowHistory {
    pub fn new(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url)?;
        Ok(Self {
            entries: vec![HistoryEntry { url, record: None }],
            cursor: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current_url(&self) -> &Url {
        &self.entries[self.cursor].url
    }

    pub fn current_record(&self) -> Option<&HistoryRecord> {
        self.entries[self.cursor].record.as_ref()
    }

    /// Move back one entry. Returns the payload at the new position, or
    /// `None` when there is nothing behind the cursor.
    pub fn back(&mut self) -> Option<Option<HistoryRecord>> {
        if self.cursor == 0 {
            return None;
        }

        self.cursor -= 1;
        tracing::debug!(cursor = self.cursor, "History back");
        Some(self.entries[self.cursor].record.clone())
    }

    /// Move forward one entry. Returns the payload at the new position,
    /// or `None` when the cursor is already at the top of the stack.
    pub fn forward(&mut self) -> Option<Option<HistoryRecord>> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }

        self.cursor += 1;
        tracing::debug!(cursor = self.cursor, "History forward");
        Some(self.entries[self.cursor].record.clone())
    }
}

impl HistoryDriver for WindowHistory {
    fn push(&mut self, record: HistoryRecord, fragment: &str) {
        let mut url = self.entries[self.cursor].url.clone();
        url.set_fragment(Some(fragment));

        // Entries ahead of the cursor are unreachable after a push
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry {
            url,
            record: Some(record),
        });
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, record: HistoryRecord, fragment: &str) {
        let entry = &mut self.entries[self.cursor];
        entry.url.set_fragment(Some(fragment));
        entry.record = Some(record);
    }

    fn fragment(&self) -> Option<String> {
        self.entries[self.cursor]
            .url
            .fragment()
            .filter(|f| !f.is_empty())
            .map(str::to_string)
    }
}
