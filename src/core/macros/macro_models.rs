use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A canned reply that fires whenever `name` shows up inside a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macro {
    pub name: String,
    pub response: String,
    /// Admin who created the macro.
    pub created_by: u64,
    pub created_at: DateTime<Utc>,
}

impl Macro {
    pub fn new(name: impl Into<String>, response: impl Into<String>, created_by: u64) -> Self {
        Self {
            name: name.into(),
            response: response.into(),
            created_by,
            created_at: Utc::now(),
        }
    }

    /// Case-sensitive substring match, no word boundaries: "hi" matches "this".
    pub fn matches(&self, text: &str) -> bool {
        text.contains(self.name.as_str())
    }
}
