/// User domain type
use serde::{Deserialize, Serialize};

/// A searchable user, as it travels over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    /// Unique within a dataset
    pub id: i64,

    /// First and last name joined by a single space
    pub name: String,

    /// Age in years
    pub age: u32,

    /// Free-form description
    pub about: String,

    /// Not validated
    pub gender: String,
}

impl User {
    /// Build the display name from its parts
    pub fn display_name(first_name: &str, last_name: &str) -> String {
        format!("{first_name} {last_name}")
    }

    /// Whether `query` occurs in the name or the about text (case-sensitive)
    pub fn matches(&self, query: &str) -> bool {
        self.name.contains(query) || self.about.contains(query)
    }
}
