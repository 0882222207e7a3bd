//! Loading of the user dataset.
//!
//! The dataset is an XML document with a `version` attribute on the root
//! element and one `<row>` per user:
//!
//! ```xml
//! <root version="1">
//!   <row>
//!     <id>0</id>
//!     <first_name>Boyd</first_name>
//!     <last_name>Wolf</last_name>
//!     <age>22</age>
//!     <about>...</about>
//!     <gender>male</gender>
//!   </row>
//! </root>
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use usersearch_core::User;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] quick_xml::DeError),
}

/// Users loaded from a dataset document, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub version: String,
    pub users: Vec<User>,
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(rename = "@version", default)]
    version: String,
    #[serde(rename = "row", default)]
    rows: Vec<RawUser>,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    id: i64,
    first_name: String,
    last_name: String,
    age: u32,
    #[serde(default)]
    about: String,
    #[serde(default)]
    gender: String,
}

impl From<RawUser> for User {
    fn from(raw: RawUser) -> Self {
        User {
            id: raw.id,
            name: User::display_name(&raw.first_name, &raw.last_name),
            age: raw.age,
            about: raw.about,
            gender: raw.gender,
        }
    }
}

/// Parse a dataset document.
pub fn parse_dataset(bytes: &[u8]) -> Result<Dataset, DatasetError> {
    let raw: RawDataset = quick_xml::de::from_reader(bytes)?;

    Ok(Dataset {
        version: raw.version,
        users: raw.rows.into_iter().map(User::from).collect(),
    })
}

/// Read and parse the dataset at `path`.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let bytes = std::fs::read(path.as_ref())?;
    let dataset = parse_dataset(&bytes)?;
    tracing::debug!(
        path = %path.as_ref().display(),
        version = %dataset.version,
        users = dataset.users.len(),
        "Loaded dataset"
    );
    Ok(dataset)
}
