use serde::{Deserialize, Serialize};

/// One validated row of a remote file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub text: String,
    pub number: i64,
    pub hex: String,
}

/// Parsed content of one remote file. `error` is only ever set together with
/// an empty `lines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    pub file: String,
    pub lines: Vec<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileResult {
    pub fn success(file: impl Into<String>, lines: Vec<Record>) -> Self {
        Self {
            file: file.into(),
            lines,
            error: None,
        }
    }

    pub fn failure(file: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            lines: Vec::new(),
            error: Some(error.into()),
        }
    }

    /// True when the file should appear in an aggregate response.
    pub fn has_records(&self) -> bool {
        self.error.is_none() && !self.lines.is_empty()
    }
}

/// `{ "files": [...] }`, shared by the upstream listing and `GET /files`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListing {
    pub files: Vec<String>,
}
