//! Teacher credential model

use serde::Deserialize;
use serde_json::Value;

/// Teacher login entry, stored and compared as plain text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherCredential {
    pub username: String,
    pub password: String,
}

impl TeacherCredential {
    /// Build a credential from one `teachers` entry
    ///
    /// Returns `None` unless both `username` and `password` are strings.
    pub fn from_entry(entry: &Value) -> Option<Self> {
        Some(Self {
            username: entry.get("username")?.as_str()?.to_string(),
            password: entry.get("password")?.as_str()?.to_string(),
        })
    }
}

/// On-disk layout of the credentials file
///
/// Entries stay untyped so one incomplete teacher does not invalidate the rest.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialFile {
    #[serde(default)]
    pub teachers: Vec<Value>,
}
