//! Teacher credential loading
//!
//! The credentials file is read once at startup. A file that cannot be read or
//! parsed leaves the service with no teachers at all, so admin access is
//! denied rather than granted by accident. Individual entries lacking a
//! username or password are skipped.

use std::path::Path;

use tracing::{info, warn};

use crate::models::{CredentialFile, TeacherCredential};

/// Load teacher credentials from a JSON file
///
/// Missing, unreadable or malformed files yield an empty list.
pub fn load(path: &Path) -> Vec<TeacherCredential> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!(
                "Failed to read teacher credentials from {}: {}",
                path.display(),
                e
            );
            return Vec::new();
        }
    };

    match parse(&contents) {
        Ok(teachers) => {
            info!(
                "Loaded {} teacher credential(s) from {}",
                teachers.len(),
                path.display()
            );
            teachers
        }
        Err(e) => {
            warn!(
                "Malformed teacher credentials in {}: {}",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

/// Parse the `{"teachers": [...]}` document
pub fn parse(contents: &str) -> Result<Vec<TeacherCredential>, serde_json::Error> {
    let file: CredentialFile = serde_json::from_str(contents)?;

    let teachers = file
        .teachers
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let credential = TeacherCredential::from_entry(entry);
            if credential.is_none() {
                warn!(
                    "Skipping teacher entry {}: username and password must be strings",
                    index
                );
            }
            credential
        })
        .collect();

    Ok(teachers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "mergington-{}-{}.json",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).expect("Failed to write scratch file");
        path
    }

    #[test]
    fn test_load_valid_file() {
        let path = scratch_file(
            "valid",
            r#"{"teachers": [
                {"username": "mrodriguez", "password": "art123"},
                {"username": "mchen", "password": "chess456"}
            ]}"#,
        );

        let teachers = load(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(
            teachers,
            vec![
                TeacherCredential {
                    username: "mrodriguez".to_string(),
                    password: "art123".to_string(),
                },
                TeacherCredential {
                    username: "mchen".to_string(),
                    password: "chess456".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_missing_file_is_empty() {
        let path = std::env::temp_dir().join("mergington-does-not-exist.json");
        assert!(load(&path).is_empty());
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let path = scratch_file("malformed", "{\"teachers\": [");
        let teachers = load(&path);
        std::fs::remove_file(&path).ok();

        assert!(teachers.is_empty());
    }

    #[test]
    fn test_parse_without_teachers_key() {
        assert_eq!(parse("{}").unwrap(), Vec::new());
        assert!(parse("[]").is_err());
    }

    #[test]
    fn test_incomplete_entry_keeps_siblings() {
        let path = scratch_file(
            "incomplete",
            r#"{"teachers": [
                {"username": "mchen", "password": "chess456"},
                {"username": "broken"},
                {"username": "numeric", "password": 1234},
                "not-an-object"
            ]}"#,
        );

        let teachers = load(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(
            teachers,
            vec![TeacherCredential {
                username: "mchen".to_string(),
                password: "chess456".to_string(),
            }]
        );
    }
}
