//! JSON catalogue files.
//!
//! ```json
//! { "patterns": [ { "id": "...", "name": "...", "domain": "..." } ],
//!   "templates": [ { "id": "...", "domain": "...", "steps": [] } ] }
//! ```

use std::path::Path;

use reasonforge_core::{LibraryError, ReasoningPattern, ReasoningTemplate};
use serde::{Deserialize, Serialize};

/// Contents of a catalogue file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogueFile {
    #[serde(default)]
    pub patterns: Vec<ReasoningPattern>,

    #[serde(default)]
    pub templates: Vec<ReasoningTemplate>,
}

/// Counts reported after merging a catalogue file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub patterns_loaded: usize,
    pub templates_loaded: usize,
    pub rejected: usize,
}

impl CatalogueFile {
    /// Read and parse a catalogue file.
    pub fn read(path: &Path) -> Result<Self, LibraryError> {
        let content = std::fs::read_to_string(path).map_err(|e| LibraryError::CatalogueFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| LibraryError::CatalogueFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Check an entry before it enters the catalogue.
pub fn validate_entry(id: &str, domain: &str) -> Result<(), LibraryError> {
    if id.trim().is_empty() {
        return Err(LibraryError::InvalidEntry {
            id: id.to_string(),
            reason: "id must not be empty".into(),
        });
    }
    if domain.trim().is_empty() {
        return Err(LibraryError::InvalidEntry {
            id: id.to_string(),
            reason: "domain must not be empty".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_minimal_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"patterns":[{{"id":"p","name":"P","domain":"law"}}],"templates":[]}}"#
        )
        .unwrap();

        let parsed = CatalogueFile::read(file.path()).unwrap();
        assert_eq!(parsed.patterns.len(), 1);
        assert_eq!(parsed.patterns[0].domain, "law");
        assert_eq!(parsed.patterns[0].usage_count, 0);
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let err = CatalogueFile::read(Path::new("/nonexistent/catalogue.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalogue.json"));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            CatalogueFile::read(file.path()),
            Err(LibraryError::CatalogueFile { .. })
        ));
    }

    #[test]
    fn blank_ids_and_domains_fail_validation() {
        assert!(validate_entry("ok", "science").is_ok());
        assert!(validate_entry("  ", "science").is_err());
        assert!(validate_entry("ok", "").is_err());
    }
}
