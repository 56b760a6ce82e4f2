//! Static dataset loading.
//!
//! The candidate collection lives in a JSON file that is read and
//! deserialized exactly once at startup; from then on the engine treats it
//! as a read-only in-memory list. The path is resolved CLI flag > settings
//! file > bundled sample.

use std::path::{Path, PathBuf};

use crate::state::Candidate;

/// Result alias matching the application-wide error convention.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Dataset file shipped with the repository, used when nothing overrides it.
const SAMPLE_RELATIVE: &str = "data/candidates.sample.json";

/// What: Resolve the dataset path from the override chain.
///
/// Inputs:
/// - `cli`: `--data` value, when given
/// - `settings`: `data_path` from the settings file, when given
///
/// Output:
/// - First path present in CLI > settings > bundled sample order.
#[must_use]
pub fn resolve_data_path(cli: Option<PathBuf>, settings: Option<PathBuf>) -> PathBuf {
    cli.or(settings)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(SAMPLE_RELATIVE))
}

/// What: Load and deserialize the candidate dataset.
///
/// Inputs:
/// - `path`: Location of the JSON file (array of candidate objects)
///
/// Output:
/// - The full candidate collection, or an error when the file is missing or
///   malformed. Startup surfaces that error; it is never a panic.
pub fn load_candidates(path: &Path) -> Result<Vec<Candidate>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read dataset {}: {e}", path.display()))?;
    let candidates: Vec<Candidate> = serde_json::from_str(&text)
        .map_err(|e| format!("cannot parse dataset {}: {e}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        count = candidates.len(),
        "dataset loaded"
    );
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    /// What: A valid dataset file parses into candidate records
    ///
    /// - Input: Temp file with two JSON records in dataset shape
    /// - Output: Two candidates with fields mapped, hasRFC honored
    fn data_load_valid_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"[
              {{"id":1,"name":"Ana Torres","email":"ana@example.com","role":"Engineer",
               "experienceYears":2,"hasRFC":true,"isMigrant":false,
               "createdAt":"2024-01-01T00:00:00Z"}},
              {{"id":2,"name":"Bruno Lima","email":"bruno@example.com","role":"Sales",
               "experienceYears":5,"hasRFC":false,"isMigrant":true,
               "createdAt":"2024-06-01T12:30:00Z"}}
            ]"#
        )
        .unwrap();
        let cands = load_candidates(f.path()).unwrap();
        assert_eq!(cands.len(), 2);
        assert_eq!(cands[0].name, "Ana Torres");
        assert!(cands[0].has_rfc);
        assert!(!cands[0].is_migrant);
        assert_eq!(cands[1].experience_years, 5);
    }

    #[test]
    /// What: Missing and malformed files produce errors, not panics
    ///
    /// - Input: Nonexistent path; temp file with broken JSON
    /// - Output: Err with the offending path in the message
    fn data_load_missing_or_malformed_errors() {
        let err = load_candidates(Path::new("/nonexistent/cands.json")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));

        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{{ not json").unwrap();
        let err = load_candidates(f.path()).unwrap_err();
        assert!(err.to_string().contains("cannot parse"));
    }

    #[test]
    /// What: Path resolution prefers CLI, then settings, then the sample
    ///
    /// - Input: Each combination of overrides
    /// - Output: CLI wins; settings next; sample path ends with the bundled name
    fn data_resolve_path_override_chain() {
        let cli = PathBuf::from("/cli.json");
        let cfg = PathBuf::from("/cfg.json");
        assert_eq!(resolve_data_path(Some(cli.clone()), Some(cfg.clone())), cli);
        assert_eq!(resolve_data_path(None, Some(cfg.clone())), cfg);
        assert!(
            resolve_data_path(None, None)
                .ends_with("data/candidates.sample.json")
        );
    }

    #[test]
    /// What: The bundled sample dataset is valid and non-empty
    ///
    /// - Input: data/candidates.sample.json from the repository
    /// - Output: Parses with unique ids and at least one of each role flag
    fn data_bundled_sample_parses() {
        let cands = load_candidates(&resolve_data_path(None, None)).unwrap();
        assert!(!cands.is_empty());
        let mut ids: Vec<u64> = cands.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cands.len());
        assert!(cands.iter().any(|c| c.has_rfc));
        assert!(cands.iter().any(|c| c.is_migrant));
    }
}
