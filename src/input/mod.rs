//! Input discovery: lists the export and roster directories and pairs files
//! by the two-character index near the end of their names.

use crate::model::{MetricsError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

const IGNORED_FILE: &str = "README.md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPair {
    pub index: String,
    pub export: PathBuf,
    pub roster: Option<PathBuf>,
}

/// The two characters right before the last five of `file_name`, so
/// `merge-requests-03.json` gives `03`.
pub fn file_index(file_name: &str) -> Option<&str> {
    let end = file_name.len().checked_sub(5)?;
    let start = end.checked_sub(2)?;
    file_name.get(start..end)
}

/// Regular files directly inside `dir`, keyed by [`file_index`].
pub fn list_indexed_files(dir: &Path) -> Result<BTreeMap<String, PathBuf>> {
    if !dir.is_dir() {
        return Err(MetricsError::InputDirMissing(dir.to_path_buf()));
    }

    let mut files = BTreeMap::new();
    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file());

    for entry in entries {
        let name = entry.file_name().to_string_lossy();
        if name == IGNORED_FILE {
            continue;
        }
        let Some(index) = file_index(&name) else {
            warn!("Skipping {}: no file index in its name", entry.path().display());
            continue;
        };
        let index = index.to_string();
        if let Some(previous) = files.insert(index.clone(), entry.path().to_path_buf()) {
            warn!(
                "{} replaces {} for index {}",
                entry.path().display(),
                previous.display(),
                index
            );
        }
    }
    Ok(files)
}

/// Pairs every export with the roster sharing its index, in index order.
pub fn pair_inputs(data_dir: &Path, teams_dir: &Path) -> Result<Vec<InputPair>> {
    let exports = list_indexed_files(data_dir)?;
    let mut rosters = list_indexed_files(teams_dir)?;
    let pairs = exports
        .into_iter()
        .map(|(index, export)| {
            let roster = rosters.remove(&index);
            InputPair {
                index,
                export,
                roster,
            }
        })
        .collect();
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "{}").unwrap();
    }

    #[test]
    fn test_file_index() {
        assert_eq!(file_index("merge-requests-03.json"), Some("03"));
        assert_eq!(file_index("teams-12.json"), Some("12"));
        assert_eq!(file_index("ab.json"), Some("ab"));
        assert_eq!(file_index("a.json"), None);
        assert_eq!(file_index(""), None);
    }

    #[test]
    fn test_file_index_multibyte_boundary() {
        assert_eq!(file_index("éa.json"), None);
    }

    #[test]
    fn test_list_skips_readme_and_dirs() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "mr-02.json");
        touch(dir.path(), "mr-01.json");
        touch(dir.path(), "README.md");
        fs::create_dir(dir.path().join("nested-09.json")).unwrap();

        let files = list_indexed_files(dir.path()).unwrap();
        assert_eq!(files.keys().collect::<Vec<_>>(), vec!["01", "02"]);
    }

    #[test]
    fn test_list_missing_dir() {
        let dir = TempDir::new().unwrap();
        let err = list_indexed_files(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, MetricsError::InputDirMissing(_)));
    }

    #[test]
    fn test_later_file_with_same_index_wins() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a-01.json");
        touch(dir.path(), "b-01.json");

        let files = list_indexed_files(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files["01"], dir.path().join("b-01.json"));
    }

    #[test]
    fn test_pair_inputs() {
        let data = TempDir::new().unwrap();
        let teams = TempDir::new().unwrap();
        touch(data.path(), "merge-requests-01.json");
        touch(data.path(), "merge-requests-02.json");
        touch(teams.path(), "teams-01.json");
        touch(teams.path(), "teams-07.json");

        let pairs = pair_inputs(data.path(), teams.path()).unwrap();
        assert_eq!(
            pairs,
            vec![
                InputPair {
                    index: "01".to_string(),
                    export: data.path().join("merge-requests-01.json"),
                    roster: Some(teams.path().join("teams-01.json")),
                },
                InputPair {
                    index: "02".to_string(),
                    export: data.path().join("merge-requests-02.json"),
                    roster: None,
                },
            ]
        );
    }
}
