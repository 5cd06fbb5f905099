// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Word lists for the dictionary-backed samples.

use std::path::Path;

use tracing::debug;

use crate::engine::DfsError;

/// Load one word per line. Lines are trimmed and blank lines skipped; order
/// and duplicates are kept.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Vec<String>, DfsError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DfsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    debug!(words = words.len(), path = %path.display(), "loaded dictionary");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn test_trims_and_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "  cat \n\n\tdog\n   \nant").unwrap();
        file.flush().unwrap();
        let words = load_dictionary(file.path()).unwrap();
        assert_eq!(words, ["cat", "dog", "ant"]);
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.dic");
        let err = load_dictionary(&path).unwrap_err();
        match err {
            DfsError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
