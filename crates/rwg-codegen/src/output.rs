//! Writing generated files to disk.

use anyhow::Result;
use rwg_core::GeneratorError;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A rendered file, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: Vec<u8>,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Contents as UTF-8, `None` for binary files.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.contents).ok()
    }
}

/// What to do when a destination file already exists with other content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Fail before writing anything.
    #[default]
    Abort,
    Overwrite,
    SkipExisting,
}

/// Outcome of a write, by destination path.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WriteReport {
    pub created: Vec<PathBuf>,
    pub overwritten: Vec<PathBuf>,
    pub identical: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

impl WriteReport {
    /// Number of files that were written.
    pub fn written(&self) -> usize {
        self.created.len() + self.overwritten.len()
    }
}

#[derive(Clone, Copy)]
enum Existing {
    Missing,
    Identical,
    Different,
}

fn existing_state(dest: &Path, contents: &[u8]) -> Existing {
    if !dest.is_file() {
        return Existing::Missing;
    }
    match std::fs::read(dest) {
        Ok(current) if current == contents => Existing::Identical,
        _ => Existing::Different,
    }
}

/// Write `files` below `root` according to `policy`.
pub fn write_files(files: &[GeneratedFile], root: &Path, policy: WritePolicy) -> Result<WriteReport> {
    let states: Vec<Existing> = files
        .iter()
        .map(|f| existing_state(&root.join(&f.path), &f.contents))
        .collect();

    if policy == WritePolicy::Abort {
        if let Some((file, _)) = files
            .iter()
            .zip(&states)
            .find(|(_, state)| matches!(state, Existing::Different))
        {
            return Err(GeneratorError::Conflict {
                path: root.join(&file.path),
            }
            .into());
        }
    }

    std::fs::create_dir_all(root).map_err(|e| GeneratorError::unwritable(root, e))?;

    let mut report = WriteReport::default();
    for (file, state) in files.iter().zip(states) {
        let dest = root.join(&file.path);
        match state {
            Existing::Identical => {
                tracing::debug!(path = %file.path.display(), "identical");
                report.identical.push(file.path.clone());
                continue;
            }
            Existing::Different if policy == WritePolicy::SkipExisting => {
                tracing::debug!(path = %file.path.display(), "skipped");
                report.skipped.push(file.path.clone());
                continue;
            }
            _ => {}
        }

        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GeneratorError::unwritable(parent, e))?;
        }
        std::fs::write(&dest, &file.contents).map_err(|e| GeneratorError::unwritable(&dest, e))?;

        if matches!(state, Existing::Missing) {
            tracing::debug!(path = %file.path.display(), "created");
            report.created.push(file.path.clone());
        } else {
            tracing::debug!(path = %file.path.display(), "overwritten");
            report.overwritten.push(file.path.clone());
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<GeneratedFile> {
        vec![
            GeneratedFile::new("a.txt", "alpha"),
            GeneratedFile::new("nested/dir/b.txt", "beta"),
        ]
    }

    #[test]
    fn test_creates_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        let report = write_files(&sample(), dir.path(), WritePolicy::Abort).unwrap();
        assert_eq!(report.created.len(), 2);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("nested/dir/b.txt")).unwrap(),
            "beta"
        );
    }

    #[test]
    fn test_identical_files_untouched() {
        let dir = tempfile::tempdir().unwrap();
        write_files(&sample(), dir.path(), WritePolicy::Abort).unwrap();
        let report = write_files(&sample(), dir.path(), WritePolicy::Abort).unwrap();
        assert_eq!(report.identical.len(), 2);
        assert_eq!(report.written(), 0);
    }

    #[test]
    fn test_conflict_policies() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "edited by hand").unwrap();

        let err = write_files(&sample(), dir.path(), WritePolicy::Abort).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeneratorError>(),
            Some(GeneratorError::Conflict { .. })
        ));
        assert!(!dir.path().join("nested").exists());

        let report = write_files(&sample(), dir.path(), WritePolicy::SkipExisting).unwrap();
        assert_eq!(report.skipped, vec![PathBuf::from("a.txt")]);
        assert_eq!(std::fs::read_to_string(dir.path().join("a.txt")).unwrap(), "edited by hand");

        let report = write_files(&sample(), dir.path(), WritePolicy::Overwrite).unwrap();
        assert_eq!(report.overwritten, vec![PathBuf::from("a.txt")]);
        assert_eq!(std::fs::read_to_string(dir.path().join("a.txt")).unwrap(), "alpha");
    }

    #[test]
    fn test_root_that_is_a_file_is_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = write_files(&sample(), &blocker, WritePolicy::Overwrite).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeneratorError>(),
            Some(GeneratorError::TargetUnwritable { .. })
        ));
    }
}
