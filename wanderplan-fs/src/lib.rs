//! Capability-based filesystem helpers for Wanderplan inputs and stores.
//!
//! Every helper resolves an ambient directory handle first and then works
//! relative to it, so callers never mix `std::fs` with `cap-std` handles.
#![forbid(unsafe_code)]

use std::io;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// What a path points at on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// Anything else, e.g. a socket or device.
    Other,
}

/// Open a UTF-8 path for reading using ambient authority.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Describe the entry at `path`.
///
/// Returns an error of kind [`io::ErrorKind::NotFound`] when nothing exists
/// there.
pub fn path_kind(path: &Utf8Path) -> io::Result<PathKind> {
    let (dir, name) = parent_dir_and_name(path)?;
    let metadata = dir.metadata(name.as_str())?;
    Ok(if metadata.is_file() {
        PathKind::File
    } else if metadata.is_dir() {
        PathKind::Directory
    } else {
        PathKind::Other
    })
}

/// Create every missing directory above `path`.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() {
        return Ok(());
    }
    let (base, relative) = split_anchor(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    dir.create_dir_all(&relative)
}

fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split a path into the directory it is anchored at (a root, a drive prefix
/// or the working directory) and the remainder relative to that anchor.
fn split_anchor(path: &Utf8Path) -> io::Result<(Utf8PathBuf, Utf8PathBuf)> {
    let mut anchor = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Prefix(prefix) => anchor.push(prefix.as_str()),
            Utf8Component::RootDir => anchor.push(std::path::MAIN_SEPARATOR_STR),
            other => relative.push(other.as_str()),
        }
    }
    if anchor.as_str().is_empty() {
        anchor.push(".");
    }
    if relative.is_absolute() {
        return Err(io::Error::other(format!("cannot anchor {path}")));
    }
    Ok((anchor, relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::io::Read;
    use tempfile::TempDir;

    #[fixture]
    fn workspace() -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        (dir, root)
    }

    #[rstest]
    fn reports_files_and_directories(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let file = root.join("attractions.csv");
        std::fs::write(&file, "location,attraction\n").expect("write file");
        assert_eq!(path_kind(&file).expect("inspect file"), PathKind::File);
        assert_eq!(path_kind(&root).expect("inspect dir"), PathKind::Directory);
    }

    #[rstest]
    fn missing_paths_are_not_found(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let err = path_kind(&root.join("missing.csv")).expect_err("missing file");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn opens_files_for_reading(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let file = root.join("notes.txt");
        std::fs::write(&file, "pack light").expect("write file");
        let mut contents = String::new();
        open_utf8_file(&file)
            .expect("open file")
            .read_to_string(&mut contents)
            .expect("read file");
        assert_eq!(contents, "pack light");
    }

    #[rstest]
    fn creates_nested_parents(workspace: (TempDir, Utf8PathBuf)) {
        let (_dir, root) = workspace;
        let target = root.join("state/trips/wanderplan.db");
        ensure_parent_dir(&target).expect("create parents");
        assert_eq!(
            path_kind(&root.join("state/trips")).expect("inspect parent"),
            PathKind::Directory
        );
    }

    #[rstest]
    fn bare_file_names_need_no_parent() {
        ensure_parent_dir(Utf8Path::new("wanderplan.db")).expect("nothing to create");
    }
}
