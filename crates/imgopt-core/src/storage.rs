//! Output artifact lifecycle.
//!
//! Bytes are written to a `.part` sibling, synced, then renamed over the final
//! path, so an artifact path only ever holds a complete file.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `a.webp` → `a.webp.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Size of an existing artifact, or `None` if nothing is there.
pub fn existing_size(path: &Path) -> Option<u64> {
    fs::metadata(path).ok().filter(|m| m.is_file()).map(|m| m.len())
}

/// Write `data` to `final_path` atomically. Returns the number of bytes written.
/// On failure the temp file is removed and `final_path` is left untouched.
pub fn write_atomic(final_path: &Path, data: &[u8]) -> Result<u64> {
    let tp = temp_path(final_path);
    let result = write_then_rename(&tp, final_path, data);
    if result.is_err() {
        let _ = fs::remove_file(&tp);
    }
    result.map(|()| data.len() as u64)
}

fn write_then_rename(tp: &Path, final_path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(tp)
        .with_context(|| format!("failed to create temp file: {}", tp.display()))?;
    file.write_all(data)
        .with_context(|| format!("write {}", tp.display()))?;
    file.sync_all().context("storage sync failed")?;
    drop(file);

    fs::rename(tp, final_path).with_context(|| {
        format!(
            "failed to rename {} to {}",
            tp.display(),
            final_path.display()
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_part() {
        let p = temp_path(Path::new("photo-1.webp"));
        assert_eq!(p.to_string_lossy(), "photo-1.webp.part");
        let p2 = temp_path(Path::new("/tmp/out/photo-2.webp"));
        assert_eq!(p2.to_string_lossy(), "/tmp/out/photo-2.webp.part");
    }

    #[test]
    fn write_atomic_creates_file_and_removes_temp() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("a.webp");
        let n = write_atomic(&final_path, b"RIFFdata").unwrap();
        assert_eq!(n, 8);
        assert_eq!(fs::read(&final_path).unwrap(), b"RIFFdata");
        assert!(!temp_path(&final_path).exists());
        assert_eq!(existing_size(&final_path), Some(8));
    }

    #[test]
    fn write_atomic_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("a.webp");
        fs::write(&final_path, b"old contents").unwrap();
        write_atomic(&final_path, b"new").unwrap();
        assert_eq!(fs::read(&final_path).unwrap(), b"new");
    }

    #[test]
    fn write_atomic_missing_dir_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let final_path = dir.path().join("missing").join("a.webp");
        assert!(write_atomic(&final_path, b"x").is_err());
        assert!(!final_path.exists());
        assert!(!temp_path(&final_path).exists());
    }

    #[test]
    fn existing_size_ignores_dirs_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(existing_size(&dir.path().join("none.webp")), None);
        let sub = dir.path().join("d.webp");
        fs::create_dir(&sub).unwrap();
        assert_eq!(existing_size(&sub), None);
    }
}
