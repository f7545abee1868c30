use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;

/// Suffix appended to the source file name, `icon.png` -> `icon.png.backup`.
pub const BACKUP_SUFFIX: &str = ".backup";

/// Sibling path holding the pre-processing bytes of `path`.
pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(BACKUP_SUFFIX);
    PathBuf::from(os)
}

/// Copy `path` to its `.backup` sibling unless one already exists.
///
/// Returns the backup path when a copy was made, `None` when a backup was
/// already present. A second run never overwrites the first backup, so the
/// pre-processing bytes survive repeated invocations.
pub fn ensure_backup(path: &Path) -> Result<Option<PathBuf>> {
    let backup = backup_path_for(path);
    if backup.exists() {
        debug!("Backup already present: {:?}", backup);
        return Ok(None);
    }
    std::fs::copy(path, &backup)?;
    info!("Backup created: {:?}", backup);
    Ok(Some(backup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backup_keeps_the_full_file_name() {
        assert_eq!(
            backup_path_for(Path::new("/assets/paypal.png")),
            PathBuf::from("/assets/paypal.png.backup")
        );
    }

    #[test]
    fn second_run_leaves_the_first_backup_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("icon.png");
        std::fs::write(&source, b"original bytes").unwrap();

        let created = ensure_backup(&source).unwrap();
        assert_eq!(created, Some(dir.path().join("icon.png.backup")));

        // Simulate in-place processing, then a second run.
        std::fs::write(&source, b"processed bytes").unwrap();
        assert_eq!(ensure_backup(&source).unwrap(), None);

        let backups: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "backup"))
            .collect();
        assert_eq!(backups.len(), 1);
        assert_eq!(
            std::fs::read(dir.path().join("icon.png.backup")).unwrap(),
            b"original bytes"
        );
    }
}
