//! File writing helpers
//!
//! Output files are written next to their destination under a temporary
//! name and renamed into place, so readers never observe a partial file.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::errors::{QInfraError, QInfraResult};

/// Temporary path used while `path` is being written
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write `path` through `write`, replacing any existing file atomically
///
/// On failure the temporary file is removed and the destination is left
/// as it was.
pub fn write_atomically<F>(path: &Path, write: F) -> QInfraResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let temp = temp_path(path);

    let result = File::create(&temp).and_then(|file| {
        let mut writer = BufWriter::new(file);
        write(&mut writer)?;
        writer.flush()?;
        writer.get_ref().sync_all()
    });

    let result = result.and_then(|_| fs::rename(&temp, path));

    match result {
        Ok(()) => {
            debug!("Wrote {}", path.display());
            Ok(())
        }
        Err(source) => {
            if temp.exists() {
                if let Err(e) = fs::remove_file(&temp) {
                    warn!("Could not remove temporary file {}: {}", temp.display(), e);
                }
            }
            Err(QInfraError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Create `dir` and all missing parents
pub fn ensure_directory(dir: &Path) -> QInfraResult<()> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| QInfraError::WriteFailed {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!("Created directory {}", dir.display());
    Ok(())
}
