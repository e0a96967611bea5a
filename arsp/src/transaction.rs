//! All-or-nothing file writes
//!
//! A [`WriteTransaction`] writes into a temporary file created next to the
//! destination and renames it into place on [`commit`](WriteTransaction::commit).
//! Dropping a transaction without committing deletes the temporary file, so
//! a failed export never leaves a truncated file at the destination and
//! never disturbs a file that was already there.
//!
//! Concurrent transactions targeting the same destination are not
//! coordinated: the last commit wins.

use crate::config::ExportOptions;
use crate::error::{ExportError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Pending write to a single destination path
pub struct WriteTransaction {
    destination: PathBuf,
    temp: NamedTempFile,
    buffer_capacity: usize,
    sync_on_commit: bool,
}

impl WriteTransaction {
    /// Create the temporary file in the destination's directory
    ///
    /// Staying on the same filesystem keeps the final rename atomic.
    pub fn begin<P: AsRef<Path>>(destination: P, options: &ExportOptions) -> Result<Self> {
        let destination = destination.as_ref().to_path_buf();
        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut builder = tempfile::Builder::new();
        builder.prefix(".arsp-").suffix(".tmp");
        // Same mode a plain File::create would get; open(2) applies the umask
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let temp = builder
            .tempfile_in(&dir)
            .map_err(ExportError::io("creating temporary file"))?;
        debug!(
            destination = %destination.display(),
            temp = %temp.path().display(),
            "began write transaction"
        );

        Ok(Self {
            destination,
            temp,
            buffer_capacity: options.buffer_capacity,
            sync_on_commit: options.sync_on_commit,
        })
    }

    /// Final path the transaction commits to
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Path of the temporary file being written
    pub fn temp_path(&self) -> &Path {
        self.temp.path()
    }

    /// Run `write` against a buffered writer over the temporary file
    ///
    /// The buffer is flushed before returning; an error from `write` or
    /// from the flush is returned unchanged and the transaction should be
    /// dropped.
    pub fn write_with<F>(&mut self, write: F) -> Result<()>
    where
        F: FnOnce(&mut BufWriter<&File>) -> Result<()>,
    {
        let mut writer = BufWriter::with_capacity(self.buffer_capacity, self.temp.as_file());
        write(&mut writer)?;
        writer.flush().map_err(ExportError::io("flushing output"))?;
        Ok(())
    }

    /// Sync, measure and rename the temporary file into place
    ///
    /// Returns the size of the committed file in bytes.
    pub fn commit(self) -> Result<u64> {
        let file = self.temp.as_file();
        if self.sync_on_commit {
            file.sync_all().map_err(ExportError::io("syncing output"))?;
        }
        let bytes = file
            .metadata()
            .map_err(ExportError::io("reading output size"))?
            .len();

        self.temp
            .persist(&self.destination)
            .map_err(|err| ExportError::Io {
                operation: "renaming into place",
                source: err.error,
            })?;

        info!(
            destination = %self.destination.display(),
            bytes,
            "committed export"
        );
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::fs;

    fn options() -> ExportOptions {
        ExportOptions::default().with_sync_on_commit(false)
    }

    #[test]
    fn test_commit_renames_into_place() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.bin");

        let mut txn = WriteTransaction::begin(&dest, &options()).unwrap();
        let temp_path = txn.temp_path().to_path_buf();
        txn.write_with(|w| {
            w.write_all(b"payload").unwrap();
            Ok(())
        })
        .unwrap();
        assert!(!dest.exists());

        assert_eq!(txn.commit().unwrap(), 7);
        assert_eq!(fs::read(&dest).unwrap(), b"payload");
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_drop_discards_temporary_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.bin");

        let mut txn = WriteTransaction::begin(&dest, &options()).unwrap();
        let temp_path = txn.temp_path().to_path_buf();
        let err = txn
            .write_with(|w| {
                w.write_all(b"partial").unwrap();
                Err(ExportError::InvalidLabel { row: 0 })
            })
            .unwrap_err();
        drop(txn);

        assert_eq!(err.kind(), ErrorKind::Build);
        assert!(!temp_path.exists());
        assert!(!dest.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.bin");
        fs::write(&dest, b"previous").unwrap();

        let mut txn = WriteTransaction::begin(&dest, &options()).unwrap();
        let _ = txn.write_with(|_| Err(ExportError::Internal("aborted".into())));
        drop(txn);

        assert_eq!(fs::read(&dest).unwrap(), b"previous");
    }

    #[cfg(unix)]
    #[test]
    fn test_committed_file_mode_follows_umask() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.bin");
        let reference = dir.path().join("reference.bin");
        File::create(&reference).unwrap();

        let mut txn = WriteTransaction::begin(&dest, &options()).unwrap();
        txn.write_with(|_| Ok(())).unwrap();
        txn.commit().unwrap();

        let mode = |path: &Path| fs::metadata(path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&dest), mode(&reference));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("missing").join("out.bin");

        let err = WriteTransaction::begin(&dest, &options()).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
