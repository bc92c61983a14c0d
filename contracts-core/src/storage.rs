use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::RepositoryError;

/// The flat file a repository is bound to.
#[derive(Debug, Clone)]
pub(crate) struct RecordFile {
    path: PathBuf,
}

impl RecordFile {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file. Returns `None` if it does not exist yet.
    pub(crate) fn read(&self) -> io::Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Replaces the file with `lines`, one per line.
    ///
    /// The content goes to a temporary file next to the target which is then renamed over
    /// it, so a crash mid-write leaves the previous version intact.
    pub(crate) fn write_lines<I>(&self, lines: I) -> Result<(), RepositoryError>
    where
        I: IntoIterator<Item = String>,
    {
        let fail = |e: io::Error| RepositoryError::write(&self.path, e);

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(fail)?;

        let mut content = String::new();
        for line in lines {
            content.push_str(&line);
            content.push('\n');
        }

        let mut tmp = NamedTempFile::new_in(dir).map_err(fail)?;
        tmp.write_all(content.as_bytes()).map_err(fail)?;
        tmp.as_file().sync_all().map_err(fail)?;
        tmp.persist(&self.path).map_err(|e| fail(e.error))?;

        Ok(())
    }
}
