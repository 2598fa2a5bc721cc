//! Output file writing
//!
//! Encoded matrices are written through a buffered writer. In atomic mode the
//! bytes go to a hidden temporary file next to the destination, which is
//! renamed over the destination only once everything has been flushed. A
//! failed write removes the temporary file and leaves the destination alone.

use log::{debug, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use crate::matrix::MatrixResult;

/// Destination file that is only published on [`OutputFile::commit`]
pub struct OutputFile {
    /// Final destination
    path: PathBuf,
    /// Temporary file, present in atomic mode until commit
    temp_path: Option<PathBuf>,
    writer: Option<BufWriter<File>>,
}

impl OutputFile {
    /// Open an output file
    ///
    /// # Arguments
    /// * `path` - Destination path
    /// * `atomic` - Write to a temporary sibling and rename on commit
    pub fn create<P: AsRef<Path>>(path: P, atomic: bool) -> MatrixResult<Self> {
        let path = path.as_ref().to_path_buf();

        let (file, temp_path) = if atomic {
            let temp_path = temp_path_for(&path);
            debug!("Writing to temporary file {}", temp_path.display());
            (File::create(&temp_path)?, Some(temp_path))
        } else {
            (File::create(&path)?, None)
        };

        Ok(OutputFile {
            path,
            temp_path,
            writer: Some(BufWriter::new(file)),
        })
    }

    /// Writer for the file contents
    pub fn writer(&mut self) -> &mut dyn Write {
        match self.writer.as_mut() {
            Some(writer) => writer,
            None => unreachable!("output file used after commit"),
        }
    }

    /// Flush everything and publish the file at its destination
    pub fn commit(mut self) -> MatrixResult<()> {
        if let Some(writer) = self.writer.take() {
            let file = writer.into_inner().map_err(|e| e.into_error())?;
            file.sync_all()?;
        }

        if let Some(temp_path) = self.temp_path.take() {
            if let Err(e) = fs::rename(&temp_path, &self.path) {
                let _ = fs::remove_file(&temp_path);
                return Err(e.into());
            }
            debug!("Renamed {} to {}", temp_path.display(), self.path.display());
        }

        Ok(())
    }
}

impl Drop for OutputFile {
    fn drop(&mut self) {
        // Not committed: discard the partial temporary file
        self.writer.take();
        if let Some(temp_path) = self.temp_path.take() {
            if let Err(e) = fs::remove_file(&temp_path) {
                warn!("Failed to remove temporary file {}: {}", temp_path.display(), e);
            }
        }
    }
}

/// Write a file through `write`, committing only if it succeeds
pub fn write_file<P, F>(path: P, atomic: bool, write: F) -> MatrixResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut dyn Write) -> MatrixResult<()>,
{
    let mut output = OutputFile::create(path, atomic)?;
    write(output.writer())?;
    output.commit()
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.{}.tmp", name, process::id()))
}
