//! File-backed output streams.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ChartError;
use crate::render::OutputStream;

/// An [OutputStream] writing to a file on disk.
pub struct OutputFile {
    file: File,
}

impl OutputFile {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: &Path) -> Result<OutputFile, ChartError> {
        let file = File::create(path)?;
        Ok(Self { file })
    }
}

impl OutputStream for OutputFile {
    fn write(&mut self, data: &str) -> Result<(), ChartError> {
        self.file.write_all(data.as_bytes())?;
        Ok(())
    }
}
