//! Traits for writing generated markup to an output.

pub mod output;

use crate::error::ChartError;

/// A sink for generated markup.
pub trait OutputStream {
    /// Writes `data` to the output.
    fn write(&mut self, data: &str) -> Result<(), ChartError>;
}

impl OutputStream for String {
    fn write(&mut self, data: &str) -> Result<(), ChartError> {
        self.push_str(data);
        Ok(())
    }
}

/// An element that renders itself as markup.
pub trait Render {
    /// Writes the element's markup to `output`.
    fn render<O>(&self, output: &mut O) -> Result<(), ChartError>
    where
        O: OutputStream;
}
