//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;
use std::io::Error as IoError;

use tinytemplate::error::Error as TinyTemplateError;

/// The result type that uses [ChartError] as the error type.
pub type Result<T> = std::result::Result<T, ChartError>;

/// The error type for generating an interactive chart page.
#[derive(Debug)]
pub enum ChartError {
    /// A [std::io::Error] encountered while writing the generated page.
    Io(IoError),

    /// A [tinytemplate::error::Error] encountered while rendering the
    /// page template.
    Template(TinyTemplateError),
}

impl Error for ChartError {}

impl Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chart_error = "chart error:";

        match self {
            ChartError::Io(error) => write!(f, "{chart_error} I/O error: {error}"),
            ChartError::Template(error) => write!(f, "{chart_error} template error: {error}"),
        }
    }
}

impl From<IoError> for ChartError {
    fn from(error: IoError) -> Self {
        ChartError::Io(error)
    }
}

impl From<TinyTemplateError> for ChartError {
    fn from(error: TinyTemplateError) -> Self {
        ChartError::Template(error)
    }
}
