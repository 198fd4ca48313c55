use std::fmt::Display;
use std::io::Error as IoError;

use lineview_chart::error::ChartError;

#[derive(Debug)]
pub(crate) enum CliError {
    Chart(ChartError),
    Io(IoError),
    Json(serde_json::Error),
    Path(String),
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Chart(error) => write!(f, "{cli_error} {error}"),
            CliError::Io(error) => write!(f, "{cli_error} I/O error: {error}"),
            CliError::Json(error) => write!(f, "{cli_error} invalid data sets: {error}"),
            CliError::Path(error) => write!(f, "{cli_error} {error}"),
        }
    }
}

impl From<ChartError> for CliError {
    fn from(error: ChartError) -> Self {
        CliError::Chart(error)
    }
}

impl From<IoError> for CliError {
    fn from(error: IoError) -> Self {
        CliError::Io(error)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        CliError::Json(error)
    }
}
