use std::{error::Error, fmt, io};

/// The crate's result type.
pub type Result<T> = std::result::Result<T, LabErr>;

/// Failures at the crate's fallible edges.
///
/// Simulator operations themselves never fail; these only come from loading
/// configuration, parsing dataset ids and wiring playback to a runtime.
#[derive(Debug)]
pub enum LabErr {
    Io(io::Error),
    Json(serde_json::Error),
    UnknownDataset { got: String },
    NoRuntime,
}

impl fmt::Display for LabErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabErr::Io(e) => write!(f, "io error: {e}"),
            LabErr::Json(e) => write!(f, "invalid config: {e}"),
            LabErr::UnknownDataset { got } => write!(
                f,
                "unknown dataset '{got}', expected one of: sales, housing, salary"
            ),
            LabErr::NoRuntime => write!(f, "playback requires a running tokio runtime"),
        }
    }
}

impl Error for LabErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LabErr::Io(e) => Some(e),
            LabErr::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LabErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for LabErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
