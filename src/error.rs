use std::fmt;

/// Typed error for resume-forge library operations.
#[derive(Debug)]
pub enum ResumeForgeError {
    /// Configuration errors (unknown template, unknown summary key,
    /// unsupported export format)
    Config(String),
    /// Data errors (malformed bundle, missing or invalid fields)
    Data(String),
    /// Export backend errors (PDF emission)
    Export(String),
    /// IO errors (file read/write)
    Io(std::io::Error),
}

impl fmt::Display for ResumeForgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResumeForgeError::Config(msg) => write!(f, "config error: {}", msg),
            ResumeForgeError::Data(msg) => write!(f, "data error: {}", msg),
            ResumeForgeError::Export(msg) => write!(f, "export error: {}", msg),
            ResumeForgeError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for ResumeForgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResumeForgeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ResumeForgeError {
    fn from(err: std::io::Error) -> Self {
        ResumeForgeError::Io(err)
    }
}

impl From<serde_json::Error> for ResumeForgeError {
    fn from(err: serde_json::Error) -> Self {
        ResumeForgeError::Data(err.to_string())
    }
}
