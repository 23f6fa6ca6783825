use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReviewError>;

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("svn log could not be run ({program}): {source}")]
    LogSourceSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} is not installed or not in PATH")]
    LogSourceNotFound { program: String },
    #[error("svn log failed (exit code {exit_code}): {stderr}")]
    LogSourceFailed { exit_code: i32, stderr: String },
    #[error("svn log returned no output for {location}")]
    LogSourceEmpty { location: String },
    #[error("Malformed log: {0}")]
    MalformedLog(String),
    #[error("Malformed log XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("Invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("PDF conversion error: {0}")]
    Pdf(String),
}

impl ReviewError {
    /// True for failures of the external log source itself.
    pub fn is_log_source(&self) -> bool {
        matches!(
            self,
            ReviewError::LogSourceSpawn { .. }
                | ReviewError::LogSourceNotFound { .. }
                | ReviewError::LogSourceFailed { .. }
                | ReviewError::LogSourceEmpty { .. }
        )
    }

    /// True when the log was fetched but could not be turned into commits.
    pub fn is_malformed_log(&self) -> bool {
        matches!(self, ReviewError::MalformedLog(_) | ReviewError::Xml(_))
    }

    pub(crate) fn missing_field(revision: &str, field: &str) -> Self {
        ReviewError::MalformedLog(format!("log entry r{revision} has no <{field}> element"))
    }
}
