//! Error types for the logging system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Log directory could not be created
    #[error("failed to create log directory '{path}'")]
    DirectoryCreation { path: String },

    /// Log file could not be created or opened
    #[error("failed to open log file '{path}': {message}")]
    FileOpen { path: String, message: String },

    /// A rename/delete step of the backup chain failed
    #[error("rotation failed for '{path}': {message}")]
    Rotation { path: String, message: String },

    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    IoOperation {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create a directory creation error
    pub fn directory_creation(path: impl Into<String>) -> Self {
        LoggerError::DirectoryCreation { path: path.into() }
    }

    /// Create a file open error
    pub fn file_open(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a rotation error
    pub fn rotation(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Rotation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            source,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
