//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A level name that matches none of the recognized names
    #[error("Unknown level: {name}")]
    InvalidLevelName { name: String },

    /// A handler failed to write a record to its sink
    #[error("Handler '{handler}' failed to write record: {source}")]
    HandlerWrite {
        handler: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// The process-wide root logger was already created
    #[error("Root logger already initialized")]
    RootAlreadyInitialized,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid level name error
    pub fn invalid_level(name: impl Into<String>) -> Self {
        LoggerError::InvalidLevelName { name: name.into() }
    }

    /// Create a handler write error
    pub fn handler_write(handler: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::HandlerWrite {
            handler: handler.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
