//! Error types for tintnote.

use thiserror::Error;

/// Result type alias using tintnote's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for tintnote operations.
///
/// `Remote`, `NotFound` and `Validation` are the failures a screen can
/// surface. The remaining variants only come out of setup and local I/O.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure or a failure reported by the backend.
    #[error("Remote error: {0}")]
    Remote(String),

    /// A by-id fetch matched zero rows or more than one.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Draft rejected before any round trip.
    #[error("Invalid note: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Message suitable for an inline error line on a screen.
    ///
    /// Screens print `Error: <message>` without the variant prefix, the way
    /// the backend's own message reads.
    pub fn user_message(&self) -> String {
        match self {
            Error::Remote(msg)
            | Error::NotFound(msg)
            | Error::Validation(msg)
            | Error::Config(msg)
            | Error::Serialization(msg) => msg.clone(),
            Error::Io(e) => e.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Remote(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_remote() {
        let err = Error::Remote("JWT expired".to_string());
        assert_eq!(err.to_string(), "Remote error: JWT expired");
    }

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound("note 42".to_string());
        assert_eq!(err.to_string(), "Not found: note 42");
    }

    #[test]
    fn test_error_display_validation() {
        let err = Error::Validation("Title is required".to_string());
        assert_eq!(err.to_string(), "Invalid note: Title is required");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("missing anon key".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing anon key");
    }

    #[test]
    fn test_error_display_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.to_string().contains("I/O error:"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_user_message_strips_prefix() {
        let err = Error::Validation("Title is required".to_string());
        assert_eq!(err.user_message(), "Title is required");

        let err = Error::Remote("relation \"notes\" does not exist".to_string());
        assert_eq!(err.user_message(), "relation \"notes\" does not exist");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number");
        assert!(json_err.is_err());

        let err: Error = json_err.unwrap_err().into();
        match err {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_error_debug_format() {
        let err = Error::NotFound("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("NotFound"));
    }
}
