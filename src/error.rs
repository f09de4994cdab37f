// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Session(String),
    Api(ApiError),
}

/// Specific error types for backend API calls.
/// Used to give callers something better than a raw status code.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Missing or rejected credentials (HTTP 401).
    Unauthorized,

    /// The requested resource does not exist (HTTP 404, where the
    /// endpoint does not tolerate absence).
    NotFound,

    /// The backend rejected the request (other 4xx). Carries the
    /// `error` message from the response body when one was decodable.
    Rejected(String),

    /// The backend failed (5xx).
    Server(u16),

    /// Transport-level failure (connection refused, TLS, timeout).
    Network(String),

    /// The response body did not match the expected shape.
    Decode(String),
}

impl ApiError {
    /// Maps an HTTP status code to an error variant, using the backend's
    /// `{"error": "..."}` body message when available.
    ///
    /// Only 5xx responses count as server failures; anything else the
    /// backend should never emit (1xx/3xx) is reported as a rejection with
    /// the raw status, not blamed on the server.
    pub fn from_status(status: u16, body_message: Option<String>) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            500..=599 => ApiError::Server(status),
            _ => ApiError::Rejected(body_message.unwrap_or_else(|| format!("HTTP {}", status))),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "Not authorized"),
            ApiError::NotFound => write!(f, "Not found"),
            ApiError::Rejected(msg) => write!(f, "Request rejected: {}", msg),
            ApiError::Server(status) => write!(f, "Server error (HTTP {})", status),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Session(e) => write!(f, "Session Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}
impl std::error::Error for ApiError {}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Api(ApiError::Decode(err.to_string()))
        } else {
            Error::Api(ApiError::Network(err.to_string()))
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn status_401_maps_to_unauthorized() {
        assert!(matches!(
            ApiError::from_status(401, None),
            ApiError::Unauthorized
        ));
    }

    #[test]
    fn status_404_maps_to_not_found() {
        assert!(matches!(
            ApiError::from_status(404, None),
            ApiError::NotFound
        ));
    }

    #[test]
    fn status_4xx_keeps_backend_message() {
        let err = ApiError::from_status(400, Some("Username already exists".into()));
        match err {
            ApiError::Rejected(msg) => assert_eq!(msg, "Username already exists"),
            _ => panic!("expected Rejected variant"),
        }
    }

    #[test]
    fn status_4xx_without_body_falls_back_to_status_text() {
        let err = ApiError::from_status(422, None);
        match err {
            ApiError::Rejected(msg) => assert_eq!(msg, "HTTP 422"),
            _ => panic!("expected Rejected variant"),
        }
    }

    #[test]
    fn status_5xx_maps_to_server() {
        assert!(matches!(
            ApiError::from_status(503, None),
            ApiError::Server(503)
        ));
    }

    #[test]
    fn unexpected_statuses_are_not_blamed_on_the_server() {
        for status in [101, 302] {
            match ApiError::from_status(status, None) {
                ApiError::Rejected(msg) => assert_eq!(msg, format!("HTTP {}", status)),
                other => panic!("expected Rejected variant, got {:?}", other),
            }
        }
    }
}
