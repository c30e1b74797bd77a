//! Error types for request construction and redirect handling.

use thiserror::Error;

/// Result type alias for gateway request operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors that can occur while building, parsing or rendering requests.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Failed to open, read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Amount that cannot be represented with two decimal places
    #[error("Invalid amount {value:?}: {reason}")]
    InvalidAmount { value: String, reason: String },

    /// Invalid batch record
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Redirect query string that cannot be decoded
    #[error("Malformed query string: {0}")]
    MalformedQueryString(String),

    /// Redirect query string whose signature does not check out
    #[error("Query string has been forged or tampered with")]
    ForgedQueryString,

    /// Gateway rejected the credentials (HTTP 401)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Credentials lack permission for the operation (HTTP 403)
    #[error("Authorization failed: {0}")]
    Authorization(String),

    /// Referenced resource does not exist (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Client library is too old for the gateway (HTTP 426)
    #[error("Upgrade required: {0}")]
    UpgradeRequired(String),

    /// Gateway failed internally (HTTP 500)
    #[error("Server error: {0}")]
    ServerError(String),

    /// Gateway is down for maintenance (HTTP 503)
    #[error("Down for maintenance: {0}")]
    DownForMaintenance(String),

    /// Any other non-success HTTP status
    #[error("Unexpected HTTP status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: gateway-requests <input.csv> [xml|query]")]
    MissingArgument,

    /// Output format other than `xml` or `query`
    #[error("Unknown output format {0:?}, expected \"xml\" or \"query\"")]
    UnknownFormat(String),
}

impl GatewayError {
    /// Maps a non-success HTTP status to its error, or `None` for 200 and 201.
    pub fn from_status(status: u16, message: impl Into<String>) -> Option<Self> {
        let message = message.into();
        let error = match status {
            200 | 201 => return None,
            401 => GatewayError::Authentication(message),
            403 => GatewayError::Authorization(message),
            404 => GatewayError::NotFound(message),
            426 => GatewayError::UpgradeRequired(message),
            500 => GatewayError::ServerError(message),
            503 => GatewayError::DownForMaintenance(message),
            status => GatewayError::UnexpectedStatus { status, message },
        };
        Some(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses_are_not_errors() {
        assert!(GatewayError::from_status(200, "").is_none());
        assert!(GatewayError::from_status(201, "").is_none());
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            GatewayError::from_status(401, "bad key"),
            Some(GatewayError::Authentication(m)) if m == "bad key"
        ));
        assert!(matches!(
            GatewayError::from_status(503, ""),
            Some(GatewayError::DownForMaintenance(_))
        ));
        assert!(matches!(
            GatewayError::from_status(422, "nope"),
            Some(GatewayError::UnexpectedStatus { status: 422, .. })
        ));
    }
}
