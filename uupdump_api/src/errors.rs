//! Error types for the API client.
//!
//! Every failure the client can produce is one variant of [`Error`]. Matching
//! on `Error` as a whole catches any API error; matching a single variant (or
//! [`Error::kind`]) handles one failure mode.

use serde_json::Value;

/// Maximum number of characters of a response body kept on [`Error::Http`].
pub const MAX_BODY_EXCERPT: usize = 500;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Catch-all for transport failures that are neither timeouts nor
    /// connection failures (malformed URL, client construction, body decoding).
    #[error("{message}")]
    Api {
        message: String,
        detail: Option<String>,
    },
    /// The service answered with a non-success status.
    #[error("{message}")]
    Http {
        message: String,
        status: u16,
        /// At most [`MAX_BODY_EXCERPT`] characters of the response body.
        body: Option<String>,
        detail: Option<String>,
    },
    /// The request did not complete within the timeout.
    #[error("{message}")]
    Timeout {
        message: String,
        detail: Option<String>,
    },
    /// The service could not be reached (DNS, refused, reset, unreachable).
    #[error("{message}")]
    Connection {
        message: String,
        detail: Option<String>,
    },
    /// Invalid parameters. Reserved for callers; the client never produces it.
    #[error("{message}")]
    Validation {
        message: String,
        detail: Option<String>,
    },
    /// A 2xx response that is not valid JSON (`code` is `None`) or that
    /// carries an application error code.
    #[error("{message}")]
    Response {
        message: String,
        code: Option<String>,
        /// The full decoded body, when it could be decoded.
        response: Option<Value>,
        detail: Option<String>,
    },
}

/// Fieldless mirror of the [`Error`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Api,
    Http,
    Timeout,
    Connection,
    Validation,
    Response,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Api => "APIError",
            ErrorKind::Http => "HttpError",
            ErrorKind::Timeout => "TimeoutError",
            ErrorKind::Connection => "ConnectionError",
            ErrorKind::Validation => "ValidationError",
            ErrorKind::Response => "ResponseError",
        };
        f.write_str(name)
    }
}

impl Error {
    pub fn api(message: impl Into<String>) -> Self {
        Error::Api {
            message: message.into(),
            detail: None,
        }
    }

    /// Builds an [`Error::Http`], truncating `body` to [`MAX_BODY_EXCERPT`] characters.
    pub fn http(message: impl Into<String>, status: u16, body: Option<&str>) -> Self {
        Error::Http {
            message: message.into(),
            status,
            body: body.map(truncate_body),
            detail: None,
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Error::Timeout {
            message: message.into(),
            detail: None,
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        Error::Connection {
            message: message.into(),
            detail: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
            detail: None,
        }
    }

    pub fn response(
        message: impl Into<String>,
        code: Option<String>,
        response: Option<Value>,
    ) -> Self {
        Error::Response {
            message: message.into(),
            code,
            response,
            detail: None,
        }
    }

    /// Attaches the raw detail text of the underlying condition.
    pub fn with_detail(mut self, value: impl Into<String>) -> Self {
        let slot = match &mut self {
            Error::Api { detail, .. }
            | Error::Http { detail, .. }
            | Error::Timeout { detail, .. }
            | Error::Connection { detail, .. }
            | Error::Validation { detail, .. }
            | Error::Response { detail, .. } => detail,
        };
        *slot = Some(value.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Api { .. } => ErrorKind::Api,
            Error::Http { .. } => ErrorKind::Http,
            Error::Timeout { .. } => ErrorKind::Timeout,
            Error::Connection { .. } => ErrorKind::Connection,
            Error::Validation { .. } => ErrorKind::Validation,
            Error::Response { .. } => ErrorKind::Response,
        }
    }

    /// The human-readable message, identical to the `Display` output.
    pub fn message(&self) -> &str {
        match self {
            Error::Api { message, .. }
            | Error::Http { message, .. }
            | Error::Timeout { message, .. }
            | Error::Connection { message, .. }
            | Error::Validation { message, .. }
            | Error::Response { message, .. } => message,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Api { detail, .. }
            | Error::Http { detail, .. }
            | Error::Timeout { detail, .. }
            | Error::Connection { detail, .. }
            | Error::Validation { detail, .. }
            | Error::Response { detail, .. } => detail.as_deref(),
        }
    }

    /// HTTP status of an [`Error::Http`].
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Truncated body of an [`Error::Http`].
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Error::Http { body, .. } => body.as_deref(),
            _ => None,
        }
    }

    /// Application error code of an [`Error::Response`].
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Error::Response { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Decoded body of an [`Error::Response`].
    pub fn api_response(&self) -> Option<&Value> {
        match self {
            Error::Response { response, .. } => response.as_ref(),
            _ => None,
        }
    }
}

/// Error codes documented by the UUP Dump API, with their descriptions.
pub static API_ERROR_MESSAGES: &[(&str, &str)] = &[
    // fetchupd.php
    (
        "UNKNOWN_ARCH",
        "Invalid architecture specified. Supported: amd64, x86, arm64, all",
    ),
    (
        "UNKNOWN_RING",
        "Invalid ring/channel specified. Supported: Canary, Dev, Beta, ReleasePreview, Retail, WIF, WIS, RP",
    ),
    (
        "UNKNOWN_FLIGHT",
        "Invalid flight specified. Supported: Mainline, Active, Skip, Current",
    ),
    ("UNKNOWN_COMBINATION", "Invalid combination of parameters"),
    ("ILLEGAL_BUILD", "Invalid build number format"),
    ("ILLEGAL_MINOR", "Invalid minor version number"),
    (
        "NO_UPDATE_FOUND",
        "No update found matching the specified criteria",
    ),
    ("EMPTY_FILELIST", "Update found but file list is empty"),
    ("WU_REQUEST_FAILED", "Windows Update request failed"),
    // get.php, listeditions.php
    ("UNSUPPORTED_LANG", "Unsupported language specified"),
    ("UNSPECIFIED_LANG", "Language parameter is required"),
    ("UNSUPPORTED_EDITION", "Unsupported edition specified"),
    (
        "UNSUPPORTED_COMBINATION",
        "Unsupported combination of parameters",
    ),
    ("MISSING_FILES", "Some required files are missing"),
    ("NO_FILES", "No files available for this update"),
    (
        "XML_PARSE_ERROR",
        "Error parsing XML response from Windows Update",
    ),
    // listid.php
    ("NO_FILEINFO_DIR", "File information directory not found"),
    ("SEARCH_NO_RESULTS", "No results found for the search query"),
    // updateinfo.php
    (
        "UPDATE_INFORMATION_NOT_EXISTS",
        "Update information does not exist",
    ),
    (
        "KEY_NOT_EXISTS",
        "Requested key does not exist in update information",
    ),
];

/// Returns the description of an API error code, or `"Unknown error: {code}"`
/// for codes not in [`API_ERROR_MESSAGES`].
pub fn describe(code: &str) -> String {
    API_ERROR_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| message.to_string())
        .unwrap_or_else(|| format!("Unknown error: {}", code))
}

fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_BODY_EXCERPT).collect()
}
