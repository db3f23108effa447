/// Error Handling Module
///
/// Unified error handling for the authentication core and its HTTP surface:
/// 1. Token failures (decode/verify pipeline and key loading)
/// 2. Application errors mapped to HTTP responses with structured context
/// 3. Structured error logging, differentiated in logs and uniform to clients

use actix_web::{error::ResponseError, http::header, http::StatusCode, HttpResponse};
use std::error::Error as StdError;
use std::fmt;

/// Message returned to clients for every token failure.
pub const AUTH_FAILED_MESSAGE: &str = "Invalid authentication credentials";

/// ============================================================================
/// 1. TOKEN ERRORS
/// ============================================================================

/// Failures of the token codec
///
/// `KeyLoadFailure`, `UnsupportedAlgorithm` and `InvalidConfiguration` are
/// raised while building a codec from configuration. `SigningFailure` is an
/// issuance fault; the rest are per-request decode failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    MalformedToken,
    InvalidSignature,
    InvalidPayload(String),
    TokenExpired,
    UnsupportedAlgorithm(String),
    KeyLoadFailure(String),
    InvalidConfiguration(String),
    SigningFailure(String),
    WrongTokenType { expected: String, found: String },
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::MalformedToken => write!(f, "Token structure invalid"),
            TokenError::InvalidSignature => write!(f, "Token signature invalid"),
            TokenError::InvalidPayload(msg) => write!(f, "Token payload invalid: {}", msg),
            TokenError::TokenExpired => write!(f, "Token expired"),
            TokenError::UnsupportedAlgorithm(alg) => {
                write!(f, "Unsupported JWT algorithm: {}", alg)
            }
            TokenError::KeyLoadFailure(msg) => write!(f, "Failed to load signing key: {}", msg),
            TokenError::InvalidConfiguration(msg) => write!(f, "Invalid token configuration: {}", msg),
            TokenError::SigningFailure(msg) => write!(f, "Token signing failed: {}", msg),
            TokenError::WrongTokenType { expected, found } => {
                write!(f, "Expected {} token, found {}", expected, found)
            }
        }
    }
}

impl StdError for TokenError {}

impl TokenError {
    /// Whether this error comes from configuration rather than a request
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            TokenError::UnsupportedAlgorithm(_)
                | TokenError::KeyLoadFailure(_)
                | TokenError::InvalidConfiguration(_)
        )
    }

    /// Stable identifier for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            TokenError::MalformedToken => "malformed_token",
            TokenError::InvalidSignature => "invalid_signature",
            TokenError::InvalidPayload(_) => "invalid_payload",
            TokenError::TokenExpired => "token_expired",
            TokenError::UnsupportedAlgorithm(_) => "unsupported_algorithm",
            TokenError::KeyLoadFailure(_) => "key_load_failure",
            TokenError::InvalidConfiguration(_) => "invalid_configuration",
            TokenError::SigningFailure(_) => "signing_failure",
            TokenError::WrongTokenType { .. } => "wrong_token_type",
        }
    }
}

/// ============================================================================
/// 2. UNIFIED APPLICATION ERROR TYPE
/// ============================================================================

/// Central error type for route handlers and startup
#[derive(Debug)]
pub enum AppError {
    Auth(TokenError),
    MissingToken,
    Forbidden(String),
    Config(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Auth(e) => write!(f, "{}", e),
            AppError::MissingToken => write!(f, "Missing authentication token"),
            AppError::Forbidden(msg) => write!(f, "Access denied: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl StdError for AppError {}

// ============================================================================
// FROM IMPLEMENTATIONS
// ============================================================================

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::SigningFailure(msg) => AppError::Internal(msg),
            err if err.is_configuration_error() => AppError::Config(err.to_string()),
            err => AppError::Auth(err),
        }
    }
}

// ============================================================================
// 3. HTTP RESPONSE MAPPING
// ============================================================================

/// Error response structure for HTTP responses
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    /// Unique error ID for correlating with logs
    pub error_id: String,
    /// Human-readable error message
    pub message: String,
    /// Error code for client-side handling
    pub code: String,
    /// HTTP status code
    pub status: u16,
    /// Timestamp when error occurred
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_id: String, message: String, code: String, status: u16) -> Self {
        Self {
            error_id,
            message,
            code,
            status,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Trait for converting errors to HTTP responses with proper logging
pub trait ErrorHandler {
    fn error_response(&self, request_id: &str) -> (StatusCode, ErrorResponse);
    fn log_error(&self, request_id: &str);
}

impl ErrorHandler for AppError {
    fn error_response(&self, request_id: &str) -> (StatusCode, ErrorResponse) {
        let (status, code, message) = match self {
            // Every token failure looks the same to the client
            AppError::Auth(_) => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                AUTH_FAILED_MESSAGE.to_string(),
            ),
            AppError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "MISSING_TOKEN",
                "Missing authentication token".to_string(),
            ),
            AppError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN", self.to_string()),
            AppError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                "Server configuration error".to_string(),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error".to_string(),
            ),
        };

        let error_response = ErrorResponse::new(
            request_id.to_string(),
            message,
            code.to_string(),
            status.as_u16(),
        );

        (status, error_response)
    }

    fn log_error(&self, request_id: &str) {
        match self {
            AppError::Auth(e) => {
                tracing::warn!(
                    request_id = request_id,
                    kind = e.kind(),
                    error = %e,
                    "Authentication failed"
                );
            }
            AppError::MissingToken => {
                tracing::warn!(request_id = request_id, "Missing bearer token");
            }
            AppError::Forbidden(msg) => {
                tracing::warn!(request_id = request_id, error = %msg, "Access denied");
            }
            AppError::Config(msg) => {
                tracing::error!(request_id = request_id, error = %msg, "Configuration error");
            }
            AppError::Internal(msg) => {
                tracing::error!(request_id = request_id, error = %msg, "Internal error");
            }
        }
    }
}

/// Implement ResponseError for Actix-web integration
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let request_id = uuid::Uuid::new_v4().to_string();
        self.log_error(&request_id);

        let (status, error_response) = <Self as ErrorHandler>::error_response(self, &request_id);

        let mut builder = HttpResponse::build(status);
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        builder.json(error_response)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Auth(_) | AppError::MissingToken => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// ============================================================================
// 4. ERROR CONTEXT ENRICHMENT
// ============================================================================

/// Error context for enhanced logging and debugging
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub request_id: String,
    pub subject: Option<String>,
    pub operation: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            subject: None,
            operation: operation.into(),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn log_error(&self, error: &AppError) {
        let context = serde_json::json!({
            "request_id": self.request_id,
            "operation": self.operation,
            "subject": self.subject,
            "timestamp": self.timestamp.to_rfc3339(),
        });

        match error {
            AppError::Auth(_) | AppError::MissingToken | AppError::Forbidden(_) => {
                tracing::warn!(error = %error, context = ?context, "Authentication error");
            }
            AppError::Config(_) | AppError::Internal(_) => {
                tracing::error!(error = %error, context = ?context, "Internal error");
            }
        }
    }
}
