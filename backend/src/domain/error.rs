//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter renders every
//! variant as the same `{status, message}` envelope; the [`ErrorCode`] only
//! classifies the failure for logs.

use std::fmt;

/// Failure category attached to an [`Error`].
///
/// Clients never see the code. It exists so operators can tell a missing row
/// from a constraint violation or an unreachable database in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request body or path could not be coerced into the expected shape.
    InvalidRequest,
    /// The statement matched zero rows where at least one was required.
    NotFound,
    /// The database rejected the statement (constraints, types, syntax).
    Rejected,
    /// A pooled connection could not be obtained.
    ServiceUnavailable,
}

impl ErrorCode {
    /// Stable snake-case label used in structured logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::NotFound => "not_found",
            Self::Rejected => "rejected",
            Self::ServiceUnavailable => "service_unavailable",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain error payload.
///
/// The message is built from a fixed prefix naming the failed operation and
/// the underlying detail, e.g. `"Erro ao remover o predio: registro não
/// encontrado"`.
///
/// # Examples
/// ```
/// use salas_api::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Erro ao recuperar predios: ", "registro não encontrado");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "Erro ao recuperar predios: registro não encontrado");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create an error from a prefix and the detail that follows it.
    pub fn new(code: ErrorCode, prefix: &str, detail: impl fmt::Display) -> Self {
        Self {
            code,
            message: format!("{prefix}{detail}"),
        }
    }

    /// Failure category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(prefix: &str, detail: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InvalidRequest, prefix, detail)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(prefix: &str, detail: impl fmt::Display) -> Self {
        Self::new(ErrorCode::NotFound, prefix, detail)
    }

    /// Convenience constructor for [`ErrorCode::Rejected`].
    pub fn rejected(prefix: &str, detail: impl fmt::Display) -> Self {
        Self::new(ErrorCode::Rejected, prefix, detail)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(prefix: &str, detail: impl fmt::Display) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, prefix, detail)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}
