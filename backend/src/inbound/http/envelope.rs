//! Response envelopes shared by every mutating endpoint and by all failures.
//!
//! ```text
//! {"status":"success","message":"Predio criado","objeto":{...}}
//! {"status":"success","message":"Predio removido"}
//! {"status":"error","message":"Erro ao remover o predio: registro não encontrado"}
//! ```

use serde::Serialize;

/// Outcome marker carried in the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// `{status, message, objeto?}` payload.
///
/// `objeto` is omitted when absent, which is how an update that matched no
/// row is reported.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objeto: Option<T>,
}

impl<T> Envelope<T> {
    /// Success envelope wrapping an optional row.
    pub fn success(message: impl Into<String>, objeto: Option<T>) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: message.into(),
            objeto,
        }
    }
}

impl Envelope<()> {
    /// Success envelope with no object, used by deletes.
    pub fn acknowledged(message: impl Into<String>) -> Self {
        Self::success(message, None)
    }

    /// Failure envelope.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message: message.into(),
            objeto: None,
        }
    }
}
