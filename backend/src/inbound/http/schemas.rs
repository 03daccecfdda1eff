//! OpenAPI schema definitions for the response envelopes.
//!
//! [`Envelope`](super::envelope::Envelope) is generic and only serialised, so
//! each concrete shape the API returns gets a wrapper here for utoipa.

use utoipa::ToSchema;

use super::predios::PredioBody;
use super::salas::SalaBody;

/// OpenAPI schema for the envelope `status` field.
#[derive(ToSchema)]
pub enum EnvelopeStatusSchema {
    #[schema(rename = "success")]
    Success,
    #[schema(rename = "error")]
    Error,
}

/// Failure payload returned with every `400 Bad Request`.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorEnvelopeSchema {
    #[schema(example = "error")]
    status: EnvelopeStatusSchema,
    /// Fixed prefix followed by the underlying failure text.
    #[schema(example = "Erro ao remover o predio: registro não encontrado")]
    message: String,
}

/// Success payload with no object, returned by deletes.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AckEnvelopeSchema {
    #[schema(example = "success")]
    status: EnvelopeStatusSchema,
    #[schema(example = "Predio removido")]
    message: String,
}

/// Success payload for building writes.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PredioEnvelopeSchema {
    #[schema(example = "success")]
    status: EnvelopeStatusSchema,
    #[schema(example = "Predio criado")]
    message: String,
    /// Absent when an update matched no row.
    objeto: Option<PredioBody>,
}

/// Success payload for room writes.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SalaEnvelopeSchema {
    #[schema(example = "success")]
    status: EnvelopeStatusSchema,
    #[schema(example = "Sala criado")]
    message: String,
    /// Absent when an update matched no row.
    objeto: Option<SalaBody>,
}
