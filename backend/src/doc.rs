//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every predios and salas handler together with the
//! envelope schemas from [`crate::inbound::http::schemas`]. The document
//! backs Swagger UI (debug builds) and is exported via
//! `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::predios::{PredioBody, PredioRequest, PredioUpdateRequest};
use crate::inbound::http::salas::{SalaBody, SalaListagemBody, SalaRequest, SalaUpdateRequest};
use crate::inbound::http::schemas::{
    AckEnvelopeSchema, EnvelopeStatusSchema, ErrorEnvelopeSchema, PredioEnvelopeSchema,
    SalaEnvelopeSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Salas API",
        description = "CRUD over buildings (predios) and the rooms (salas) they contain."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::predios::list_predios,
        crate::inbound::http::predios::get_predio,
        crate::inbound::http::predios::create_predio,
        crate::inbound::http::predios::update_predio,
        crate::inbound::http::predios::delete_predio,
        crate::inbound::http::salas::list_salas,
        crate::inbound::http::salas::get_sala,
        crate::inbound::http::salas::create_sala,
        crate::inbound::http::salas::update_sala,
        crate::inbound::http::salas::delete_sala,
    ),
    components(schemas(
        PredioBody,
        PredioRequest,
        PredioUpdateRequest,
        SalaBody,
        SalaListagemBody,
        SalaRequest,
        SalaUpdateRequest,
        EnvelopeStatusSchema,
        ErrorEnvelopeSchema,
        AckEnvelopeSchema,
        PredioEnvelopeSchema,
        SalaEnvelopeSchema,
    )),
    tags(
        (name = "predios", description = "Buildings"),
        (name = "salas", description = "Rooms, each belonging to a building")
    )
)]
pub struct ApiDoc;
