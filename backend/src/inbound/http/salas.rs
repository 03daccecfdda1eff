//! Room (sala) endpoints.
//!
//! Reads join each room to its building and add `nomepredio`; writes echo
//! the bare row.

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{BuildingCode, Error, Room, RoomCode, RoomDraft, RoomListing};
use crate::inbound::http::ApiResult;
use crate::inbound::http::body::Body;
use crate::inbound::http::coercion::{self, path_code};
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::messages::{NOT_FOUND_DETAIL, SALA_MESSAGES};
use crate::inbound::http::schemas::{AckEnvelopeSchema, ErrorEnvelopeSchema, SalaEnvelopeSchema};
use crate::inbound::http::state::HttpState;

/// Room row as echoed by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SalaBody {
    #[schema(example = 1)]
    pub codigo: i32,
    #[schema(example = "101")]
    pub numero: String,
    #[schema(example = "Lab")]
    pub descricao: String,
    #[schema(example = 30)]
    pub capacidade: i32,
    #[schema(example = 1)]
    pub predio: i32,
}

impl From<Room> for SalaBody {
    fn from(room: Room) -> Self {
        Self {
            codigo: room.code.get(),
            numero: room.number,
            descricao: room.description,
            capacidade: room.capacity,
            predio: room.building_code.get(),
        }
    }
}

/// Room joined with its building's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SalaListagemBody {
    #[serde(flatten)]
    pub sala: SalaBody,
    #[schema(example = "Bloco A")]
    pub nomepredio: String,
}

impl From<RoomListing> for SalaListagemBody {
    fn from(listing: RoomListing) -> Self {
        Self {
            sala: listing.room.into(),
            nomepredio: listing.building_name,
        }
    }
}

/// Request body for `POST /salas`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SalaRequest {
    #[serde(deserialize_with = "coercion::text")]
    pub numero: String,
    #[serde(deserialize_with = "coercion::text")]
    pub descricao: String,
    #[serde(deserialize_with = "coercion::integer")]
    pub capacidade: i32,
    #[serde(deserialize_with = "coercion::integer")]
    pub predio: i32,
}

impl From<SalaRequest> for RoomDraft {
    fn from(value: SalaRequest) -> Self {
        Self {
            number: value.numero,
            description: value.descricao,
            capacity: value.capacidade,
            building_code: BuildingCode::new(value.predio),
        }
    }
}

/// Request body for `PUT /salas`. Every field is overwritten.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SalaUpdateRequest {
    #[serde(deserialize_with = "coercion::integer")]
    pub codigo: i32,
    #[serde(flatten)]
    pub campos: SalaRequest,
}

/// List every room with its building name, ordered by `numero`.
#[utoipa::path(
    get,
    path = "/salas",
    responses(
        (status = 200, description = "Rooms ordered by numero", body = [SalaListagemBody]),
        (status = 400, description = "Query failed", body = ErrorEnvelopeSchema)
    ),
    tags = ["salas"],
    operation_id = "listSalas"
)]
#[get("/salas")]
pub async fn list_salas(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<SalaListagemBody>>> {
    let rooms = state
        .rooms
        .list_with_building()
        .await
        .map_err(|err| err.into_domain(SALA_MESSAGES.list_failed))?;
    Ok(web::Json(
        rooms.into_iter().map(SalaListagemBody::from).collect(),
    ))
}

/// Fetch one room with its building name.
#[utoipa::path(
    get,
    path = "/salas/{codigo}",
    params(("codigo" = String, Path, description = "Room code; parsed like parseInt")),
    responses(
        (status = 200, description = "Room", body = SalaListagemBody),
        (status = 400, description = "Query failed or no room matched", body = ErrorEnvelopeSchema)
    ),
    tags = ["salas"],
    operation_id = "getSala"
)]
#[get("/salas/{codigo}")]
pub async fn get_sala(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<SalaListagemBody>> {
    let prefix = SALA_MESSAGES.get_failed;
    let code = RoomCode::new(path_code(&path, prefix)?);
    let listing = state
        .rooms
        .find_with_building(code)
        .await
        .map_err(|err| err.into_domain(prefix))?
        .ok_or_else(|| Error::not_found(prefix, NOT_FOUND_DETAIL))?;
    Ok(web::Json(listing.into()))
}

/// Create a room.
///
/// A `predio` that names no building fails with the database's foreign-key
/// message.
#[utoipa::path(
    post,
    path = "/salas",
    request_body(content(
        (SalaRequest = "application/json"),
        (SalaRequest = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Room created", body = SalaEnvelopeSchema),
        (status = 400, description = "Invalid body or insert failed", body = ErrorEnvelopeSchema)
    ),
    tags = ["salas"],
    operation_id = "createSala"
)]
#[post("/salas")]
pub async fn create_sala(
    state: web::Data<HttpState>,
    payload: Body<SalaRequest>,
) -> ApiResult<web::Json<Envelope<SalaBody>>> {
    let draft = RoomDraft::from(payload.into_inner());
    let room = state
        .rooms
        .create(&draft)
        .await
        .map_err(|err| err.into_domain(SALA_MESSAGES.create_failed))?;
    Ok(web::Json(Envelope::success(
        SALA_MESSAGES.created,
        Some(room.into()),
    )))
}

/// Overwrite a room. An unknown `codigo` answers 200 without `objeto`.
#[utoipa::path(
    put,
    path = "/salas",
    request_body(content(
        (SalaUpdateRequest = "application/json"),
        (SalaUpdateRequest = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Room updated; objeto absent when codigo matched nothing", body = SalaEnvelopeSchema),
        (status = 400, description = "Invalid body or update failed", body = ErrorEnvelopeSchema)
    ),
    tags = ["salas"],
    operation_id = "updateSala"
)]
#[put("/salas")]
pub async fn update_sala(
    state: web::Data<HttpState>,
    payload: Body<SalaUpdateRequest>,
) -> ApiResult<web::Json<Envelope<SalaBody>>> {
    let SalaUpdateRequest { codigo, campos } = payload.into_inner();
    let code = RoomCode::new(codigo);
    let updated = state
        .rooms
        .update(code, &RoomDraft::from(campos))
        .await
        .map_err(|err| err.into_domain(SALA_MESSAGES.update_failed))?;
    if updated.is_none() {
        debug!(%code, "update matched no sala");
    }
    Ok(web::Json(Envelope::success(
        SALA_MESSAGES.updated,
        updated.map(SalaBody::from),
    )))
}

/// Delete a room by `codigo`.
#[utoipa::path(
    delete,
    path = "/salas/{codigo}",
    params(("codigo" = String, Path, description = "Room code; parsed like parseInt")),
    responses(
        (status = 200, description = "Room removed", body = AckEnvelopeSchema),
        (status = 400, description = "Delete failed or no room matched", body = ErrorEnvelopeSchema)
    ),
    tags = ["salas"],
    operation_id = "deleteSala"
)]
#[delete("/salas/{codigo}")]
pub async fn delete_sala(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Envelope<()>>> {
    let prefix = SALA_MESSAGES.delete_failed;
    let code = RoomCode::new(path_code(&path, prefix)?);
    let affected = state
        .rooms
        .delete(code)
        .await
        .map_err(|err| err.into_domain(prefix))?;
    if affected == 0 {
        return Err(Error::not_found(prefix, NOT_FOUND_DETAIL));
    }
    Ok(web::Json(Envelope::acknowledged(SALA_MESSAGES.deleted)))
}
