//! Building (predio) endpoints.
//!
//! ```text
//! GET    /predios
//! POST   /predios            {"nome":"Bloco A","descricao":"Main block","sigla":"BA"}
//! PUT    /predios            {"codigo":1,"nome":"Bloco A","descricao":"Main block","sigla":"BA"}
//! GET    /predios/{codigo}
//! DELETE /predios/{codigo}
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Building, BuildingCode, BuildingDraft, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::body::Body;
use crate::inbound::http::coercion::{self, path_code};
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::messages::{NOT_FOUND_DETAIL, PREDIO_MESSAGES};
use crate::inbound::http::schemas::{AckEnvelopeSchema, ErrorEnvelopeSchema, PredioEnvelopeSchema};
use crate::inbound::http::state::HttpState;

/// Building as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PredioBody {
    #[schema(example = 1)]
    pub codigo: i32,
    #[schema(example = "Bloco A")]
    pub nome: String,
    #[schema(example = "Main block")]
    pub descricao: String,
    #[schema(example = "BA")]
    pub sigla: String,
}

impl From<Building> for PredioBody {
    fn from(building: Building) -> Self {
        Self {
            codigo: building.code.get(),
            nome: building.name,
            descricao: building.description,
            sigla: building.abbreviation,
        }
    }
}

/// Request body for `POST /predios`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PredioRequest {
    #[serde(deserialize_with = "coercion::text")]
    pub nome: String,
    #[serde(deserialize_with = "coercion::text")]
    pub descricao: String,
    #[serde(deserialize_with = "coercion::text")]
    pub sigla: String,
}

impl From<PredioRequest> for BuildingDraft {
    fn from(value: PredioRequest) -> Self {
        Self {
            name: value.nome,
            description: value.descricao,
            abbreviation: value.sigla,
        }
    }
}

/// Request body for `PUT /predios`. Every field is overwritten.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PredioUpdateRequest {
    #[serde(deserialize_with = "coercion::integer")]
    pub codigo: i32,
    #[serde(deserialize_with = "coercion::text")]
    pub nome: String,
    #[serde(deserialize_with = "coercion::text")]
    pub descricao: String,
    #[serde(deserialize_with = "coercion::text")]
    pub sigla: String,
}

impl PredioUpdateRequest {
    fn into_parts(self) -> (BuildingCode, BuildingDraft) {
        (
            BuildingCode::new(self.codigo),
            BuildingDraft {
                name: self.nome,
                description: self.descricao,
                abbreviation: self.sigla,
            },
        )
    }
}

/// List all buildings ordered by `codigo`.
#[utoipa::path(
    get,
    path = "/predios",
    responses(
        (status = 200, description = "Buildings ordered by codigo", body = [PredioBody]),
        (status = 400, description = "Query failed", body = ErrorEnvelopeSchema)
    ),
    tags = ["predios"],
    operation_id = "listPredios"
)]
#[get("/predios")]
pub async fn list_predios(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<PredioBody>>> {
    let buildings = state
        .buildings
        .list()
        .await
        .map_err(|err| err.into_domain(PREDIO_MESSAGES.list_failed))?;
    Ok(web::Json(
        buildings.into_iter().map(PredioBody::from).collect(),
    ))
}

/// Fetch one building by `codigo`.
#[utoipa::path(
    get,
    path = "/predios/{codigo}",
    params(("codigo" = String, Path, description = "Building code; parsed like parseInt")),
    responses(
        (status = 200, description = "Building", body = PredioBody),
        (status = 400, description = "Query failed or no building matched", body = ErrorEnvelopeSchema)
    ),
    tags = ["predios"],
    operation_id = "getPredio"
)]
#[get("/predios/{codigo}")]
pub async fn get_predio(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PredioBody>> {
    let prefix = PREDIO_MESSAGES.get_failed;
    let code = BuildingCode::new(path_code(&path, prefix)?);
    let building = state
        .buildings
        .find_by_code(code)
        .await
        .map_err(|err| err.into_domain(prefix))?
        .ok_or_else(|| Error::not_found(prefix, NOT_FOUND_DETAIL))?;
    Ok(web::Json(building.into()))
}

/// Create a building.
#[utoipa::path(
    post,
    path = "/predios",
    request_body(content(
        (PredioRequest = "application/json"),
        (PredioRequest = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Building created", body = PredioEnvelopeSchema),
        (status = 400, description = "Invalid body or insert failed", body = ErrorEnvelopeSchema)
    ),
    tags = ["predios"],
    operation_id = "createPredio"
)]
#[post("/predios")]
pub async fn create_predio(
    state: web::Data<HttpState>,
    payload: Body<PredioRequest>,
) -> ApiResult<web::Json<Envelope<PredioBody>>> {
    let draft = BuildingDraft::from(payload.into_inner());
    let building = state
        .buildings
        .create(&draft)
        .await
        .map_err(|err| err.into_domain(PREDIO_MESSAGES.create_failed))?;
    Ok(web::Json(Envelope::success(
        PREDIO_MESSAGES.created,
        Some(building.into()),
    )))
}

/// Overwrite a building.
///
/// An unknown `codigo` still answers 200; the envelope simply has no
/// `objeto`.
#[utoipa::path(
    put,
    path = "/predios",
    request_body(content(
        (PredioUpdateRequest = "application/json"),
        (PredioUpdateRequest = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Building updated; objeto absent when codigo matched nothing", body = PredioEnvelopeSchema),
        (status = 400, description = "Invalid body or update failed", body = ErrorEnvelopeSchema)
    ),
    tags = ["predios"],
    operation_id = "updatePredio"
)]
#[put("/predios")]
pub async fn update_predio(
    state: web::Data<HttpState>,
    payload: Body<PredioUpdateRequest>,
) -> ApiResult<web::Json<Envelope<PredioBody>>> {
    let (code, draft) = payload.into_inner().into_parts();
    let updated = state
        .buildings
        .update(code, &draft)
        .await
        .map_err(|err| err.into_domain(PREDIO_MESSAGES.update_failed))?;
    if updated.is_none() {
        debug!(%code, "update matched no predio");
    }
    Ok(web::Json(Envelope::success(
        PREDIO_MESSAGES.updated,
        updated.map(PredioBody::from),
    )))
}

/// Delete a building by `codigo`.
#[utoipa::path(
    delete,
    path = "/predios/{codigo}",
    params(("codigo" = String, Path, description = "Building code; parsed like parseInt")),
    responses(
        (status = 200, description = "Building removed", body = AckEnvelopeSchema),
        (status = 400, description = "Delete failed or no building matched", body = ErrorEnvelopeSchema)
    ),
    tags = ["predios"],
    operation_id = "deletePredio"
)]
#[delete("/predios/{codigo}")]
pub async fn delete_predio(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Envelope<()>>> {
    let prefix = PREDIO_MESSAGES.delete_failed;
    let code = BuildingCode::new(path_code(&path, prefix)?);
    let affected = state
        .buildings
        .delete(code)
        .await
        .map_err(|err| err.into_domain(prefix))?;
    if affected == 0 {
        return Err(Error::not_found(prefix, NOT_FOUND_DETAIL));
    }
    Ok(web::Json(Envelope::acknowledged(PREDIO_MESSAGES.deleted)))
}
