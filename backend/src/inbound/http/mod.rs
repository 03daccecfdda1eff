//! HTTP inbound adapter exposing the predios and salas REST endpoints.

pub mod body;
pub mod coercion;
pub mod envelope;
pub mod error;
pub mod messages;
pub mod predios;
pub mod salas;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

pub use error::{ApiResult, form_error_handler, json_error_handler};

/// Register the JSON and form body configs and every resource route.
///
/// Shared by the server, the handler tests, and the integration tests so all
/// of them see identical routing and body handling.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .service(predios::list_predios)
        .service(predios::get_predio)
        .service(predios::create_predio)
        .service(predios::update_predio)
        .service(predios::delete_predio)
        .service(salas::list_salas)
        .service(salas::get_sala)
        .service(salas::create_sala)
        .service(salas::update_sala)
        .service(salas::delete_sala);
}
