//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

#[cfg(debug_assertions)]
use salas_api::doc::ApiDoc;
use salas_api::inbound::http::configure;
use salas_api::inbound::http::state::HttpState;
use salas_api::outbound::persistence::{DbPool, DieselBuildingRepository, DieselRoomRepository};
use salas_api::{Trace, cors};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        Arc::new(DieselBuildingRepository::new(pool.clone())),
        Arc::new(DieselRoomRepository::new(pool.clone())),
    ))
}

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .wrap(cors())
        .wrap(Trace)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from `config`.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = build_http_state(&config.db_pool);
    let ServerConfig {
        host,
        port,
        db_pool: _,
    } = config;

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind((host.as_str(), port))?
        .run();

    info!(%host, port, "listening");
    Ok(server)
}
