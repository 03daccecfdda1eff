//! Helpers shared by the handler tests.

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::Value;

use crate::domain::ports::{MockBuildingRepository, MockRoomRepository};

use super::configure;
use super::state::HttpState;

/// Build an app over the given mocks with every resource registered.
pub async fn init_app(
    buildings: MockBuildingRepository,
    rooms: MockRoomRepository,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    let state = HttpState::new(Arc::new(buildings), Arc::new(rooms));
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure),
    )
    .await
}

/// Send `request` and decode the JSON body.
pub async fn send<S>(app: &S, request: Request) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = actix_test::call_service(app, request).await;
    let status = response.status();
    let bytes = actix_test::read_body(response).await;
    let body = serde_json::from_slice(&bytes).expect("response body is JSON");
    (status, body)
}

/// Read `message` out of an envelope.
pub fn message_of(body: &Value) -> &str {
    body.get("message")
        .and_then(Value::as_str)
        .expect("envelope carries a message")
}
