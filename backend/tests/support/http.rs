//! Request helpers over an initialised actix service.

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::Value;

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
