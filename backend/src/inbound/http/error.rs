//! HTTP adapter mapping for domain errors.
//!
//! Every failure becomes `400 Bad Request` with the `{status, message}`
//! envelope. The domain [`ErrorCode`](crate::domain::ErrorCode) is logged but
//! never changes the status.

use actix_web::error::{JsonPayloadError, UrlencodedError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use tracing::field::display;
use tracing::warn;

use crate::domain::Error;
use crate::middleware::trace::TraceId;

use super::envelope::Envelope;
use super::messages::BODY_FAILED;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        warn!(
            code = %self.code(),
            message = self.message(),
            trace_id = TraceId::current().map(display),
            "request failed"
        );
        HttpResponse::build(self.status_code()).json(Envelope::error(self.message()))
    }
}

/// Render JSON extractor failures (bad syntax, missing fields, wrong content
/// type) with the same envelope as every other failure.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(BODY_FAILED, err).into()
}

/// Form-body counterpart of [`json_error_handler`].
pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(BODY_FAILED, err).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn body_of(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body())
            .await
            .expect("reading response body succeeds");
        serde_json::from_slice(&bytes).expect("error body is JSON")
    }

    #[rstest]
    #[case(Error::invalid_request("a: ", "b"))]
    #[case(Error::not_found("a: ", "b"))]
    #[case(Error::rejected("a: ", "b"))]
    #[case(Error::service_unavailable("a: ", "b"))]
    fn every_code_maps_to_bad_request(#[case] error: Error) {
        assert_eq!(ResponseError::status_code(&error), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[actix_web::test]
    async fn error_response_uses_envelope() {
        let error = Error::rejected("Erro ao inserir o predio: ", "null value in column \"nome\"");
        let response = ResponseError::error_response(&error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            json!({
                "status": "error",
                "message": "Erro ao inserir o predio: null value in column \"nome\""
            })
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn traced_failures_keep_envelope_and_header() {
        use actix_web::{App, test as actix_test, web};

        use crate::middleware::Trace;

        let app = actix_test::init_service(App::new().wrap(Trace).route(
            "/",
            web::get().to(|| async {
                assert!(TraceId::current().is_some(), "trace id in scope");
                ApiResult::<HttpResponse>::Err(Error::not_found("a: ", "b"))
            }),
        ))
        .await;
        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
                .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(res.headers().contains_key("trace-id"));
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body, json!({"status": "error", "message": "a: b"}));
    }

    #[rstest]
    #[actix_web::test]
    async fn json_payload_errors_are_prefixed() {
        let req = actix_web::test::TestRequest::default().to_http_request();
        let error = json_error_handler(JsonPayloadError::ContentType, &req);
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_of(response).await;
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .expect("message present");
        assert!(message.starts_with(BODY_FAILED));
    }
}
