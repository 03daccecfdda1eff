//! Request body extractor accepting JSON or URL-encoded forms.
//!
//! `application/x-www-form-urlencoded` requests are read with
//! [`web::Form`]; everything else goes through [`web::Json`], whose content
//! type check rejects other media types. Both paths share the body-failure
//! envelope through the extractor configs registered in
//! [`configure`](super::configure).

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Deserialised request body, whichever encoding the client used.
#[derive(Debug)]
pub struct Body<T>(pub T);

impl<T> Body<T> {
    /// Unwrap into the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

fn is_form(req: &HttpRequest) -> bool {
    req.content_type().eq_ignore_ascii_case(FORM_CONTENT_TYPE)
}

impl<T> FromRequest for Body<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if is_form(req) {
            let form = web::Form::<T>::from_request(req, payload);
            Box::pin(async move { form.await.map(|form| Self(form.into_inner())) })
        } else {
            let json = web::Json::<T>::from_request(req, payload);
            Box::pin(async move { json.await.map(|json| Self(json.into_inner())) })
        }
    }
}
