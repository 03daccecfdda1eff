//! Request middleware.
//!
//! Request lifecycle concerns shared by every route: tracing and CORS.

pub mod trace;

pub use trace::Trace;

use actix_cors::Cors;

/// CORS policy mirroring Express's default `cors()`.
///
/// Any origin is answered with `*`, every method is allowed, and preflight
/// requests get their `Access-Control-Request-Headers` reflected back.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use salas_api::middleware::cors;
///
/// let app = App::new().wrap(cors());
/// ```
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
}
