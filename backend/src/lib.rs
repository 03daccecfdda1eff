//! Buildings and rooms REST service.
//!
//! Hexagonal layout: [`domain`] holds entities and ports, [`inbound`] the
//! actix-web adapter, [`outbound`] the Diesel adapter, and [`middleware`]
//! the request lifecycle layers.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::{Trace, cors};
