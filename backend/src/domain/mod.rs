//! Domain primitives and ports.
//!
//! Purpose: define the building and room entities shared by the HTTP and
//! persistence layers, the transport-agnostic [`Error`], and the repository
//! ports under [`ports`].
//!
//! Public surface:
//! - Building, BuildingCode, BuildingDraft: predios rows and inputs.
//! - Room, RoomCode, RoomDraft, RoomListing: salas rows, inputs, and the
//!   building-name join.
//! - Error, ErrorCode: failure payload and its log classification.

pub mod building;
pub mod error;
pub mod ports;
pub mod room;

pub use self::building::{Building, BuildingCode, BuildingDraft};
pub use self::error::{Error, ErrorCode};
pub use self::room::{Room, RoomCode, RoomDraft, RoomListing};
