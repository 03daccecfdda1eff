//! Port for room (sala) persistence.
//!
//! Reads return [`RoomListing`] values that carry the owning building's name
//! from a single join. Writes return the bare [`Room`] row.

use async_trait::async_trait;

use crate::domain::{Error, Room, RoomCode, RoomDraft, RoomListing};

use super::define_port_error;

define_port_error! {
    /// Errors raised by room persistence adapters.
    pub enum RoomRepositoryError {
        /// A pooled connection could not be obtained.
        Connection { message: String } => "{message}",
        /// The statement failed; `message` carries the driver's text.
        Query { message: String } => "{message}",
    }
}

impl RoomRepositoryError {
    /// Turn the adapter failure into a domain error behind `prefix`.
    pub fn into_domain(self, prefix: &str) -> Error {
        match self {
            Self::Connection { message } => Error::service_unavailable(prefix, message),
            Self::Query { message } => Error::rejected(prefix, message),
        }
    }
}

/// Port for reading and writing rooms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Return every room joined to its building, ordered by room number.
    ///
    /// Room numbers are text, so the order is lexicographic.
    async fn list_with_building(&self) -> Result<Vec<RoomListing>, RoomRepositoryError>;

    /// Fetch one room joined to its building, or `None` when nothing matches.
    async fn find_with_building(
        &self,
        code: RoomCode,
    ) -> Result<Option<RoomListing>, RoomRepositoryError>;

    /// Insert a room and return it with its generated code.
    async fn create(&self, draft: &RoomDraft) -> Result<Room, RoomRepositoryError>;

    /// Overwrite every field of the room identified by `code`.
    ///
    /// Returns `None` when no row matched. Callers treat that as success.
    async fn update(
        &self,
        code: RoomCode,
        draft: &RoomDraft,
    ) -> Result<Option<Room>, RoomRepositoryError>;

    /// Delete the room identified by `code` and return the affected row count.
    async fn delete(&self, code: RoomCode) -> Result<usize, RoomRepositoryError>;
}
