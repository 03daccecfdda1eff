//! Port for building (predio) persistence.
//!
//! Every method issues exactly one statement. Adapters report the driver's
//! own error text so the HTTP layer can forward it verbatim.

use async_trait::async_trait;

use crate::domain::{Building, BuildingCode, BuildingDraft, Error};

use super::define_port_error;

define_port_error! {
    /// Errors raised by building persistence adapters.
    pub enum BuildingRepositoryError {
        /// A pooled connection could not be obtained.
        Connection { message: String } => "{message}",
        /// The statement failed; `message` carries the driver's text.
        Query { message: String } => "{message}",
    }
}

impl BuildingRepositoryError {
    /// Turn the adapter failure into a domain error behind `prefix`.
    pub fn into_domain(self, prefix: &str) -> Error {
        match self {
            Self::Connection { message } => Error::service_unavailable(prefix, message),
            Self::Query { message } => Error::rejected(prefix, message),
        }
    }
}

/// Port for reading and writing buildings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BuildingRepository: Send + Sync {
    /// Return every building ordered by code, ascending.
    async fn list(&self) -> Result<Vec<Building>, BuildingRepositoryError>;

    /// Fetch one building, or `None` when the code matches nothing.
    async fn find_by_code(
        &self,
        code: BuildingCode,
    ) -> Result<Option<Building>, BuildingRepositoryError>;

    /// Insert a building and return it with its generated code.
    async fn create(&self, draft: &BuildingDraft) -> Result<Building, BuildingRepositoryError>;

    /// Overwrite every field of the building identified by `code`.
    ///
    /// Returns `None` when no row matched. Callers treat that as success.
    async fn update(
        &self,
        code: BuildingCode,
        draft: &BuildingDraft,
    ) -> Result<Option<Building>, BuildingRepositoryError>;

    /// Delete the building identified by `code` and return the affected row
    /// count.
    async fn delete(&self, code: BuildingCode) -> Result<usize, BuildingRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    fn connection_failures_map_to_service_unavailable() {
        let err = BuildingRepositoryError::connection("timed out waiting for connection")
            .into_domain("Erro ao consultar a tabela predios: ");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
        assert_eq!(
            err.message(),
            "Erro ao consultar a tabela predios: timed out waiting for connection"
        );
    }

    #[rstest]
    fn query_failures_keep_driver_text() {
        let err = BuildingRepositoryError::query("duplicate key value violates unique constraint")
            .into_domain("Erro ao inserir o predio: ");
        assert_eq!(err.code(), ErrorCode::Rejected);
        assert_eq!(
            err.message(),
            "Erro ao inserir o predio: duplicate key value violates unique constraint"
        );
    }
}
