//! Shared Diesel error mapping for the building and room repositories.
//!
//! Clients receive the driver's own wording (e.g. `duplicate key value
//! violates unique constraint "predios_pkey"`), so these helpers keep the
//! message intact and only decide which port variant carries it.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub fn map_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    debug!(%error, "connection checkout failed");
    connection(error.into_message())
}

/// Map a Diesel error into query/connection constructors.
///
/// A closed connection is reported as a connection failure; everything else,
/// constraint violations included, is a query failure.
pub fn map_diesel_error<E, Q, C>(
    error: diesel::result::Error,
    operation: &'static str,
    query: Q,
    connection: C,
) -> E
where
    Q: FnOnce(String) -> E,
    C: FnOnce(String) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                operation,
                "diesel operation failed"
            );
        }
        _ => debug!(%error, operation, "diesel operation failed"),
    }

    let closed = matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
    );
    let message = error.to_string();
    if closed {
        connection(message)
    } else {
        query(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    #[derive(Debug, PartialEq, Eq)]
    enum Mapped {
        Query(String),
        Connection(String),
    }

    fn map(error: DieselError) -> Mapped {
        map_diesel_error(error, "test", Mapped::Query, Mapped::Connection)
    }

    #[rstest]
    fn constraint_violations_keep_driver_message() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation,
            Box::new(String::from(
                "insert or update on table \"salas\" violates foreign key constraint \"salas_predio_fkey\"",
            )),
        );
        assert_eq!(
            map(error),
            Mapped::Query(String::from(
                "insert or update on table \"salas\" violates foreign key constraint \"salas_predio_fkey\""
            ))
        );
    }

    #[rstest]
    fn closed_connections_map_to_connection_errors() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new(String::from("server closed the connection unexpectedly")),
        );
        assert!(matches!(map(error), Mapped::Connection(_)));
    }

    #[rstest]
    fn pool_errors_use_inner_message() {
        let mapped: Mapped = map_pool_error(PoolError::checkout("timed out"), Mapped::Connection);
        assert_eq!(mapped, Mapped::Connection(String::from("timed out")));
    }
}
