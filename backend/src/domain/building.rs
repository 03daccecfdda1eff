//! Building (predio) data model.

use std::fmt;

/// Generated primary key of a building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BuildingCode(i32);

impl BuildingCode {
    /// Wrap a raw key.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw key as stored in the database.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for BuildingCode {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for BuildingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field values supplied when creating or overwriting a building.
///
/// Updates replace every column, so the same draft type serves both
/// operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingDraft {
    pub name: String,
    pub description: String,
    pub abbreviation: String,
}

/// Persisted building row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Building {
    pub code: BuildingCode,
    pub name: String,
    pub description: String,
    pub abbreviation: String,
}

impl Building {
    /// Combine a generated key with the stored fields.
    ///
    /// # Examples
    /// ```
    /// use salas_api::domain::{Building, BuildingCode, BuildingDraft};
    ///
    /// let draft = BuildingDraft {
    ///     name: "Bloco A".into(),
    ///     description: "Main block".into(),
    ///     abbreviation: "BA".into(),
    /// };
    /// let building = Building::from_draft(BuildingCode::new(1), draft);
    /// assert_eq!(building.abbreviation, "BA");
    /// ```
    pub fn from_draft(code: BuildingCode, draft: BuildingDraft) -> Self {
        let BuildingDraft {
            name,
            description,
            abbreviation,
        } = draft;
        Self {
            code,
            name,
            description,
            abbreviation,
        }
    }
}
