//! Room (sala) data model.
//!
//! A room always belongs to a building. The foreign key is enforced by the
//! database; this layer never checks it.

use std::fmt;

use super::BuildingCode;

/// Generated primary key of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomCode(i32);

impl RoomCode {
    /// Wrap a raw key.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw key as stored in the database.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for RoomCode {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field values supplied when creating or overwriting a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDraft {
    /// Room number. Stored as text so values like `"101-B"` survive.
    pub number: String,
    pub description: String,
    pub capacity: i32,
    pub building_code: BuildingCode,
}

/// Persisted room row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub code: RoomCode,
    pub number: String,
    pub description: String,
    pub capacity: i32,
    pub building_code: BuildingCode,
}

/// Room joined with the name of the building it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomListing {
    pub room: Room,
    pub building_name: String,
}

impl Room {
    /// Attach a generated code to draft values.
    pub fn from_draft(code: RoomCode, draft: RoomDraft) -> Self {
        Self {
            code,
            number: draft.number,
            description: draft.description,
            capacity: draft.capacity,
            building_code: draft.building_code,
        }
    }
}
