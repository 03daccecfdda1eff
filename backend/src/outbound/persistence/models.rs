//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{Building, BuildingCode, BuildingDraft, Room, RoomCode, RoomDraft};

use super::schema::{predios, salas};

// ---------------------------------------------------------------------------
// Predios
// ---------------------------------------------------------------------------

/// Row struct for reading from the predios table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = predios)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PredioRow {
    pub codigo: i32,
    pub nome: String,
    pub descricao: String,
    pub sigla: String,
}

impl From<PredioRow> for Building {
    fn from(row: PredioRow) -> Self {
        Self {
            code: BuildingCode::new(row.codigo),
            name: row.nome,
            description: row.descricao,
            abbreviation: row.sigla,
        }
    }
}

/// Column values written by inserts and full-overwrite updates.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = predios)]
pub(crate) struct PredioValues<'a> {
    pub nome: &'a str,
    pub descricao: &'a str,
    pub sigla: &'a str,
}

impl<'a> From<&'a BuildingDraft> for PredioValues<'a> {
    fn from(draft: &'a BuildingDraft) -> Self {
        Self {
            nome: draft.name.as_str(),
            descricao: draft.description.as_str(),
            sigla: draft.abbreviation.as_str(),
        }
    }
}

// ---------------------------------------------------------------------------
// Salas
// ---------------------------------------------------------------------------

/// Row struct for reading from the salas table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = salas)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SalaRow {
    pub codigo: i32,
    pub numero: String,
    pub descricao: String,
    pub capacidade: i32,
    pub predio: i32,
}

impl From<SalaRow> for Room {
    fn from(row: SalaRow) -> Self {
        Self {
            code: RoomCode::new(row.codigo),
            number: row.numero,
            description: row.descricao,
            capacity: row.capacidade,
            building_code: BuildingCode::new(row.predio),
        }
    }
}

/// Column values written by inserts and full-overwrite updates.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = salas)]
pub(crate) struct SalaValues<'a> {
    pub numero: &'a str,
    pub descricao: &'a str,
    pub capacidade: i32,
    pub predio: i32,
}

impl<'a> From<&'a RoomDraft> for SalaValues<'a> {
    fn from(draft: &'a RoomDraft) -> Self {
        Self {
            numero: draft.number.as_str(),
            descricao: draft.description.as_str(),
            capacidade: draft.capacity,
            predio: draft.building_code.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sala_values_borrow_the_draft() {
        let draft = RoomDraft {
            number: "101".into(),
            description: "Lab".into(),
            capacity: 30,
            building_code: BuildingCode::new(4),
        };
        let values = SalaValues::from(&draft);
        assert_eq!(values.numero, "101");
        assert_eq!(values.capacidade, 30);
        assert_eq!(values.predio, 4);
    }

    #[rstest]
    fn predio_row_maps_to_building() {
        let building = Building::from(PredioRow {
            codigo: 7,
            nome: "Bloco A".into(),
            descricao: "Main block".into(),
            sigla: "BA".into(),
        });
        assert_eq!(building.code, BuildingCode::new(7));
        assert_eq!(building.name, "Bloco A");
        assert_eq!(building.abbreviation, "BA");
    }
}
