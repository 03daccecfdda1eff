//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Buildings.
    predios (codigo) {
        /// Primary key, generated by a sequence.
        codigo -> Int4,
        nome -> Varchar,
        descricao -> Varchar,
        /// Short abbreviation, e.g. `BA`.
        sigla -> Varchar,
    }
}

diesel::table! {
    /// Rooms. `predio` references `predios.codigo`.
    salas (codigo) {
        /// Primary key, generated by a sequence.
        codigo -> Int4,
        numero -> Varchar,
        descricao -> Varchar,
        capacidade -> Int4,
        predio -> Int4,
    }
}

diesel::joinable!(salas -> predios (predio));

diesel::allow_tables_to_appear_in_same_query!(predios, salas);
