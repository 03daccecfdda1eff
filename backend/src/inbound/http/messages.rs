//! Fixed client-facing messages.
//!
//! Failure prefixes are concatenated with the underlying detail, so each one
//! ends in `": "`.

/// Prefix for request bodies that cannot be read or coerced.
pub const BODY_FAILED: &str = "Erro ao interpretar o corpo da requisição: ";

/// Detail used when a get or delete matches zero rows.
pub const NOT_FOUND_DETAIL: &str = "registro não encontrado";

/// Per-resource message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceMessages {
    pub list_failed: &'static str,
    pub get_failed: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
}

/// Messages for `/predios`.
pub const PREDIO_MESSAGES: ResourceMessages = ResourceMessages {
    list_failed: "Erro ao consultar a tabela predios: ",
    get_failed: "Erro ao recuperar predios: ",
    create_failed: "Erro ao inserir o predio: ",
    update_failed: "Erro ao atualizar o predio: ",
    delete_failed: "Erro ao remover o predio: ",
    created: "Predio criado",
    updated: "Predio atualizado",
    deleted: "Predio removido",
};

/// Messages for `/salas`.
pub const SALA_MESSAGES: ResourceMessages = ResourceMessages {
    list_failed: "Erro ao consultar a tabela salas: ",
    get_failed: "Erro ao recuperar salas: ",
    create_failed: "Erro ao inserir o sala: ",
    update_failed: "Erro ao atualizar a Sala: ",
    delete_failed: "Erro ao remover o sala: ",
    created: "Sala criado",
    updated: "Sala atualizado",
    deleted: "Sala removido",
};
