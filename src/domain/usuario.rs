//! Usuario (user) domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registered user. `usuario` is the login identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub nome: String,
    pub usuario: String,
    /// Argon2 PHC hash, never serialized
    #[serde(skip_serializing, default)]
    pub senha: String,
}

/// Values written by a repository `save`; `senha` must already be hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveUsuario {
    pub id: Option<i64>,
    pub nome: String,
    pub usuario: String,
    pub senha: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UsuarioResponse {
    #[schema(example = 1)]
    pub id: i64,
    /// Display name
    #[schema(example = "Maria da Silva")]
    pub nome: String,
    /// Login identity
    #[schema(example = "maria@email.com")]
    pub usuario: String,
}

impl From<Usuario> for UsuarioResponse {
    fn from(usuario: Usuario) -> Self {
        Self {
            id: usuario.id,
            nome: usuario.nome,
            usuario: usuario.usuario,
        }
    }
}
