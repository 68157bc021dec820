//! Postagem (blog post) domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A published blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Postagem {
    /// Database-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Primeira postagem")]
    pub titulo: String,
    #[schema(example = "Olá, mundo! Este é o meu blog.")]
    pub texto: String,
    /// Last modification time, set by the server on every save
    pub data: DateTime<Utc>,
    /// Owning theme, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub tema_id: Option<i64>,
}

/// Values written by a repository `save`.
///
/// `id == None` inserts a new row; `Some(id)` overwrites the existing row.
/// `data` is never part of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePostagem {
    pub id: Option<i64>,
    pub titulo: String,
    pub texto: String,
    pub tema_id: Option<i64>,
}

impl SavePostagem {
    /// Input for a fresh insert
    pub fn new(titulo: impl Into<String>, texto: impl Into<String>, tema_id: Option<i64>) -> Self {
        Self {
            id: None,
            titulo: titulo.into(),
            texto: texto.into(),
            tema_id,
        }
    }

    /// Same values, targeting an existing row
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
