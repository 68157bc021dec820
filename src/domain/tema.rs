//! Tema (topic) domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Postagem;

/// A topic grouping posts. Owns its posts: deleting a theme deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Tema {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Rust")]
    pub descricao: String,
    /// Posts filed under this theme (order not significant)
    #[serde(default)]
    pub postagem: Vec<Postagem>,
}

/// Values written by a repository `save`; `id == None` inserts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTema {
    pub id: Option<i64>,
    pub descricao: String,
}

impl SaveTema {
    pub fn new(descricao: impl Into<String>) -> Self {
        Self {
            id: None,
            descricao: descricao.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
