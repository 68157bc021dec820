//! Tema repository implementation.
//!
//! Themes are always returned with their posts loaded. Deletion is not part
//! of this trait: it cascades to posts and therefore runs through
//! `UnitOfWork::transaction` (see `TxTemaRepository`).

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, QueryTrait, Set,
};

use super::entities::tema::{self, ActiveModel};
use super::entities::{PostagemEntity, TemaEntity};
use super::search::ContainsIgnoreCase;
use crate::domain::{SaveTema, Tema};
use crate::errors::{AppResult, OptionExt};

#[cfg(test)]
use mockall::automock;

/// Tema repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TemaRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Tema>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Tema>>;

    /// Themes whose description contains `descricao`, ignoring case
    async fn find_all_by_descricao_containing(&self, descricao: &str) -> AppResult<Vec<Tema>>;

    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;

    /// Insert when `id` is absent, otherwise overwrite the matching row
    /// (`NotFound` if none).
    async fn save(&self, tema: SaveTema) -> AppResult<Tema>;
}

/// SeaORM-backed TemaRepository
pub struct TemaStore {
    db: DatabaseConnection,
}

impl TemaStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load_postagens(&self, model: tema::Model) -> AppResult<Tema> {
        let postagens = model.find_related(PostagemEntity).all(&self.db).await?;
        Ok(model.into_domain(postagens))
    }
}

#[async_trait]
impl TemaRepository for TemaStore {
    async fn find_all(&self) -> AppResult<Vec<Tema>> {
        let rows = TemaEntity::find()
            .order_by_asc(tema::Column::Id)
            .find_with_related(PostagemEntity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(model, postagens)| model.into_domain(postagens))
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Tema>> {
        match TemaEntity::find_by_id(id).one(&self.db).await? {
            Some(model) => Ok(Some(self.load_postagens(model).await?)),
            None => Ok(None),
        }
    }

    async fn find_all_by_descricao_containing(&self, descricao: &str) -> AppResult<Vec<Tema>> {
        let search = ContainsIgnoreCase::new(self.db.get_database_backend(), descricao);
        let rows = TemaEntity::find()
            .apply_if(search.filter(tema::Column::Descricao), |query, filter| {
                query.filter(filter)
            })
            .order_by_asc(tema::Column::Id)
            .find_with_related(PostagemEntity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter(|(model, _)| search.matches(&model.descricao))
            .map(|(model, postagens)| model.into_domain(postagens))
            .collect())
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(TemaEntity::find_by_id(id).one(&self.db).await?.is_some())
    }

    async fn save(&self, input: SaveTema) -> AppResult<Tema> {
        let model = match input.id {
            None => {
                let active_model = ActiveModel {
                    descricao: Set(input.descricao),
                    ..Default::default()
                };
                active_model.insert(&self.db).await?
            }
            Some(id) => {
                let existing = TemaEntity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or_not_found()?;

                let mut active: ActiveModel = existing.into();
                active.descricao = Set(input.descricao);
                active.update(&self.db).await?
            }
        };

        tracing::debug!(id = model.id, "Tema saved");
        self.load_postagens(model).await
    }
}
