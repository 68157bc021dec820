//! Postagem repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QueryTrait, Set,
};

use super::entities::postagem::{self, ActiveModel};
use super::entities::PostagemEntity;
use super::search::ContainsIgnoreCase;
use crate::domain::{Postagem, SavePostagem};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(test)]
use mockall::automock;

/// Postagem repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PostagemRepository: Send + Sync {
    /// All posts, oldest id first
    async fn find_all(&self) -> AppResult<Vec<Postagem>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Postagem>>;

    /// Posts whose title contains `titulo`, ignoring case
    async fn find_all_by_titulo_containing(&self, titulo: &str) -> AppResult<Vec<Postagem>>;

    /// Insert when `id` is absent, otherwise overwrite the matching row.
    ///
    /// `data` is stamped with the current time either way.
    /// Fails with `NotFound` when `id` is set but no row matches.
    async fn save(&self, postagem: SavePostagem) -> AppResult<Postagem>;

    /// Fails with `NotFound` when no row matches.
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}

/// SeaORM-backed PostagemRepository
pub struct PostagemStore {
    db: DatabaseConnection,
}

impl PostagemStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostagemRepository for PostagemStore {
    async fn find_all(&self) -> AppResult<Vec<Postagem>> {
        let models = PostagemEntity::find()
            .order_by_asc(postagem::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Postagem::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Postagem>> {
        let result = PostagemEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Postagem::from))
    }

    async fn find_all_by_titulo_containing(&self, titulo: &str) -> AppResult<Vec<Postagem>> {
        let search = ContainsIgnoreCase::new(self.db.get_database_backend(), titulo);
        let models = PostagemEntity::find()
            .apply_if(search.filter(postagem::Column::Titulo), |query, filter| {
                query.filter(filter)
            })
            .order_by_asc(postagem::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models
            .into_iter()
            .filter(|model| search.matches(&model.titulo))
            .map(Postagem::from)
            .collect())
    }

    async fn save(&self, input: SavePostagem) -> AppResult<Postagem> {
        let now = Utc::now();

        let model = match input.id {
            None => {
                let active_model = ActiveModel {
                    titulo: Set(input.titulo),
                    texto: Set(input.texto),
                    data: Set(now),
                    tema_id: Set(input.tema_id),
                    ..Default::default()
                };
                active_model.insert(&self.db).await?
            }
            Some(id) => {
                let existing = PostagemEntity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or_not_found()?;

                let mut active: ActiveModel = existing.into();
                active.titulo = Set(input.titulo);
                active.texto = Set(input.texto);
                active.data = Set(now);
                active.tema_id = Set(input.tema_id);
                active.update(&self.db).await?
            }
        };

        tracing::debug!(id = model.id, "Postagem saved");
        Ok(Postagem::from(model))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let result = PostagemEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
