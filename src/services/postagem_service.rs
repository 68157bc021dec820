//! Postagem service - post use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Postagem, SavePostagem};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Postagem service trait for dependency injection.
///
/// "Absent" outcomes that the HTTP layer answers with an empty 404 are
/// `Ok(None)`; `delete_postagem` reports a missing post as `NotFound`.
#[async_trait]
pub trait PostagemService: Send + Sync {
    async fn list_postagens(&self) -> AppResult<Vec<Postagem>>;

    async fn get_postagem(&self, id: i64) -> AppResult<Option<Postagem>>;

    /// Case-insensitive title search
    async fn search_by_titulo(&self, titulo: &str) -> AppResult<Vec<Postagem>>;

    /// Always inserts; any `id` on the input is ignored.
    async fn create_postagem(&self, input: SavePostagem) -> AppResult<Postagem>;

    /// `Ok(None)` when no post has `id`.
    async fn update_postagem(&self, id: i64, input: SavePostagem) -> AppResult<Option<Postagem>>;

    async fn delete_postagem(&self, id: i64) -> AppResult<()>;
}

/// UnitOfWork-backed PostagemService
pub struct PostagemManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PostagemManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn ensure_tema_exists(&self, tema_id: Option<i64>) -> AppResult<()> {
        if let Some(tema_id) = tema_id {
            if !self.uow.temas().exists_by_id(tema_id).await? {
                return Err(AppError::bad_request("Tema não existe"));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<U: UnitOfWork> PostagemService for PostagemManager<U> {
    async fn list_postagens(&self) -> AppResult<Vec<Postagem>> {
        self.uow.postagens().find_all().await
    }

    async fn get_postagem(&self, id: i64) -> AppResult<Option<Postagem>> {
        self.uow.postagens().find_by_id(id).await
    }

    async fn search_by_titulo(&self, titulo: &str) -> AppResult<Vec<Postagem>> {
        self.uow
            .postagens()
            .find_all_by_titulo_containing(titulo)
            .await
    }

    async fn create_postagem(&self, input: SavePostagem) -> AppResult<Postagem> {
        self.ensure_tema_exists(input.tema_id).await?;

        let postagem = self
            .uow
            .postagens()
            .save(SavePostagem { id: None, ..input })
            .await?;

        tracing::info!(id = postagem.id, "Postagem created");
        Ok(postagem)
    }

    async fn update_postagem(&self, id: i64, input: SavePostagem) -> AppResult<Option<Postagem>> {
        if self.uow.postagens().find_by_id(id).await?.is_none() {
            return Ok(None);
        }
        self.ensure_tema_exists(input.tema_id).await?;

        let postagem = self.uow.postagens().save(input.with_id(id)).await?;
        Ok(Some(postagem))
    }

    async fn delete_postagem(&self, id: i64) -> AppResult<()> {
        if self.uow.postagens().find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound);
        }

        self.uow.postagens().delete_by_id(id).await?;
        tracing::info!(id, "Postagem deleted");
        Ok(())
    }
}
