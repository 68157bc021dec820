//! Tema service - theme use cases, including cascading delete.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{SaveTema, Tema};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// Tema service trait for dependency injection.
#[async_trait]
pub trait TemaService: Send + Sync {
    async fn list_temas(&self) -> AppResult<Vec<Tema>>;

    async fn get_tema(&self, id: i64) -> AppResult<Option<Tema>>;

    /// Case-insensitive description search
    async fn search_by_descricao(&self, descricao: &str) -> AppResult<Vec<Tema>>;

    /// Always inserts; any `id` on the input is ignored.
    async fn create_tema(&self, input: SaveTema) -> AppResult<Tema>;

    /// `Ok(None)` when no theme has `id`.
    async fn update_tema(&self, id: i64, input: SaveTema) -> AppResult<Option<Tema>>;

    /// Delete the theme and all of its posts atomically.
    async fn delete_tema(&self, id: i64) -> AppResult<()>;
}

/// UnitOfWork-backed TemaService
pub struct TemaManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> TemaManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> TemaService for TemaManager<U> {
    async fn list_temas(&self) -> AppResult<Vec<Tema>> {
        self.uow.temas().find_all().await
    }

    async fn get_tema(&self, id: i64) -> AppResult<Option<Tema>> {
        self.uow.temas().find_by_id(id).await
    }

    async fn search_by_descricao(&self, descricao: &str) -> AppResult<Vec<Tema>> {
        self.uow
            .temas()
            .find_all_by_descricao_containing(descricao)
            .await
    }

    async fn create_tema(&self, input: SaveTema) -> AppResult<Tema> {
        let tema = self
            .uow
            .temas()
            .save(SaveTema { id: None, ..input })
            .await?;

        tracing::info!(id = tema.id, "Tema created");
        Ok(tema)
    }

    async fn update_tema(&self, id: i64, input: SaveTema) -> AppResult<Option<Tema>> {
        if !self.uow.temas().exists_by_id(id).await? {
            return Ok(None);
        }

        let tema = self.uow.temas().save(input.with_id(id)).await?;
        Ok(Some(tema))
    }

    async fn delete_tema(&self, id: i64) -> AppResult<()> {
        let removed = with_transaction!(self.uow, |ctx| {
            if !ctx.temas().exists_by_id(id).await? {
                return Err(AppError::NotFound);
            }

            let removed = ctx.postagens().delete_by_tema_id(id).await?;
            ctx.temas().delete_by_id(id).await?;
            Ok(removed)
        })?;

        tracing::info!(id, postagens_removed = removed, "Tema deleted");
        Ok(())
    }
}
