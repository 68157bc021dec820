//! Usuario service - registration and user lookups.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Password, SaveUsuario, Usuario};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Usuario service trait for dependency injection.
#[async_trait]
pub trait UsuarioService: Send + Sync {
    /// Register a new user, hashing `senha` before it is stored.
    ///
    /// # Errors
    /// `Conflict` when `usuario` is already taken.
    async fn register(&self, nome: &str, usuario: &str, senha: &str) -> AppResult<Usuario>;

    async fn list_usuarios(&self) -> AppResult<Vec<Usuario>>;

    async fn get_usuario(&self, id: i64) -> AppResult<Option<Usuario>>;

    async fn search_by_nome(&self, nome: &str) -> AppResult<Vec<Usuario>>;
}

pub struct UsuarioManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UsuarioManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UsuarioService for UsuarioManager<U> {
    async fn register(&self, nome: &str, usuario: &str, senha: &str) -> AppResult<Usuario> {
        if self.uow.usuarios().find_by_username(usuario).await?.is_some() {
            return Err(AppError::conflict("Usuario"));
        }

        let password = Password::new(senha)?;
        let saved = self
            .uow
            .usuarios()
            .save(SaveUsuario {
                id: None,
                nome: nome.to_string(),
                usuario: usuario.to_string(),
                senha: password.into_string(),
            })
            .await?;

        tracing::info!(id = saved.id, "Usuario registered");
        Ok(saved)
    }

    async fn list_usuarios(&self) -> AppResult<Vec<Usuario>> {
        self.uow.usuarios().find_all().await
    }

    async fn get_usuario(&self, id: i64) -> AppResult<Option<Usuario>> {
        self.uow.usuarios().find_by_id(id).await
    }

    async fn search_by_nome(&self, nome: &str) -> AppResult<Vec<Usuario>> {
        self.uow.usuarios().find_all_by_name_containing(nome).await
    }
}
