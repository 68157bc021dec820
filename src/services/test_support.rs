//! Mock-backed UnitOfWork for service unit tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::infra::repositories::{
    MockPostagemRepository, MockTemaRepository, MockUsuarioRepository,
};
use crate::infra::{
    PostagemRepository, TemaRepository, TransactionContext, TxFuture, UnitOfWork,
    UsuarioRepository,
};

/// Wraps mock repositories; repositories left unset have no expectations.
pub(crate) struct TestUnitOfWork {
    postagens: Arc<MockPostagemRepository>,
    temas: Arc<MockTemaRepository>,
    usuarios: Arc<MockUsuarioRepository>,
}

#[derive(Default)]
pub(crate) struct TestUnitOfWorkBuilder {
    postagens: Option<MockPostagemRepository>,
    temas: Option<MockTemaRepository>,
    usuarios: Option<MockUsuarioRepository>,
}

impl TestUnitOfWork {
    pub(crate) fn builder() -> TestUnitOfWorkBuilder {
        TestUnitOfWorkBuilder::default()
    }
}

impl TestUnitOfWorkBuilder {
    pub(crate) fn postagens(mut self, repo: MockPostagemRepository) -> Self {
        self.postagens = Some(repo);
        self
    }

    pub(crate) fn temas(mut self, repo: MockTemaRepository) -> Self {
        self.temas = Some(repo);
        self
    }

    pub(crate) fn usuarios(mut self, repo: MockUsuarioRepository) -> Self {
        self.usuarios = Some(repo);
        self
    }

    pub(crate) fn build(self) -> TestUnitOfWork {
        TestUnitOfWork {
            postagens: Arc::new(self.postagens.unwrap_or_default()),
            temas: Arc::new(self.temas.unwrap_or_default()),
            usuarios: Arc::new(self.usuarios.unwrap_or_default()),
        }
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn postagens(&self) -> Arc<dyn PostagemRepository> {
        self.postagens.clone()
    }

    fn temas(&self) -> Arc<dyn TemaRepository> {
        self.temas.clone()
    }

    fn usuarios(&self) -> Arc<dyn UsuarioRepository> {
        self.usuarios.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        // Covered by the SQLite integration tests instead
        Err(AppError::internal("Transactions not supported in test mock"))
    }
}
