//! Unit of Work: repository access plus transaction boundaries.
//!
//! Single-statement operations go through the shared repositories.
//! Work spanning several tables (deleting a theme together with its posts)
//! runs inside `transaction`, where every repository obtained from the
//! `TransactionContext` shares one database transaction.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, IsolationLevel,
    QueryFilter, TransactionTrait,
};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::repositories::entities::{postagem, PostagemEntity, TemaEntity};
use super::repositories::{
    PostagemRepository, PostagemStore, TemaRepository, TemaStore, UsuarioRepository, UsuarioStore,
};
use crate::errors::{AppError, AppResult};

/// Boxed future returned by transactional closures
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Not mockable directly because of the generic `transaction` method;
/// tests wrap mock repositories in a small hand-written implementation.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn postagens(&self) -> Arc<dyn PostagemRepository>;

    fn temas(&self) -> Arc<dyn TemaRepository>;

    fn usuarios(&self) -> Arc<dyn UsuarioRepository>;

    /// Run `f` inside a ReadCommitted transaction.
    ///
    /// Commits when `f` returns `Ok`, rolls back otherwise.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Repository access bound to one open transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn postagens(&self) -> TxPostagemRepository<'_> {
        TxPostagemRepository { txn: self.txn }
    }

    pub fn temas(&self) -> TxTemaRepository<'_> {
        TxTemaRepository { txn: self.txn }
    }
}

/// Database-backed UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    postagem_repo: Arc<PostagemStore>,
    tema_repo: Arc<TemaStore>,
    usuario_repo: Arc<UsuarioStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            postagem_repo: Arc::new(PostagemStore::new(db.clone())),
            tema_repo: Arc::new(TemaStore::new(db.clone())),
            usuario_repo: Arc::new(UsuarioStore::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn postagens(&self) -> Arc<dyn PostagemRepository> {
        self.postagem_repo.clone()
    }

    fn temas(&self) -> Arc<dyn TemaRepository> {
        self.tema_repo.clone()
    }

    fn usuarios(&self) -> Arc<dyn UsuarioRepository> {
        self.usuario_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::ReadCommitted), Some(AccessMode::ReadWrite))
            .await?;

        let result = f(TransactionContext::new(&txn)).await;

        match result {
            Ok(value) => {
                txn.commit().await?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-bound post operations
pub struct TxPostagemRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxPostagemRepository<'_> {
    /// Delete every post filed under `tema_id`; returns how many were removed.
    pub async fn delete_by_tema_id(&self, tema_id: i64) -> AppResult<u64> {
        let result = PostagemEntity::delete_many()
            .filter(postagem::Column::TemaId.eq(tema_id))
            .exec(self.txn)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Transaction-bound theme operations
pub struct TxTemaRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl TxTemaRepository<'_> {
    pub async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        Ok(TemaEntity::find_by_id(id).one(self.txn).await?.is_some())
    }

    /// Fails with `NotFound` when no row matches.
    pub async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let result = TemaEntity::delete_by_id(id).exec(self.txn).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

/// Run a block inside `UnitOfWork::transaction`.
///
/// ```rust,ignore
/// with_transaction!(self.uow, |ctx| {
///     ctx.postagens().delete_by_tema_id(id).await?;
///     ctx.temas().delete_by_id(id).await
/// })
/// ```
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
