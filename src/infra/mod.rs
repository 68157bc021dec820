//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - Repositories
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    PostagemRepository, PostagemStore, TemaRepository, TemaStore, UsuarioRepository, UsuarioStore,
};
pub use unit_of_work::{
    Persistence, TransactionContext, TxFuture, TxPostagemRepository, TxTemaRepository, UnitOfWork,
};
