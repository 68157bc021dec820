//! Repository layer - Data access abstraction
//!
//! Each repository is a trait (mockable in unit tests) plus a SeaORM store
//! constructed with an injected database connection.

pub(crate) mod entities;
mod postagem_repository;
mod search;
mod tema_repository;
mod usuario_repository;

pub use postagem_repository::{PostagemRepository, PostagemStore};
pub use tema_repository::{TemaRepository, TemaStore};
pub use usuario_repository::{UsuarioRepository, UsuarioStore};

#[cfg(test)]
pub use postagem_repository::MockPostagemRepository;
#[cfg(test)]
pub use tema_repository::MockTemaRepository;
#[cfg(test)]
pub use usuario_repository::MockUsuarioRepository;
