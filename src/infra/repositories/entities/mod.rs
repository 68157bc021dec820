//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod postagem;
pub mod tema;
pub mod usuario;

pub use postagem::Entity as PostagemEntity;
pub use tema::Entity as TemaEntity;
pub use usuario::Entity as UsuarioEntity;
