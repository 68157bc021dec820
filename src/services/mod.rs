//! Application services layer - Use cases and business logic.
//!
//! Services depend on repository traits through the `UnitOfWork`,
//! so they can be unit tested against mocks.

pub mod container;
mod postagem_service;
mod tema_service;
mod user_details_service;
mod usuario_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use container::{ServiceContainer, Services};

pub use postagem_service::{PostagemManager, PostagemService};
pub use tema_service::{TemaManager, TemaService};
pub use user_details_service::{UserDetails, UserDetailsLoader, UserDetailsService};
pub use usuario_service::{UsuarioManager, UsuarioService};

#[cfg(test)]
pub use container::MockServiceContainer;
