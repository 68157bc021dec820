//! Domain layer - Core entities
//!
//! Plain records for posts, themes and users, independent of the
//! database mapping in `infra::repositories::entities`.

pub mod password;
pub mod postagem;
pub mod tema;
pub mod usuario;

pub use password::Password;
pub use postagem::{Postagem, SavePostagem};
pub use tema::{SaveTema, Tema};
pub use usuario::{SaveUsuario, Usuario, UsuarioResponse};
