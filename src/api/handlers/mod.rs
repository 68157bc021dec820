//! HTTP request handlers.

pub mod postagem_handler;
pub mod tema_handler;
pub mod usuario_handler;

pub use postagem_handler::postagem_routes;
pub use tema_handler::tema_routes;
pub use usuario_handler::{usuario_me_routes, usuario_routes};
