//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    PostagemService, ServiceContainer, Services, TemaService, UserDetailsService, UsuarioService,
};

/// Shared by every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    pub postagem_service: Arc<dyn PostagemService>,
    pub tema_service: Arc<dyn TemaService>,
    pub usuario_service: Arc<dyn UsuarioService>,
    /// Credential lookup for the Basic auth middleware
    pub user_details_service: Arc<dyn UserDetailsService>,
    pub database: Arc<Database>,
    /// Whether `/postagens` and `/temas` sit behind Basic auth
    pub auth_required: bool,
}

impl AppState {
    /// Wire every service to `database`.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection());
        Self::from_container(&container, database, config.auth_required)
    }

    /// Take services from any container, e.g. a mock in handler tests.
    pub fn from_container(
        container: &dyn ServiceContainer,
        database: Arc<Database>,
        auth_required: bool,
    ) -> Self {
        Self {
            postagem_service: container.postagens(),
            tema_service: container.temas(),
            usuario_service: container.usuarios(),
            user_details_service: container.user_details(),
            database,
            auth_required,
        }
    }
}
