//! Service container - one place that wires every service to the same
//! `Persistence` unit of work.

use std::sync::Arc;

use super::{
    PostagemManager, PostagemService, TemaManager, TemaService, UserDetailsLoader,
    UserDetailsService, UsuarioManager, UsuarioService,
};
use crate::infra::Persistence;

#[cfg(test)]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(test, automock)]
pub trait ServiceContainer: Send + Sync {
    fn postagens(&self) -> Arc<dyn PostagemService>;

    fn temas(&self) -> Arc<dyn TemaService>;

    fn usuarios(&self) -> Arc<dyn UsuarioService>;

    fn user_details(&self) -> Arc<dyn UserDetailsService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    postagem_service: Arc<dyn PostagemService>,
    tema_service: Arc<dyn TemaService>,
    usuario_service: Arc<dyn UsuarioService>,
    user_details_service: Arc<dyn UserDetailsService>,
}

impl Services {
    pub fn new(
        postagem_service: Arc<dyn PostagemService>,
        tema_service: Arc<dyn TemaService>,
        usuario_service: Arc<dyn UsuarioService>,
        user_details_service: Arc<dyn UserDetailsService>,
    ) -> Self {
        Self {
            postagem_service,
            tema_service,
            usuario_service,
            user_details_service,
        }
    }

    /// Build every service on top of a single connection pool
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self::new(
            Arc::new(PostagemManager::new(uow.clone())),
            Arc::new(TemaManager::new(uow.clone())),
            Arc::new(UsuarioManager::new(uow.clone())),
            Arc::new(UserDetailsLoader::new(uow)),
        )
    }
}

impl ServiceContainer for Services {
    fn postagens(&self) -> Arc<dyn PostagemService> {
        self.postagem_service.clone()
    }

    fn temas(&self) -> Arc<dyn TemaService> {
        self.tema_service.clone()
    }

    fn usuarios(&self) -> Arc<dyn UsuarioService> {
        self.usuario_service.clone()
    }

    fn user_details(&self) -> Arc<dyn UserDetailsService> {
        self.user_details_service.clone()
    }
}
