//! User details service - credential lookup for HTTP Basic authentication.
//!
//! Loads a `Usuario` by its login identity and exposes only what an
//! authentication layer needs to compare credentials. No tokens or
//! sessions are issued.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::DUMMY_PASSWORD_HASH;
use crate::domain::{Password, Usuario};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Credentials of a persisted user.
#[derive(Debug, Clone)]
pub struct UserDetails {
    id: i64,
    nome: String,
    username: String,
    password: Password,
}

impl UserDetails {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Stored Argon2 hash
    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn verify(&self, plain_text: &str) -> bool {
        self.password.verify(plain_text)
    }
}

impl From<Usuario> for UserDetails {
    fn from(usuario: Usuario) -> Self {
        Self {
            id: usuario.id,
            nome: usuario.nome,
            username: usuario.usuario,
            password: Password::from_hash(usuario.senha),
        }
    }
}

#[async_trait]
pub trait UserDetailsService: Send + Sync {
    /// Exact match on the login identity.
    ///
    /// # Errors
    /// `UsernameNotFound` when no user has that name.
    async fn load_user_by_username(&self, username: &str) -> AppResult<UserDetails>;

    /// Check a username/password pair.
    ///
    /// Unknown users are verified against a dummy hash so both failure
    /// paths take the same time; either one yields `InvalidCredentials`.
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<UserDetails> {
        let details = match self.load_user_by_username(username).await {
            Ok(details) => Some(details),
            Err(AppError::UsernameNotFound(_)) => None,
            Err(e) => return Err(e),
        };

        match details {
            Some(details) if details.verify(password) => Ok(details),
            Some(_) => Err(AppError::InvalidCredentials),
            None => {
                Password::from_hash(DUMMY_PASSWORD_HASH).verify(password);
                Err(AppError::InvalidCredentials)
            }
        }
    }
}

pub struct UserDetailsLoader<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserDetailsLoader<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserDetailsService for UserDetailsLoader<U> {
    async fn load_user_by_username(&self, username: &str) -> AppResult<UserDetails> {
        self.uow
            .usuarios()
            .find_by_username(username)
            .await?
            .map(UserDetails::from)
            .ok_or_else(|| AppError::UsernameNotFound(username.to_string()))
    }
}
