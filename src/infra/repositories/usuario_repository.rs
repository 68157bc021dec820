//! Usuario repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QueryTrait, Set, SqlErr,
};

use super::entities::usuario::{self, ActiveModel};
use super::entities::UsuarioEntity;
use super::search::ContainsIgnoreCase;
use crate::domain::{SaveUsuario, Usuario};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(test)]
use mockall::automock;

/// Usuario repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Usuario>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Usuario>>;

    /// Exact, case-sensitive match on the login identity
    async fn find_by_username(&self, usuario: &str) -> AppResult<Option<Usuario>>;

    /// Users whose display name contains `nome`, ignoring case
    async fn find_all_by_name_containing(&self, nome: &str) -> AppResult<Vec<Usuario>>;

    /// Insert when `id` is absent, otherwise overwrite the matching row
    /// (`NotFound` if none). `senha` must already be hashed.
    async fn save(&self, usuario: SaveUsuario) -> AppResult<Usuario>;

    /// Fails with `NotFound` when no row matches.
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}

/// SeaORM-backed UsuarioRepository
pub struct UsuarioStore {
    db: DatabaseConnection,
}

impl UsuarioStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsuarioRepository for UsuarioStore {
    async fn find_all(&self) -> AppResult<Vec<Usuario>> {
        let models = UsuarioEntity::find()
            .order_by_asc(usuario::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Usuario::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Usuario>> {
        let result = UsuarioEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Usuario::from))
    }

    async fn find_by_username(&self, name: &str) -> AppResult<Option<Usuario>> {
        let result = UsuarioEntity::find()
            .filter(usuario::Column::Usuario.eq(name))
            .one(&self.db)
            .await?;

        Ok(result.map(Usuario::from))
    }

    async fn find_all_by_name_containing(&self, nome: &str) -> AppResult<Vec<Usuario>> {
        let search = ContainsIgnoreCase::new(self.db.get_database_backend(), nome);
        let models = UsuarioEntity::find()
            .apply_if(search.filter(usuario::Column::Nome), |query, filter| {
                query.filter(filter)
            })
            .order_by_asc(usuario::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models
            .into_iter()
            .filter(|model| search.matches(&model.nome))
            .map(Usuario::from)
            .collect())
    }

    async fn save(&self, input: SaveUsuario) -> AppResult<Usuario> {
        let model = match input.id {
            None => {
                let active_model = ActiveModel {
                    nome: Set(input.nome),
                    usuario: Set(input.usuario),
                    senha: Set(input.senha),
                    ..Default::default()
                };
                active_model.insert(&self.db).await.map_err(unique_violation)?
            }
            Some(id) => {
                let existing = UsuarioEntity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or_not_found()?;

                let mut active: ActiveModel = existing.into();
                active.nome = Set(input.nome);
                active.usuario = Set(input.usuario);
                active.senha = Set(input.senha);
                active.update(&self.db).await.map_err(unique_violation)?
            }
        };

        Ok(Usuario::from(model))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let result = UsuarioEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

/// A concurrent registration can pass the username check and still lose the
/// race on the unique index.
fn unique_violation(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("Usuario"),
        _ => AppError::from(err),
    }
}
