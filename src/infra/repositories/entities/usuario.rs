//! Usuario database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Usuario;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_usuarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nome: String,
    #[sea_orm(unique)]
    pub usuario: String,
    /// Argon2 PHC hash
    pub senha: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Usuario {
    fn from(model: Model) -> Self {
        Usuario {
            id: model.id,
            nome: model.nome,
            usuario: model.usuario,
            senha: model.senha,
        }
    }
}
