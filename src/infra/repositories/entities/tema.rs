//! Tema database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Postagem, Tema};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_temas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub descricao: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::postagem::Entity")]
    Postagem,
}

impl Related<super::postagem::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Postagem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Build the domain entity together with its loaded posts
    pub fn into_domain(self, postagens: Vec<super::postagem::Model>) -> Tema {
        Tema {
            id: self.id,
            descricao: self.descricao,
            postagem: postagens.into_iter().map(Postagem::from).collect(),
        }
    }
}
