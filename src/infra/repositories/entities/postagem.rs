//! Postagem database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Postagem;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tb_postagens")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub titulo: String,
    pub texto: String,
    pub data: DateTimeUtc,
    pub tema_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tema::Entity",
        from = "Column::TemaId",
        to = "super::tema::Column::Id",
        on_delete = "Cascade"
    )]
    Tema,
}

impl Related<super::tema::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tema.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Postagem {
    fn from(model: Model) -> Self {
        Postagem {
            id: model.id,
            titulo: model.titulo,
            texto: model.texto,
            data: model.data,
            tema_id: model.tema_id,
        }
    }
}
