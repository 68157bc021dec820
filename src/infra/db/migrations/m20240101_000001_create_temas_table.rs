//! Migration: Create tb_temas.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Temas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Temas::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Temas::Descricao).string_len(255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Temas::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Temas {
    #[iden = "tb_temas"]
    Table,
    Id,
    Descricao,
}
