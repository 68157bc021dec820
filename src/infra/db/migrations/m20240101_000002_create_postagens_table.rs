//! Migration: Create tb_postagens with a cascading foreign key to tb_temas.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_temas_table::Temas;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Postagens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Postagens::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Postagens::Titulo).string_len(255).not_null())
                    .col(ColumnDef::new(Postagens::Texto).string_len(1000).not_null())
                    .col(
                        ColumnDef::new(Postagens::Data)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Postagens::TemaId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_postagens_tema_id")
                            .from(Postagens::Table, Postagens::TemaId)
                            .to(Temas::Table, Temas::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_postagens_tema_id")
                    .table(Postagens::Table)
                    .col(Postagens::TemaId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_postagens_tema_id")
                    .table(Postagens::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Postagens::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Postagens {
    #[iden = "tb_postagens"]
    Table,
    Id,
    Titulo,
    Texto,
    Data,
    TemaId,
}
