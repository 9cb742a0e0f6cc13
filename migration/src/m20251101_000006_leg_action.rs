use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000004_leg_file::LegFile;

static IDX_LEG_ACTION_FILE_KEY: &str = "idx-leg_action-file_key";
static FK_LEG_ACTION_FILE_KEY: &str = "fk-leg_action-file_key";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LegAction::Table)
                    .if_not_exists()
                    .col(pk_auto(LegAction::Id))
                    .col(integer_null(LegAction::FileKey))
                    .col(text(LegAction::Description))
                    .col(date_null(LegAction::DateTaken))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LEG_ACTION_FILE_KEY)
                    .table(LegAction::Table)
                    .col(LegAction::FileKey)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LEG_ACTION_FILE_KEY)
                    .from_tbl(LegAction::Table)
                    .from_col(LegAction::FileKey)
                    .to_tbl(LegFile::Table)
                    .to_col(LegFile::Key)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LEG_ACTION_FILE_KEY)
                    .table(LegAction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LEG_ACTION_FILE_KEY)
                    .table(LegAction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LegAction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LegAction {
    Table,
    Id,
    FileKey,
    Description,
    DateTaken,
}
