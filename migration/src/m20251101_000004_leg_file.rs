use sea_orm_migration::{prelude::*, schema::*};

static IDX_LEG_FILE_UPDATED_AT: &str = "idx-leg_file-updated_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LegFile::Table)
                    .if_not_exists()
                    .col(integer(LegFile::Key).primary_key())
                    .col(string(LegFile::FileId))
                    .col(text(LegFile::Title))
                    .col(string(LegFile::Status))
                    .col(string(LegFile::FileType))
                    .col(string(LegFile::ControllingBody))
                    .col(date_null(LegFile::IntroDate))
                    .col(timestamp(LegFile::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LEG_FILE_UPDATED_AT)
                    .table(LegFile::Table)
                    .col(LegFile::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LEG_FILE_UPDATED_AT)
                    .table(LegFile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LegFile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LegFile {
    Table,
    Key,
    FileId,
    Title,
    Status,
    FileType,
    ControllingBody,
    IntroDate,
    UpdatedAt,
}
