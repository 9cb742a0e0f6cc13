use sea_orm_migration::{prelude::*, schema::*};

static IDX_LEG_MINUTES_UPDATED_AT: &str = "idx-leg_minutes-updated_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LegMinutes::Table)
                    .if_not_exists()
                    .col(pk_auto(LegMinutes::Id))
                    .col(text(LegMinutes::Fulltext))
                    .col(date_null(LegMinutes::DateTaken))
                    .col(timestamp(LegMinutes::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LEG_MINUTES_UPDATED_AT)
                    .table(LegMinutes::Table)
                    .col(LegMinutes::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LEG_MINUTES_UPDATED_AT)
                    .table(LegMinutes::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LegMinutes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LegMinutes {
    Table,
    Id,
    Fulltext,
    DateTaken,
    UpdatedAt,
}
