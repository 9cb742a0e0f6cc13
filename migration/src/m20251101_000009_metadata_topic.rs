use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MetadataTopic::Table)
                    .if_not_exists()
                    .col(pk_auto(MetadataTopic::Id))
                    .col(string_uniq(MetadataTopic::Topic))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MetadataTopic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MetadataTopic {
    Table,
    Id,
    Topic,
}
