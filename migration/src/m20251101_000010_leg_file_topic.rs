use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000004_leg_file::LegFile, m20251101_000009_metadata_topic::MetadataTopic,
};

static IDX_LEG_FILE_TOPIC_TOPIC_ID: &str = "idx-leg_file_topic-topic_id";
static FK_LEG_FILE_TOPIC_LEG_FILE_KEY: &str = "fk-leg_file_topic-leg_file_key";
static FK_LEG_FILE_TOPIC_TOPIC_ID: &str = "fk-leg_file_topic-topic_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LegFileTopic::Table)
                    .if_not_exists()
                    .col(integer(LegFileTopic::LegFileKey))
                    .col(integer(LegFileTopic::TopicId))
                    .primary_key(
                        Index::create()
                            .col(LegFileTopic::LegFileKey)
                            .col(LegFileTopic::TopicId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LEG_FILE_TOPIC_TOPIC_ID)
                    .table(LegFileTopic::Table)
                    .col(LegFileTopic::TopicId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LEG_FILE_TOPIC_LEG_FILE_KEY)
                    .from_tbl(LegFileTopic::Table)
                    .from_col(LegFileTopic::LegFileKey)
                    .to_tbl(LegFile::Table)
                    .to_col(LegFile::Key)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LEG_FILE_TOPIC_TOPIC_ID)
                    .from_tbl(LegFileTopic::Table)
                    .from_col(LegFileTopic::TopicId)
                    .to_tbl(MetadataTopic::Table)
                    .to_col(MetadataTopic::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LEG_FILE_TOPIC_TOPIC_ID)
                    .table(LegFileTopic::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LEG_FILE_TOPIC_LEG_FILE_KEY)
                    .table(LegFileTopic::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LEG_FILE_TOPIC_TOPIC_ID)
                    .table(LegFileTopic::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LegFileTopic::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LegFileTopic {
    Table,
    LegFileKey,
    TopicId,
}
