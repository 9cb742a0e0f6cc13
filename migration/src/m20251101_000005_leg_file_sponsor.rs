use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_council_member::CouncilMember, m20251101_000004_leg_file::LegFile,
};

static IDX_LEG_FILE_SPONSOR_MEMBER_ID: &str = "idx-leg_file_sponsor-member_id";
static FK_LEG_FILE_SPONSOR_LEG_FILE_KEY: &str = "fk-leg_file_sponsor-leg_file_key";
static FK_LEG_FILE_SPONSOR_MEMBER_ID: &str = "fk-leg_file_sponsor-member_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LegFileSponsor::Table)
                    .if_not_exists()
                    .col(integer(LegFileSponsor::LegFileKey))
                    .col(integer(LegFileSponsor::MemberId))
                    .primary_key(
                        Index::create()
                            .col(LegFileSponsor::LegFileKey)
                            .col(LegFileSponsor::MemberId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LEG_FILE_SPONSOR_MEMBER_ID)
                    .table(LegFileSponsor::Table)
                    .col(LegFileSponsor::MemberId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LEG_FILE_SPONSOR_LEG_FILE_KEY)
                    .from_tbl(LegFileSponsor::Table)
                    .from_col(LegFileSponsor::LegFileKey)
                    .to_tbl(LegFile::Table)
                    .to_col(LegFile::Key)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LEG_FILE_SPONSOR_MEMBER_ID)
                    .from_tbl(LegFileSponsor::Table)
                    .from_col(LegFileSponsor::MemberId)
                    .to_tbl(CouncilMember::Table)
                    .to_col(CouncilMember::Id)
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
                    .name(FK_LEG_FILE_SPONSOR_MEMBER_ID)
                    .table(LegFileSponsor::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LEG_FILE_SPONSOR_LEG_FILE_KEY)
                    .table(LegFileSponsor::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LEG_FILE_SPONSOR_MEMBER_ID)
                    .table(LegFileSponsor::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LegFileSponsor::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LegFileSponsor {
    Table,
    LegFileKey,
    MemberId,
}
