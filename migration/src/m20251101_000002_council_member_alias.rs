use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_council_member::CouncilMember;

static IDX_COUNCIL_MEMBER_ALIAS_MEMBER_ID: &str = "idx-council_member_alias-member_id";
static FK_COUNCIL_MEMBER_ALIAS_MEMBER_ID: &str = "fk-council_member_alias-member_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CouncilMemberAlias::Table)
                    .if_not_exists()
                    .col(pk_auto(CouncilMemberAlias::Id))
                    .col(integer(CouncilMemberAlias::MemberId))
                    .col(string(CouncilMemberAlias::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COUNCIL_MEMBER_ALIAS_MEMBER_ID)
                    .table(CouncilMemberAlias::Table)
                    .col(CouncilMemberAlias::MemberId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COUNCIL_MEMBER_ALIAS_MEMBER_ID)
                    .from_tbl(CouncilMemberAlias::Table)
                    .from_col(CouncilMemberAlias::MemberId)
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
                    .name(FK_COUNCIL_MEMBER_ALIAS_MEMBER_ID)
                    .table(CouncilMemberAlias::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COUNCIL_MEMBER_ALIAS_MEMBER_ID)
                    .table(CouncilMemberAlias::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CouncilMemberAlias::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum CouncilMemberAlias {
    Table,
    Id,
    MemberId,
    Name,
}
