use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000001_council_member::CouncilMember, m20251101_000006_leg_action::LegAction,
};

static IDX_LEG_VOTE_VOTER_ID: &str = "idx-leg_vote-voter_id";
static FK_LEG_VOTE_VOTER_ID: &str = "fk-leg_vote-voter_id";
static FK_LEG_VOTE_ACTION_ID: &str = "fk-leg_vote-action_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LegVote::Table)
                    .if_not_exists()
                    .col(pk_auto(LegVote::Id))
                    .col(integer(LegVote::VoterId))
                    .col(string(LegVote::Vote))
                    .col(integer_null(LegVote::ActionId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LEG_VOTE_VOTER_ID)
                    .table(LegVote::Table)
                    .col(LegVote::VoterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LEG_VOTE_VOTER_ID)
                    .from_tbl(LegVote::Table)
                    .from_col(LegVote::VoterId)
                    .to_tbl(CouncilMember::Table)
                    .to_col(CouncilMember::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LEG_VOTE_ACTION_ID)
                    .from_tbl(LegVote::Table)
                    .from_col(LegVote::ActionId)
                    .to_tbl(LegAction::Table)
                    .to_col(LegAction::Id)
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
                    .name(FK_LEG_VOTE_ACTION_ID)
                    .table(LegVote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_LEG_VOTE_VOTER_ID)
                    .table(LegVote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LEG_VOTE_VOTER_ID)
                    .table(LegVote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LegVote::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LegVote {
    Table,
    Id,
    VoterId,
    Vote,
    ActionId,
}
