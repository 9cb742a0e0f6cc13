use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "council_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub real_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::council_member_alias::Entity")]
    CouncilMemberAlias,
    #[sea_orm(has_many = "super::council_member_tenure::Entity")]
    CouncilMemberTenure,
    #[sea_orm(has_many = "super::leg_file_sponsor::Entity")]
    LegFileSponsor,
    #[sea_orm(has_many = "super::leg_vote::Entity")]
    LegVote,
}

impl Related<super::council_member_alias::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CouncilMemberAlias.def()
    }
}

impl Related<super::council_member_tenure::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CouncilMemberTenure.def()
    }
}

impl Related<super::leg_vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LegVote.def()
    }
}

impl Related<super::leg_file::Entity> for Entity {
    fn to() -> RelationDef {
        super::leg_file_sponsor::Relation::LegFile.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::leg_file_sponsor::Relation::CouncilMember.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
