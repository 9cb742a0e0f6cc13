use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "leg_vote")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub voter_id: i32,
    pub vote: String,
    pub action_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::council_member::Entity",
        from = "Column::VoterId",
        to = "super::council_member::Column::Id",
        on_delete = "Cascade"
    )]
    CouncilMember,
    #[sea_orm(
        belongs_to = "super::leg_action::Entity",
        from = "Column::ActionId",
        to = "super::leg_action::Column::Id",
        on_delete = "Cascade"
    )]
    LegAction,
}

impl Related<super::council_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CouncilMember.def()
    }
}

impl Related<super::leg_action::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LegAction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
