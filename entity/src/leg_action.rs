use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "leg_action")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub file_key: Option<i32>,
    pub description: String,
    pub date_taken: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::leg_file::Entity",
        from = "Column::FileKey",
        to = "super::leg_file::Column::Key",
        on_delete = "SetNull"
    )]
    LegFile,
    #[sea_orm(has_many = "super::leg_vote::Entity")]
    LegVote,
}

impl Related<super::leg_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LegFile.def()
    }
}

impl Related<super::leg_vote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LegVote.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
