use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "council_member_tenure")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub member_id: i32,
    pub begin: Date,
    /// `None` while the tenure is ongoing
    pub end: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::council_member::Entity",
        from = "Column::MemberId",
        to = "super::council_member::Column::Id",
        on_delete = "Cascade"
    )]
    CouncilMember,
}

impl Related<super::council_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CouncilMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
