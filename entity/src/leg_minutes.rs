use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "leg_minutes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fulltext: String,
    pub date_taken: Option<Date>,
    #[sea_orm(indexed)]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
