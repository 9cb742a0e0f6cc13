use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "metadata_topic")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub topic: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::leg_file_topic::Entity")]
    LegFileTopic,
}

impl Related<super::leg_file::Entity> for Entity {
    fn to() -> RelationDef {
        super::leg_file_topic::Relation::LegFile.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::leg_file_topic::Relation::MetadataTopic.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
