use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "leg_file_topic")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub leg_file_key: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub topic_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::leg_file::Entity",
        from = "Column::LegFileKey",
        to = "super::leg_file::Column::Key",
        on_delete = "Cascade"
    )]
    LegFile,
    #[sea_orm(
        belongs_to = "super::metadata_topic::Entity",
        from = "Column::TopicId",
        to = "super::metadata_topic::Column::Id",
        on_delete = "Cascade"
    )]
    MetadataTopic,
}

impl Related<super::leg_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LegFile.def()
    }
}

impl Related<super::metadata_topic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MetadataTopic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
