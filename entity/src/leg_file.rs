use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "leg_file")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: i32,
    pub file_id: String,
    pub title: String,
    pub status: String,
    pub file_type: String,
    pub controlling_body: String,
    pub intro_date: Option<Date>,
    #[sea_orm(indexed)]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::leg_action::Entity")]
    LegAction,
    #[sea_orm(has_many = "super::leg_file_sponsor::Entity")]
    LegFileSponsor,
    #[sea_orm(has_many = "super::leg_file_topic::Entity")]
    LegFileTopic,
}

impl Related<super::leg_action::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LegAction.def()
    }
}

impl Related<super::council_member::Entity> for Entity {
    fn to() -> RelationDef {
        super::leg_file_sponsor::Relation::CouncilMember.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::leg_file_sponsor::Relation::LegFile.def().rev())
    }
}

impl Related<super::metadata_topic::Entity> for Entity {
    fn to() -> RelationDef {
        super::leg_file_topic::Relation::MetadataTopic.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::leg_file_topic::Relation::LegFile.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
