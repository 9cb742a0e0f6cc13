use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

pub struct TopicRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TopicRepository<'a, C> {
    /// Creates a new instance of [`TopicRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets `(leg_file_key, topic)` pairs for the provided legislation keys
    ///
    /// Ordered by key, then alphabetically by topic.
    pub async fn get_topics_by_leg_file_keys(
        &self,
        keys: &[i32],
    ) -> Result<Vec<(i32, String)>, DbErr> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::LegFileTopic::find()
            .select_only()
            .column(entity::leg_file_topic::Column::LegFileKey)
            .column(entity::metadata_topic::Column::Topic)
            .join(
                JoinType::InnerJoin,
                entity::leg_file_topic::Relation::MetadataTopic.def(),
            )
            .filter(entity::leg_file_topic::Column::LegFileKey.is_in(keys.iter().copied()))
            .order_by_asc(entity::leg_file_topic::Column::LegFileKey)
            .order_by_asc(entity::metadata_topic::Column::Topic)
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await
    }
}
