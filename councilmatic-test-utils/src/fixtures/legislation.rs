use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{
        LegActionModel, LegFileModel, LegFileSponsorModel, LegFileTopicModel, LegMinutesModel,
        LegVoteModel, MetadataTopicModel,
    },
    TestContext,
};

impl TestContext {
    pub fn legislation<'a>(&'a self) -> LegislationFixtures<'a> {
        LegislationFixtures { test: self }
    }
}

pub struct LegislationFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> LegislationFixtures<'a> {
    /// Insert a legislative file with placeholder status, type and controlling body.
    pub async fn insert_leg_file(
        &self,
        key: i32,
        file_id: &str,
        title: &str,
    ) -> Result<LegFileModel, TestError> {
        self.insert_leg_file_updated_at(key, file_id, title, Utc::now().naive_utc())
            .await
    }

    pub async fn insert_leg_file_updated_at(
        &self,
        key: i32,
        file_id: &str,
        title: &str,
        updated_at: NaiveDateTime,
    ) -> Result<LegFileModel, TestError> {
        Ok(
            entity::prelude::LegFile::insert(entity::leg_file::ActiveModel {
                key: ActiveValue::Set(key),
                file_id: ActiveValue::Set(file_id.to_string()),
                title: ActiveValue::Set(title.to_string()),
                status: ActiveValue::Set("Introduced".to_string()),
                file_type: ActiveValue::Set("Bill".to_string()),
                controlling_body: ActiveValue::Set("City Council".to_string()),
                intro_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2011, 1, 27)),
                updated_at: ActiveValue::Set(updated_at),
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_sponsor(
        &self,
        key: i32,
        member_id: i32,
    ) -> Result<LegFileSponsorModel, TestError> {
        Ok(
            entity::prelude::LegFileSponsor::insert(entity::leg_file_sponsor::ActiveModel {
                leg_file_key: ActiveValue::Set(key),
                member_id: ActiveValue::Set(member_id),
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_action(&self, key: Option<i32>) -> Result<LegActionModel, TestError> {
        Ok(
            entity::prelude::LegAction::insert(entity::leg_action::ActiveModel {
                file_key: ActiveValue::Set(key),
                description: ActiveValue::Set("READ AND PASSED".to_string()),
                date_taken: ActiveValue::Set(NaiveDate::from_ymd_opt(2011, 2, 3)),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_vote(
        &self,
        voter_id: i32,
        action_id: Option<i32>,
    ) -> Result<LegVoteModel, TestError> {
        Ok(
            entity::prelude::LegVote::insert(entity::leg_vote::ActiveModel {
                voter_id: ActiveValue::Set(voter_id),
                vote: ActiveValue::Set("Ayes".to_string()),
                action_id: ActiveValue::Set(action_id),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_topic(&self, topic: &str) -> Result<MetadataTopicModel, TestError> {
        Ok(
            entity::prelude::MetadataTopic::insert(entity::metadata_topic::ActiveModel {
                topic: ActiveValue::Set(topic.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Tag legislation `key` with an existing topic.
    pub async fn insert_leg_file_topic(
        &self,
        key: i32,
        topic_id: i32,
    ) -> Result<LegFileTopicModel, TestError> {
        Ok(
            entity::prelude::LegFileTopic::insert(entity::leg_file_topic::ActiveModel {
                leg_file_key: ActiveValue::Set(key),
                topic_id: ActiveValue::Set(topic_id),
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_minutes(
        &self,
        fulltext: &str,
        date_taken: Option<NaiveDate>,
        updated_at: NaiveDateTime,
    ) -> Result<LegMinutesModel, TestError> {
        Ok(
            entity::prelude::LegMinutes::insert(entity::leg_minutes::ActiveModel {
                fulltext: ActiveValue::Set(fulltext.to_string()),
                date_taken: ActiveValue::Set(date_taken),
                updated_at: ActiveValue::Set(updated_at),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
