use chrono::NaiveDate;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CouncilMemberAliasModel, CouncilMemberModel, CouncilMemberTenureModel},
    TestContext,
};

impl TestContext {
    pub fn member<'a>(&'a self) -> MemberFixtures<'a> {
        MemberFixtures { test: self }
    }
}

pub struct MemberFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> MemberFixtures<'a> {
    pub async fn insert_member(&self, real_name: &str) -> Result<CouncilMemberModel, TestError> {
        Ok(
            entity::prelude::CouncilMember::insert(entity::council_member::ActiveModel {
                real_name: ActiveValue::Set(real_name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_alias(
        &self,
        member_id: i32,
        name: &str,
    ) -> Result<CouncilMemberAliasModel, TestError> {
        Ok(entity::prelude::CouncilMemberAlias::insert(
            entity::council_member_alias::ActiveModel {
                member_id: ActiveValue::Set(member_id),
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_member_with_aliases(
        &self,
        real_name: &str,
        aliases: &[&str],
    ) -> Result<(CouncilMemberModel, Vec<CouncilMemberAliasModel>), TestError> {
        let member = self.insert_member(real_name).await?;

        let mut alias_models = Vec::with_capacity(aliases.len());
        for alias in aliases {
            alias_models.push(self.insert_alias(member.id, alias).await?);
        }

        Ok((member, alias_models))
    }

    pub async fn insert_tenure(
        &self,
        member_id: i32,
        begin: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<CouncilMemberTenureModel, TestError> {
        Ok(entity::prelude::CouncilMemberTenure::insert(
            entity::council_member_tenure::ActiveModel {
                member_id: ActiveValue::Set(member_id),
                begin: ActiveValue::Set(begin),
                end: ActiveValue::Set(end),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.test.db)
        .await?)
    }
}
