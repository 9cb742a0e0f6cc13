use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::member::CouncilMemberDto,
    server::{
        data::member::{
            alias::AliasRepository, tenure::TenureRepository, CouncilMemberRepository,
        },
        error::{merge::MergeError, Error},
    },
};

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberService<'a> {
    /// Creates a new instance of [`MemberService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the selected council members with their alias names and latest tenure begin
    ///
    /// Unknown IDs are omitted. Uses three queries regardless of selection size.
    pub async fn get_members(&self, ids: &[i32]) -> Result<Vec<CouncilMemberDto>, Error> {
        let members = CouncilMemberRepository::new(self.db).find_many(ids).await?;
        let member_ids: Vec<i32> = members.iter().map(|m| m.id).collect();

        let mut aliases: HashMap<i32, Vec<String>> = HashMap::new();
        for alias in AliasRepository::new(self.db)
            .find_by_member_ids(&member_ids)
            .await?
        {
            aliases.entry(alias.member_id).or_default().push(alias.name);
        }

        let mut tenure_begin: HashMap<i32, NaiveDate> = HashMap::new();
        for tenure in TenureRepository::new(self.db)
            .find_by_member_ids(&member_ids)
            .await?
        {
            let latest = tenure_begin.entry(tenure.member_id).or_insert(tenure.begin);
            if tenure.begin > *latest {
                *latest = tenure.begin;
            }
        }

        Ok(members
            .into_iter()
            .map(|member| CouncilMemberDto {
                id: member.id,
                aliases: aliases.remove(&member.id).unwrap_or_default(),
                tenure_begin: tenure_begin.get(&member.id).copied(),
                real_name: member.real_name,
            })
            .collect())
    }
}

/// Parses a comma separated ID list such as `1,2,5`
pub fn parse_member_ids(raw: &str) -> Result<Vec<i32>, MergeError> {
    let ids = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i32>().map_err(|_| {
                MergeError::InvalidSelection(format!("{:?} is not a council member ID", part))
            })
        })
        .collect::<Result<Vec<i32>, MergeError>>()?;

    if ids.is_empty() {
        return Err(MergeError::InvalidSelection(
            "no council members selected".to_string(),
        ));
    }

    Ok(ids)
}
