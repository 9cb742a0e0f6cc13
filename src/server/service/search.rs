use std::collections::HashMap;

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::{
    model::search::{LegislationDocumentDto, MinutesDocumentDto},
    server::{
        data::{
            legislation::{
                minutes::MinutesRepository, sponsor::SponsorRepository, topic::TopicRepository,
                LegislationRepository,
            },
            member::{alias::AliasRepository, CouncilMemberRepository},
        },
        error::Error,
        model::db::{LegFileModel, LegMinutesModel},
    },
};

pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    /// Creates a new instance of [`SearchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds index documents for legislation updated at or after `since`
    ///
    /// Five bulk reads: files, their topics, their sponsorship links, the sponsoring members
    /// and those members' aliases.
    pub async fn get_documents_updated_since(
        &self,
        since: NaiveDateTime,
    ) -> Result<Vec<LegislationDocumentDto>, Error> {
        let files = LegislationRepository::new(self.db)
            .find_updated_since(since)
            .await?;
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let keys: Vec<i32> = files.iter().map(|f| f.key).collect();

        let mut topics_by_key: HashMap<i32, Vec<String>> = HashMap::new();
        for (key, topic) in TopicRepository::new(self.db)
            .get_topics_by_leg_file_keys(&keys)
            .await?
        {
            topics_by_key.entry(key).or_default().push(topic);
        }

        let links = SponsorRepository::new(self.db)
            .find_by_leg_file_keys(&keys)
            .await?;

        let mut sponsor_ids: Vec<i32> = links.iter().map(|l| l.member_id).collect();
        sponsor_ids.sort_unstable();
        sponsor_ids.dedup();

        let names: HashMap<i32, String> = CouncilMemberRepository::new(self.db)
            .find_many(&sponsor_ids)
            .await?
            .into_iter()
            .map(|m| (m.id, m.real_name))
            .collect();

        let mut aliases: HashMap<i32, Vec<String>> = HashMap::new();
        for alias in AliasRepository::new(self.db)
            .find_by_member_ids(&sponsor_ids)
            .await?
        {
            aliases.entry(alias.member_id).or_default().push(alias.name);
        }

        let mut sponsors_by_key: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in links {
            sponsors_by_key
                .entry(link.leg_file_key)
                .or_default()
                .push(link.member_id);
        }

        Ok(files
            .into_iter()
            .map(|file| {
                let sponsor_ids = sponsors_by_key.remove(&file.key).unwrap_or_default();
                let sponsors = sponsor_terms(&sponsor_ids, &names, &aliases);
                let topics = topics_by_key.remove(&file.key).unwrap_or_default();
                to_document(file, topics, sponsors)
            })
            .collect())
    }

    /// Builds index documents for minutes updated at or after `since`
    pub async fn get_minutes_updated_since(
        &self,
        since: NaiveDateTime,
    ) -> Result<Vec<MinutesDocumentDto>, Error> {
        let minutes = MinutesRepository::new(self.db)
            .find_updated_since(since)
            .await?;

        Ok(minutes.into_iter().map(to_minutes_document).collect())
    }
}

/// Sponsor real names followed by every alias of those sponsors
fn sponsor_terms(
    sponsor_ids: &[i32],
    names: &HashMap<i32, String>,
    aliases: &HashMap<i32, Vec<String>>,
) -> Vec<String> {
    let real_names = sponsor_ids.iter().filter_map(|id| names.get(id).cloned());
    let alias_names = sponsor_ids
        .iter()
        .filter_map(|id| aliases.get(id))
        .flatten()
        .cloned();

    real_names.chain(alias_names).collect()
}

fn to_document(
    file: LegFileModel,
    topics: Vec<String>,
    sponsors: Vec<String>,
) -> LegislationDocumentDto {
    LegislationDocumentDto {
        key: file.key,
        file_id: file.file_id,
        is_blank: file.title.trim().is_empty(),
        text: file.title,
        topics,
        status: file.status,
        controlling_body: file.controlling_body,
        file_type: file.file_type,
        order_date: file.intro_date,
        sponsors,
    }
}

fn to_minutes_document(minutes: LegMinutesModel) -> MinutesDocumentDto {
    MinutesDocumentDto {
        id: minutes.id,
        text: minutes.fulltext,
        date_taken: minutes.date_taken,
        order_date: minutes.date_taken,
    }
}
