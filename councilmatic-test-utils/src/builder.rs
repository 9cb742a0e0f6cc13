//! Declarative test builder.
//!
//! Operations are queued on the builder and executed in order by [`TestBuilder::build`].

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_member_tables: bool,

    // (real_name, alias names)
    members: Vec<(String, Vec<String>)>,
    // (member index, begin, end)
    tenures: Vec<(usize, NaiveDate, Option<NaiveDate>)>,
    // (key, file_id, title)
    legislation: Vec<(i32, String, String)>,
    // (key, member index)
    sponsorships: Vec<(i32, usize)>,
    // (key, topic)
    topics: Vec<(i32, String)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_member_tables: false,
            members: Vec::new(),
            tenures: Vec::new(),
            legislation: Vec::new(),
            sponsorships: Vec::new(),
            topics: Vec::new(),
        }
    }

    /// Add every table the merge and search services touch: members, aliases, tenures,
    /// legislation, sponsors, actions, votes, topics and minutes.
    pub fn with_member_tables(mut self) -> Self {
        self.include_member_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// ```no_run
    /// use councilmatic_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), councilmatic_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(CouncilMember)
    ///     .with_table(CouncilMemberAlias)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a council member with the provided aliases.
    ///
    /// Members are inserted in the order they are queued, so the first queued member receives
    /// ID 1, the second ID 2 and so on.
    pub fn with_member(mut self, real_name: &str, aliases: &[&str]) -> Self {
        self.members.push((
            real_name.to_string(),
            aliases.iter().map(|a| a.to_string()).collect(),
        ));
        self
    }

    /// Insert a tenure for the member queued at position `member` (zero-based).
    pub fn with_tenure(mut self, member: usize, begin: NaiveDate, end: Option<NaiveDate>) -> Self {
        self.tenures.push((member, begin, end));
        self
    }

    /// Insert a legislative file.
    pub fn with_legislation(mut self, key: i32, file_id: &str, title: &str) -> Self {
        self.legislation
            .push((key, file_id.to_string(), title.to_string()));
        self
    }

    /// Link the member queued at position `member` as a sponsor of legislation `key`.
    pub fn with_sponsorship(mut self, key: i32, member: usize) -> Self {
        self.sponsorships.push((key, member));
        self
    }

    /// Tag legislation `key` with `topic`, creating the topic on first use.
    pub fn with_topic(mut self, key: i32, topic: &str) -> Self {
        self.topics.push((key, topic.to_string()));
        self
    }

    /// Creates the tables, then inserts members, tenures, legislation, sponsorships and topics.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_member_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::CouncilMember),
                schema.create_table_from_entity(entity::prelude::CouncilMemberAlias),
                schema.create_table_from_entity(entity::prelude::CouncilMemberTenure),
                schema.create_table_from_entity(entity::prelude::LegFile),
                schema.create_table_from_entity(entity::prelude::LegFileSponsor),
                schema.create_table_from_entity(entity::prelude::LegAction),
                schema.create_table_from_entity(entity::prelude::LegVote),
                schema.create_table_from_entity(entity::prelude::MetadataTopic),
                schema.create_table_from_entity(entity::prelude::LegFileTopic),
                schema.create_table_from_entity(entity::prelude::LegMinutes),
            ]);
        }

        all_tables.extend(self.tables);
        test.with_tables(all_tables).await?;

        let mut member_ids = Vec::with_capacity(self.members.len());
        for (real_name, aliases) in self.members {
            let aliases: Vec<&str> = aliases.iter().map(String::as_str).collect();
            let (member, _) = test
                .member()
                .insert_member_with_aliases(&real_name, &aliases)
                .await?;
            member_ids.push(member.id);
        }

        for (member, begin, end) in self.tenures {
            test.member()
                .insert_tenure(member_ids[member], begin, end)
                .await?;
        }

        for (key, file_id, title) in self.legislation {
            test.legislation()
                .insert_leg_file(key, &file_id, &title)
                .await?;
        }

        for (key, member) in self.sponsorships {
            test.legislation()
                .insert_sponsor(key, member_ids[member])
                .await?;
        }

        let mut topic_ids: HashMap<String, i32> = HashMap::new();
        for (key, topic) in self.topics {
            let topic_id = match topic_ids.get(&topic) {
                Some(id) => *id,
                None => {
                    let model = test.legislation().insert_topic(&topic).await?;
                    topic_ids.insert(topic, model.id);
                    model.id
                }
            };
            test.legislation()
                .insert_leg_file_topic(key, topic_id)
                .await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
