pub use sea_orm_migration::prelude::*;

mod m20251101_000001_council_member;
mod m20251101_000002_council_member_alias;
mod m20251101_000003_council_member_tenure;
mod m20251101_000004_leg_file;
mod m20251101_000005_leg_file_sponsor;
mod m20251101_000006_leg_action;
mod m20251101_000007_leg_vote;
mod m20251101_000008_leg_minutes;
mod m20251101_000009_metadata_topic;
mod m20251101_000010_leg_file_topic;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_council_member::Migration),
            Box::new(m20251101_000002_council_member_alias::Migration),
            Box::new(m20251101_000003_council_member_tenure::Migration),
            Box::new(m20251101_000004_leg_file::Migration),
            Box::new(m20251101_000005_leg_file_sponsor::Migration),
            Box::new(m20251101_000006_leg_action::Migration),
            Box::new(m20251101_000007_leg_vote::Migration),
            Box::new(m20251101_000008_leg_minutes::Migration),
            Box::new(m20251101_000009_metadata_topic::Migration),
            Box::new(m20251101_000010_leg_file_topic::Migration),
        ]
    }
}
