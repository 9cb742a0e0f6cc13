pub mod prelude;

pub mod council_member;
pub mod council_member_alias;
pub mod council_member_tenure;
pub mod leg_action;
pub mod leg_file;
pub mod leg_file_sponsor;
pub mod leg_file_topic;
pub mod leg_minutes;
pub mod leg_vote;
pub mod metadata_topic;
