//! Database model type aliases for test utilities.
//!
//! These match the aliases in the main councilmatic crate so fixture return types read the
//! same in unit and integration tests.

pub type CouncilMemberModel = entity::council_member::Model;
pub type CouncilMemberAliasModel = entity::council_member_alias::Model;
pub type CouncilMemberTenureModel = entity::council_member_tenure::Model;
pub type LegFileModel = entity::leg_file::Model;
pub type LegFileSponsorModel = entity::leg_file_sponsor::Model;
pub type LegActionModel = entity::leg_action::Model;
pub type LegVoteModel = entity::leg_vote::Model;
pub type LegMinutesModel = entity::leg_minutes::Model;
pub type MetadataTopicModel = entity::metadata_topic::Model;
pub type LegFileTopicModel = entity::leg_file_topic::Model;
