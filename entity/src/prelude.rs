pub use super::council_member::Entity as CouncilMember;
pub use super::council_member_alias::Entity as CouncilMemberAlias;
pub use super::council_member_tenure::Entity as CouncilMemberTenure;
pub use super::leg_action::Entity as LegAction;
pub use super::leg_file::Entity as LegFile;
pub use super::leg_file_sponsor::Entity as LegFileSponsor;
pub use super::leg_file_topic::Entity as LegFileTopic;
pub use super::leg_minutes::Entity as LegMinutes;
pub use super::leg_vote::Entity as LegVote;
pub use super::metadata_topic::Entity as MetadataTopic;
