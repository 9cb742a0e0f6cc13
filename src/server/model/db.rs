//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// A council member record.
///
/// # Fields (from `entity::council_member::Model`)
/// - `id` - Primary key
/// - `real_name` - Display name used by the admin interface and search index
pub type CouncilMemberModel = entity::council_member::Model;

/// An alternate spelling of a member's name as it appears in legislative records.
///
/// Names are unique among the aliases of a single member after a merge.
pub type CouncilMemberAliasModel = entity::council_member_alias::Model;

/// A term served by a council member; `end` is `None` while the term is ongoing.
pub type CouncilMemberTenureModel = entity::council_member_tenure::Model;

/// A legislative file keyed by its stable numeric `key`.
pub type LegFileModel = entity::leg_file::Model;

/// Link row between a legislative file and one of its sponsors.
pub type LegFileSponsorModel = entity::leg_file_sponsor::Model;

pub type LegVoteModel = entity::leg_vote::Model;

/// Published minutes of a council session, indexed by their full text.
pub type LegMinutesModel = entity::leg_minutes::Model;
