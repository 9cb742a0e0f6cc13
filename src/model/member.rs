use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Request to fold the selected council members into a primary record
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MergeRequestDto {
    /// ID of the council member that survives the merge
    pub primary: i32,
    /// The operator's selection, which must include the primary
    pub members: Vec<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MergeResponseDto {
    pub message: String,
    pub primary: i32,
    pub members_merged: u64,
    pub aliases_repointed: u64,
    pub aliases_deleted: u64,
    pub tenures_repointed: u64,
    pub votes_repointed: u64,
    pub sponsorships_added: u64,
    pub noop: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CouncilMemberDto {
    pub id: i32,
    pub real_name: String,
    pub aliases: Vec<String>,
    /// Begin date of the member's most recent tenure
    pub tenure_begin: Option<NaiveDate>,
}

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MemberSelectionQuery {
    /// Comma separated council member IDs, e.g. `1,2,5`
    pub ids: String,
}
