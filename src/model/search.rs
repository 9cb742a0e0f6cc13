use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A legislative file prepared for the full-text indexer
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct LegislationDocumentDto {
    pub key: i32,
    pub file_id: String,
    /// Indexed body text, the file's title
    pub text: String,
    pub is_blank: bool,
    /// Topics assigned to the file's metadata, alphabetical
    pub topics: Vec<String>,
    pub status: String,
    pub controlling_body: String,
    pub file_type: String,
    pub order_date: Option<NaiveDate>,
    /// Sponsor real names followed by every alias of those sponsors
    pub sponsors: Vec<String>,
}

/// Council session minutes prepared for the full-text indexer
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MinutesDocumentDto {
    pub id: i32,
    /// Indexed body text, the full text of the minutes
    pub text: String,
    pub date_taken: Option<NaiveDate>,
    pub order_date: Option<NaiveDate>,
}

#[derive(Clone, Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdatedSinceQuery {
    /// RFC 3339 timestamp; records updated at or after it are returned
    pub since: DateTime<Utc>,
}
