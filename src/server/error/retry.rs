use sea_orm::DbErr;

use super::{merge::MergeError, Error};

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection acquisition errors - transient
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                // Connection errors - transient
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Query, type conversion and record errors won't resolve with a retry
                _ => ErrorRetryStrategy::Fail,
            },

            // Another writer touched the members, planning again sees the current state
            Self::MergeError(MergeError::StaleMerge(_)) => ErrorRetryStrategy::Retry,
            Self::MergeError(_) => ErrorRetryStrategy::Fail,

            Self::ConfigError(_) => ErrorRetryStrategy::Fail,
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
