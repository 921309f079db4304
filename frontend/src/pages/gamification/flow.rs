//! Badge award sequence: one POST, then a full progress re-fetch.
//!
//! The API calls sit behind `ProgressService` so the ordering can be checked
//! without a browser.

use common::model::progress::{BadgeAwardResponse, UserProgress};

use crate::api::{self, ApiError};

pub trait ProgressService {
    async fn fetch_progress(&self, user_id: &str) -> Result<UserProgress, ApiError>;
    async fn award_badge(&self, user_id: &str, badge: &str) -> Result<BadgeAwardResponse, ApiError>;
}

/// Talks to the real API.
pub struct HttpProgressService;

impl ProgressService for HttpProgressService {
    async fn fetch_progress(&self, user_id: &str) -> Result<UserProgress, ApiError> {
        api::user_progress(user_id).await
    }

    async fn award_badge(&self, user_id: &str, badge: &str) -> Result<BadgeAwardResponse, ApiError> {
        api::award_badge(user_id, badge).await
    }
}

pub enum AwardOutcome {
    /// Badge awarded and the fresh progress record fetched.
    Refreshed(UserProgress),
    /// The award call failed; progress was not re-fetched.
    AwardFailed(ApiError),
    /// The award went through but the re-fetch failed.
    RefreshFailed(ApiError),
}

/// Awards `badge`, passes the server message to `notify`, then re-fetches the
/// whole progress record. Nothing is applied locally in between.
pub async fn award_then_refresh<S: ProgressService>(
    service: &S,
    user_id: &str,
    badge: &str,
    notify: impl FnOnce(&str),
) -> AwardOutcome {
    let awarded = match service.award_badge(user_id, badge).await {
        Ok(awarded) => awarded,
        Err(err) => return AwardOutcome::AwardFailed(err),
    };
    notify(&awarded.message);

    match service.fetch_progress(user_id).await {
        Ok(progress) => AwardOutcome::Refreshed(progress),
        Err(err) => AwardOutcome::RefreshFailed(err),
    }
}
