use tracing::info;

use crate::domain::repository::{FollowRepository, UserRepository};
use crate::domain::types::Viewer;
use crate::error::CatalogServiceError;

async fn resolve_target<U: UserRepository>(
    users: &U,
    viewer: &Viewer,
    username: &str,
) -> Result<i32, CatalogServiceError> {
    let target = users
        .find_by_name(username)
        .await?
        .ok_or(CatalogServiceError::UserNotFound)?;
    if target.id == viewer.id {
        return Err(CatalogServiceError::SelfFollow);
    }
    Ok(target.id)
}

// ── Follow ───────────────────────────────────────────────────────────────────

pub struct FollowUseCase<U: UserRepository, Fo: FollowRepository> {
    pub users: U,
    pub follows: Fo,
}

impl<U: UserRepository, Fo: FollowRepository> FollowUseCase<U, Fo> {
    /// Returns `true` if a new edge was created. Following twice is a no-op.
    pub async fn execute(&self, viewer: &Viewer, username: &str) -> Result<bool, CatalogServiceError> {
        let target = resolve_target(&self.users, viewer, username).await?;
        let created = self.follows.follow(viewer.id, target).await?;
        if created {
            info!(follower_id = viewer.id, followed_id = target, "follow created");
        }
        Ok(created)
    }
}

// ── Unfollow ─────────────────────────────────────────────────────────────────

pub struct UnfollowUseCase<U: UserRepository, Fo: FollowRepository> {
    pub users: U,
    pub follows: Fo,
}

impl<U: UserRepository, Fo: FollowRepository> UnfollowUseCase<U, Fo> {
    /// Returns `true` if an edge was removed.
    pub async fn execute(&self, viewer: &Viewer, username: &str) -> Result<bool, CatalogServiceError> {
        let target = resolve_target(&self.users, viewer, username).await?;
        let removed = self.follows.unfollow(viewer.id, target).await?;
        if removed {
            info!(follower_id = viewer.id, followed_id = target, "follow removed");
        }
        Ok(removed)
    }
}

// ── IsFollowing ──────────────────────────────────────────────────────────────

pub struct IsFollowingUseCase<U: UserRepository, Fo: FollowRepository> {
    pub users: U,
    pub follows: Fo,
}

impl<U: UserRepository, Fo: FollowRepository> IsFollowingUseCase<U, Fo> {
    pub async fn execute(&self, viewer: &Viewer, username: &str) -> Result<bool, CatalogServiceError> {
        let target = self
            .users
            .find_by_name(username)
            .await?
            .ok_or(CatalogServiceError::UserNotFound)?;
        if target.id == viewer.id {
            return Ok(false);
        }
        self.follows.is_following(viewer.id, target.id).await
    }
}
