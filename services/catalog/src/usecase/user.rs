use tracing::info;

use cinema_domain::pagination::{Page, PageRequest};

use crate::domain::repository::{
    FollowRepository, PasswordHasher, ReviewRepository, UserRepository,
};
use crate::domain::types::{NewUser, Profile, User, Viewer};
use crate::error::CatalogServiceError;

/// Loose address check: one `@`, a non-empty local part and a dotted domain.
pub fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct RegisterUseCase<U: UserRepository, H: PasswordHasher> {
    pub users: U,
    pub hasher: H,
}

impl<U: UserRepository, H: PasswordHasher> RegisterUseCase<U, H> {
    pub async fn execute(&self, input: RegisterInput) -> Result<User, CatalogServiceError> {
        let name = input.name.trim();
        let email = input.email.trim();
        if name.is_empty() {
            return Err(CatalogServiceError::MissingData);
        }
        if !looks_like_email(email) {
            return Err(CatalogServiceError::InvalidEmail);
        }
        if input.password.is_empty() {
            return Err(CatalogServiceError::InvalidPassword);
        }
        if self.users.find_by_name(name).await?.is_some() {
            return Err(CatalogServiceError::UserAlreadyExists);
        }
        if self.users.email_exists(email).await? {
            return Err(CatalogServiceError::EmailAlreadyExists);
        }

        let new_user = NewUser {
            name: name.to_owned(),
            email: email.to_owned(),
            password_hash: self.hasher.hash(&input.password),
        };
        let id = self.users.create(&new_user).await?;
        info!(user_id = id, "user registered");
        Ok(User {
            id,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
        })
    }
}

// ── CheckCredentials ─────────────────────────────────────────────────────────

pub struct CheckCredentialsUseCase<U: UserRepository, H: PasswordHasher> {
    pub users: U,
    pub hasher: H,
}

impl<U: UserRepository, H: PasswordHasher> CheckCredentialsUseCase<U, H> {
    pub async fn execute(&self, name: &str, password: &str) -> Result<User, CatalogServiceError> {
        let user = self
            .users
            .find_by_name(name.trim())
            .await?
            .ok_or(CatalogServiceError::InvalidCredentials)?;
        if !self.hasher.verify(password, &user.password_hash) {
            return Err(CatalogServiceError::InvalidCredentials);
        }
        Ok(user)
    }
}

// ── GetUserId ────────────────────────────────────────────────────────────────

pub struct GetUserIdUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> GetUserIdUseCase<U> {
    pub async fn execute(&self, name: &str) -> Result<i32, CatalogServiceError> {
        self.users
            .find_by_name(name)
            .await?
            .map(|u| u.id)
            .ok_or(CatalogServiceError::UserNotFound)
    }
}

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<U, Fo, V>
where
    U: UserRepository,
    Fo: FollowRepository,
    V: ReviewRepository,
{
    pub users: U,
    pub follows: Fo,
    pub reviews: V,
    pub reviews_per_page: u32,
}

impl<U, Fo, V> GetProfileUseCase<U, Fo, V>
where
    U: UserRepository,
    Fo: FollowRepository,
    V: ReviewRepository,
{
    pub async fn execute(
        &self,
        username: &str,
        raw_page: Option<&str>,
        viewer: Option<&Viewer>,
    ) -> Result<Profile, CatalogServiceError> {
        let user = self
            .users
            .find_by_name(username)
            .await?
            .ok_or(CatalogServiceError::UserNotFound)?;
        let followers = self.follows.followers(user.id).await?;
        let followings = self.follows.followings(user.id).await?;
        let is_following = match viewer {
            Some(viewer) if viewer.id != user.id => {
                self.follows.is_following(viewer.id, user.id).await?
            }
            _ => false,
        };

        let total = self.reviews.count_for_user(user.id).await?;
        let window = PageRequest::new(self.reviews_per_page, raw_page).resolve(total);
        let items = self.reviews.list_for_user(user.id, window).await?;

        Ok(Profile {
            id: user.id,
            name: user.name,
            followers,
            followings,
            is_following,
            reviews: Page::new(items, window, total),
        })
    }
}
