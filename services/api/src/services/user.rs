//! Business rules for users

use chrono::{SubsecRound, Utc};
use common::error::DatabaseError;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    models::user::{CreateUserRequest, UpdateUserRequest, User},
    repositories::UserRepository,
    validation::{require_text, validate_email},
};

pub const USER_NOT_FOUND: &str = "User not found";
pub const NAME_AND_EMAIL_REQUIRED: &str = "name and email are required";
pub const EMAIL_TAKEN: &str = "This email address is already in use";

/// Validation and persistence of users
#[derive(Clone)]
pub struct UserService {
    users: UserRepository,
}

impl UserService {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    pub async fn list(&self) -> ApiResult<Vec<User>> {
        Ok(self.users.get_all().await?)
    }

    pub async fn get(&self, id: i64) -> ApiResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND.to_string()))
    }

    pub async fn create(&self, payload: CreateUserRequest) -> ApiResult<User> {
        let (Ok(name), Ok(email)) = (
            require_text(payload.name.as_deref(), "name"),
            require_text(payload.email.as_deref(), "email"),
        ) else {
            return Err(ApiError::Validation(NAME_AND_EMAIL_REQUIRED.to_string()));
        };
        let email = email.trim();

        validate_email(email).map_err(ApiError::Validation)?;
        self.ensure_email_free(email, None).await?;

        info!("Creating new user: {}", email);
        let id = self
            .users
            .create(name, email, Utc::now().naive_utc().trunc_subsecs(0))
            .await
            .map_err(email_taken)?;

        self.get(id).await
    }

    /// Apply a partial update, re-validating the email when it changes
    pub async fn update(&self, id: i64, payload: UpdateUserRequest) -> ApiResult<User> {
        let mut user = self.get(id).await?;

        if let Some(name) = payload.name.as_deref() {
            user.name = require_text(Some(name), "name")
                .map_err(ApiError::Validation)?
                .to_string();
        }
        if let Some(email) = payload.email.as_deref() {
            let email = email.trim();
            validate_email(email).map_err(ApiError::Validation)?;
            self.ensure_email_free(email, Some(id)).await?;
            user.email = email.to_string();
        }

        info!("Updating user {}", id);
        if !self.users.update(&user).await.map_err(email_taken)? {
            return Err(ApiError::NotFound(USER_NOT_FOUND.to_string()));
        }

        Ok(user)
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        info!("Deleting user {}", id);
        if self.users.delete(id).await? {
            Ok(())
        } else {
            Err(ApiError::NotFound(USER_NOT_FOUND.to_string()))
        }
    }

    async fn ensure_email_free(&self, email: &str, owner: Option<i64>) -> ApiResult<()> {
        match self.users.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(ApiError::Validation(EMAIL_TAKEN.to_string()))
            }
            _ => Ok(()),
        }
    }
}

fn email_taken(error: DatabaseError) -> ApiError {
    match error {
        DatabaseError::UniqueViolation(_) => ApiError::Validation(EMAIL_TAKEN.to_string()),
        error => error.into(),
    }
}
