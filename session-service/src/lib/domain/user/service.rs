use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AccountServicePort;
use crate::user::ports::UserRepository;

/// Domain service for registration, authentication and profile lookup.
///
/// Holds no mutable state; the repository is the only shared resource.
pub struct AccountService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> AccountService<UR>
where
    UR: UserRepository,
{
    /// Create a new account service backed by the given repository.
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> AccountServicePort for AccountService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // Reference ordering: hash first, even though a duplicate email
        // makes the digest unused.
        let password_hash = self
            .password_hasher
            .hash(command.password.as_str())
            .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(UserError::AccountExists(command.email.to_string()));
        }

        let role = Role::resolve(command.role.as_deref())?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            role,
            created_at: Utc::now(),
        };

        self.repository.create(user).await
    }

    async fn authenticate(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let matches = self
            .password_hasher
            .verify(password, &user.password_hash)
            .map_err(|e| UserError::Unknown(format!("Password verification failed: {}", e)))?;

        if !matches {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn get_account(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}
