use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// Hashes the password, rejects duplicate emails, validates the role
    /// and persists the user. No record is created on any failure path.
    ///
    /// # Errors
    /// * `AccountExists` - Email is already registered
    /// * `InvalidRole` - Role literal outside `ADMIN` / `MEMBER`
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify credentials and return the authenticated identity.
    ///
    /// Read-only. Unknown email and wrong password produce the identical
    /// error value.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Email unknown or password mismatch
    /// * `DatabaseError` - Store operation failed
    async fn authenticate(&self, email: &EmailAddress, password: &str)
        -> Result<User, UserError>;

    /// Retrieve an account by identifier (authenticated profile lookup).
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Store operation failed
    async fn get_account(&self, id: &UserId) -> Result<User, UserError>;
}

/// Persistence operations for the user aggregate.
///
/// The duplicate check in the service is best-effort; the lookup/create
/// sequence is not atomic, so the implementation is expected to also
/// enforce email uniqueness itself.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `AccountExists` - Email uniqueness violated at the store
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve a user by email address (case-sensitive match).
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
}
