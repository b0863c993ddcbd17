use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
///
/// Every outcome is an explicit value: handlers match on `UserError`
/// variants instead of relying on panics or sentinel nulls.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Check a username/password pair.
    ///
    /// # Returns
    /// The matching user
    ///
    /// # Errors
    /// * `InvalidInput` - Username or password is structurally invalid
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `Password` / `DatabaseError` - Infrastructure failure
    async fn authenticate(&self, username: &str, password: &str) -> Result<User, UserError>;

    /// Register a new account.
    ///
    /// # Returns
    /// Created user entity with its persistence-assigned id
    ///
    /// # Errors
    /// * `InvalidInput` - Username, email, or password is structurally invalid
    /// * `AlreadyExists` - Username or email is already registered
    /// * `Password` / `DatabaseError` - Infrastructure failure
    async fn create_user(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Delete existing user.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_user(&self, id: UserId) -> Result<(), UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user_by_id(&self, id: UserId) -> Result<User, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user and assign its id.
    ///
    /// The uniqueness check and the insert must be atomic.
    ///
    /// # Errors
    /// * `AlreadyExists` - Username or email is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Remove user from storage.
    ///
    /// # Returns
    /// `true` if a row was removed, `false` if no user had this id
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: UserId) -> Result<bool, UserError>;
}
