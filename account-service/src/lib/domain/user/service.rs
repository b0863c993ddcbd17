use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Owns input validation and password hashing; persistence and its
/// atomicity guarantees belong to the repository.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn authenticate(&self, username: &str, password: &str) -> Result<User, UserError> {
        let username = Username::new(username.to_string())?;
        let password = Password::new(password.to_string())?;

        let Some(user) = self.repository.find_by_username(&username).await? else {
            self.password_hasher.verify_placeholder(password.as_str());
            tracing::debug!(username = %username, "Authentication for unknown username");
            return Err(UserError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify(password.as_str(), &user.password_hash)?
        {
            tracing::debug!(user_id = %user.id, "Authentication with wrong password");
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn create_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let username = Username::new(command.username)?;
        let email = EmailAddress::new(command.email)?;
        let password = Password::new(command.password)?;

        let password_hash = self.password_hasher.hash(password.as_str())?;

        let created_user = self
            .repository
            .create(NewUser {
                username,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %created_user.id, "User created");

        Ok(created_user)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), UserError> {
        if !self.repository.delete(id).await? {
            return Err(UserError::NotFound(id));
        }

        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }

    async fn get_user_by_id(&self, id: UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::user::errors::InvalidInputError;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn delete(&self, id: UserId) -> Result<bool, UserError>;
        }
    }

    fn stored_user(id: i32, password: &str) -> User {
        User {
            id: UserId(id),
            username: Username::new("testuser".to_string()).unwrap(),
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            password_hash: auth::PasswordHasher::new().hash(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn register(username: &str, password: &str, email: &str) -> RegisterUserCommand {
        RegisterUserCommand::new(username.to_string(), password.to_string(), email.to_string())
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "testuser"
                    && user.email.as_str() == "test@example.com"
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: UserId(1),
                    username: user.username,
                    email: user.email,
                    password_hash: user.password_hash,
                    created_at: Utc::now(),
                })
            });

        let service = UserService::new(Arc::new(repository));

        let user = service
            .create_user(register("testuser", "password123", "test@example.com"))
            .await
            .unwrap();

        assert_eq!(user.id, UserId(1));
        assert_eq!(user.username.as_str(), "testuser");
        assert_ne!(user.password_hash, "password123");
    }

    #[tokio::test]
    async fn test_create_user_duplicate() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .times(1)
            .returning(|_| Err(UserError::AlreadyExists));

        let service = UserService::new(Arc::new(repository));

        let result = service
            .create_user(register("testuser", "password123", "test@example.com"))
            .await;
        assert!(matches!(result, Err(UserError::AlreadyExists)));
    }

    #[tokio::test]
    async fn test_create_user_invalid_input_never_reaches_repository() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository));

        let bad_username = service
            .create_user(register("x", "password123", "test@example.com"))
            .await;
        assert!(matches!(
            bad_username,
            Err(UserError::InvalidInput(InvalidInputError::Username(_)))
        ));

        let bad_email = service
            .create_user(register("testuser", "password123", "nope"))
            .await;
        assert!(matches!(
            bad_email,
            Err(UserError::InvalidInput(InvalidInputError::Email(_)))
        ));

        let empty_password = service
            .create_user(register("testuser", "", "test@example.com"))
            .await;
        assert!(matches!(
            empty_password,
            Err(UserError::InvalidInput(InvalidInputError::EmptyPassword))
        ));
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut repository = MockTestUserRepository::new();

        let user = stored_user(5, "correct-horse");
        repository
            .expect_find_by_username()
            .withf(|u| u.as_str() == "testuser")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository));

        let result = service.authenticate("testuser", "correct-horse").await;
        assert_eq!(result.unwrap().id, UserId(5));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let mut repository = MockTestUserRepository::new();

        let user = stored_user(5, "correct-horse");
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository));

        let result = service.authenticate("testuser", "battery-staple").await;
        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_user() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.authenticate("nobody", "whatever").await;
        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_malformed_input() {
        let mut repository = MockTestUserRepository::new();
        repository.expect_find_by_username().times(0);

        let service = UserService::new(Arc::new(repository));

        let result = service.authenticate("", "whatever").await;
        assert!(matches!(result, Err(UserError::InvalidInput(_))));

        let result = service.authenticate("testuser", "").await;
        assert!(matches!(result, Err(UserError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_delete()
            .with(eq(UserId(3)))
            .times(1)
            .returning(|_| Ok(true));

        let service = UserService::new(Arc::new(repository));

        assert!(service.delete_user(UserId(3)).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_delete()
            .times(1)
            .returning(|_| Ok(false));

        let service = UserService::new(Arc::new(repository));

        let err = service.delete_user(UserId(3)).await.unwrap_err();
        assert!(matches!(err, UserError::NotFound(UserId(3))));
        assert_eq!(err.to_string(), "User with id 3 does not exist");
    }

    #[tokio::test]
    async fn test_get_user_by_id_success() {
        let mut repository = MockTestUserRepository::new();

        let user = stored_user(8, "pw");
        repository
            .expect_find_by_id()
            .with(eq(UserId(8)))
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository));

        let user = service.get_user_by_id(UserId(8)).await.unwrap();
        assert_eq!(user.email.as_str(), "test@example.com");
    }

    #[tokio::test]
    async fn test_get_user_by_id_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user_by_id(UserId(8)).await;
        assert!(matches!(result, Err(UserError::NotFound(UserId(8)))));
    }

    #[tokio::test]
    async fn test_database_error_propagates() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Err(UserError::DatabaseError("connection reset".to_string())));

        let service = UserService::new(Arc::new(repository));

        let result = service.get_user_by_id(UserId(1)).await;
        assert!(matches!(result, Err(UserError::DatabaseError(_))));
    }
}
