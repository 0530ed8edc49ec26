use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{normalize_email, CreateUserParams, RegisterUserParams, User},
    util::password,
};

/// Service for local account registration and password login.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Hashes the password with argon2 before anything is stored.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - The e-mail address is already registered
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "Email address is already registered".to_string(),
            ));
        }

        let password_hash = password::hash(&params.password)?;

        let user = user_repo
            .create(CreateUserParams {
                name: params.name,
                email: params.email,
                role: params.role,
                password_hash,
            })
            .await?;

        tracing::info!("Registered user {} with role {}", user.id, user.role);

        User::from_entity(user)
    }

    /// Checks an e-mail/password pair.
    ///
    /// Unknown addresses and wrong passwords produce the same error so that callers can
    /// not probe which addresses are registered.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown e-mail or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&normalize_email(email)).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        User::from_entity(user)
    }
}
