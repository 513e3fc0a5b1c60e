//! Credential store: registration and password verification.

use crate::error::ServiceError;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::Utc;
use db::models::user::{self, ActiveModel};
use once_cell::sync::Lazy;
use rand::rngs::OsRng;
use regex::Regex;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, SqlErr};
use validator::{Validate, ValidationError};

pub use db::models::user::Model as User;

static EMAIL_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is a valid regex")
});

/// Verified against when the email is unknown, so a miss costs one hash check too.
static DUMMY_HASH: Lazy<String> =
    Lazy::new(|| UserService::hash_password("timing-equaliser").unwrap_or_default());

fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if EMAIL_ADDRESS.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email")
            .with_message(format!("{email} is not a valid e-mail address").into()))
    }
}

#[derive(Debug, Clone, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,

    #[validate(custom(function = "validate_email_address"))]
    pub email_address: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

pub struct UserService;

impl UserService {
    /// Registers a user, hashing the password exactly once before the insert.
    ///
    /// A taken email address surfaces as [`ServiceError::DuplicateEmail`].
    pub async fn create(db: &DatabaseConnection, params: CreateUser) -> Result<User, ServiceError> {
        params.validate()?;

        let password_hash = Self::hash_password(&params.password)?;
        let email_address = params.email_address;

        let active = ActiveModel {
            full_name: Set(params.full_name),
            email_address: Set(email_address.clone()),
            password_hash: Set(password_hash),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        match active.insert(db).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "Registered user");
                Ok(user)
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(ServiceError::DuplicateEmail(email_address))
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Resolves `email` + `password` to a user.
    ///
    /// Unknown email and wrong password both yield
    /// [`ServiceError::AuthenticationFailed`]; store failures yield
    /// [`ServiceError::Database`].
    pub async fn authenticate(
        db: &DatabaseConnection,
        email: &str,
        password: &str,
    ) -> Result<User, ServiceError> {
        match user::Model::find_by_email(db, email).await? {
            Some(user) if Self::verify_password(&user, password) => Ok(user),
            Some(user) => {
                tracing::debug!(user_id = user.id, "Password mismatch");
                Err(ServiceError::AuthenticationFailed)
            }
            None => {
                let _ = Self::verify_hash(&DUMMY_HASH, password);
                tracing::debug!("No user for supplied email");
                Err(ServiceError::AuthenticationFailed)
            }
        }
    }

    pub fn hash_password(password: &str) -> Result<String, ServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ServiceError::Hashing(e.to_string()))
    }

    pub fn verify_password(user: &User, password: &str) -> bool {
        Self::verify_hash(&user.password_hash, password)
    }

    fn verify_hash(hash: &str, password: &str) -> bool {
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}
