use crate::seed::Seeder;
use crate::seeds::{FIXED_PASSWORD, FIXED_USERS};
use async_trait::async_trait;
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name},
};
use sea_orm::DatabaseConnection;
use services::{
    ServiceError,
    user::{CreateUser, UserService},
};

pub struct UserSeeder;

#[async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> anyhow::Result<()> {
        for (full_name, email) in FIXED_USERS {
            create(db, full_name.into(), email.into()).await?;
        }

        // Random users
        for _ in 0..8 {
            create(db, Name().fake(), SafeEmail().fake()).await?;
        }

        Ok(())
    }
}

/// Re-running the seeder keeps existing accounts.
async fn create(db: &DatabaseConnection, full_name: String, email_address: String) -> anyhow::Result<()> {
    let params = CreateUser {
        full_name,
        email_address,
        password: FIXED_PASSWORD.into(),
    };

    match UserService::create(db, params).await {
        Ok(_) | Err(ServiceError::DuplicateEmail(_)) => Ok(()),
        Err(err) => Err(err.into()),
    }
}
