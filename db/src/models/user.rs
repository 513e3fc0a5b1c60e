use argon2::password_hash::PasswordHash;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait};
use serde::Serialize;

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    pub full_name: String,
    /// Login identity. Unique, matched case-sensitively.
    #[sea_orm(unique)]
    pub email_address: String,
    /// PHC-format salted hash. Never the plaintext.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course::Entity")]
    Course,

    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

/// True when `value` parses as a PHC string (`$argon2id$v=19$...`).
pub fn is_password_hash(value: &str) -> bool {
    PasswordHash::new(value).is_ok()
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Refuses to write a password column that is not already a hash.
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(value) = &self.password_hash {
            if !is_password_hash(value) {
                tracing::warn!(email = ?self.email_address, "Rejected write of an unhashed password");
                return Err(DbErr::Custom(
                    "refusing to store a password that is not a salted hash".into(),
                ));
            }
        }
        Ok(self)
    }
}

impl Model {
    /// Exact, case-sensitive lookup by email address.
    pub async fn find_by_email(db: &DbConn, email_address: &str) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::EmailAddress.eq(email_address))
            .one(db)
            .await
    }
}
