use serde::{Deserialize, Serialize};
use services::user::{CreateUser, User};

/// Registration body. Missing fields deserialize as empty strings and are
/// reported by validation rather than as a parse failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserRequest {
    pub full_name: String,
    pub email_address: String,
    pub password: String,
    pub confirm_password: String,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            full_name: req.full_name,
            email_address: req.email_address,
            password: req.password,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub full_name: String,
    pub email_address: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email_address: user.email_address,
        }
    }
}
