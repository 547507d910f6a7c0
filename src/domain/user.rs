//! User accounts able to sign in. Staff accounts additionally carry the
//! `events_admin` role; accounts created through the quoting flow get the
//! plain `client` role.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// `salt$digest` pair, both hex encoded.
    pub password_hash: String,
    pub name: String,
    pub email: Option<String>,
    pub roles: Vec<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub email: Option<String>,
    pub roles: Vec<String>,
}

impl NewUser {
    pub fn new(
        username: String,
        password_hash: String,
        name: String,
        email: Option<String>,
        roles: Vec<String>,
    ) -> Self {
        Self {
            username: username.trim().to_lowercase(),
            password_hash,
            name: name.trim().to_string(),
            email: email
                .map(|s| s.to_lowercase().trim().to_string())
                .filter(|s| !s.is_empty()),
            roles,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}
