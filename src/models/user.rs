//! Diesel models for the `users` table.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::user::{NewUser as DomainNewUser, User as DomainUser};

/// Separator used to pack the role list into a single text column.
const ROLE_SEPARATOR: char = ',';

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::users)]
/// Diesel model for [`crate::domain::user::User`].
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub email: Option<String>,
    pub roles: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
/// Insertable form of [`User`].
pub struct NewUser<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub roles: String,
    pub created_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::users)]
/// Data used when updating a [`User`] record.
pub struct UpdateUser<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
}

impl From<User> for DomainUser {
    fn from(row: User) -> Self {
        Self {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            name: row.name,
            email: row.email,
            roles: row
                .roles
                .split(ROLE_SEPARATOR)
                .filter(|r| !r.is_empty())
                .map(str::to_string)
                .collect(),
            created_at: row.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewUser> for NewUser<'a> {
    fn from(new: &'a DomainNewUser) -> Self {
        Self {
            username: new.username.as_str(),
            password_hash: new.password_hash.as_str(),
            name: new.name.as_str(),
            email: new.email.as_deref(),
            roles: new.roles.join(&ROLE_SEPARATOR.to_string()),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
