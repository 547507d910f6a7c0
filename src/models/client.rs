//! Diesel models for the `clients` table.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::client::{
    ClientProfile as DomainClientProfile, NewClientProfile as DomainNewClientProfile,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::clients)]
/// Diesel model for [`crate::domain::client::ClientProfile`].
pub struct Client {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub phone: String,
    pub document: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub user_id: i32,
    pub name: &'a str,
    pub phone: &'a str,
    pub document: &'a str,
    pub created_at: NaiveDateTime,
}

impl From<Client> for DomainClientProfile {
    fn from(row: Client) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            phone: row.phone,
            document: row.document,
            created_at: row.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewClientProfile> for NewClient<'a> {
    fn from(new: &'a DomainNewClientProfile) -> Self {
        Self {
            user_id: new.user_id,
            name: new.name.as_str(),
            phone: new.phone.as_str(),
            document: new.document.as_str(),
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
