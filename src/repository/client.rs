//! Diesel implementation of [`ClientReader`] and [`ClientWriter`].

use diesel::prelude::*;

use crate::domain::client::{ClientProfile, NewClientProfile};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter, DieselRepository};

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<ClientProfile>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let client = clients::table
            .find(id)
            .first::<DbClient>(&mut conn)
            .optional()?;

        Ok(client.map(Into::into))
    }

    fn get_client_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<ClientProfile>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let client = clients::table
            .filter(clients::user_id.eq(user_id))
            .first::<DbClient>(&mut conn)
            .optional()?;

        Ok(client.map(Into::into))
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClientProfile) -> RepositoryResult<ClientProfile> {
        use crate::models::client::{Client as DbClient, NewClient as DbNewClient};
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let insertable: DbNewClient = new_client.into();
        let created = diesel::insert_into(clients::table)
            .values(&insertable)
            .get_result::<DbClient>(&mut conn)?;

        Ok(created.into())
    }
}
