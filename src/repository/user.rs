//! Diesel implementation of [`UserReader`] and [`UserWriter`].

use diesel::prelude::*;

use crate::domain::user::{NewUser, UpdateUser, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, UserReader, UserWriter};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>> {
        use crate::models::user::User as DbUser;
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .find(id)
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }

    fn get_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        use crate::models::user::User as DbUser;
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::username.eq(username.trim().to_lowercase()))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User> {
        use crate::models::user::{NewUser as DbNewUser, User as DbUser};
        use crate::schema::users;

        let mut conn = self.conn()?;
        let insertable: DbNewUser = new_user.into();
        let created = diesel::insert_into(users::table)
            .values(&insertable)
            .get_result::<DbUser>(&mut conn)?;

        Ok(created.into())
    }

    fn update_user(&self, user_id: i32, updates: &UpdateUser) -> RepositoryResult<()> {
        use crate::models::user::UpdateUser as DbUpdateUser;
        use crate::schema::users;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateUser {
            name: updates.name.as_deref(),
            email: updates.email.as_deref(),
        };

        diesel::update(users::table.find(user_id))
            .set(&db_updates)
            .execute(&mut conn)?;

        Ok(())
    }
}
