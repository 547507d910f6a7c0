//! Diesel implementation of [`CatalogReader`] and [`CatalogWriter`].

use diesel::prelude::*;

use crate::domain::catalog::{
    EventType, NewEventType, NewPackage, NewProduct, NewVenue, Package, Product, Venue,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CatalogReader, CatalogWriter, DieselRepository};

impl CatalogReader for DieselRepository {
    fn list_packages(&self, active_only: bool) -> RepositoryResult<Vec<Package>> {
        use crate::models::catalog::Package as DbPackage;
        use crate::schema::packages;

        let mut conn = self.conn()?;
        let mut query = packages::table.order(packages::id.asc()).into_boxed();
        if active_only {
            query = query.filter(packages::is_active.eq(true));
        }
        let items = query.load::<DbPackage>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    fn list_venues(&self, active_only: bool) -> RepositoryResult<Vec<Venue>> {
        use crate::models::catalog::Venue as DbVenue;
        use crate::schema::venues;

        let mut conn = self.conn()?;
        let mut query = venues::table.order(venues::id.asc()).into_boxed();
        if active_only {
            query = query.filter(venues::is_active.eq(true));
        }
        let items = query.load::<DbVenue>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    fn list_products(&self, active_only: bool) -> RepositoryResult<Vec<Product>> {
        use crate::models::catalog::Product as DbProduct;
        use crate::schema::products;

        let mut conn = self.conn()?;
        let mut query = products::table.order(products::id.asc()).into_boxed();
        if active_only {
            query = query.filter(products::is_active.eq(true));
        }
        let items = query.load::<DbProduct>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    fn list_event_types(&self, active_only: bool) -> RepositoryResult<Vec<EventType>> {
        use crate::models::catalog::EventType as DbEventType;
        use crate::schema::event_types;

        let mut conn = self.conn()?;
        let mut query = event_types::table.order(event_types::id.asc()).into_boxed();
        if active_only {
            query = query.filter(event_types::is_active.eq(true));
        }
        let items = query.load::<DbEventType>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl CatalogWriter for DieselRepository {
    fn create_package(&self, new_package: &NewPackage) -> RepositoryResult<Package> {
        use crate::models::catalog::{NewPackage as DbNewPackage, Package as DbPackage};
        use crate::schema::packages;

        let mut conn = self.conn()?;
        let insertable: DbNewPackage = new_package.into();
        let created = diesel::insert_into(packages::table)
            .values(&insertable)
            .get_result::<DbPackage>(&mut conn)?;

        Ok(created.into())
    }

    fn create_venue(&self, new_venue: &NewVenue) -> RepositoryResult<Venue> {
        use crate::models::catalog::{NewVenue as DbNewVenue, Venue as DbVenue};
        use crate::schema::venues;

        let mut conn = self.conn()?;
        let insertable: DbNewVenue = new_venue.into();
        let created = diesel::insert_into(venues::table)
            .values(&insertable)
            .get_result::<DbVenue>(&mut conn)?;

        Ok(created.into())
    }

    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        use crate::models::catalog::{NewProduct as DbNewProduct, Product as DbProduct};
        use crate::schema::products;

        let mut conn = self.conn()?;
        let insertable: DbNewProduct = new_product.into();
        let created = diesel::insert_into(products::table)
            .values(&insertable)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }

    fn create_event_type(&self, new_event_type: &NewEventType) -> RepositoryResult<EventType> {
        use crate::models::catalog::{EventType as DbEventType, NewEventType as DbNewEventType};
        use crate::schema::event_types;

        let mut conn = self.conn()?;
        let insertable: DbNewEventType = new_event_type.into();
        let created = diesel::insert_into(event_types::table)
            .values(&insertable)
            .get_result::<DbEventType>(&mut conn)?;

        Ok(created.into())
    }

    fn set_package_active(&self, id: i32, active: bool) -> RepositoryResult<()> {
        use crate::schema::packages;

        let mut conn = self.conn()?;
        let updated = diesel::update(packages::table.find(id))
            .set(packages::is_active.eq(active))
            .execute(&mut conn)?;
        if updated == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn set_venue_active(&self, id: i32, active: bool) -> RepositoryResult<()> {
        use crate::schema::venues;

        let mut conn = self.conn()?;
        let updated = diesel::update(venues::table.find(id))
            .set(venues::is_active.eq(active))
            .execute(&mut conn)?;
        if updated == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn set_product_active(&self, id: i32, active: bool) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let updated = diesel::update(products::table.find(id))
            .set(products::is_active.eq(active))
            .execute(&mut conn)?;
        if updated == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn set_event_type_active(&self, id: i32, active: bool) -> RepositoryResult<()> {
        use crate::schema::event_types;

        let mut conn = self.conn()?;
        let updated = diesel::update(event_types::table.find(id))
            .set(event_types::is_active.eq(active))
            .execute(&mut conn)?;
        if updated == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
