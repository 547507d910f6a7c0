//! Diesel models for the catalog tables.

use diesel::prelude::*;

use crate::domain::catalog::{
    EventType as DomainEventType, NewEventType as DomainNewEventType,
    NewPackage as DomainNewPackage, NewProduct as DomainNewProduct, NewVenue as DomainNewVenue,
    Package as DomainPackage, Product as DomainProduct, Venue as DomainVenue,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::packages)]
/// Diesel model for [`crate::domain::catalog::Package`].
pub struct Package {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub capacity_min: i32,
    pub capacity_max: Option<i32>,
    pub is_active: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::packages)]
pub struct NewPackage<'a> {
    pub name: &'a str,
    pub price: f64,
    pub capacity_min: i32,
    pub capacity_max: Option<i32>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::venues)]
/// Diesel model for [`crate::domain::catalog::Venue`].
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub capacity_min: i32,
    pub capacity_max: Option<i32>,
    pub is_active: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::venues)]
pub struct NewVenue<'a> {
    pub name: &'a str,
    pub price: f64,
    pub capacity_min: i32,
    pub capacity_max: Option<i32>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
/// Diesel model for [`crate::domain::catalog::Product`].
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub is_active: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub price: f64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::event_types)]
/// Diesel model for [`crate::domain::catalog::EventType`].
pub struct EventType {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::event_types)]
pub struct NewEventType<'a> {
    pub name: &'a str,
    pub is_active: bool,
}

impl From<Package> for DomainPackage {
    fn from(row: Package) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            capacity_min: row.capacity_min,
            capacity_max: row.capacity_max,
            is_active: row.is_active,
        }
    }
}

impl<'a> From<&'a DomainNewPackage> for NewPackage<'a> {
    fn from(new: &'a DomainNewPackage) -> Self {
        Self {
            name: new.name.as_str(),
            price: new.price,
            capacity_min: new.capacity_min,
            capacity_max: new.capacity_max,
            is_active: true,
        }
    }
}

impl From<Venue> for DomainVenue {
    fn from(row: Venue) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            capacity_min: row.capacity_min,
            capacity_max: row.capacity_max,
            is_active: row.is_active,
        }
    }
}

impl<'a> From<&'a DomainNewVenue> for NewVenue<'a> {
    fn from(new: &'a DomainNewVenue) -> Self {
        Self {
            name: new.name.as_str(),
            price: new.price,
            capacity_min: new.capacity_min,
            capacity_max: new.capacity_max,
            is_active: true,
        }
    }
}

impl From<Product> for DomainProduct {
    fn from(row: Product) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            is_active: row.is_active,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(new: &'a DomainNewProduct) -> Self {
        Self {
            name: new.name.as_str(),
            price: new.price,
            is_active: true,
        }
    }
}

impl From<EventType> for DomainEventType {
    fn from(row: EventType) -> Self {
        Self {
            id: row.id,
            name: row.name,
            is_active: row.is_active,
        }
    }
}

impl<'a> From<&'a DomainNewEventType> for NewEventType<'a> {
    fn from(new: &'a DomainNewEventType) -> Self {
        Self {
            name: new.name.as_str(),
            is_active: true,
        }
    }
}
