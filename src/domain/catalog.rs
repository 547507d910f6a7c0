//! Catalog entities offered to prospective clients: packages, venues,
//! individual products and the supported event types.

use serde::{Deserialize, Serialize};

/// Common shape of capacity-rated catalog items (packages and venues).
pub trait Capacity {
    /// Smallest guest count the item is sold for.
    fn capacity_min(&self) -> i32;
    /// Largest guest count the item accommodates; `None` or zero means
    /// unbounded above.
    fn capacity_max(&self) -> Option<i32>;
    /// Unit price used for ranking ties.
    fn price(&self) -> f64;

    /// Capacity value used for distance ranking: the upper bound when
    /// present, otherwise the lower bound.
    fn effective_capacity(&self) -> i32 {
        self.capacity_max()
            .filter(|max| *max > 0)
            .unwrap_or_else(|| self.capacity_min())
    }

    /// Whether the item's capacity range covers the given guest count.
    fn accommodates(&self, guests: i32) -> bool {
        match self.capacity_max() {
            Some(max) if max > 0 => guests >= self.capacity_min() && guests <= max,
            _ => guests >= self.capacity_min(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Package {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub capacity_min: i32,
    pub capacity_max: Option<i32>,
    pub is_active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub capacity_min: i32,
    pub capacity_max: Option<i32>,
    pub is_active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub is_active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EventType {
    pub id: i32,
    pub name: String,
    pub is_active: bool,
}

impl Capacity for Package {
    fn capacity_min(&self) -> i32 {
        self.capacity_min
    }

    fn capacity_max(&self) -> Option<i32> {
        self.capacity_max
    }

    fn price(&self) -> f64 {
        self.price
    }
}

impl Capacity for Venue {
    fn capacity_min(&self) -> i32 {
        self.capacity_min
    }

    fn capacity_max(&self) -> Option<i32> {
        self.capacity_max
    }

    fn price(&self) -> f64 {
        self.price
    }
}

/// The catalog lists fetched once per quoting-screen entry. Immutable for
/// the duration of a session.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogSnapshot {
    pub packages: Vec<Package>,
    pub venues: Vec<Venue>,
    pub products: Vec<Product>,
    pub event_types: Vec<EventType>,
}

impl CatalogSnapshot {
    pub fn package(&self, id: i32) -> Option<&Package> {
        self.packages.iter().find(|p| p.id == id)
    }

    pub fn venue(&self, id: i32) -> Option<&Venue> {
        self.venues.iter().find(|v| v.id == id)
    }

    pub fn product(&self, id: i32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPackage {
    pub name: String,
    pub price: f64,
    pub capacity_min: i32,
    pub capacity_max: Option<i32>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewVenue {
    pub name: String,
    pub price: f64,
    pub capacity_min: i32,
    pub capacity_max: Option<i32>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewEventType {
    pub name: String,
}
