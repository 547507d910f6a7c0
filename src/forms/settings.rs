use serde::Deserialize;
use validator::Validate;

use crate::domain::catalog::{NewEventType, NewPackage, NewProduct, NewVenue};

fn parse_capacity_max(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|n| *n > 0)
}

/// New package submitted by the admin screen. An empty capacity maximum
/// means the package has no upper bound.
#[derive(Debug, Deserialize, Validate)]
pub struct AddPackageForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub capacity_min: i32,
    pub capacity_max: String,
}

impl From<AddPackageForm> for NewPackage {
    fn from(form: AddPackageForm) -> Self {
        Self {
            name: form.name,
            price: form.price,
            capacity_min: form.capacity_min,
            capacity_max: parse_capacity_max(&form.capacity_max),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddVenueForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub capacity_min: i32,
    pub capacity_max: String,
}

impl From<AddVenueForm> for NewVenue {
    fn from(form: AddVenueForm) -> Self {
        Self {
            name: form.name,
            price: form.price,
            capacity_min: form.capacity_min,
            capacity_max: parse_capacity_max(&form.capacity_max),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
}

impl From<AddProductForm> for NewProduct {
    fn from(form: AddProductForm) -> Self {
        Self {
            name: form.name,
            price: form.price,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddEventTypeForm {
    #[validate(length(min = 1))]
    pub name: String,
}

impl From<AddEventTypeForm> for NewEventType {
    fn from(form: AddEventTypeForm) -> Self {
        Self { name: form.name }
    }
}

/// Desired visibility posted by the toggle button; the screen submits the
/// opposite of the current flag.
#[derive(Debug, Deserialize)]
pub struct ToggleActiveForm {
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_capacity_max_means_unbounded() {
        let form = AddPackageForm {
            name: "garden".to_string(),
            price: 500.0,
            capacity_min: 20,
            capacity_max: "".to_string(),
        };
        let new: NewPackage = form.into();
        assert_eq!(new.capacity_max, None);
    }

    #[test]
    fn numeric_capacity_max_is_kept() {
        let form = AddVenueForm {
            name: "hall".to_string(),
            price: 900.0,
            capacity_min: 0,
            capacity_max: " 120 ".to_string(),
        };
        let new: NewVenue = form.into();
        assert_eq!(new.capacity_max, Some(120));
    }
}
