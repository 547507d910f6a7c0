//! Services coordinating catalog administration.

use validator::Validate;

use crate::domain::auth::{AuthenticatedUser, check_role};
use crate::dto::settings::SettingsPageData;
use crate::forms::settings::{AddEventTypeForm, AddPackageForm, AddProductForm, AddVenueForm};
use crate::repository::{CatalogReader, CatalogWriter};
use crate::services::{ServiceError, ServiceResult};
use crate::SERVICE_ADMIN_ROLE;

fn ensure_admin(user: &AuthenticatedUser) -> ServiceResult<()> {
    if check_role(SERVICE_ADMIN_ROLE, &user.roles) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Loads the full catalog, inactive entries included, for the admin screen.
pub fn load_settings_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
) -> ServiceResult<SettingsPageData>
where
    R: CatalogReader + ?Sized,
{
    ensure_admin(user)?;

    let catalog = repo.load_catalog(false).map_err(|err| {
        log::error!("Failed to load catalog for settings: {err}");
        err
    })?;

    Ok(SettingsPageData { catalog })
}

/// Validates and persists a new package.
pub fn add_package<R>(repo: &R, user: &AuthenticatedUser, form: AddPackageForm) -> ServiceResult<()>
where
    R: CatalogWriter + ?Sized,
{
    ensure_admin(user)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate package form: {err}");
        return Err(ServiceError::Validation("Invalid package data".to_string()));
    }

    repo.create_package(&form.into()).map_err(|err| {
        log::error!("Failed to add package: {err}");
        err
    })?;

    Ok(())
}

/// Validates and persists a new venue.
pub fn add_venue<R>(repo: &R, user: &AuthenticatedUser, form: AddVenueForm) -> ServiceResult<()>
where
    R: CatalogWriter + ?Sized,
{
    ensure_admin(user)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate venue form: {err}");
        return Err(ServiceError::Validation("Invalid venue data".to_string()));
    }

    repo.create_venue(&form.into()).map_err(|err| {
        log::error!("Failed to add venue: {err}");
        err
    })?;

    Ok(())
}

/// Validates and persists a new extra product.
pub fn add_product<R>(repo: &R, user: &AuthenticatedUser, form: AddProductForm) -> ServiceResult<()>
where
    R: CatalogWriter + ?Sized,
{
    ensure_admin(user)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate product form: {err}");
        return Err(ServiceError::Validation("Invalid product data".to_string()));
    }

    repo.create_product(&form.into()).map_err(|err| {
        log::error!("Failed to add product: {err}");
        err
    })?;

    Ok(())
}

/// Validates and persists a new event type.
pub fn add_event_type<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: AddEventTypeForm,
) -> ServiceResult<()>
where
    R: CatalogWriter + ?Sized,
{
    ensure_admin(user)?;

    if let Err(err) = form.validate() {
        log::error!("Failed to validate event type form: {err}");
        return Err(ServiceError::Validation(
            "Invalid event type data".to_string(),
        ));
    }

    repo.create_event_type(&form.into()).map_err(|err| {
        log::error!("Failed to add event type: {err}");
        err
    })?;

    Ok(())
}

/// Shows or hides a package on the public quoting screen.
pub fn set_package_active<R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: i32,
    active: bool,
) -> ServiceResult<()>
where
    R: CatalogWriter + ?Sized,
{
    ensure_admin(user)?;

    repo.set_package_active(id, active).map_err(|err| {
        log::error!("Failed to update package {id}: {err}");
        err
    })?;

    Ok(())
}

/// Shows or hides a venue on the public quoting screen.
pub fn set_venue_active<R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: i32,
    active: bool,
) -> ServiceResult<()>
where
    R: CatalogWriter + ?Sized,
{
    ensure_admin(user)?;

    repo.set_venue_active(id, active).map_err(|err| {
        log::error!("Failed to update venue {id}: {err}");
        err
    })?;

    Ok(())
}

/// Shows or hides an extra product on the public quoting screen.
pub fn set_product_active<R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: i32,
    active: bool,
) -> ServiceResult<()>
where
    R: CatalogWriter + ?Sized,
{
    ensure_admin(user)?;

    repo.set_product_active(id, active).map_err(|err| {
        log::error!("Failed to update product {id}: {err}");
        err
    })?;

    Ok(())
}

/// Shows or hides an event type on the public quoting screen.
pub fn set_event_type_active<R>(
    repo: &R,
    user: &AuthenticatedUser,
    id: i32,
    active: bool,
) -> ServiceResult<()>
where
    R: CatalogWriter + ?Sized,
{
    ensure_admin(user)?;

    repo.set_event_type_active(id, active).map_err(|err| {
        log::error!("Failed to update event type {id}: {err}");
        err
    })?;

    Ok(())
}
