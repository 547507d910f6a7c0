//! Client profiles owning bookings. A profile belongs to exactly one user
//! account and is created either during the quoting flow or by staff.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{NonEmptyString, PhoneNumber, TypeConstraintError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClientProfile {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub phone: String,
    pub document: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug)]
pub struct NewClientProfile {
    pub user_id: i32,
    pub name: String,
    pub phone: String,
    pub document: String,
}

impl NewClientProfile {
    /// Normalizes and validates the profile fields before they reach the
    /// repository layer.
    pub fn new(
        user_id: i32,
        name: String,
        phone: String,
        document: String,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            user_id,
            name: NonEmptyString::new(name)?.into_inner(),
            phone: PhoneNumber::new(phone)?.into_inner(),
            document: NonEmptyString::new(document)?.into_inner(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_profile_normalizes_fields() {
        let profile = NewClientProfile::new(
            7,
            "  Ana Pérez  ".to_string(),
            "+34 612 345 678".to_string(),
            " 12345678Z ".to_string(),
        )
        .expect("valid profile");

        assert_eq!(profile.name, "Ana Pérez");
        assert_eq!(profile.phone, "+34612345678");
        assert_eq!(profile.document, "12345678Z");
    }

    #[test]
    fn new_profile_rejects_blank_fields() {
        assert!(
            NewClientProfile::new(7, "  ".into(), "+34612345678".into(), "12345678Z".into())
                .is_err()
        );
        assert!(
            NewClientProfile::new(7, "Ana".into(), "not a phone".into(), "12345678Z".into())
                .is_err()
        );
    }
}
