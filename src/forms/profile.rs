use serde::Deserialize;
use validator::Validate;

/// Contact details required before a booking can be owned.
#[derive(Debug, Deserialize, Validate)]
pub struct CompleteProfileForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub document: String,
}
