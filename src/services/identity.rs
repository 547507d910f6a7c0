//! Resolution of the signed-in user to a client profile able to own a
//! booking. Conversion may only run once a client id has been resolved.

use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::client::{ClientProfile, NewClientProfile};
use crate::domain::user::UpdateUser;
use crate::forms::profile::CompleteProfileForm;
use crate::repository::{ClientReader, ClientWriter, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Where the current visitor stands on the way to a resolved client id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityState {
    /// Not signed in; the draft must be stashed and the visitor redirected
    /// to authenticate.
    Anonymous,
    /// Signed in but the account owns no client profile yet; profile
    /// completion is required before conversion.
    NeedsProfile { user_id: i32 },
    /// A client profile exists (found or just created) and may own a
    /// booking.
    Resolved { client_id: i32 },
}

/// Probes the repository for the signed-in user's client profile. A missing
/// profile is an expected branch, not a failure.
pub fn resolve<R>(repo: &R, user: Option<&AuthenticatedUser>) -> ServiceResult<IdentityState>
where
    R: ClientReader + ?Sized,
{
    let Some(user) = user else {
        return Ok(IdentityState::Anonymous);
    };
    let user_id = user
        .user_id()
        .ok_or_else(|| ServiceError::Identity("Malformed session claims".to_string()))?;

    let state = match repo.get_client_by_user_id(user_id).map_err(|err| {
        log::error!("Failed to look up client profile: {err}");
        err
    })? {
        Some(profile) => IdentityState::Resolved {
            client_id: profile.id,
        },
        None => IdentityState::NeedsProfile { user_id },
    };

    Ok(state)
}

/// Creates the missing client profile for the signed-in user, moving the
/// identity flow to `Resolved`.
pub fn complete_profile<R>(
    repo: &R,
    user_id: i32,
    form: CompleteProfileForm,
) -> ServiceResult<ClientProfile>
where
    R: ClientReader + ClientWriter + UserWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate profile form: {err}");
        return Err(ServiceError::Validation(
            "Please fill in name, phone and document".to_string(),
        ));
    }

    // Idempotent against a double submit: reuse the existing profile.
    if let Some(existing) = repo.get_client_by_user_id(user_id)? {
        return Ok(existing);
    }

    let new_profile = NewClientProfile::new(user_id, form.name, form.phone, form.document)
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let profile = repo.create_client(&new_profile).map_err(|err| {
        log::error!("Failed to create client profile: {err}");
        ServiceError::Identity("Profile could not be created".to_string())
    })?;

    // The account keeps the display name the visitor just confirmed. A
    // failed sync never loses the profile that was created above.
    let updates = UpdateUser {
        name: Some(profile.name.clone()),
        email: None,
    };
    if let Err(err) = repo.update_user(user_id, &updates) {
        log::error!("Failed to sync the account name: {err}");
    }

    Ok(profile)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::repository::mock::MockRepository;

    fn user(sub: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: sub.to_string(),
            username: "ana".to_string(),
            name: "Ana".to_string(),
            roles: vec!["client".to_string()],
            exp: 0,
        }
    }

    fn profile(id: i32, user_id: i32) -> ClientProfile {
        ClientProfile {
            id,
            user_id,
            name: "Ana".to_string(),
            phone: "+34612345678".to_string(),
            document: "12345678Z".to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn missing_session_resolves_to_anonymous_without_lookup() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_user_id().times(0);

        assert_eq!(resolve(&repo, None).unwrap(), IdentityState::Anonymous);
    }

    #[test]
    fn missing_profile_is_a_branch_not_an_error() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_user_id()
            .withf(|user_id| *user_id == 7)
            .times(1)
            .returning(|_| Ok(None));

        assert_eq!(
            resolve(&repo, Some(&user("7"))).unwrap(),
            IdentityState::NeedsProfile { user_id: 7 }
        );
    }

    #[test]
    fn existing_profile_resolves_immediately() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_user_id()
            .times(1)
            .returning(|user_id| Ok(Some(profile(42, user_id))));

        assert_eq!(
            resolve(&repo, Some(&user("7"))).unwrap(),
            IdentityState::Resolved { client_id: 42 }
        );
    }

    #[test]
    fn complete_profile_creates_and_returns_the_new_profile() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_user_id()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_create_client()
            .withf(|new| new.user_id == 7 && new.phone == "+34612345678")
            .times(1)
            .returning(|new| {
                Ok(ClientProfile {
                    id: 42,
                    user_id: new.user_id,
                    name: new.name.clone(),
                    phone: new.phone.clone(),
                    document: new.document.clone(),
                    created_at: Utc::now().naive_utc(),
                })
            });
        // The confirmed name is pushed back onto the account.
        repo.expect_update_user()
            .withf(|user_id, updates| *user_id == 7 && updates.name.as_deref() == Some("Ana"))
            .times(1)
            .returning(|_, _| Ok(()));

        let form = CompleteProfileForm {
            name: "Ana".to_string(),
            phone: "+34 612 345 678".to_string(),
            document: "12345678Z".to_string(),
        };
        let created = complete_profile(&repo, 7, form).expect("profile should be created");
        assert_eq!(created.id, 42);
    }

    #[test]
    fn failed_name_sync_does_not_lose_the_created_profile() {
        use crate::repository::errors::RepositoryError;

        let mut repo = MockRepository::new();
        repo.expect_get_client_by_user_id()
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_create_client()
            .times(1)
            .returning(|new| {
                Ok(ClientProfile {
                    id: 42,
                    user_id: new.user_id,
                    name: new.name.clone(),
                    phone: new.phone.clone(),
                    document: new.document.clone(),
                    created_at: Utc::now().naive_utc(),
                })
            });
        repo.expect_update_user()
            .times(1)
            .returning(|_, _| Err(RepositoryError::NotFound));

        let form = CompleteProfileForm {
            name: "Ana".to_string(),
            phone: "+34 612 345 678".to_string(),
            document: "12345678Z".to_string(),
        };
        let created = complete_profile(&repo, 7, form).expect("profile survives the failed sync");
        assert_eq!(created.id, 42);
    }

    #[test]
    fn complete_profile_rejects_blank_fields_before_any_write() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_user_id().times(0);
        repo.expect_create_client().times(0);
        repo.expect_update_user().times(0);

        let form = CompleteProfileForm {
            name: "".to_string(),
            phone: "+34612345678".to_string(),
            document: "12345678Z".to_string(),
        };

        assert!(matches!(
            complete_profile(&repo, 7, form),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn complete_profile_reuses_an_existing_profile() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_user_id()
            .times(1)
            .returning(|user_id| Ok(Some(profile(42, user_id))));
        repo.expect_create_client().times(0);
        repo.expect_update_user().times(0);

        let form = CompleteProfileForm {
            name: "Ana".to_string(),
            phone: "+34612345678".to_string(),
            document: "12345678Z".to_string(),
        };

        let existing = complete_profile(&repo, 7, form).expect("existing profile");
        assert_eq!(existing.id, 42);
    }
}
