//! Account registration and credential verification.

use chrono::Utc;
use rand::Rng;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use validator::Validate;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::user::{NewUser, User};
use crate::forms::auth::RegisterForm;
use crate::models::auth::SESSION_TTL_SECS;
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Role granted to accounts created through the public quoting flow.
pub const CLIENT_ROLE: &str = "client";

const SALT_LEN: usize = 16;

/// Produces a `salt$digest` password hash with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    let digest = salted_digest(&salt, password);
    format!("{}${}", hex(&salt), hex(&digest))
}

/// Verifies a password against a stored `salt$digest` pair in constant time.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, digest_hex)) = stored.split_once('$') else {
        return false;
    };
    let (Some(salt), Some(expected)) = (unhex(salt_hex), unhex(digest_hex)) else {
        return false;
    };
    let actual = salted_digest(&salt, password);
    actual.ct_eq(&expected).into()
}

fn salted_digest(salt: &[u8], password: &str) -> Vec<u8> {
    Sha256::new()
        .chain_update(salt)
        .chain_update(password.as_bytes())
        .finalize()
        .to_vec()
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn unhex(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
        .collect()
}

fn claims_for(user: &User) -> AuthenticatedUser {
    AuthenticatedUser {
        sub: user.id.to_string(),
        username: user.username.clone(),
        name: user.name.clone(),
        roles: user.roles.clone(),
        exp: (Utc::now().timestamp() + SESSION_TTL_SECS) as usize,
    }
}

/// Verifies the credentials and returns the session claims.
pub fn login<R>(repo: &R, username: &str, password: &str) -> ServiceResult<AuthenticatedUser>
where
    R: UserReader + ?Sized,
{
    let user = repo
        .get_user_by_username(username)
        .map_err(|err| {
            log::error!("Failed to look up user: {err}");
            err
        })?
        .filter(|user| verify_password(password, &user.password_hash))
        .ok_or_else(|| ServiceError::Identity("Invalid username or password".to_string()))?;

    Ok(claims_for(&user))
}

/// Creates the account and immediately authenticates with the same
/// credentials, returning the session claims. When the post-registration
/// authentication fails the caller stays anonymous.
pub fn register<R>(repo: &R, form: RegisterForm) -> ServiceResult<AuthenticatedUser>
where
    R: UserReader + UserWriter + ?Sized,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate registration form: {err}");
        return Err(ServiceError::Validation(
            "Please fill in username, password and name".to_string(),
        ));
    }

    if repo.get_user_by_username(&form.username)?.is_some() {
        return Err(ServiceError::Identity(
            "This username is already taken".to_string(),
        ));
    }

    let new_user = NewUser::new(
        form.username.clone(),
        hash_password(&form.password),
        form.name.clone(),
        form.email.clone().filter(|e| !e.trim().is_empty()),
        vec![CLIENT_ROLE.to_string()],
    );

    repo.create_user(&new_user).map_err(|err| {
        log::error!("Failed to create user: {err}");
        ServiceError::Identity("Registration was rejected".to_string())
    })?;

    login(repo, &form.username, &form.password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_verifies_and_differs_per_salt() {
        let first = hash_password("s3cret");
        let second = hash_password("s3cret");

        assert_ne!(first, second);
        assert!(verify_password("s3cret", &first));
        assert!(verify_password("s3cret", &second));
        assert!(!verify_password("wrong", &first));
    }

    #[test]
    fn malformed_stored_hash_never_verifies() {
        assert!(!verify_password("s3cret", "no-separator"));
        assert!(!verify_password("s3cret", "zz$zz"));
        assert!(!verify_password("s3cret", "abc$"));
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod service_tests {
    use chrono::Utc;

    use super::*;
    use crate::repository::mock::MockRepository;

    fn stored_user(username: &str, password: &str) -> User {
        User {
            id: 7,
            username: username.to_string(),
            password_hash: hash_password(password),
            name: "Ana".to_string(),
            email: None,
            roles: vec![CLIENT_ROLE.to_string()],
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn login_accepts_valid_credentials() {
        let mut repo = MockRepository::new();
        let user = stored_user("ana", "s3cret");
        repo.expect_get_user_by_username()
            .withf(|username| username == "ana")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let claims = login(&repo, "ana", "s3cret").expect("valid login");
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.roles, vec![CLIENT_ROLE.to_string()]);
    }

    #[test]
    fn login_rejects_bad_password_and_unknown_user() {
        let mut repo = MockRepository::new();
        let user = stored_user("ana", "s3cret");
        repo.expect_get_user_by_username()
            .returning(move |username| {
                if username == "ana" {
                    Ok(Some(user.clone()))
                } else {
                    Ok(None)
                }
            });

        assert!(matches!(
            login(&repo, "ana", "wrong"),
            Err(ServiceError::Identity(_))
        ));
        assert!(matches!(
            login(&repo, "nobody", "s3cret"),
            Err(ServiceError::Identity(_))
        ));
    }

    #[test]
    fn register_creates_account_then_authenticates() {
        use std::sync::{Arc, Mutex};

        let mut repo = MockRepository::new();
        // First lookup: username free; second lookup: the login probe.
        let created: Arc<Mutex<Option<User>>> = Arc::new(Mutex::new(None));
        let lookup = Arc::clone(&created);
        repo.expect_get_user_by_username()
            .returning(move |_| Ok(lookup.lock().unwrap().clone()));
        let sink = Arc::clone(&created);
        repo.expect_create_user().times(1).returning(move |new| {
            let user = User {
                id: 11,
                username: new.username.clone(),
                password_hash: new.password_hash.clone(),
                name: new.name.clone(),
                email: new.email.clone(),
                roles: new.roles.clone(),
                created_at: Utc::now().naive_utc(),
            };
            *sink.lock().unwrap() = Some(user.clone());
            Ok(user)
        });

        let form = RegisterForm {
            username: "ana".to_string(),
            password: "s3cret".to_string(),
            name: "Ana".to_string(),
            email: Some("ana@example.com".to_string()),
        };

        let claims = register(&repo, form).expect("registration should succeed");
        assert_eq!(claims.sub, "11");
        assert_eq!(claims.username, "ana");
    }

    #[test]
    fn register_rejects_taken_username_without_creating() {
        let mut repo = MockRepository::new();
        let existing = stored_user("ana", "other");
        repo.expect_get_user_by_username()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_create_user().times(0);

        let form = RegisterForm {
            username: "ana".to_string(),
            password: "s3cret".to_string(),
            name: "Ana".to_string(),
            email: None,
        };

        assert!(matches!(
            register(&repo, form),
            Err(ServiceError::Identity(_))
        ));
    }
}
