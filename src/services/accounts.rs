use async_trait::async_trait;
use dashmap::{mapref::entry::Entry, DashMap};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

use crate::api::auth::{AuthBackend, AuthRejection, Credentials, Session, SignupPayload};
use crate::config::SecurityConfig;

type HmacSha256 = Hmac<Sha256>;

struct UserRecord {
    email: String,
    password_digest: Vec<u8>,
}

/// Process-local account store.
///
/// Accounts and sessions live only as long as the process; passwords are kept
/// as keyed HMAC-SHA256 digests so the cleartext never sits in memory.
pub struct InMemoryAccounts {
    session_secret: String,
    users: DashMap<String, UserRecord>,
    sessions: DashMap<String, String>,
}

impl InMemoryAccounts {
    pub fn new(config: &SecurityConfig) -> Self {
        Self {
            session_secret: config.session_secret.clone(),
            users: DashMap::new(),
            sessions: DashMap::new(),
        }
    }

    fn digest(&self, password: &str) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.session_secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(password.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }

    fn verify(&self, password: &str, digest: &[u8]) -> bool {
        let mut mac = HmacSha256::new_from_slice(self.session_secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(password.as_bytes());
        mac.verify_slice(digest).is_ok()
    }

    fn issue_session(&self, username: &str) -> Session {
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(token.clone(), username.to_string());

        Session {
            token,
            username: username.to_string(),
        }
    }
}

#[async_trait]
impl AuthBackend for InMemoryAccounts {
    async fn register(&self, payload: SignupPayload) -> Result<Session, AuthRejection> {
        let email_taken = self
            .users
            .iter()
            .any(|user| user.value().email == payload.email);
        if email_taken {
            return Err(AuthRejection::Validation(
                "Email is already registered".to_string(),
            ));
        }

        match self.users.entry(payload.username.clone()) {
            Entry::Occupied(_) => Err(AuthRejection::Validation(
                "Username is already taken".to_string(),
            )),
            Entry::Vacant(vacant) => {
                vacant.insert(UserRecord {
                    email: payload.email,
                    password_digest: self.digest(&payload.password),
                });

                Ok(self.issue_session(&payload.username))
            }
        }
    }

    async fn login(&self, credentials: Credentials) -> Result<Session, AuthRejection> {
        let valid = self
            .users
            .get(&credentials.username)
            .map(|user| self.verify(&credentials.password, &user.password_digest))
            .unwrap_or(false);

        if !valid {
            return Err(AuthRejection::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        Ok(self.issue_session(&credentials.username))
    }

    async fn logout(&self, token: &str) -> Result<(), AuthRejection> {
        self.sessions
            .remove(token)
            .map(|_| ())
            .ok_or_else(|| AuthRejection::Unauthorized("Unknown or expired session".to_string()))
    }
}
