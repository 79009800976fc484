//! Registration, login, logout, and session-token resolution.

use std::sync::Arc;

use tracing::info;

use jobdesk_auth::password::{PasswordHasher, PasswordPolicy};
use jobdesk_auth::token::{IssuedToken, TokenDecoder, TokenEncoder};
use jobdesk_core::error::AppError;
use jobdesk_core::types::Ack;
use jobdesk_database::repositories::UserStore;
use jobdesk_entity::user::{CreateUser, RegisterRequest, User};

use crate::context::RequestContext;

/// A resolved identity together with its freshly issued session token.
///
/// The transport layer writes the token back as an HTTP-only cookie and
/// echoes it in the body for non-cookie consumers.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AuthenticatedUser {
    /// The user record (password hash never serialized).
    pub user: User,
    /// The issued session token.
    pub token: IssuedToken,
}

/// Handles registration, login, and token resolution.
#[derive(Clone)]
pub struct AuthService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password length policy.
    policy: Arc<PasswordPolicy>,
    /// Session-token encoder.
    encoder: Arc<TokenEncoder>,
    /// Session-token decoder.
    decoder: Arc<TokenDecoder>,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish()
    }
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        policy: Arc<PasswordPolicy>,
        encoder: Arc<TokenEncoder>,
        decoder: Arc<TokenDecoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            policy,
            encoder,
            decoder,
        }
    }

    /// Registers a new user and issues their first session token.
    ///
    /// The role comes in as part of the request and is fixed for the
    /// account's lifetime. The password is hashed exactly once, here; a
    /// hashing failure aborts the registration.
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthenticatedUser, AppError> {
        req.validate()?;
        self.policy.validate(&req.password)?;

        // The store's unique index is authoritative, but checking first
        // gives a clean Conflict instead of relying on the insert race.
        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .users
            .insert(CreateUser {
                name: req.name,
                email: req.email,
                phone: req.phone,
                password_hash,
                role: req.role,
            })
            .await?;

        let token = self.encoder.issue(user.id)?;
        info!(user_id = %user.id, role = %user.role, "User registered");

        Ok(AuthenticatedUser { user, token })
    }

    /// Verifies a credential pair and issues a session token.
    ///
    /// An unknown email and a wrong password both fail with
    /// `InvalidCredentials`; which of the two happened is never revealed.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::invalid_credentials("Invalid email or password"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::invalid_credentials("Invalid email or password"));
        }

        let token = self.encoder.issue(user.id)?;
        info!(user_id = %user.id, "User logged in");

        Ok(AuthenticatedUser { user, token })
    }

    /// Resolves a session-token string to the user it identifies.
    ///
    /// Both token failures (malformed/bad signature and expired) and a
    /// token whose subject no longer exists surface as `Unauthenticated`.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let claims = self.decoder.verify(token)?;

        self.users
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::unauthenticated("User no longer exists"))
    }

    /// Builds a request context for a resolved user.
    pub fn context_for(&self, user: &User) -> RequestContext {
        RequestContext::from(user)
    }

    /// Acknowledges a logout.
    ///
    /// Tokens are stateless and there is no revocation list; clearing the
    /// cookie is the transport's job.
    pub fn logout(&self) -> Ack {
        Ack::new("Logged out successfully")
    }
}
