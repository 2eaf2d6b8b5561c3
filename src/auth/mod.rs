//! Authentication and case authorization
//!
//! Login issues a JWT for an employee; every request resolves its bearer
//! token back into a fresh employee record. Case-level authorization lives in
//! [`access`].

pub mod access;
pub mod jwt;


pub use jwt::{Claims, JwtHandler};
pub use jwt::types::IssuedToken;

use crate::config::AuthConfig;
use crate::core::models::Employee;
use crate::storage::StorageLayer;
use crate::utils::auth::verify_password;
use crate::utils::error::{CaseworkError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Message returned for every failed login, whatever the cause
const INVALID_CREDENTIALS: &str = "invalid username or password";

/// Main authentication system
#[derive(Clone)]
pub struct AuthSystem {
    /// Authentication configuration
    config: Arc<AuthConfig>,
    /// Storage layer for employee records
    storage: Arc<StorageLayer>,
    /// JWT handler
    jwt: Arc<JwtHandler>,
}

/// Successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub employee: Employee,
    pub token: IssuedToken,
}

impl AuthSystem {
    /// Create a new authentication system
    pub fn new(config: &AuthConfig, storage: Arc<StorageLayer>) -> Self {
        info!("Initializing authentication system");

        Self {
            config: Arc::new(config.clone()),
            storage,
            jwt: Arc::new(JwtHandler::new(config)),
        }
    }

    /// Check credentials and issue an access token
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        info!("Login attempt: {}", username);

        let employee = self
            .storage
            .db()
            .find_employee_by_username(username.trim())
            .await?
            .ok_or_else(|| CaseworkError::unauthenticated(INVALID_CREDENTIALS))?;

        if !verify_password(password, &employee.password_hash)? {
            warn!("Invalid password for employee: {}", username);
            return Err(CaseworkError::unauthenticated(INVALID_CREDENTIALS));
        }

        if !employee.is_active {
            warn!("Login attempt for deactivated employee: {}", username);
            return Err(CaseworkError::unauthenticated(INVALID_CREDENTIALS));
        }

        let token = self.jwt.create_access_token(&employee)?;
        info!("Employee logged in: {}", employee.username);

        Ok(LoginOutcome { employee, token })
    }

    /// Resolve a bearer token into its employee.
    ///
    /// Returns `None` for bad tokens, unknown employees and deactivated
    /// accounts; only storage failures are errors.
    pub async fn authenticate_token(&self, token: &str) -> Result<Option<Employee>> {
        let claims = match self.jwt.verify_token(token) {
            Ok(claims) => claims,
            Err(_) => return Ok(None),
        };

        match self.storage.db().find_employee_by_id(claims.sub).await? {
            Some(employee) if employee.is_active => {
                debug!("Authenticated employee: {}", employee.id);
                Ok(Some(employee))
            }
            Some(_) => {
                debug!("Token for deactivated employee: {}", claims.sub);
                Ok(None)
            }
            None => {
                debug!("Token for unknown employee: {}", claims.sub);
                Ok(None)
            }
        }
    }

    /// Get authentication configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Get JWT handler
    pub fn jwt(&self) -> &JwtHandler {
        &self.jwt
    }
}
