//! Core JWT handler implementation

use super::types::{ACCESS_AUDIENCE, Claims, IssuedToken, JwtHandler};
use crate::config::AuthConfig;
use crate::core::models::Employee;
use crate::utils::error::{CaseworkError, Result};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};
use uuid::Uuid;

impl JwtHandler {
    /// Create a new JWT handler
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            expiration: config.jwt_expiration,
            issuer: config.issuer.clone(),
        }
    }

    /// Token lifetime in seconds
    pub fn expiration(&self) -> u64 {
        self.expiration
    }

    /// Create an access token for an employee
    pub fn create_access_token(&self, employee: &Employee) -> Result<IssuedToken> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| CaseworkError::internal(format!("System time error: {}", e)))?
            .as_secs();

        let claims = Claims {
            sub: employee.id,
            iat: now,
            exp: now + self.expiration,
            iss: self.issuer.clone(),
            aud: ACCESS_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
            role: employee.role.to_string(),
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key)?;

        debug!("Created access token for employee: {}", employee.id);
        Ok(IssuedToken {
            access_token: token,
            token_type: "Bearer".to_string(),
            expires_in: self.expiration,
        })
    }

    /// Verify and decode a token
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[ACCESS_AUDIENCE]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            warn!("JWT verification failed: {}", e);
            CaseworkError::Jwt(e)
        })?;

        debug!("Token verified for employee: {}", token_data.claims.sub);
        Ok(token_data.claims)
    }
}
