//! Shared JWT session-token module.
//!
//! Tokens are signed with HS256 using a secret supplied through the
//! environment. The user id is the only identity claim (`sub`); services
//! never trust anything else out of the token.
//!
//! Services must call `initialize_jwt_secret()` during startup before any
//! token operation:
//!
//! ```no_run
//! use auth_core::jwt;
//!
//! let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET required");
//! jwt::initialize_jwt_secret(&secret).expect("Failed to initialize JWT secret");
//! ```

use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session tokens expire 24 hours after issuance.
const TOKEN_EXPIRY_HOURS: i64 = 24;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT claims carried by a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user id as UUID string) - the only identity claim.
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Keys are initialized once at startup and never modified.
/// OnceCell ensures thread-safe initialization without runtime locks.
static JWT_ENCODING_KEY: OnceCell<EncodingKey> = OnceCell::new();
static JWT_DECODING_KEY: OnceCell<DecodingKey> = OnceCell::new();

/// Initialize the signing secret for both issuance and validation.
///
/// Must be called during application startup before any JWT operation.
/// Can only be called once; subsequent calls return an error.
pub fn initialize_jwt_secret(secret: &str) -> Result<()> {
    if secret.is_empty() {
        return Err(anyhow!("JWT secret must not be empty"));
    }

    JWT_ENCODING_KEY
        .set(EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|_| anyhow!("JWT encoding key already initialized"))?;

    JWT_DECODING_KEY
        .set(DecodingKey::from_secret(secret.as_bytes()))
        .map_err(|_| anyhow!("JWT decoding key already initialized"))?;

    Ok(())
}

fn get_encoding_key() -> Result<&'static EncodingKey> {
    JWT_ENCODING_KEY.get().ok_or_else(|| {
        anyhow!("JWT secret not initialized. Call initialize_jwt_secret() during startup.")
    })
}

fn get_decoding_key() -> Result<&'static DecodingKey> {
    JWT_DECODING_KEY.get().ok_or_else(|| {
        anyhow!("JWT secret not initialized. Call initialize_jwt_secret() during startup.")
    })
}

/// Generate a session token for a user.
///
/// The token carries the user id as `sub` and expires in 24 hours.
pub fn generate_token(user_id: Uuid) -> Result<String> {
    let now = Utc::now();
    let expiry = now + Duration::hours(TOKEN_EXPIRY_HOURS);

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: expiry.timestamp(),
    };

    let encoding_key = get_encoding_key()?;
    encode(&Header::new(JWT_ALGORITHM), &claims, encoding_key)
        .map_err(|e| anyhow!("Failed to generate token: {e}"))
}

/// Validate and decode a session token.
///
/// Verifies the HS256 signature and expiration. Returns an error for a bad
/// signature, an expired token, or a malformed token.
pub fn validate_token(token: &str) -> Result<TokenData<Claims>> {
    let decoding_key = get_decoding_key()?;

    let mut validation = Validation::new(JWT_ALGORITHM);
    validation.validate_exp = true;

    decode::<Claims>(token, decoding_key, &validation)
        .map_err(|e| anyhow!("Token validation failed: {e}"))
}

/// Extract the user id from a validated token.
///
/// Never trust user ids from unvalidated sources; this validates first.
pub fn get_user_id_from_token(token: &str) -> Result<Uuid> {
    let token_data = validate_token(token)?;
    Uuid::parse_str(&token_data.claims.sub)
        .map_err(|e| anyhow!("Invalid user id format in token: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-signing-secret-for-unit-tests";

    fn init_test_secret() {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            initialize_jwt_secret(TEST_SECRET).expect("Failed to initialize test secret");
        });
    }

    #[test]
    fn test_generate_token_shape() {
        init_test_secret();

        let token = generate_token(Uuid::new_v4()).unwrap();
        assert_eq!(token.matches('.').count(), 2); // JWT has 3 parts
    }

    #[test]
    fn test_validate_valid_token() {
        init_test_secret();

        let user_id = Uuid::new_v4();
        let token = generate_token(user_id).expect("Failed to generate token");

        let token_data = validate_token(&token).expect("token should validate");
        assert_eq!(token_data.claims.sub, user_id.to_string());
        assert!(token_data.claims.exp > token_data.claims.iat);
    }

    #[test]
    fn test_expiry_is_24_hours() {
        init_test_secret();

        let token = generate_token(Uuid::new_v4()).unwrap();
        let claims = validate_token(&token).unwrap().claims;
        assert_eq!(claims.exp - claims.iat, TOKEN_EXPIRY_HOURS * 3600);
    }

    #[test]
    fn test_validate_invalid_token() {
        init_test_secret();

        assert!(validate_token("invalid.token.here").is_err());
    }

    #[test]
    fn test_validate_tampered_token() {
        init_test_secret();

        let token = generate_token(Uuid::new_v4()).expect("Failed to generate token");
        let tampered = token.replace('a', "b");
        assert!(validate_token(&tampered).is_err());
    }

    #[test]
    fn test_extract_user_id() {
        init_test_secret();

        let user_id = Uuid::new_v4();
        let token = generate_token(user_id).expect("Failed to generate token");

        assert_eq!(get_user_id_from_token(&token).unwrap(), user_id);
    }
}
