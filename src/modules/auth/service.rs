use crate::types::AuthContext;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

/// Claims carried by a bearer token: nothing beyond the subject (the user
/// id) and the registered issued-at/expiry pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug)]
pub enum Error {
    InvalidToken,
    ExpiredToken,
    FailedToIssueToken,
}

type Result<T> = std::result::Result<T, Error>;

pub fn issue_token(auth: &AuthContext, user_id: String) -> Result<String> {
    let now = Utc::now();
    let expires_at = now + Duration::minutes(auth.token_lifetime_minutes);

    let claims = Claims {
        sub: user_id,
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(auth.jwt_secret.as_bytes()),
    )
    .map_err(|err| {
        tracing::error!("Failed to issue an access token: {}", err);
        Error::FailedToIssueToken
    })
}

pub fn verify_token(auth: &AuthContext, token: &str) -> Result<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(auth.jwt_secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => Error::ExpiredToken,
        _ => Error::InvalidToken,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_context() -> AuthContext {
        AuthContext {
            jwt_secret: String::from("a-test-secret-that-is-long-enough"),
            token_lifetime_minutes: 60,
        }
    }

    #[test]
    fn issued_tokens_verify_and_carry_the_subject() {
        let auth = test_context();

        let token = issue_token(&auth, String::from("01J0USER")).unwrap();
        let claims = verify_token(&auth, &token).unwrap();

        assert_eq!(claims.sub, "01J0USER");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let auth = test_context();
        let other = AuthContext {
            jwt_secret: String::from("an-entirely-different-secret-value"),
            ..test_context()
        };

        let token = issue_token(&other, String::from("01J0USER")).unwrap();

        assert!(matches!(
            verify_token(&auth, &token),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        let auth = test_context();

        assert!(matches!(
            verify_token(&auth, "not-a-token"),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let auth = AuthContext {
            token_lifetime_minutes: -120,
            ..test_context()
        };

        let token = issue_token(&auth, String::from("01J0USER")).unwrap();

        assert!(matches!(
            verify_token(&auth, &token),
            Err(Error::ExpiredToken)
        ));
    }
}
