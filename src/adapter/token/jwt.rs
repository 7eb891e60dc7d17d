use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::token::TokenService;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;

#[derive(Debug, Serialize, Deserialize)]
struct ClaimUser {
    id: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    user: ClaimUser,
}

/// HS256 tokens carrying only the user id. No expiry claim is embedded,
/// so verification must not demand one.
#[derive(Clone)]
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims = Default::default();
        validation
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: &Id<User>) -> AppResult<String> {
        let claims = Claims {
            user: ClaimUser {
                id: user_id.to_string(),
            },
        };
        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            warn!("Failed to sign token: {}", e);
            AppError::TokenError
        })
    }

    fn verify(&self, token: &str) -> AppResult<Id<User>> {
        let data =
            decode::<Claims>(token, &self.decoding_key, &Self::validation()).map_err(|_| AppError::InvalidToken)?;
        data.claims
            .user
            .id
            .try_into()
            .map_err(|_| AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issue_then_verify_round_trip() {
        let service = JwtTokenService::new(SECRET);
        let user_id: Id<User> = Id::generate();
        let token = service.issue(&user_id).unwrap();
        let verified = service.verify(&token).unwrap();
        assert_eq!(verified.value, user_id.value);
    }

    #[test]
    fn test_verify_garbage_token() {
        let service = JwtTokenService::new(SECRET);
        let result = service.verify("not.a.token");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let issuer = JwtTokenService::new(SECRET);
        let verifier = JwtTokenService::new("another-secret");
        let token = issuer.issue(&Id::generate()).unwrap();
        let result = verifier.verify(&token);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_verify_tampered_token() {
        let service = JwtTokenService::new(SECRET);
        let token = service.issue(&Id::generate()).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        let result = service.verify(&tampered);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }
}
