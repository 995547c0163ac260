use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
};
use joblane_model::{Role, User, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token payload: the holder's identity and role, plus standard timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn user_id(&self) -> UserId {
        UserId::from(self.sub)
    }
}

pub fn generate_token(
    user: &User,
    key: &str,
    ttl_secs: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let exp = now + Duration::seconds(ttl_secs);

    let claims = Claims {
        sub: user.id.to_uuid(),
        role: user.role,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(key.as_ref()),
    )
}

pub fn validate_token(
    token: &str,
    key: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let validation = Validation::new(Algorithm::HS256);
    decode::<Claims>(token, &DecodingKey::from_secret(key.as_ref()), &validation)
        .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "test-signing-key";

    fn test_user(role: Role) -> User {
        User::new("Test".into(), "test@example.com".into(), role)
    }

    #[test]
    fn test_generate_and_validate_token() {
        let user = test_user(Role::Employer);
        let token = generate_token(&user, KEY, 3600).expect("Failed to generate token");

        let claims = validate_token(&token, KEY).expect("Failed to validate token");
        assert_eq!(claims.sub, user.id.to_uuid());
        assert_eq!(claims.role, Role::Employer);
    }

    #[test]
    fn test_expired_token() {
        let user = test_user(Role::Candidate);
        let now = Utc::now();

        let claims = Claims {
            sub: user.id.to_uuid(),
            role: user.role,
            exp: (now - Duration::seconds(100)).timestamp(), // Expired
            iat: (now - Duration::seconds(1000)).timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(KEY.as_ref()),
        )
        .unwrap();

        assert!(validate_token(&token, KEY).is_err());
    }

    #[test]
    fn test_wrong_key_is_rejected() {
        let user = test_user(Role::Admin);
        let token = generate_token(&user, KEY, 3600).unwrap();

        assert!(validate_token(&token, "some-other-key").is_err());
    }
}
