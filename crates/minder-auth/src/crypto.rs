use super::*;
use minder_core::ID;

const TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(24 * 60 * 60);

/// JWT signing and verification keyed by the server secret.
///
/// Verification is a fixed gate sequence: structural parse, algorithm
/// check against the header before the signature is touched, signature
/// check, expiry check, then claim extraction. Each gate fails with its
/// own [`AuthError`] variant so logs can tell them apart.
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
    validation: jsonwebtoken::Validation,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
        validation.leeway = 0;
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
            validation,
        }
    }
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| String::default())
                .as_bytes(),
        )
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
    }
    /// Verifies a token and returns its subject.
    pub fn verify(&self, token: &str) -> Result<ID<Account>, AuthError> {
        match Self::algorithm(token)?.as_str() {
            "HS256" => {}
            _ => return Err(AuthError::AlgorithmMismatch),
        }
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims.subject())
            .map_err(Self::classify)
    }
    pub const fn duration() -> std::time::Duration {
        TOKEN_DURATION
    }
    /// Reads the `alg` field out of the unverified header. The library's
    /// algorithm enum cannot represent `none`, so the header is decoded
    /// by hand to reject such tokens as a mismatch rather than garbage.
    fn algorithm(token: &str) -> Result<String, AuthError> {
        use base64::Engine;
        token
            .split('.')
            .next()
            .and_then(|header| {
                base64::engine::general_purpose::URL_SAFE_NO_PAD
                    .decode(header)
                    .ok()
            })
            .and_then(|bytes| serde_json::from_slice::<serde_json::Value>(&bytes).ok())
            .and_then(|header| header.get("alg").and_then(|alg| alg.as_str()).map(String::from))
            .ok_or(AuthError::Malformed)
    }
    fn classify(error: jsonwebtoken::errors::Error) -> AuthError {
        use jsonwebtoken::errors::ErrorKind;
        match error.kind() {
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            ErrorKind::ExpiredSignature => AuthError::Expired,
            ErrorKind::MissingRequiredClaim(_) => AuthError::Expired,
            ErrorKind::InvalidAlgorithm => AuthError::AlgorithmMismatch,
            ErrorKind::Json(_) => AuthError::InvalidClaims,
            _ => AuthError::Malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    fn crypto() -> Crypto {
        Crypto::new(b"test-secret")
    }

    #[test]
    fn roundtrip_recovers_subject() {
        let crypto = crypto();
        let account = ID::<Account>::default();
        let claims = Claims::new(account, "a@b.c".to_string());
        let token = crypto.encode(&claims).unwrap();
        assert_eq!(crypto.verify(&token), Ok(account));
    }

    #[test]
    fn expired_token_is_rejected() {
        let crypto = crypto();
        let claims = Claims {
            sub: uuid::Uuid::now_v7(),
            eml: "a@b.c".to_string(),
            iat: 0,
            exp: 1,
        };
        let token = crypto.encode(&claims).unwrap();
        assert_eq!(crypto.verify(&token), Err(AuthError::Expired));
    }

    #[test]
    fn wrong_secret_fails_signature() {
        let claims = Claims::new(ID::default(), "a@b.c".to_string());
        let token = Crypto::new(b"other-secret").encode(&claims).unwrap();
        assert_eq!(crypto().verify(&token), Err(AuthError::InvalidSignature));
    }

    #[test]
    fn hs384_token_is_an_algorithm_mismatch() {
        let crypto = crypto();
        let claims = Claims::new(ID::default(), "a@b.c".to_string());
        let header = jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS384);
        let key = jsonwebtoken::EncodingKey::from_secret(b"test-secret");
        let token = jsonwebtoken::encode(&header, &claims, &key).unwrap();
        assert_eq!(crypto.verify(&token), Err(AuthError::AlgorithmMismatch));
    }

    #[test]
    fn unsigned_token_is_an_algorithm_mismatch() {
        let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let header = b64.encode(r#"{"alg":"none","typ":"JWT"}"#);
        let claims = Claims::new(ID::default(), "a@b.c".to_string());
        let payload = b64.encode(serde_json::to_vec(&claims).unwrap());
        let token = format!("{}.{}.", header, payload);
        assert_eq!(crypto().verify(&token), Err(AuthError::AlgorithmMismatch));
    }

    #[test]
    fn garbage_token_is_malformed() {
        assert_eq!(crypto().verify("garbage"), Err(AuthError::Malformed));
        assert_eq!(crypto().verify(""), Err(AuthError::Malformed));
    }

    #[test]
    fn mistyped_claims_are_invalid() {
        #[derive(serde::Serialize)]
        struct BadClaims {
            sub: i64,
            eml: String,
            iat: i64,
            exp: i64,
        }
        let crypto = crypto();
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        let bad = BadClaims {
            sub: 42,
            eml: "a@b.c".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token =
            jsonwebtoken::encode(&jsonwebtoken::Header::default(), &bad, &crypto.encoding).unwrap();
        assert_eq!(crypto.verify(&token), Err(AuthError::InvalidClaims));
    }
}
