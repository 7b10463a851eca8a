//! Identity token codec and resolver.
//!
//! # Responsibility
//! - Issue signed, time-bounded identity assertions as opaque strings.
//! - Verify signature and expiry, then extract trusted claims.
//! - Provide the single resolver every protected operation must use.
//!
//! # Invariants
//! - `resolve` never reads a claim before the signature and expiry have
//!   been checked in the same decode call.
//! - A missing or empty credential is `BadToken("Tokenless")`.
//! - A verified token with an absent or blank claim is
//!   `BadToken("Token is bad")`.

use crate::config::TokenConfig;
use crate::error::{AppError, AppResult};
use crate::model::identity::Identity;
use crate::model::user::{Role, UserId};
use jsonwebtoken::{
    decode, encode, get_current_timestamp, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

/// Claims embedded in every token issued by this core.
///
/// Wire names follow the original deployment: the subject carries the
/// account email, the audience carries the role text, and the numeric
/// user id travels as `userId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the account email.
    pub sub: String,
    /// Audience — the role text (`USER`/`ADMIN`).
    pub aud: String,
    /// Issuer, fixed by configuration.
    pub iss: String,
    /// Numeric user id (matches `users.user_id`).
    #[serde(rename = "userId")]
    pub user_id: UserId,
    /// Absolute expiry (unix timestamp, seconds).
    pub exp: i64,
    /// Issued-at (unix timestamp, seconds).
    pub iat: i64,
}

/// Signed token codec bound to one `TokenConfig`.
#[derive(Clone)]
pub struct TokenCodec {
    config: TokenConfig,
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TokenCodec {
    /// Builds a codec from the provided signing configuration.
    ///
    /// # Errors
    /// - Returns a message when the configured algorithm is not in the
    ///   HMAC family (the codec holds a single shared secret).
    pub fn new(config: TokenConfig) -> Result<Self, String> {
        match config.algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {}
            other => {
                return Err(format!(
                    "unsupported token algorithm {other:?}; expected HS256|HS384|HS512"
                ));
            }
        }

        let encoding = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding = DecodingKey::from_secret(config.secret.as_bytes());
        Ok(Self {
            config,
            encoding,
            decoding,
        })
    }

    /// Issues a signed token for the given identity claims.
    ///
    /// Pure function of claims + configuration + current time; no storage
    /// side effects.
    pub fn issue(&self, user_id: UserId, email: &str, role: Role) -> AppResult<String> {
        let iat = get_current_timestamp() as i64;
        let claims = Claims {
            sub: email.to_string(),
            aud: role.as_str().to_string(),
            iss: self.config.issuer.clone(),
            user_id,
            exp: iat + self.config.expiry_secs,
            iat,
        };

        encode(
            &Header::new(self.config.algorithm),
            &claims,
            &self.encoding,
        )
        .map_err(|err| AppError::Internal(err.to_string()))
    }

    /// Checks signature validity and expiry without exposing claims.
    pub fn verify(&self, token: &str) -> AppResult<()> {
        self.decode_checked(token).map(|_| ())
    }

    /// Extracts claims WITHOUT verifying the signature or expiry.
    ///
    /// # Contract
    /// - Callers must run `verify` first, or use `resolve`, before
    ///   trusting any returned field. This split mirrors the wire-format
    ///   contract; the resolver itself never goes through this path.
    pub fn decode_unverified(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(self.config.algorithm);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|err| AppError::BadToken(err.to_string()))?;
        Ok(data.claims)
    }

    /// Resolves an optional raw credential into a trusted `Identity`.
    ///
    /// This is the single entry point for every protected operation:
    /// signature, expiry and issuer are checked atomically with claim
    /// extraction, then each claim is validated for presence.
    pub fn resolve(&self, token: Option<&str>) -> AppResult<Identity> {
        let token = match token {
            Some(value) if !value.is_empty() => value,
            _ => return Err(AppError::BadToken("Tokenless".to_string())),
        };

        let claims = self.decode_checked(token)?;

        let bad_token = || AppError::BadToken("Token is bad".to_string());
        let role = Role::parse(&claims.aud).ok_or_else(bad_token)?;
        if claims.sub.trim().is_empty() || claims.user_id <= 0 {
            return Err(bad_token());
        }

        Ok(Identity {
            user_id: claims.user_id,
            role,
            subject: claims.sub,
        })
    }

    fn decode_checked(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(self.config.algorithm);
        validation.leeway = 0;
        validation.validate_aud = false;
        validation.set_issuer(&[self.config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub", "aud"]);

        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|err| AppError::BadToken(err.to_string()))?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::TokenCodec;
    use crate::config::TokenConfig;
    use jsonwebtoken::Algorithm;

    #[test]
    fn codec_rejects_non_hmac_algorithms() {
        let config = TokenConfig::new("secret", "notevault", Algorithm::RS256, 3600);
        let err = TokenCodec::new(config).unwrap_err();
        assert!(err.contains("unsupported token algorithm"));
    }

    #[test]
    fn codec_accepts_hmac_family() {
        for algorithm in [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512] {
            let config = TokenConfig::new("secret", "notevault", algorithm, 3600);
            assert!(TokenCodec::new(config).is_ok());
        }
    }
}
