//! Process configuration for token signing.
//!
//! # Responsibility
//! - Hold the signing secret, issuer, algorithm and expiry in one explicit
//!   struct constructed at process start and injected into the codec.
//!
//! # Invariants
//! - No module-level singletons; callers own the config instance.
//! - Only HMAC algorithms are accepted (single shared secret).

use jsonwebtoken::Algorithm;
use std::env;

/// Signing configuration for the identity token codec.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HMAC signing secret.
    pub secret: String,
    /// Value of the `iss` claim; also enforced at verification.
    pub issuer: String,
    /// Signing algorithm (HS256/HS384/HS512).
    pub algorithm: Algorithm,
    /// Token lifetime in seconds, offset from issuance time.
    pub expiry_secs: i64,
}

impl TokenConfig {
    /// Builds a config from explicit values.
    pub fn new(
        secret: impl Into<String>,
        issuer: impl Into<String>,
        algorithm: Algorithm,
        expiry_secs: i64,
    ) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
            algorithm,
            expiry_secs,
        }
    }

    /// Reads the config from environment variables:
    /// `SECRET_KEY`, `JWT_ISSUER`, `JWT_ALGO`, `JWT_EXPIRY_SECS`.
    ///
    /// # Errors
    /// - Returns a human-readable message when a variable is missing,
    ///   empty, or fails to parse.
    pub fn from_env() -> Result<Self, String> {
        let secret = required_var("SECRET_KEY")?;
        let issuer = required_var("JWT_ISSUER")?;

        let algo_text = required_var("JWT_ALGO")?;
        let algorithm = algo_text
            .parse::<Algorithm>()
            .map_err(|_| format!("unsupported JWT_ALGO `{algo_text}`"))?;

        let expiry_text = required_var("JWT_EXPIRY_SECS")?;
        let expiry_secs = expiry_text
            .parse::<i64>()
            .map_err(|_| format!("JWT_EXPIRY_SECS must be an integer, got `{expiry_text}`"))?;
        if expiry_secs <= 0 {
            return Err(format!(
                "JWT_EXPIRY_SECS must be positive, got `{expiry_secs}`"
            ));
        }

        Ok(Self {
            secret,
            issuer,
            algorithm,
            expiry_secs,
        })
    }
}

fn required_var(name: &str) -> Result<String, String> {
    let value = env::var(name).map_err(|_| format!("missing environment variable `{name}`"))?;
    if value.trim().is_empty() {
        return Err(format!("environment variable `{name}` is empty"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::TokenConfig;
    use jsonwebtoken::Algorithm;

    #[test]
    fn new_keeps_explicit_values() {
        let config = TokenConfig::new("secret", "notevault", Algorithm::HS256, 3600);
        assert_eq!(config.issuer, "notevault");
        assert_eq!(config.expiry_secs, 3600);
    }
}
