use jsonwebtoken::{encode, get_current_timestamp, Algorithm, EncodingKey, Header};
use notevault_core::{AppError, Claims, Role, TokenCodec, TokenConfig};

const SECRET: &str = "test-secret";
const ISSUER: &str = "notevault-tests";

fn codec() -> TokenCodec {
    TokenCodec::new(TokenConfig::new(SECRET, ISSUER, Algorithm::HS256, 3600)).unwrap()
}

fn codec_with(secret: &str, issuer: &str, expiry_secs: i64) -> TokenCodec {
    TokenCodec::new(TokenConfig::new(secret, issuer, Algorithm::HS256, expiry_secs)).unwrap()
}

#[test]
fn missing_or_empty_credential_is_tokenless() {
    let codec = codec();

    for token in [None, Some("")] {
        let err = codec.resolve(token).unwrap_err();
        assert_eq!(err, AppError::BadToken("Tokenless".to_string()));
    }
}

#[test]
fn issued_token_resolves_to_the_same_identity() {
    let codec = codec();
    let token = codec.issue(42, "a@a.com", Role::Admin).unwrap();

    let identity = codec.resolve(Some(&token)).unwrap();
    assert_eq!(identity.user_id, 42);
    assert_eq!(identity.role, Role::Admin);
    assert_eq!(identity.subject, "a@a.com");
}

#[test]
fn verify_accepts_a_fresh_token() {
    let codec = codec();
    let token = codec.issue(1, "a@a.com", Role::User).unwrap();
    codec.verify(&token).unwrap();
}

#[test]
fn tampered_token_is_rejected_regardless_of_claim_content() {
    let codec = codec();
    let token = codec.issue(1, "a@a.com", Role::User).unwrap();

    // Flip the last signature character.
    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let err = codec.resolve(Some(&tampered)).unwrap_err();
    assert!(matches!(err, AppError::BadToken(_)));
    assert!(codec.verify(&tampered).is_err());
}

#[test]
fn token_signed_with_another_secret_is_rejected() {
    let token = codec_with("other-secret", ISSUER, 3600)
        .issue(1, "a@a.com", Role::User)
        .unwrap();

    let err = codec().resolve(Some(&token)).unwrap_err();
    assert!(matches!(err, AppError::BadToken(_)));
}

#[test]
fn expired_token_is_rejected() {
    let token = codec_with(SECRET, ISSUER, -60)
        .issue(1, "a@a.com", Role::User)
        .unwrap();

    let err = codec().resolve(Some(&token)).unwrap_err();
    assert!(matches!(err, AppError::BadToken(_)));
}

#[test]
fn token_from_another_issuer_is_rejected() {
    let token = codec_with(SECRET, "someone-else", 3600)
        .issue(1, "a@a.com", Role::User)
        .unwrap();

    let err = codec().resolve(Some(&token)).unwrap_err();
    assert!(matches!(err, AppError::BadToken(_)));
}

#[test]
fn verified_token_with_blank_or_absent_claims_is_bad() {
    let codec = codec();

    // Blank subject.
    let blank_subject = codec.issue(1, "", Role::User).unwrap();
    assert_eq!(
        codec.resolve(Some(&blank_subject)).unwrap_err(),
        AppError::BadToken("Token is bad".to_string())
    );

    // Falsy user id.
    let zero_id = codec.issue(0, "a@a.com", Role::User).unwrap();
    assert_eq!(
        codec.resolve(Some(&zero_id)).unwrap_err(),
        AppError::BadToken("Token is bad".to_string())
    );

    // Unknown role text, signed with the right secret.
    let unknown_role = sign_raw(Claims {
        sub: "a@a.com".to_string(),
        aud: "SUPERUSER".to_string(),
        iss: ISSUER.to_string(),
        user_id: 1,
        exp: get_current_timestamp() as i64 + 3600,
        iat: get_current_timestamp() as i64,
    });
    assert_eq!(
        codec.resolve(Some(&unknown_role)).unwrap_err(),
        AppError::BadToken("Token is bad".to_string())
    );
}

#[test]
fn decode_unverified_exposes_claims_without_trust() {
    let codec = codec();

    // Even an expired token decodes; that is exactly why callers must
    // verify first.
    let expired = codec_with(SECRET, ISSUER, -60)
        .issue(7, "a@a.com", Role::User)
        .unwrap();
    assert!(codec.verify(&expired).is_err());

    let claims = codec.decode_unverified(&expired).unwrap();
    assert_eq!(claims.user_id, 7);
    assert_eq!(claims.sub, "a@a.com");
    assert_eq!(claims.aud, "USER");
}

#[test]
fn decode_unverified_rejects_garbage_input() {
    let err = codec().decode_unverified("not-a-jwt").unwrap_err();
    assert!(matches!(err, AppError::BadToken(_)));
}

fn sign_raw(claims: Claims) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}
