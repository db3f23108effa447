/// JWT Token Codec
///
/// Builds and verifies compact tokens of the form
/// `base64url(header).base64url(payload).base64url(signature)`, unpadded.
/// The header is `{"alg":..,"typ":"JWT"}` with keys in alphabetical order and
/// the payload keeps the field order of [`Claims`].

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::claims::{Claims, TokenType};
use crate::auth::signing::{Algorithm, SigningMaterial};
use crate::configuration::JwtSettings;
use crate::error::TokenError;

/// Unpadded url-safe base64 that also accepts padded input
const BASE64URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Serialize)]
struct Header<'a> {
    alg: &'a str,
    typ: &'a str,
}

/// Access and refresh tokens issued together after authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// Token codec owning one immutable copy of the signing material
///
/// Cheap to share behind an `Arc`; every operation is `&self`.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    material: SigningMaterial,
    encoded_header: String,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

impl TokenCodec {
    /// # Errors
    /// `InvalidConfiguration` if either lifetime is not strictly positive
    pub fn new(
        material: SigningMaterial,
        access_lifetime: Duration,
        refresh_lifetime: Duration,
    ) -> Result<Self, TokenError> {
        if access_lifetime <= Duration::zero() || refresh_lifetime <= Duration::zero() {
            return Err(TokenError::InvalidConfiguration(
                "token lifetimes must be positive".to_string(),
            ));
        }

        let header = Header {
            alg: material.algorithm().as_str(),
            typ: "JWT",
        };
        let header_json = serde_json::to_vec(&header)
            .map_err(|e| TokenError::InvalidConfiguration(format!("header encoding: {}", e)))?;

        Ok(Self {
            encoded_header: BASE64URL.encode(header_json),
            material,
            access_lifetime,
            refresh_lifetime,
        })
    }

    /// Build a codec from configuration, loading key material once
    ///
    /// # Errors
    /// - `UnsupportedAlgorithm` for an unknown `algorithm`
    /// - `KeyLoadFailure` for a missing secret or unreadable RSA key files
    /// - `InvalidConfiguration` for non-positive or out-of-range lifetimes
    pub fn from_settings(settings: &JwtSettings) -> Result<Self, TokenError> {
        let material = SigningMaterial::from_settings(settings)?;
        let access_lifetime = Duration::try_minutes(settings.access_token_expire_minutes)
            .ok_or_else(|| {
                TokenError::InvalidConfiguration(format!(
                    "access_token_expire_minutes out of range: {}",
                    settings.access_token_expire_minutes
                ))
            })?;
        let refresh_lifetime = Duration::try_days(settings.refresh_token_expire_days)
            .ok_or_else(|| {
                TokenError::InvalidConfiguration(format!(
                    "refresh_token_expire_days out of range: {}",
                    settings.refresh_token_expire_days
                ))
            })?;
        let codec = Self::new(material, access_lifetime, refresh_lifetime)?;

        tracing::info!(
            algorithm = codec.algorithm().as_str(),
            access_minutes = settings.access_token_expire_minutes,
            refresh_days = settings.refresh_token_expire_days,
            "Token codec initialized"
        );
        Ok(codec)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.material.algorithm()
    }

    pub fn access_lifetime(&self) -> Duration {
        self.access_lifetime
    }

    pub fn refresh_lifetime(&self) -> Duration {
        self.refresh_lifetime
    }

    /// Create a signed token valid for `lifetime` from now
    pub fn create_token(
        &self,
        subject: &str,
        role: &str,
        token_type: TokenType,
        lifetime: Duration,
    ) -> Result<String, TokenError> {
        self.create_token_at(subject, role, token_type, lifetime, Utc::now().timestamp())
    }

    /// Create a signed token issued at the Unix timestamp `now`
    ///
    /// # Errors
    /// - `InvalidPayload` for an empty subject, a non-positive lifetime or an
    ///   expiry past the timestamp range
    /// - `SigningFailure` if the signature cannot be produced
    pub fn create_token_at(
        &self,
        subject: &str,
        role: &str,
        token_type: TokenType,
        lifetime: Duration,
        now: i64,
    ) -> Result<String, TokenError> {
        if subject.is_empty() {
            return Err(TokenError::InvalidPayload(
                "subject must not be empty".to_string(),
            ));
        }
        if lifetime <= Duration::zero() {
            return Err(TokenError::InvalidPayload(
                "lifetime must be positive".to_string(),
            ));
        }

        let claims = Claims::new(subject, role, token_type, now, lifetime.num_seconds())
            .ok_or_else(|| TokenError::InvalidPayload("expiry overflows".to_string()))?;
        let token = self.encode(&claims)?;

        tracing::debug!(
            subject = %claims.sub,
            token_type = %claims.token_type,
            exp = claims.exp,
            "Token issued"
        );
        Ok(token)
    }

    pub fn create_access_token(&self, subject: &str, role: &str) -> Result<String, TokenError> {
        self.create_token(subject, role, TokenType::Access, self.access_lifetime)
    }

    pub fn create_refresh_token(&self, subject: &str, role: &str) -> Result<String, TokenError> {
        self.create_token(subject, role, TokenType::Refresh, self.refresh_lifetime)
    }

    /// Issue an access/refresh pair for an authenticated identity
    pub fn issue_token_pair(&self, subject: &str, role: &str) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.create_access_token(subject, role)?,
            refresh_token: self.create_refresh_token(subject, role)?,
            token_type: "Bearer".to_string(),
            expires_in: self.access_lifetime.num_seconds(),
        })
    }

    /// Serialize and sign arbitrary claims
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let payload = serde_json::to_vec(claims)
            .map_err(|e| TokenError::SigningFailure(format!("payload encoding: {}", e)))?;
        let signing_input = format!("{}.{}", self.encoded_header, BASE64URL.encode(payload));
        let signature = self.material.sign(signing_input.as_bytes())?;

        Ok(format!("{}.{}", signing_input, BASE64URL.encode(signature)))
    }

    /// Verify a token and return its claims
    ///
    /// Does not look at the `type` claim; see [`TokenCodec::decode_access_token`]
    /// and [`TokenCodec::decode_refresh_token`].
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_at(token, Utc::now().timestamp())
    }

    /// Verify a token against the Unix timestamp `now`
    ///
    /// The signature is checked before the payload is even decoded, and the
    /// configured algorithm is used regardless of the token's header.
    pub fn decode_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return Err(TokenError::MalformedToken);
        }
        let (header, payload, signature) = (segments[0], segments[1], segments[2]);

        let signature = BASE64URL
            .decode(signature)
            .map_err(|_| TokenError::InvalidSignature)?;
        let signing_input = format!("{}.{}", header, payload);
        self.material.verify(signing_input.as_bytes(), &signature)?;

        let payload = BASE64URL
            .decode(payload)
            .map_err(|e| TokenError::InvalidPayload(format!("base64: {}", e)))?;
        let mut payload: serde_json::Value = serde_json::from_slice(&payload)
            .map_err(|e| TokenError::InvalidPayload(format!("json: {}", e)))?;
        let object = payload
            .as_object_mut()
            .ok_or_else(|| TokenError::InvalidPayload("payload is not an object".to_string()))?;

        if let Some(exp) = object.get("exp") {
            let exp = exp
                .as_f64()
                .ok_or_else(|| TokenError::InvalidPayload("exp is not numeric".to_string()))?;
            if now as f64 > exp {
                return Err(TokenError::TokenExpired);
            }
        }

        // Other issuers may write timestamps as floats, e.g. `1700000000.0`
        for key in ["iat", "exp"] {
            if let Some(value) = object.get_mut(key) {
                let float = match value {
                    serde_json::Value::Number(n) if n.is_f64() => n.as_f64(),
                    _ => None,
                };
                if let Some(float) = float {
                    *value = serde_json::Value::from(whole_seconds(key, float)?);
                }
            }
        }

        serde_json::from_value(payload)
            .map_err(|e| TokenError::InvalidPayload(format!("claims: {}", e)))
    }

    /// Decode and require an access token
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        expect_type(self.decode(token)?, TokenType::Access)
    }

    /// Decode and require a refresh token
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, TokenError> {
        expect_type(self.decode(token)?, TokenType::Refresh)
    }
}

fn whole_seconds(key: &str, value: f64) -> Result<i64, TokenError> {
    if value.fract() != 0.0 || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(TokenError::InvalidPayload(format!(
            "{} is not a whole number of seconds",
            key
        )));
    }
    Ok(value as i64)
}

fn expect_type(claims: Claims, expected: TokenType) -> Result<Claims, TokenError> {
    if claims.token_type != expected {
        return Err(TokenError::WrongTokenType {
            expected: expected.to_string(),
            found: claims.token_type.to_string(),
        });
    }
    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::signing::tests::rs256_material;

    const SECRET: &str = "test-secret-key-at-least-32-characters-long";
    const NOW: i64 = 1_700_000_000;

    fn hs256_codec() -> TokenCodec {
        hs256_codec_with_secret(SECRET)
    }

    fn hs256_codec_with_secret(secret: &str) -> TokenCodec {
        TokenCodec::new(
            SigningMaterial::hs256(secret).unwrap(),
            Duration::minutes(60),
            Duration::days(7),
        )
        .unwrap()
    }

    fn segments(token: &str) -> Vec<String> {
        token.split('.').map(str::to_string).collect()
    }

    /// Sign an arbitrary payload with the test secret
    fn signed_token(payload: &[u8]) -> String {
        let header = BASE64URL.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let signing_input = format!("{}.{}", header, BASE64URL.encode(payload));
        let signature = SigningMaterial::hs256(SECRET)
            .unwrap()
            .sign(signing_input.as_bytes())
            .unwrap();
        format!("{}.{}", signing_input, BASE64URL.encode(signature))
    }

    #[test]
    fn test_access_token_round_trip() {
        let codec = hs256_codec();
        let token = codec.create_access_token("user123", "org_admin").unwrap();
        let claims = codec.decode(&token).unwrap();

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.role, "org_admin");
        assert_eq!(claims.token_type, TokenType::Access);
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_refresh_token_uses_refresh_lifetime() {
        let codec = hs256_codec();
        let token = codec.create_refresh_token("user123", "viewer").unwrap();
        let claims = codec.decode(&token).unwrap();

        assert_eq!(claims.token_type, TokenType::Refresh);
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 3600);
    }

    #[test]
    fn test_wire_format() {
        let codec = hs256_codec();
        let token = codec
            .create_token_at("u1", "viewer", TokenType::Access, Duration::minutes(1), 100)
            .unwrap();
        let parts = segments(&token);

        assert_eq!(parts.len(), 3);
        assert!(!token.contains('='));
        assert_eq!(
            BASE64URL.decode(&parts[0]).unwrap(),
            br#"{"alg":"HS256","typ":"JWT"}"#.to_vec()
        );
        assert_eq!(
            BASE64URL.decode(&parts[1]).unwrap(),
            br#"{"sub":"u1","role":"viewer","type":"access","iat":100,"exp":160}"#.to_vec()
        );
    }

    #[test]
    fn test_hs256_is_deterministic() {
        let codec = hs256_codec();
        let first = codec
            .create_token_at("user123", "editor", TokenType::Access, Duration::minutes(60), NOW)
            .unwrap();
        let second = codec
            .create_token_at("user123", "editor", TokenType::Access, Duration::minutes(60), NOW)
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_expiry_window() {
        let codec = hs256_codec();
        let token = codec
            .create_token_at("user123", "org_admin", TokenType::Access, Duration::minutes(60), NOW)
            .unwrap();

        let claims = codec.decode_at(&token, NOW + 59 * 60).unwrap();
        assert_eq!(claims.role, "org_admin");

        assert_eq!(
            codec.decode_at(&token, NOW + 61 * 60),
            Err(TokenError::TokenExpired)
        );
    }

    #[test]
    fn test_expired_token_with_valid_signature() {
        let codec = hs256_codec();
        let token = codec
            .create_token_at("user123", "viewer", TokenType::Access, Duration::minutes(5), NOW - 3600)
            .unwrap();

        assert_eq!(codec.decode(&token), Err(TokenError::TokenExpired));
    }

    #[test]
    fn test_tokens_a_second_apart_both_decode() {
        let codec = hs256_codec();
        let first = codec
            .create_token_at("user123", "viewer", TokenType::Access, Duration::minutes(60), NOW)
            .unwrap();
        let second = codec
            .create_token_at("user123", "viewer", TokenType::Access, Duration::minutes(60), NOW + 1)
            .unwrap();

        assert_ne!(first, second);
        let a = codec.decode_at(&first, NOW + 10).unwrap();
        let b = codec.decode_at(&second, NOW + 10).unwrap();
        assert_eq!(b.iat - a.iat, 1);
        assert_eq!(b.exp - a.exp, 1);

        // The first expires one second before the second
        let boundary = a.exp + 1;
        assert_eq!(codec.decode_at(&first, boundary), Err(TokenError::TokenExpired));
        assert!(codec.decode_at(&second, boundary).is_ok());
    }

    #[test]
    fn test_malformed_token() {
        let codec = hs256_codec();

        for token in ["", "abc", "a.b", "a.b.c.d", "invalid"] {
            assert_eq!(codec.decode(token), Err(TokenError::MalformedToken), "{}", token);
        }
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let codec = hs256_codec();
        let token = codec.create_access_token("user123", "viewer").unwrap();
        let parts = segments(&token);

        // Re-encode the payload with an escalated role, keep the signature
        let forged = Claims {
            role: "super_admin".to_string(),
            ..codec.decode(&token).unwrap()
        };
        let forged_payload = BASE64URL.encode(serde_json::to_vec(&forged).unwrap());
        let tampered = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);
        assert_eq!(codec.decode(&tampered), Err(TokenError::InvalidSignature));

        // Flip every character of the payload segment in turn
        for i in 0..parts[1].len() {
            let mut payload: Vec<u8> = parts[1].as_bytes().to_vec();
            payload[i] = if payload[i] == b'A' { b'B' } else { b'A' };
            let payload = String::from_utf8(payload).unwrap();
            let tampered = format!("{}.{}.{}", parts[0], payload, parts[2]);
            assert_eq!(codec.decode(&tampered), Err(TokenError::InvalidSignature));
        }
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = hs256_codec().create_access_token("user123", "viewer").unwrap();
        let other = hs256_codec_with_secret("another-secret-key-at-least-32-characters");

        assert_eq!(other.decode(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_garbage_signature_segment() {
        let codec = hs256_codec();
        let token = codec.create_access_token("user123", "viewer").unwrap();
        let parts = segments(&token);

        let tampered = format!("{}.{}.!!not-base64!!", parts[0], parts[1]);
        assert_eq!(codec.decode(&tampered), Err(TokenError::InvalidSignature));

        let appended = format!("{}X", token);
        assert!(codec.decode(&appended).is_err());
    }

    #[test]
    fn test_signed_garbage_payload_is_invalid_payload() {
        let codec = hs256_codec();

        let payloads: [&[u8]; 4] = [
            b"not json",
            b"[1,2,3]",
            br#"{"sub":"u1","exp":"tomorrow"}"#,
            br#"{"sub":"u1","exp":4102444800}"#,
        ];
        for payload in payloads {
            let token = signed_token(payload);

            assert!(
                matches!(codec.decode(&token), Err(TokenError::InvalidPayload(_))),
                "payload {} should be rejected",
                String::from_utf8_lossy(payload)
            );
        }
    }

    #[test]
    fn test_float_timestamps() {
        let codec = hs256_codec();

        let token = signed_token(
            br#"{"sub":"u1","role":"viewer","type":"access","iat":1700000000.0,"exp":1700003600.0}"#,
        );
        let claims = codec.decode_at(&token, NOW + 60).unwrap();
        assert_eq!(claims.iat, NOW);
        assert_eq!(claims.exp, NOW + 3600);
        assert_eq!(codec.decode_at(&token, NOW + 3601), Err(TokenError::TokenExpired));

        let token = signed_token(
            br#"{"sub":"u1","role":"viewer","type":"access","iat":1700000000,"exp":1700003600.5}"#,
        );
        assert!(matches!(
            codec.decode_at(&token, NOW),
            Err(TokenError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_padded_segments_are_accepted() {
        let codec = hs256_codec();
        let token = codec.create_access_token("user1", "viewer").unwrap();
        let parts = segments(&token);

        // Padding on the signature segment only; the signing input is unchanged
        let padding = "=".repeat((4 - parts[2].len() % 4) % 4);
        let padded = format!("{}.{}.{}{}", parts[0], parts[1], parts[2], padding);
        assert!(codec.decode(&padded).is_ok());
    }

    #[test]
    fn test_decode_is_type_permissive() {
        let codec = hs256_codec();
        let refresh = codec.create_refresh_token("user123", "viewer").unwrap();

        assert_eq!(codec.decode(&refresh).unwrap().token_type, TokenType::Refresh);
    }

    #[test]
    fn test_typed_decoders() {
        let codec = hs256_codec();
        let access = codec.create_access_token("user123", "viewer").unwrap();
        let refresh = codec.create_refresh_token("user123", "viewer").unwrap();

        assert!(codec.decode_access_token(&access).is_ok());
        assert!(codec.decode_refresh_token(&refresh).is_ok());
        assert_eq!(
            codec.decode_access_token(&refresh),
            Err(TokenError::WrongTokenType {
                expected: "access".to_string(),
                found: "refresh".to_string(),
            })
        );
        assert!(codec.decode_refresh_token(&access).is_err());
    }

    #[test]
    fn test_token_pair() {
        let codec = hs256_codec();
        let pair = codec.issue_token_pair("user123", "editor").unwrap();

        assert_eq!(pair.token_type, "Bearer");
        assert_eq!(pair.expires_in, 3600);
        assert!(codec.decode_access_token(&pair.access_token).is_ok());
        assert!(codec.decode_refresh_token(&pair.refresh_token).is_ok());
    }

    #[test]
    fn test_invalid_inputs() {
        let codec = hs256_codec();

        assert!(matches!(
            codec.create_access_token("", "viewer"),
            Err(TokenError::InvalidPayload(_))
        ));
        assert!(matches!(
            codec.create_token("u1", "viewer", TokenType::Access, Duration::zero()),
            Err(TokenError::InvalidPayload(_))
        ));
        assert!(matches!(
            TokenCodec::new(
                SigningMaterial::hs256(SECRET).unwrap(),
                Duration::minutes(0),
                Duration::days(1),
            ),
            Err(TokenError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_expiry_overflow_is_invalid_payload() {
        let codec = hs256_codec();

        assert!(matches!(
            codec.create_token_at("u1", "viewer", TokenType::Access, Duration::days(30), i64::MAX - 10),
            Err(TokenError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_out_of_range_lifetimes_are_configuration_errors() {
        let settings = JwtSettings {
            secret: SECRET.to_string(),
            access_token_expire_minutes: i64::MAX / 2,
            ..JwtSettings::default()
        };
        assert!(matches!(
            TokenCodec::from_settings(&settings),
            Err(TokenError::InvalidConfiguration(_))
        ));

        let settings = JwtSettings {
            secret: SECRET.to_string(),
            refresh_token_expire_days: i64::MAX / 2,
            ..JwtSettings::default()
        };
        assert!(matches!(
            TokenCodec::from_settings(&settings),
            Err(TokenError::InvalidConfiguration(_))
        ));

        let settings = JwtSettings {
            secret: SECRET.to_string(),
            access_token_expire_minutes: -5,
            ..JwtSettings::default()
        };
        assert!(matches!(
            TokenCodec::from_settings(&settings),
            Err(TokenError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_interoperates_with_jsonwebtoken() {
        use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

        let codec = hs256_codec();
        let token = codec.create_access_token("user123", "org_admin").unwrap();

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &Validation::new(jsonwebtoken::Algorithm::HS256),
        )
        .expect("jsonwebtoken should accept our token");
        assert_eq!(decoded.claims.sub, "user123");

        let foreign = encode(
            &Header::default(),
            &decoded.claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert_eq!(codec.decode(&foreign).unwrap().role, "org_admin");
    }

    #[test]
    fn test_rs256_round_trip() {
        let codec = TokenCodec::new(rs256_material(), Duration::minutes(60), Duration::days(7))
            .unwrap();
        let token = codec.create_access_token("user123", "org_admin").unwrap();
        let parts = segments(&token);

        assert_eq!(codec.algorithm(), Algorithm::RS256);
        assert_eq!(
            BASE64URL.decode(&parts[0]).unwrap(),
            br#"{"alg":"RS256","typ":"JWT"}"#.to_vec()
        );

        let claims = codec.decode(&token).unwrap();
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.role, "org_admin");
    }

    #[test]
    fn test_rs256_tampering_and_foreign_keys() {
        let codec = TokenCodec::new(rs256_material(), Duration::minutes(60), Duration::days(7))
            .unwrap();
        let other = TokenCodec::new(rs256_material(), Duration::minutes(60), Duration::days(7))
            .unwrap();
        let token = codec.create_access_token("user123", "viewer").unwrap();
        let parts = segments(&token);

        assert_eq!(other.decode(&token), Err(TokenError::InvalidSignature));

        let forged = Claims {
            role: "super_admin".to_string(),
            ..codec.decode(&token).unwrap()
        };
        let forged_payload = BASE64URL.encode(serde_json::to_vec(&forged).unwrap());
        let tampered = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);
        assert_eq!(codec.decode(&tampered), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_hs256_token_rejected_by_rs256_codec() {
        let token = hs256_codec().create_access_token("user123", "viewer").unwrap();
        let rsa_codec = TokenCodec::new(rs256_material(), Duration::minutes(60), Duration::days(7))
            .unwrap();

        assert_eq!(rsa_codec.decode(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_from_settings() {
        let settings = JwtSettings {
            secret: SECRET.to_string(),
            access_token_expire_minutes: 15,
            refresh_token_expire_days: 2,
            ..JwtSettings::default()
        };
        let codec = TokenCodec::from_settings(&settings).unwrap();

        assert_eq!(codec.algorithm(), Algorithm::HS256);
        assert_eq!(codec.access_lifetime(), Duration::minutes(15));
        assert_eq!(codec.refresh_lifetime(), Duration::days(2));

        let settings = JwtSettings {
            algorithm: "none".to_string(),
            ..JwtSettings::default()
        };
        assert_eq!(
            TokenCodec::from_settings(&settings).unwrap_err(),
            TokenError::UnsupportedAlgorithm("none".to_string())
        );
    }
}
