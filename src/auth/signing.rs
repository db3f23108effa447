/// Signing Material and Algorithm Dispatch
///
/// A token is signed either with a shared HMAC-SHA256 secret (HS256) or with
/// an RSA key pair using PKCS#1 v1.5 padding over a SHA-256 digest (RS256).
/// Key material is loaded once from configuration and never mutated.

use hmac::{Hmac, Mac};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::configuration::JwtSettings;
use crate::error::TokenError;

type HmacSha256 = Hmac<Sha256>;

/// Below this many bytes an HS256 secret is weaker than the digest.
const RECOMMENDED_SECRET_LENGTH: usize = 32;

/// Supported values of the `alg` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    HS256,
    RS256,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::RS256 => "RS256",
        }
    }
}

impl FromStr for Algorithm {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HS256" => Ok(Algorithm::HS256),
            "RS256" => Ok(Algorithm::RS256),
            other => Err(TokenError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Key material for exactly one algorithm
#[derive(Clone)]
pub enum SigningMaterial {
    Hs256 {
        secret: Vec<u8>,
    },
    Rs256 {
        signing_key: SigningKey<Sha256>,
        verifying_key: VerifyingKey<Sha256>,
    },
}

impl fmt::Debug for SigningMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print key bytes
        f.debug_struct("SigningMaterial")
            .field("algorithm", &self.algorithm().as_str())
            .finish_non_exhaustive()
    }
}

impl SigningMaterial {
    /// Build HS256 material from a shared secret
    ///
    /// # Errors
    /// `KeyLoadFailure` if the secret is empty
    pub fn hs256(secret: impl AsRef<[u8]>) -> Result<Self, TokenError> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(TokenError::KeyLoadFailure(
                "HS256 secret must not be empty".to_string(),
            ));
        }
        if secret.len() < RECOMMENDED_SECRET_LENGTH {
            tracing::warn!(
                length = secret.len(),
                recommended = RECOMMENDED_SECRET_LENGTH,
                "HS256 secret is shorter than recommended"
            );
        }
        Ok(SigningMaterial::Hs256 {
            secret: secret.to_vec(),
        })
    }

    /// Build RS256 material from an already parsed key pair
    ///
    /// # Errors
    /// `KeyLoadFailure` if the public key does not belong to the private key
    pub fn rs256(private_key: RsaPrivateKey, public_key: RsaPublicKey) -> Result<Self, TokenError> {
        if RsaPublicKey::from(&private_key) != public_key {
            return Err(TokenError::KeyLoadFailure(
                "RSA public key does not match private key".to_string(),
            ));
        }
        Ok(SigningMaterial::Rs256 {
            signing_key: SigningKey::<Sha256>::new(private_key),
            verifying_key: VerifyingKey::<Sha256>::new(public_key),
        })
    }

    /// Load RS256 material from PEM files (PKCS#8/SPKI or PKCS#1)
    pub fn rs256_from_pem_files(
        private_key_path: impl AsRef<Path>,
        public_key_path: impl AsRef<Path>,
    ) -> Result<Self, TokenError> {
        let private_key = load_private_key(private_key_path.as_ref())?;
        let public_key = load_public_key(public_key_path.as_ref())?;
        Self::rs256(private_key, public_key)
    }

    /// Select and load material according to the JWT settings
    ///
    /// # Errors
    /// - `UnsupportedAlgorithm` for anything but `HS256`/`RS256`
    /// - `KeyLoadFailure` for an empty secret or missing/unreadable key files
    pub fn from_settings(settings: &JwtSettings) -> Result<Self, TokenError> {
        match settings.algorithm.parse::<Algorithm>()? {
            Algorithm::HS256 => Self::hs256(settings.secret.as_bytes()),
            Algorithm::RS256 => {
                let private_key_path = settings.private_key_path.as_deref().ok_or_else(|| {
                    TokenError::KeyLoadFailure("RS256 requires private_key_path".to_string())
                })?;
                let public_key_path = settings.public_key_path.as_deref().ok_or_else(|| {
                    TokenError::KeyLoadFailure("RS256 requires public_key_path".to_string())
                })?;
                Self::rs256_from_pem_files(private_key_path, public_key_path)
            }
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            SigningMaterial::Hs256 { .. } => Algorithm::HS256,
            SigningMaterial::Rs256 { .. } => Algorithm::RS256,
        }
    }

    /// Sign the token's signing input (`header.payload`)
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>, TokenError> {
        match self {
            SigningMaterial::Hs256 { secret } => {
                let mut mac = HmacSha256::new_from_slice(secret)
                    .map_err(|e| TokenError::SigningFailure(format!("Invalid HMAC key: {}", e)))?;
                mac.update(message);
                Ok(mac.finalize().into_bytes().to_vec())
            }
            SigningMaterial::Rs256 { signing_key, .. } => signing_key
                .try_sign(message)
                .map(|signature| signature.to_vec())
                .map_err(|e| TokenError::SigningFailure(format!("RSA signing failed: {}", e))),
        }
    }

    /// Verify a signature over the signing input
    ///
    /// HMAC tags are compared in constant time by `Mac::verify_slice`; RSA
    /// verification is delegated to the `rsa` crate.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), TokenError> {
        match self {
            SigningMaterial::Hs256 { secret } => {
                let mut mac = HmacSha256::new_from_slice(secret)
                    .map_err(|_| TokenError::InvalidSignature)?;
                mac.update(message);
                mac.verify_slice(signature)
                    .map_err(|_| TokenError::InvalidSignature)
            }
            SigningMaterial::Rs256 { verifying_key, .. } => {
                let signature =
                    Signature::try_from(signature).map_err(|_| TokenError::InvalidSignature)?;
                verifying_key
                    .verify(message, &signature)
                    .map_err(|_| TokenError::InvalidSignature)
            }
        }
    }
}

fn read_pem(path: &Path, what: &str) -> Result<String, TokenError> {
    std::fs::read_to_string(path).map_err(|e| {
        TokenError::KeyLoadFailure(format!("cannot read {} {}: {}", what, path.display(), e))
    })
}

fn load_private_key(path: &Path) -> Result<RsaPrivateKey, TokenError> {
    let pem = read_pem(path, "private key")?;
    RsaPrivateKey::from_pkcs8_pem(&pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(&pem))
        .map_err(|e| {
            TokenError::KeyLoadFailure(format!(
                "invalid private key PEM in {}: {}",
                path.display(),
                e
            ))
        })
}

fn load_public_key(path: &Path) -> Result<RsaPublicKey, TokenError> {
    let pem = read_pem(path, "public key")?;
    RsaPublicKey::from_public_key_pem(&pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(&pem))
        .map_err(|e| {
            TokenError::KeyLoadFailure(format!(
                "invalid public key PEM in {}: {}",
                path.display(),
                e
            ))
        })
}
