/// JWT Claims structure
///
/// Payload of a token: subject, role, token class and the registered
/// `iat`/`exp` timestamps. Field order here is the serialized key order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::auth::roles::Role;

/// Token class carried in the `type` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject (opaque user identifier)
    pub sub: String,
    /// Role string, validated by the caller
    pub role: String,
    /// Access or refresh
    #[serde(rename = "type")]
    pub token_type: TokenType,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims issued at `now` and valid for `lifetime_seconds`
    ///
    /// `None` when the expiry does not fit in an `i64` timestamp.
    pub fn new(
        subject: &str,
        role: &str,
        token_type: TokenType,
        now: i64,
        lifetime_seconds: i64,
    ) -> Option<Self> {
        Some(Self {
            sub: subject.to_string(),
            role: role.to_string(),
            token_type,
            iat: now,
            exp: now.checked_add(lifetime_seconds)?,
        })
    }

    /// Parse the role claim into a known role
    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }

    pub fn has_any_role(&self, allowed: &[Role]) -> bool {
        self.role().map_or(false, |role| allowed.contains(&role))
    }
}
