/// Authentication module
///
/// Token issuance and verification (HS256/RS256), password hashing,
/// and the platform role model.

mod claims;
mod codec;
mod password;
pub mod roles;
mod signing;

pub use claims::{Claims, TokenType};
pub use codec::{TokenCodec, TokenPair};
pub use password::{hash_password, verify_password};
pub use roles::Role;
pub use signing::{Algorithm, SigningMaterial};
