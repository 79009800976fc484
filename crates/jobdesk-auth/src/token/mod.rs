//! Session-token issuing and verification.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::{TokenDecoder, TokenError};
pub use encoder::{IssuedToken, TokenEncoder};
