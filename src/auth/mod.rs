//! Session gate plumbing.
//!
//! This module obtains an identity from Google Identity Services and holds
//! it for the rest of the application.
//!
//! ## Structure
//!
//! - `claims`: credential decoding into displayable identity claims
//! - `gsi`: provider script loading and browser interop
//! - `session`: the single owned state cell and its two actions
//!
//! ## Sign-in Flow
//!
//! 1. The gate injects the provider script → `gsi::ProviderScript`
//! 2. Script load completes → provider initialized, button rendered
//! 3. Provider invokes the credential callback → `claims::decode_credential`
//! 4. Decoded claims are dispatched into the session cell → authenticated view
//! 5. Logout clears the cell and disables the provider's auto sign-in

pub mod claims;
pub mod gsi;
pub mod session;

// Re-export the types the components work with
pub use claims::{decode_credential, IdentityClaims};
pub use session::{Session, SessionAction};
