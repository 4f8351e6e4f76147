//! Credential models: the redacted token secret and the cached credential bundle.

pub mod bundle;
pub mod secret;

pub use bundle::*;
pub use secret::*;
