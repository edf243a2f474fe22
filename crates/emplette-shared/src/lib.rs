//! # emplette-shared
//!
//! Domain vocabulary shared by the store and state crates: the closed
//! status/priority/filter enums, caller-side input validation, and
//! credential hashing.

pub mod credentials;
pub mod types;
pub mod validation;

mod error;

pub use error::{CredentialError, ParseError, ValidationError};
pub use types::{ListFilter, ListStatus, Priority};
