//! Authorization rules.
//!
//! `auth` holds pure rule functions over `(caller, expected)`; `guard` reads
//! the expected principal from storage and applies the rule.

pub mod auth;
pub mod guard;

use crate::ThisError;

///
/// AccessError
///

#[derive(Debug, ThisError)]
pub enum AccessError {
    #[error(transparent)]
    Auth(#[from] auth::AuthError),
}
