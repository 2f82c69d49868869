//!
//! Identifier types shared by storage, ops and the public DTOs.
//!

use crate::{
    ThisError,
    cdk::structures::{Storable, storable::Bound},
};
use candid::CandidType;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Hard upper bound on a stored DID key. The stable map's key bound is part
/// of the storage layout, so this must never shrink.
pub const DID_MAX_BYTES: u32 = 256;

///
/// DidError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum DidError {
    #[error("did must not be empty")]
    Empty,

    #[error("did must not have leading or trailing whitespace")]
    Whitespace,

    #[error("did is {len} bytes, max is {max}")]
    TooLong { len: usize, max: usize },
}

///
/// Did
/// Registry key. Opaque to the registry apart from the length and
/// whitespace checks done at construction.
///

#[derive(
    CandidType, Clone, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct Did(String);

impl Did {
    pub fn try_new(s: impl Into<String>) -> Result<Self, DidError> {
        let s: String = s.into();

        if s.is_empty() {
            return Err(DidError::Empty);
        }
        if s.trim() != s {
            return Err(DidError::Whitespace);
        }
        if s.len() > DID_MAX_BYTES as usize {
            return Err(DidError::TooLong {
                len: s.len(),
                max: DID_MAX_BYTES as usize,
            });
        }

        Ok(Self(s))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Did> for String {
    fn from(did: Did) -> Self {
        did.0
    }
}

impl Storable for Did {
    const BOUND: Bound = Bound::Bounded {
        max_size: DID_MAX_BYTES,
        is_fixed_size: false,
    };

    fn to_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.0.as_bytes())
    }

    fn into_bytes(self) -> Vec<u8> {
        self.0.into_bytes()
    }

    fn from_bytes(bytes: Cow<[u8]>) -> Self {
        let s = std::str::from_utf8(bytes.as_ref())
            .expect("stored did is not valid UTF-8")
            .to_string();

        Self(s)
    }
}

///
/// TESTS
///
