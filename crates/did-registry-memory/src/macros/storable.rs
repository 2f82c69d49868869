///
/// CBOR-backed `Storable` impls for serde records.
///
/// Records are append-only: new fields go last and carry `#[serde(default)]`,
/// so bytes written by an older module still decode after an upgrade.
///

// impl_storable_unbounded
#[macro_export]
macro_rules! impl_storable_unbounded {
    ($ident:ident) => {
        impl $crate::cdk::structures::storable::Storable for $ident {
            const BOUND: $crate::cdk::structures::storable::Bound =
                $crate::cdk::structures::storable::Bound::Unbounded;

            fn to_bytes(&self) -> ::std::borrow::Cow<'_, [u8]> {
                ::std::borrow::Cow::Owned(
                    $crate::serialize::serialize(self).expect("storable record must encode"),
                )
            }

            fn into_bytes(self) -> Vec<u8> {
                $crate::serialize::serialize(&self).expect("storable record must encode")
            }

            fn from_bytes(bytes: ::std::borrow::Cow<'_, [u8]>) -> Self {
                $crate::serialize::deserialize(&bytes).expect("stored record must decode")
            }
        }
    };
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::cdk::structures::storable::{Bound, Storable};
    use serde::{Deserialize, Serialize};
    use std::borrow::Cow;

    #[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
    struct Note {
        text: String,
    }

    crate::impl_storable_unbounded!(Note);

    #[test]
    fn unbounded_record_decodes_from_owned_bytes() {
        let note = Note {
            text: "x".repeat(4096),
        };

        assert!(matches!(Note::BOUND, Bound::Unbounded));
        assert_eq!(Note::from_bytes(Cow::Owned(note.clone().into_bytes())), note);
    }
}
