use crate::{
    Error, ThisError,
    cdk::candid::Principal,
    config::Config,
    ids::{Did, DidError},
    ops::{OpsError, is_assignable},
    storage::stable::{
        controller::DidControllers,
        did::{DidEntries, DidRecord},
        state::RegistryState,
    },
};
use sha2::{Digest, Sha256};

///
/// RegistryOpsError
///

#[derive(Debug, ThisError)]
pub enum RegistryOpsError {
    #[error("did '{0}' is already registered")]
    AlreadyExists(Did),

    #[error("active did '{0}' has no controller entry")]
    ControllerMissing(Did),

    #[error("did is {len} bytes, configured max is {max}")]
    DidTooLong { len: usize, max: usize },

    #[error("document must not be empty")]
    DocumentEmpty,

    #[error("document is {len} bytes, configured max is {max}")]
    DocumentTooLarge { len: usize, max: usize },

    #[error("principal '{0}' cannot control a did")]
    InvalidController(Principal),

    #[error(transparent)]
    InvalidDid(#[from] DidError),

    #[error("did '{0}' not found")]
    NotFound(Did),
}

impl From<RegistryOpsError> for Error {
    fn from(err: RegistryOpsError) -> Self {
        OpsError::Registry(err).into()
    }
}

///
/// RegistryOps
///

pub struct RegistryOps;

impl RegistryOps {
    //
    // Validation
    //

    /// Parse a raw id against the hard bound and the configured limit.
    pub fn parse_did(raw: &str) -> Result<Did, Error> {
        let did = Did::try_new(raw).map_err(RegistryOpsError::from)?;
        let max = Config::get()?.registry.max_did_bytes as usize;

        let len = did.as_str().len();
        if len > max {
            return Err(RegistryOpsError::DidTooLong { len, max }.into());
        }

        Ok(did)
    }

    pub fn validate_document(document: &str) -> Result<(), Error> {
        if document.is_empty() {
            return Err(RegistryOpsError::DocumentEmpty.into());
        }

        let max = Config::get()?.registry.max_document_bytes as usize;
        if document.len() > max {
            return Err(RegistryOpsError::DocumentTooLarge {
                len: document.len(),
                max,
            }
            .into());
        }

        Ok(())
    }

    pub fn validate_controller(controller: Principal) -> Result<(), Error> {
        if !is_assignable(controller) {
            return Err(RegistryOpsError::InvalidController(controller).into());
        }

        Ok(())
    }

    //
    // State machine
    //

    /// Absent, or Deleted with re-creation allowed.
    pub fn ensure_creatable(did: &Did) -> Result<(), Error> {
        match DidEntries::get(did) {
            None => Ok(()),
            Some(record) if record.exists => Err(RegistryOpsError::AlreadyExists(did.clone()).into()),
            Some(_) => {
                if Config::get()?.registry.allow_recreate {
                    Ok(())
                } else {
                    Err(RegistryOpsError::AlreadyExists(did.clone()).into())
                }
            }
        }
    }

    /// The Active record for `did`, or `NotFound`.
    pub fn require_active(did: &Did) -> Result<DidRecord, Error> {
        DidEntries::get_active(did).ok_or_else(|| RegistryOpsError::NotFound(did.clone()).into())
    }

    /// Absent/Deleted → Active. Caller must have run `ensure_creatable`.
    pub fn create(did: Did, document: String, controller: Principal, now: u64) -> DidRecord {
        let record = DidRecord {
            digest: digest(&document),
            document,
            exists: true,
            created_at: now,
            updated_at: now,
            version: 1,
        };

        DidEntries::insert(did.clone(), record.clone());
        DidControllers::set(did, controller);
        RegistryState::update(|state| state.total_created += 1);

        record
    }

    /// Active → Active with a new document. Counters are unchanged.
    pub fn update(did: Did, current: DidRecord, document: String, now: u64) -> DidRecord {
        let record = DidRecord {
            digest: digest(&document),
            document,
            updated_at: now,
            version: current.version + 1,
            ..current
        };

        DidEntries::insert(did, record.clone());

        record
    }

    /// Active → Deleted. Leaves a tombstone and drops the controller entry.
    pub fn delete(did: Did, current: DidRecord, now: u64) {
        DidControllers::remove(&did);
        DidEntries::insert(did, current.tombstone(now));
        RegistryState::update(|state| state.total_deleted += 1);
    }

    pub fn set_controller(did: Did, controller: Principal) {
        DidControllers::set(did, controller);
    }

    //
    // Reads
    //

    /// Document of an Active did; `""` for Absent and Deleted.
    #[must_use]
    pub fn document(did: &Did) -> String {
        DidEntries::get_active(did)
            .map(|record| record.document)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn active_record(did: &Did) -> Option<(DidRecord, Option<Principal>)> {
        DidEntries::get_active(did).map(|record| (record, DidControllers::get(did)))
    }

    /// Controller of an Active did.
    #[must_use]
    pub fn controller(did: &Did) -> Option<Principal> {
        DidEntries::get_active(did).and_then(|_| DidControllers::get(did))
    }

    #[must_use]
    pub fn list_active(offset: u64, limit: u64) -> Vec<Did> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        DidControllers::keys(offset, limit)
    }
}

fn digest(document: &str) -> Vec<u8> {
    Sha256::digest(document.as_bytes()).to_vec()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::ConfigModel, ops::state::StateOps};

    fn did(s: &str) -> Did {
        Did::try_new(s).unwrap()
    }

    fn p(id: u8) -> Principal {
        Principal::from_slice(&[id; 29])
    }

    #[test]
    fn parse_did_applies_configured_limit() {
        Config::reset_for_tests();
        Config::init_from_toml("[registry]\nmax_did_bytes = 8\n").unwrap();

        assert!(RegistryOps::parse_did("did:abcd").is_ok());
        assert!(matches!(
            RegistryOps::parse_did("did:abcde"),
            Err(Error::Ops(OpsError::Registry(RegistryOpsError::DidTooLong { len: 9, max: 8 })))
        ));
        assert!(matches!(
            RegistryOps::parse_did(""),
            Err(Error::Ops(OpsError::Registry(RegistryOpsError::InvalidDid(DidError::Empty))))
        ));
    }

    #[test]
    fn document_must_be_non_empty_and_bounded() {
        let _ = Config::init_for_tests();
        let max = ConfigModel::default().registry.max_document_bytes as usize;

        assert!(RegistryOps::validate_document("{}").is_ok());
        assert!(RegistryOps::validate_document(&"x".repeat(max)).is_ok());
        assert!(matches!(
            RegistryOps::validate_document(""),
            Err(Error::Ops(OpsError::Registry(RegistryOpsError::DocumentEmpty)))
        ));
        assert!(matches!(
            RegistryOps::validate_document(&"x".repeat(max + 1)),
            Err(Error::Ops(OpsError::Registry(RegistryOpsError::DocumentTooLarge { .. })))
        ));
    }

    #[test]
    fn create_update_delete_keeps_counters_consistent() {
        let id = did("did:test:life");

        RegistryOps::ensure_creatable(&id).unwrap();
        let created = RegistryOps::create(id.clone(), r#"{"v":1}"#.into(), p(1), 10);
        assert_eq!(created.version, 1);
        assert_eq!(created.digest.len(), 32);
        assert_eq!(RegistryOps::document(&id), r#"{"v":1}"#);
        assert_eq!(RegistryOps::controller(&id), Some(p(1)));

        let current = RegistryOps::require_active(&id).unwrap();
        let updated = RegistryOps::update(id.clone(), current, r#"{"v":2}"#.into(), 20);
        assert_eq!(updated.version, 2);
        assert_eq!(updated.created_at, 10);
        assert_eq!(updated.updated_at, 20);
        assert_ne!(updated.digest, created.digest);

        let current = RegistryOps::require_active(&id).unwrap();
        RegistryOps::delete(id.clone(), current, 30);

        assert_eq!(RegistryOps::document(&id), "");
        assert_eq!(RegistryOps::controller(&id), None);
        assert!(RegistryOps::active_record(&id).is_none());
        assert!(matches!(
            RegistryOps::require_active(&id),
            Err(Error::Ops(OpsError::Registry(RegistryOpsError::NotFound(_))))
        ));

        let state = StateOps::export();
        assert_eq!(state.total_created, 1);
        assert_eq!(state.total_deleted, 1);
        assert_eq!(state.active(), DidEntries::count_active());
    }

    #[test]
    fn active_did_is_not_creatable() {
        let id = did("did:test:dup");
        RegistryOps::create(id.clone(), "a".into(), p(1), 1);

        assert!(matches!(
            RegistryOps::ensure_creatable(&id),
            Err(Error::Ops(OpsError::Registry(RegistryOpsError::AlreadyExists(_))))
        ));
    }

    #[test]
    fn recreate_follows_config() {
        let id = did("did:test:again");
        let record = RegistryOps::create(id.clone(), "a".into(), p(1), 1);
        RegistryOps::delete(id.clone(), record, 2);

        Config::reset_for_tests();
        Config::init_from_toml("").unwrap();
        assert!(RegistryOps::ensure_creatable(&id).is_ok());

        Config::reset_for_tests();
        Config::init_from_toml("[registry]\nallow_recreate = false\n").unwrap();
        assert!(RegistryOps::ensure_creatable(&id).is_err());
    }

    #[test]
    fn list_active_pages_in_key_order() {
        for (i, name) in ["b", "a", "d", "c"].into_iter().enumerate() {
            RegistryOps::create(did(name), "x".into(), p(1), i as u64);
        }
        let record = RegistryOps::require_active(&did("c")).unwrap();
        RegistryOps::delete(did("c"), record, 9);

        assert_eq!(RegistryOps::list_active(0, 10), vec![did("a"), did("b"), did("d")]);
        assert_eq!(RegistryOps::list_active(2, 10), vec![did("d")]);
        assert!(RegistryOps::list_active(5, 10).is_empty());
    }

    #[test]
    fn list_active_skips_tombstones_of_large_documents() {
        let large = "x".repeat(Config::get().unwrap().registry.max_document_bytes as usize);

        for i in 0..20u64 {
            let id = did(&format!("did:test:{i:02}"));
            let record = RegistryOps::create(id.clone(), large.clone(), p(1), i);
            if i % 2 == 0 {
                RegistryOps::delete(id, record, i);
            }
        }

        assert_eq!(
            RegistryOps::list_active(5, 3),
            vec![did("did:test:11"), did("did:test:13"), did("did:test:15")]
        );
        assert_eq!(RegistryOps::list_active(0, 100).len() as u64, StateOps::export().active());
        assert!(RegistryOps::list_active(10, 100).is_empty());
    }

    #[test]
    fn list_active_reads_only_the_controller_map() {
        // an entry with no controller is never listed, an id with a
        // controller is listed without its record being read
        DidEntries::insert(
            did("did:test:orphan"),
            DidRecord {
                document: "{}".into(),
                exists: true,
                ..Default::default()
            },
        );
        DidControllers::set(did("did:test:bare"), p(1));

        assert_eq!(RegistryOps::list_active(0, 10), vec![did("did:test:bare")]);
    }

    #[test]
    fn management_and_anonymous_cannot_control() {
        assert!(RegistryOps::validate_controller(p(1)).is_ok());
        assert!(RegistryOps::validate_controller(Principal::anonymous()).is_err());
        assert!(RegistryOps::validate_controller(Principal::management_canister()).is_err());
    }
}
