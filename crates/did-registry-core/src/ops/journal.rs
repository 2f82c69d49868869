use crate::{
    Error,
    cdk::candid::Principal,
    config::Config,
    ids::Did,
    log,
    log::Topic,
    storage::stable::{
        journal::{RegistryEventKind, RegistryEventRecord, RegistryJournal},
        state::RegistryState,
    },
};

///
/// JournalOps
///

pub struct JournalOps;

impl JournalOps {
    /// Append an event and apply retention.
    ///
    /// Does nothing when the journal is disabled (`max_entries = 0`); the
    /// sequence counter only moves for events that are actually stored.
    pub fn record(
        kind: RegistryEventKind,
        did: Option<&Did>,
        actor: Principal,
        target: Option<Principal>,
        now: u64,
    ) -> Result<(), Error> {
        let cfg = Config::get()?;
        if !cfg.journal.enabled() {
            return Ok(());
        }

        let seq = RegistryState::update(|state| {
            let seq = state.next_event_seq;
            state.next_event_seq += 1;

            seq
        });

        RegistryJournal::append(
            seq,
            RegistryEventRecord {
                kind,
                did: did.cloned(),
                actor,
                target,
                at: now,
            },
        );

        let trimmed = RegistryJournal::retain_newest(cfg.journal.max_entries);
        if trimmed > 0 {
            log!(Topic::Journal, Debug, "journal trimmed {trimmed} oldest entries");
        }

        Ok(())
    }

    /// Oldest-first page and the number of retained entries.
    #[must_use]
    pub fn page(offset: u64, limit: u64) -> (Vec<(u64, RegistryEventRecord)>, u64) {
        (RegistryJournal::page(offset, limit), RegistryJournal::len())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u8) -> Principal {
        Principal::from_slice(&[id; 29])
    }

    #[test]
    fn sequence_numbers_are_monotonic() {
        let _ = Config::init_for_tests();
        let did = Did::try_new("did:test:seq").unwrap();

        JournalOps::record(RegistryEventKind::DidCreated, Some(&did), p(1), None, 1).unwrap();
        JournalOps::record(RegistryEventKind::DidUpdated, Some(&did), p(1), None, 2).unwrap();

        let (page, total) = JournalOps::page(0, 10);
        assert_eq!(total, 2);
        assert_eq!(page[0].0, 0);
        assert_eq!(page[1].0, 1);
        assert_eq!(page[1].1.kind, RegistryEventKind::DidUpdated);
        assert_eq!(RegistryState::export().next_event_seq, 2);
    }

    #[test]
    fn retention_keeps_newest() {
        Config::reset_for_tests();
        Config::init_from_toml("[journal]\nmax_entries = 2\n").unwrap();

        for at in 0..5 {
            JournalOps::record(RegistryEventKind::OwnershipTransferred, None, p(1), Some(p(2)), at)
                .unwrap();
        }

        let (page, total) = JournalOps::page(0, 10);
        assert_eq!(total, 2);
        assert_eq!(page.iter().map(|(seq, _)| *seq).collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(page[1].1.target, Some(p(2)));
    }

    #[test]
    fn disabled_journal_stores_nothing() {
        Config::reset_for_tests();
        Config::init_from_toml("[journal]\nmax_entries = 0\n").unwrap();

        JournalOps::record(RegistryEventKind::Initialized, None, p(1), None, 1).unwrap();

        assert_eq!(JournalOps::page(0, 10).1, 0);
        assert_eq!(RegistryState::export().next_event_seq, 0);
    }
}
