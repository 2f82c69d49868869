use crate::registry::{
    MemoryRange, MemoryRegistry, MemoryRegistryEntry, MemoryRegistryError, drain_pending_ranges,
    drain_pending_registrations,
};
use std::cell::Cell;

thread_local! {
    static INITIALIZED: Cell<bool> = const { Cell::new(false) };
}

///
/// MemoryRegistryInitSummary
///
/// Summary of registry state after initialization.
/// Intended for diagnostics and testing only.
///

#[derive(Debug)]
pub struct MemoryRegistryInitSummary {
    pub ranges: Vec<(String, MemoryRange)>,
    pub entries: Vec<(u8, MemoryRegistryEntry)>,
}

///
/// MemoryRegistryRuntime
///
/// Runtime controller responsible for initializing the memory registry.
///
/// This type performs mechanical coordination only:
/// - ordering
/// - conflict detection
/// - idempotent initialization
///
/// It encodes no registry semantics.
///
pub struct MemoryRegistryRuntime;

impl MemoryRegistryRuntime {
    /// Initialize the memory registry.
    ///
    /// - Optionally reserves an initial range for the caller.
    /// - Applies all deferred range reservations.
    /// - Applies all deferred ID registrations.
    ///
    /// Idempotent for the same initial range.
    pub fn init(
        initial_range: Option<(&str, u8, u8)>,
    ) -> Result<MemoryRegistryInitSummary, MemoryRegistryError> {
        if let Some((crate_name, start, end)) = initial_range {
            MemoryRegistry::reserve_range(crate_name, start, end)?;
        }

        Self::commit_pending()?;
        INITIALIZED.with(|flag| flag.set(true));

        Ok(MemoryRegistryInitSummary {
            ranges: MemoryRegistry::export_ranges(),
            entries: MemoryRegistry::export(),
        })
    }

    /// Apply registrations queued after `init` already ran.
    ///
    /// A structure touched lazily after startup still goes through the same
    /// range and duplicate checks.
    pub fn commit_pending_if_initialized() -> Result<(), MemoryRegistryError> {
        if INITIALIZED.with(Cell::get) {
            Self::commit_pending()?;
        }

        Ok(())
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_initialized() -> bool {
        INITIALIZED.with(Cell::get)
    }

    fn commit_pending() -> Result<(), MemoryRegistryError> {
        // ranges first, deterministically
        let mut ranges = drain_pending_ranges();
        ranges.sort_by_key(|(_, start, _)| *start);
        for (crate_name, start, end) in ranges {
            MemoryRegistry::reserve_range(&crate_name, start, end)?;
        }

        let mut regs = drain_pending_registrations();
        regs.sort_by_key(|(id, _, _)| *id);
        for (id, crate_name, label) in regs {
            MemoryRegistry::register(id, &crate_name, &label)?;
        }

        Ok(())
    }
}

#[cfg(test)]
pub fn reset_for_tests() {
    crate::registry::reset_for_tests();
    INITIALIZED.with(|flag| flag.set(false));
}

//
// TESTS
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{defer_register, defer_reserve_range};

    #[test]
    fn init_applies_initial_and_pending() {
        reset_for_tests();
        defer_reserve_range("crate_b", 10, 12);
        defer_register(10, "crate_b", "B10");

        let summary =
            MemoryRegistryRuntime::init(Some(("crate_a", 1, 3))).expect("init should succeed");

        assert_eq!(summary.ranges.len(), 2);
        assert_eq!(summary.entries.len(), 1);
        assert_eq!(summary.entries[0].0, 10);
        assert_eq!(summary.entries[0].1.label, "B10");
        assert!(MemoryRegistryRuntime::is_initialized());
    }

    #[test]
    fn init_is_idempotent_for_same_initial_range() {
        reset_for_tests();

        MemoryRegistryRuntime::init(Some(("crate_a", 1, 3))).expect("first init should succeed");
        MemoryRegistryRuntime::init(Some(("crate_a", 1, 3))).expect("second init should succeed");
    }

    #[test]
    fn init_returns_error_on_conflict() {
        reset_for_tests();
        defer_reserve_range("crate_a", 1, 3);
        defer_reserve_range("crate_b", 3, 4);

        let err = MemoryRegistryRuntime::init(None).unwrap_err();
        assert!(matches!(err, MemoryRegistryError::Overlap { .. }));
    }

    #[test]
    fn late_registration_is_checked_after_init() {
        reset_for_tests();
        MemoryRegistryRuntime::init(Some(("crate_a", 1, 3))).unwrap();

        defer_register(2, "crate_a", "Late");
        MemoryRegistryRuntime::commit_pending_if_initialized().unwrap();
        assert_eq!(MemoryRegistry::export().len(), 1);

        defer_register(2, "crate_a", "Clash");
        let err = MemoryRegistryRuntime::commit_pending_if_initialized().unwrap_err();
        assert!(matches!(err, MemoryRegistryError::DuplicateId(2)));
    }

    #[test]
    fn pending_is_left_alone_before_init() {
        reset_for_tests();

        defer_register(2, "crate_a", "Early");
        MemoryRegistryRuntime::commit_pending_if_initialized().unwrap();

        assert!(MemoryRegistry::export().is_empty());
    }
}
