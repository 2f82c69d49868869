/// Declare a stable-memory slot backed by the memory registry.
///
/// The macro enqueues a registration for later validation (during
/// `MemoryRegistryRuntime::init`) and immediately returns the
/// [`VirtualMemory`](crate::cdk::structures::memory::VirtualMemory)
/// handle so callers can wrap it in `Cell`, `BTreeMap`, and other structures.
/// Registrations are namespaced per crate via `CARGO_PKG_NAME`.
#[macro_export]
macro_rules! ic_memory {
    ($label:path, $id:expr) => {{
        // Force the compiler to resolve the type. This causes a compile-time error
        // if `$label` does not exist or is not a valid local type.
        let _type_check: Option<$label> = None;

        // Enqueue this memory ID registration for deferred validation.
        $crate::registry::defer_register($id, env!("CARGO_PKG_NAME"), stringify!($label));
        if let Err(err) = $crate::runtime::MemoryRegistryRuntime::commit_pending_if_initialized() {
            panic!("memory id {} registration failed: {err}", $id);
        }

        // Return the stable memory handle immediately for further wrapping.
        $crate::manager::MEMORY_MANAGER
            .with_borrow(|mgr| mgr.get($crate::cdk::structures::memory::MemoryId::new($id)))
    }};
}

/// Reserve a contiguous block of stable-memory IDs for the current crate.
///
/// Stores the range request for validation during runtime initialization.
/// The reservation shares the crate namespace used by [`macro@ic_memory`].
#[macro_export]
macro_rules! ic_memory_range {
    ($start:expr, $end:expr) => {{
        $crate::registry::defer_reserve_range(env!("CARGO_PKG_NAME"), $start, $end);
    }};
}
