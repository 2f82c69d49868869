use did_registry_cdk::structures::{DefaultMemoryImpl, memory::MemoryManager};
use std::cell::RefCell;

// -----------------------------------------------------------------------------
// MEMORY_MANAGER
// -----------------------------------------------------------------------------
// Shared stable-memory manager. Stored as a thread-local so stable structures
// can grab virtual memory slots without global mutable state. On host targets
// `DefaultMemoryImpl` is a heap vector, which gives every test thread its own
// empty stable memory.
// -----------------------------------------------------------------------------

thread_local! {
    pub static MEMORY_MANAGER: RefCell<MemoryManager<DefaultMemoryImpl>> =
        RefCell::new(MemoryManager::init(DefaultMemoryImpl::default()));
}
