//! Orchestration of registry operations.
//!
//! Each mutation runs the same sequence: argument validation, the
//! initialization check, existence, authorization, then the writes, the
//! journal entry and a log line. Nothing is written until every check has
//! passed, so a failed call leaves state exactly as it was.

pub mod lifecycle;
pub mod ownership;
pub mod registry;

pub mod prelude {
    pub use crate::{
        Error,
        access::guard,
        cdk::{candid::Principal, utils::time::now_nanos},
        ids::Did,
        log,
        log::Topic,
        ops::{journal::JournalOps, registry::RegistryOps, state::StateOps},
        storage::stable::journal::RegistryEventKind,
    };
}
