///
/// Unified façade over the Internet Computer SDK
///
/// Re-exports the IC developer crates the registry depends on (`ic_cdk`,
/// `candid`, `ic_stable_structures`) under one namespace, so the core crate
/// and the canister import from a single place and SDK upgrades stay local
/// to this crate.
///
pub use candid;
pub use ic_cdk::{
    api, export_candid, init, post_upgrade, println, query, trap, update,
};

pub mod structures;
pub mod utils;
