//! Embed and validate `did_registry.toml`.
//!
//! Resolves the config path (`DID_REGISTRY_CONFIG_PATH`, falling back to the
//! file next to this manifest), fails the build if it does not validate, and
//! exports the absolute path for `include_str!`.

use std::{env, fs, path::PathBuf};

const CONFIG_ENV: &str = "DID_REGISTRY_CONFIG_PATH";
const CONFIG_FILE: &str = "did_registry.toml";

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set"));

    let cfg_path = env::var(CONFIG_ENV)
        .map_or_else(|_| manifest_dir.join(CONFIG_FILE), PathBuf::from);

    let cfg_str = fs::read_to_string(&cfg_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", cfg_path.display()));

    did_registry_core::validate_config(&cfg_str)
        .unwrap_or_else(|e| panic!("Invalid registry config {}: {e}", cfg_path.display()));

    let abs = cfg_path
        .canonicalize()
        .expect("canonicalize registry config path");

    println!("cargo:rerun-if-env-changed={CONFIG_ENV}");
    println!("cargo:rerun-if-changed={}", abs.display());
    println!("cargo:rustc-env={CONFIG_ENV}={}", abs.display());
}
