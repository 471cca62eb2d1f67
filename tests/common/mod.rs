#![allow(dead_code)]

use std::path::PathBuf;

pub use schedag_test_utils::init_tracing;

/// Path to a sample task file under `demos/`.
pub fn demo_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(name)
}
