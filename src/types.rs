use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What to do with a dependency that names a task which does not exist.
///
/// - `Reject` (default): the whole input is refused with
///   [`crate::errors::SchedagError::UnknownDependency`].
/// - `Ignore`: the reference is dropped from the dependency graph and the
///   task is treated as if it never listed it.
///
/// Exactly one policy applies to a given problem; the two are never mixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnknownDependencyPolicy {
    #[default]
    Reject,
    Ignore,
}

impl fmt::Display for UnknownDependencyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownDependencyPolicy::Reject => write!(f, "reject"),
            UnknownDependencyPolicy::Ignore => write!(f, "ignore"),
        }
    }
}
