//! Per-instance identifiers.
//!
//! Each attached widget gets an [`InstanceId`] from a process-wide counter.
//! The id keeps generated element ids unique when several widgets share a
//! page and is written to the host's marker attribute. Nothing else is shared
//! between instances.

#[cfg(test)]
#[path = "instance_test.rs"]
mod instance_test;

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::consts::ID_PREFIX;

static NEXT_INSTANCE: AtomicU32 = AtomicU32::new(0);

/// Opaque, process-unique widget identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(u32);

impl InstanceId {
    /// Allocate the next identifier. Identifiers only ever increase.
    #[must_use]
    pub fn allocate() -> Self {
        Self(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
    }

    /// Element id for a generated part, e.g. `select-image-area__area3`.
    #[must_use]
    pub fn element_id(self, part: &str) -> String {
        format!("{ID_PREFIX}{part}{}", self.0)
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
