//! Card instance identification.
//!
//! Every card minted by the gacha carries a unique `InstanceId`. Two pulls of
//! the same catalog card are different instances with different ids.
//!
//! ## Usage
//!
//! ```
//! use gacha_duel::core::{InstanceId, InstanceIdAllocator};
//!
//! let mut ids = InstanceIdAllocator::new();
//! let a = ids.alloc();
//! let b = ids.alloc();
//!
//! assert_ne!(a, b);
//! assert_eq!(a, InstanceId(1));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u64);

impl InstanceId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for InstanceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic allocator for instance ids.
///
/// Ids start at 1 and are never reused by the same allocator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceIdAllocator {
    next: u64,
}

impl Default for InstanceIdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl InstanceIdAllocator {
    /// Create an allocator starting at id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh id.
    pub fn alloc(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u64 {
        self.next.saturating_sub(1)
    }
}
