//! View-identifier allocation with a capability-gated fallback.
//!
//! Platform views created by the embedding need identifiers that do not
//! collide with ids already in use in the process. Platforms at API level
//! 17 and above allocate these from a process-wide counter; older
//! platforms cannot, and the caller's fallback id is reused verbatim.

use std::sync::atomic::{AtomicI32, Ordering};

/// Lowest API level whose platform allocates process-unique view ids.
const UNIQUE_VIEW_ID_MIN_API: u32 = 17;

/// Generated ids stay below this bound; ids with a non-zero top byte are
/// reserved for compiled resource identifiers.
const FIRST_RESERVED_VIEW_ID: i32 = 0x0100_0000;

/// Platform capabilities resolved once at startup.
///
/// The embedding shell resolves this snapshot from the running platform's
/// API level when the process starts and injects it wherever a
/// capability-gated decision is made; nothing re-queries the platform per
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCapabilities {
    /// Whether the platform allocates process-unique view identifiers.
    pub unique_view_ids: bool,
}

impl PlatformCapabilities {
    /// Resolves the capability snapshot for `api_level`.
    pub fn from_api_level(api_level: u32) -> Self {
        let capabilities = Self {
            unique_view_ids: api_level >= UNIQUE_VIEW_ID_MIN_API,
        };
        log::debug!(
            "Resolved capabilities for API level {api_level}: unique view ids = {}",
            capabilities.unique_view_ids
        );
        capabilities
    }
}

/// Source of process-unique view identifiers.
pub trait ViewIdAllocator {
    /// Returns an identifier not returned before within this process.
    fn allocate(&self) -> i32;
}

/// The process-wide view-id allocator.
///
/// Ids start at 1 and stay in `[1, 0x00FF_FFFF]`, wrapping back to 1
/// before reaching the range reserved for compiled resource identifiers.
#[derive(Debug)]
pub struct ProcessViewIdAllocator {
    next: AtomicI32,
}

static PROCESS_VIEW_IDS: ProcessViewIdAllocator = ProcessViewIdAllocator::new();

impl ProcessViewIdAllocator {
    const fn new() -> Self {
        Self {
            next: AtomicI32::new(1),
        }
    }

    /// The allocator shared by the whole process.
    pub fn process() -> &'static ProcessViewIdAllocator {
        &PROCESS_VIEW_IDS
    }
}

impl ViewIdAllocator for ProcessViewIdAllocator {
    fn allocate(&self) -> i32 {
        loop {
            let current = self.next.load(Ordering::Relaxed);
            let mut next = current + 1;
            if next >= FIRST_RESERVED_VIEW_ID {
                next = 1;
            }
            if self
                .next
                .compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed)
                .is_ok()
            {
                return current;
            }
        }
    }
}

/// Returns an identifier for a newly created view.
///
/// With `unique_view_ids` available the injected allocator supplies a
/// fresh process-unique id. Without it `fallback_id` is returned
/// unchanged, and collision avoidance is the caller's responsibility.
pub fn generate_view_id(
    capabilities: PlatformCapabilities,
    allocator: &dyn ViewIdAllocator,
    fallback_id: i32,
) -> i32 {
    if capabilities.unique_view_ids {
        allocator.allocate()
    } else {
        fallback_id
    }
}
