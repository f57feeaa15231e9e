//! Platform abstraction for Android embeddings.

use crate::view_id::{generate_view_id, PlatformCapabilities, ProcessViewIdAllocator};

/// Platform front configured once by the embedding shell.
///
/// Bundles the capability snapshot resolved at startup with the
/// process-wide id allocator so callers hold a single handle.
#[derive(Debug, Clone, Copy)]
pub struct AndroidPlatform {
    capabilities: PlatformCapabilities,
}

impl AndroidPlatform {
    /// Creates the platform front for the given API level.
    pub fn new(api_level: u32) -> Self {
        Self {
            capabilities: PlatformCapabilities::from_api_level(api_level),
        }
    }

    /// The capability snapshot resolved at construction.
    pub fn capabilities(&self) -> PlatformCapabilities {
        self.capabilities
    }

    /// Returns an identifier for a newly created view.
    ///
    /// Delegates to the process-wide allocator when the platform supports
    /// unique ids, otherwise returns `fallback_id` unchanged.
    pub fn generate_view_id(&self, fallback_id: i32) -> i32 {
        generate_view_id(
            self.capabilities,
            ProcessViewIdAllocator::process(),
            fallback_id,
        )
    }
}
