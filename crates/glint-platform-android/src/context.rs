//! Context-chain resolution for locating the owning activity.
//!
//! Android hands the embedding an arbitrary context reference that may be
//! the hosting activity itself or a stack of wrappers around it. Resolving
//! the chain back to the activity is a prerequisite for anything that needs
//! the screen-owning unit (window flags, lifecycle hooks, platform view
//! attachment).

/// The screen/window-owning unit of the host platform.
///
/// Opaque to this crate; the resolver only identifies it, callers decide
/// what to do with it.
pub trait Activity {}

/// Role of a node in a context chain.
///
/// Closed variant over the three context shapes the resolver distinguishes.
/// Dispatch happens on this tag, so implementors declare their role once
/// instead of being probed with runtime type tests.
pub enum ContextRole<'a> {
    /// The node is itself the owning activity.
    Activity(&'a dyn Activity),
    /// The node wraps exactly one base context.
    Wrapper(&'a dyn HostContext),
    /// Any other context (application-level and the like).
    Other,
}

/// A node in an externally owned context chain.
pub trait HostContext {
    /// Declares this node's role in the chain.
    fn role(&self) -> ContextRole<'_>;
}

/// Resolves the activity owning `context`, if any.
///
/// Walks wrapper nodes toward the root of the chain until it reaches an
/// activity. Chains that bottom out in some other context (or a `None`
/// input) resolve to `None`, which is an expected outcome rather than an
/// error. The chain is assumed finite and acyclic; a malformed cyclic
/// chain recurses without bound.
pub fn resolve_owning_activity<'a>(
    context: Option<&'a dyn HostContext>,
) -> Option<&'a dyn Activity> {
    match context?.role() {
        ContextRole::Activity(activity) => Some(activity),
        ContextRole::Wrapper(base) => resolve_owning_activity(Some(base)),
        ContextRole::Other => None,
    }
}
