use crate::util::aliases::DepsMutC;

/// Lends the dependencies held by a service to callers that need storage or the api directly,
/// such as routes that validate addresses before handing work to a
/// [GrantKeeper](super::grant_keeper::GrantKeeper).
pub trait DepsManager<'a> {
    /// Runs the closure against the held dependencies and returns its result.
    fn use_deps<T, F>(&self, deps_fn: F) -> T
    where
        F: FnMut(&mut DepsMutC) -> T;

    /// Gives the held dependencies back to the caller, consuming the service.
    fn into_deps(self) -> DepsMutC<'a>;
}
