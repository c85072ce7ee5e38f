use std::cell::RefCell;

use crate::util::aliases::DepsMutC;

/// Holds a mutable reference to a DepsMutC, which allows it to be passed to sub-objects
/// relatively easily and then freed when required.
pub struct DepsContainer<'a> {
    deps_cell: RefCell<DepsMutC<'a>>,
}
impl<'a> DepsContainer<'a> {
    /// Constructs a new instance of the DepsContainer.
    /// # Example
    /// ```
    /// use cosmwasm_std::testing::mock_dependencies;
    /// use authz_smart_contract::util::deps_container::DepsContainer;
    ///
    /// let mut mock_deps = mock_dependencies();
    /// let container = DepsContainer::new(mock_deps.as_mut());
    /// ```
    pub fn new(deps: DepsMutC<'a>) -> Self {
        Self {
            deps_cell: RefCell::new(deps),
        }
    }

    /// Allows the encapsulated DepsMutC value to be used while the service owns it.
    /// Note: In order to release the owned DepsMutC, simply call self.get()
    pub fn use_deps<T, F>(&self, mut deps_fn: F) -> T
    where
        F: FnMut(&mut DepsMutC) -> T,
    {
        deps_fn(&mut self.deps_cell.borrow_mut())
    }

    /// Relinquishes the held DepsMutC to the caller
    pub fn get(self) -> DepsMutC<'a> {
        self.deps_cell.into_inner()
    }
}
