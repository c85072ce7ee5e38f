use crate::core::error::ContractError;
use cosmwasm_std::{Deps, DepsMut, Response};

/// Shortens the lengthy response type for contract entrypoints.
pub type EntryPointResponse = Result<Response, ContractError>;

/// All contract pathways with exceptional code should return a result that has a contract error
/// as its resulting error type.
pub type AuthzResult<T> = Result<T, ContractError>;

/// Shortened alias for the readonly dependencies handed to queries.
pub type DepsC<'a> = Deps<'a>;

/// Shortened alias for the mutable dependencies handed to execute routes.
pub type DepsMutC<'a> = DepsMut<'a>;
