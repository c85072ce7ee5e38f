use cosmwasm_std::{to_json_binary, Binary};
use cw2::get_contract_version;

use crate::util::{
    aliases::{AuthzResult, DepsC},
    traits::ResultExtensions,
};

/// Pulls the version info for the contract out of the version store.
/// On a success, serializes the value to a cosmwasm Binary and responds with Ok.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
pub fn query_version(deps: &DepsC) -> AuthzResult<Binary> {
    to_json_binary(&get_contract_version(deps.storage)?)?.to_ok()
}
