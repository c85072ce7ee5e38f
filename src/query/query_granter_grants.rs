use cosmwasm_std::{to_json_binary, Binary};

use crate::{
    core::msg::GrantsResponse,
    store::grant_store::iterate_all,
    util::{
        aliases::{AuthzResult, DepsC},
        contract_helpers::validate_address,
        traits::ResultExtensions,
    },
};

/// Every grant given by `granter`, across all grantees.  Grants are keyed by grantee first, so
/// this walks the whole grant store.
pub fn load_granter_grants<S: AsRef<str>>(deps: &DepsC, granter: S) -> AuthzResult<GrantsResponse> {
    let granter_raw = deps
        .api
        .addr_canonicalize(validate_address(deps.api, granter)?.as_str())?;
    let mut grants = vec![];
    for entry in iterate_all(deps.storage) {
        let entry = entry?;
        if entry.granter == granter_raw {
            grants.push(entry.to_record(deps.api)?);
        }
    }
    GrantsResponse { grants }.to_ok()
}

pub fn query_granter_grants<S: AsRef<str>>(deps: &DepsC, granter: S) -> AuthzResult<Binary> {
    to_json_binary(&load_granter_grants(deps, granter)?)?.to_ok()
}
