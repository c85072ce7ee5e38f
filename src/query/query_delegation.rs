use cosmwasm_std::{to_json_binary, Binary};

use crate::{
    core::msg::DelegationResponse,
    router::ledger::delegations,
    util::{
        aliases::{AuthzResult, DepsC},
        contract_helpers::{validate_address, validate_validator_id},
        traits::ResultExtensions,
    },
};

/// The amounts `delegator` has bonded to `validator` through the contract's ledger.
pub fn load_delegation<S1: AsRef<str>, S2: AsRef<str>>(
    deps: &DepsC,
    delegator: S1,
    validator: S2,
) -> AuthzResult<DelegationResponse> {
    let delegator = validate_address(deps.api, delegator)?;
    let validator = validate_validator_id(validator)?;
    DelegationResponse {
        amount: delegations(deps.storage, &delegator, &validator)?,
        delegator: delegator.into_string(),
        validator,
    }
    .to_ok()
}

pub fn query_delegation<S1: AsRef<str>, S2: AsRef<str>>(
    deps: &DepsC,
    delegator: S1,
    validator: S2,
) -> AuthzResult<Binary> {
    to_json_binary(&load_delegation(deps, delegator, validator)?)?.to_ok()
}
