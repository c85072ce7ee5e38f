use cosmwasm_std::{to_json_binary, Binary};

use crate::{
    core::msg::BalanceResponse,
    router::ledger::balances,
    util::{
        aliases::{AuthzResult, DepsC},
        contract_helpers::validate_address,
        traits::ResultExtensions,
    },
};

/// The funds the contract holds for `address`, one coin per denom.
pub fn load_balance<S: AsRef<str>>(deps: &DepsC, address: S) -> AuthzResult<BalanceResponse> {
    let holder = validate_address(deps.api, address)?;
    BalanceResponse {
        balances: balances(deps.storage, &holder)?,
        address: holder.into_string(),
    }
    .to_ok()
}

pub fn query_balance<S: AsRef<str>>(deps: &DepsC, address: S) -> AuthzResult<Binary> {
    to_json_binary(&load_balance(deps, address)?)?.to_ok()
}
