use cosmwasm_std::{Api, Storage};

use crate::authorization::registry::AuthorizationRegistry;
use crate::core::error::ContractError;
use crate::core::types::genesis_grant::{GenesisGrant, GenesisState};
use crate::core::types::grant::Grant;
use crate::store::grant_store::{export_all, import_all, GrantEntry};
use crate::util::aliases::AuthzResult;
use crate::util::contract_helpers::validate_address;
use crate::util::functions::rfc3339_to_timestamp;
use crate::util::traits::ResultExtensions;

/// Snapshots every stored grant, expired or not, in store key order.
pub fn export_genesis(storage: &dyn Storage, api: &dyn Api) -> AuthzResult<GenesisState> {
    let authorization = export_all(storage)?
        .iter()
        .map(|entry| GenesisGrant::from_record(&entry.to_record(api)?))
        .collect::<AuthzResult<Vec<GenesisGrant>>>()?;
    GenesisState { authorization }.to_ok()
}

/// Checks a single genesis grant and converts it into its stored form.  Expired grants are
/// accepted; they are removed by pruning like any other.
fn to_entry(
    api: &dyn Api,
    registry: &AuthorizationRegistry,
    index: usize,
    genesis_grant: &GenesisGrant,
) -> AuthzResult<GrantEntry> {
    let granter = validate_address(api, &genesis_grant.granter)?;
    let grantee = validate_address(api, &genesis_grant.grantee)?;
    if granter == grantee {
        return ContractError::invalid_request(format!(
            "genesis grant {}: granter [{}] cannot grant authorization to itself",
            index, granter,
        ))
        .to_err();
    }
    let expiration = rfc3339_to_timestamp(&genesis_grant.expiration)?;
    let capability = registry.decode(&genesis_grant.authorization)?;
    capability.validate_basic()?;
    GrantEntry {
        granter: api.addr_canonicalize(granter.as_str())?,
        grantee: api.addr_canonicalize(grantee.as_str())?,
        msg_type_url: capability.msg_type_url(),
        grant: Grant::new(genesis_grant.authorization.clone(), expiration),
    }
    .to_ok()
}

pub fn import_genesis(
    storage: &mut dyn Storage,
    api: &dyn Api,
    registry: &AuthorizationRegistry,
    genesis: &GenesisState,
) -> AuthzResult<()> {
    let entries = genesis
        .authorization
        .iter()
        .enumerate()
        .map(|(index, genesis_grant)| to_entry(api, registry, index, genesis_grant))
        .collect::<AuthzResult<Vec<GrantEntry>>>()?;
    import_all(storage, &entries)
}
