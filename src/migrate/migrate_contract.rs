use cosmwasm_std::{Response, Storage};
use cw2::{get_contract_version, set_contract_version};
use semver::Version;

use crate::{
    core::error::ContractError,
    instantiate::init_contract::{CONTRACT_NAME, CONTRACT_VERSION},
    util::{
        aliases::{AuthzResult, DepsMutC, EntryPointResponse},
        event_attributes::{EventAttributes, EventType},
        traits::ResultExtensions,
    },
};

pub fn migrate_contract(deps: DepsMutC) -> EntryPointResponse {
    // Ensure the migration is not attempting to revert to an old version or something crazier
    check_valid_migration_versioning(deps.storage)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::MigrateContract).set_new_value(CONTRACT_VERSION),
        )
        .to_ok()
}

/// Verifies that the migration is going to a proper version and the contract name of the new wasm matches
fn check_valid_migration_versioning(storage: &dyn Storage) -> AuthzResult<()> {
    let stored_version_info = get_contract_version(storage)?;
    if CONTRACT_NAME != stored_version_info.contract {
        return ContractError::InvalidContractName {
            current_contract: stored_version_info.contract,
            migration_contract: CONTRACT_NAME.to_string(),
        }
        .to_err();
    }
    let contract_version = CONTRACT_VERSION.parse::<Version>()?;
    // A stored version above the packaged one means this migration is a downgrade
    if stored_version_info.version.parse::<Version>()? > contract_version {
        return ContractError::InvalidContractVersion {
            current_version: stored_version_info.version,
            migration_version: CONTRACT_VERSION.to_string(),
        }
        .to_err();
    }
    Ok(())
}
