use cosmwasm_std::Binary;

use crate::{
    core::types::genesis_grant::GenesisState,
    service::genesis::export_genesis,
    util::{
        aliases::{AuthzResult, DepsC},
        traits::ResultExtensions,
    },
};

/// Snapshots every stored grant, including expired ones that have not been pruned.  The result
/// can be handed back to instantiation as its genesis grants.
pub fn export_genesis_state(deps: &DepsC) -> AuthzResult<GenesisState> {
    export_genesis(deps.storage, deps.api)
}

/// Responds with the genesis JSON document itself, ready to be used as instantiation input.
pub fn query_export_genesis(deps: &DepsC) -> AuthzResult<Binary> {
    Binary::from(export_genesis_state(deps)?.to_json_string()?.into_bytes()).to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::from_json;
    use cosmwasm_std::testing::mock_dependencies;

    use crate::{
        core::types::genesis_grant::GenesisState,
        testutil::{
            test_constants::{DEFAULT_GRANTEE_ADDRESS, DEFAULT_GRANTER_ADDRESS},
            test_utilities::{
                default_expiration, default_send_authorization, test_grant_success,
                test_instantiate_success, InstArgs,
            },
        },
        util::functions::timestamp_to_rfc3339,
    };

    use super::{export_genesis_state, query_export_genesis};

    #[test]
    fn test_export_genesis_after_grant() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_grant_success(deps.as_mut(), default_send_authorization());
        let genesis = from_json::<GenesisState>(
            &query_export_genesis(&deps.as_ref()).expect("the export should succeed"),
        )
        .expect("the genesis should deserialize");
        assert_eq!(1, genesis.authorization.len());
        let exported = &genesis.authorization[0];
        assert_eq!(DEFAULT_GRANTER_ADDRESS, exported.granter);
        assert_eq!(DEFAULT_GRANTEE_ADDRESS, exported.grantee);
        assert_eq!(default_send_authorization(), exported.authorization);
        assert_eq!(
            timestamp_to_rfc3339(&default_expiration()).unwrap(),
            exported.expiration
        );
    }

    #[test]
    fn test_export_genesis_responds_with_the_json_document() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_grant_success(deps.as_mut(), default_send_authorization());
        let response = query_export_genesis(&deps.as_ref()).expect("the export should succeed");
        let document = export_genesis_state(&deps.as_ref())
            .expect("the state should load")
            .to_json_string()
            .expect("the state should render");
        assert_eq!(document.as_bytes(), response.as_slice());
    }
}
