use cosmwasm_std::{Env, MessageInfo, Response};
use cw2::set_contract_version;

use crate::authorization::registry::AuthorizationRegistry;
use crate::core::msg::InitMsg;
use crate::core::state::{StateV1, STATE_V1};
use crate::core::types::genesis_grant::GenesisState;
use crate::service::genesis::import_genesis;
use crate::util::aliases::{DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::{check_funds_are_empty, validate_address};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The main functionality executed when the smart contract is first instantiated.  Imports any
/// genesis grants, then creates the internal contract [StateV1](crate::core::state::StateV1)
/// value and records the contract version.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `_env` An environment object provided by the cosmwasm framework.  Genesis grants are imported
/// regardless of the block time, so it goes unused.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
/// * `msg` A custom instantiation message defined by this contract for creating the initial
/// configuration used by the contract.
pub fn init_contract(
    deps: DepsMutC,
    _env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let admin = match &msg.admin {
        Some(admin) => validate_address(deps.api, admin)?,
        None => info.sender,
    };
    let genesis = GenesisState {
        authorization: msg.genesis,
    };
    import_genesis(
        deps.storage,
        deps.api,
        &AuthorizationRegistry::default(),
        &genesis,
    )?;
    let state = StateV1::new(admin, msg.default_prune_limit);
    STATE_V1.save(deps.storage, &state)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    deps.api.debug(&format!(
        "authz: instantiated with {} genesis grant(s)",
        genesis.authorization.len()
    ));
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::InstantiateContract)
                .set_new_value(genesis.authorization.len()),
        )
        .to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::{mock_dependencies, mock_info};
    use cosmwasm_std::{coin, Addr};
    use cw2::get_contract_version;

    use crate::core::error::ContractError;
    use crate::core::state::STATE_V1;
    use crate::core::types::genesis_grant::GenesisGrant;
    use crate::query::query_export_genesis::export_genesis_state;
    use crate::testutil::test_constants::{
        DEFAULT_ADMIN_ADDRESS, DEFAULT_GRANTEE_ADDRESS, DEFAULT_GRANTER_ADDRESS,
    };
    use crate::testutil::test_utilities::{
        default_send_authorization, single_attribute_for_key, test_instantiate, InstArgs,
    };
    use crate::util::constants::{AUTHZ_EVENT_TYPE_KEY, DEFAULT_PRUNE_LIMIT, NEW_VALUE_KEY};
    use crate::util::event_attributes::EventType;

    use super::{CONTRACT_NAME, CONTRACT_VERSION};

    #[test]
    fn test_valid_default_init() {
        let mut deps = mock_dependencies();
        let response = test_instantiate(deps.as_mut(), InstArgs::default())
            .expect("the default instantiate should produce a response without error");
        assert!(
            response.messages.is_empty(),
            "instantiation should not emit messages"
        );
        assert_eq!(
            EventType::InstantiateContract.event_name().as_str(),
            single_attribute_for_key(&response, AUTHZ_EVENT_TYPE_KEY),
            "the proper event type should be emitted",
        );
        assert_eq!(
            "0",
            single_attribute_for_key(&response, NEW_VALUE_KEY),
            "no genesis grants should be reported",
        );
        let state = STATE_V1
            .load(deps.as_ref().storage)
            .expect("state should be stored after instantiation");
        assert_eq!(Addr::unchecked(DEFAULT_ADMIN_ADDRESS), state.admin);
        assert_eq!(DEFAULT_PRUNE_LIMIT, state.default_prune_limit);
        let version = get_contract_version(deps.as_ref().storage)
            .expect("version info should be stored after instantiation");
        assert_eq!(CONTRACT_NAME, version.contract);
        assert_eq!(CONTRACT_VERSION, version.version);
    }

    #[test]
    fn test_valid_init_with_genesis_and_explicit_admin() {
        let mut deps = mock_dependencies();
        let genesis = vec![GenesisGrant::new(
            DEFAULT_GRANTER_ADDRESS,
            DEFAULT_GRANTEE_ADDRESS,
            default_send_authorization(),
            "2030-01-01T00:00:00Z",
        )];
        test_instantiate(
            deps.as_mut(),
            InstArgs {
                admin: Some("someone-else".to_string()),
                default_prune_limit: Some(7),
                genesis: genesis.clone(),
                ..Default::default()
            },
        )
        .expect("instantiation with genesis grants should succeed");
        let state = STATE_V1.load(deps.as_ref().storage).unwrap();
        assert_eq!(Addr::unchecked("someone-else"), state.admin);
        assert_eq!(7, state.default_prune_limit);
        assert_eq!(
            genesis,
            export_genesis_state(&deps.as_ref())
                .expect("export should succeed")
                .authorization,
            "the exported grants should match the genesis input",
        );
    }

    #[test]
    fn test_invalid_genesis_grant_fails_instantiation() {
        let mut deps = mock_dependencies();
        let error = test_instantiate(
            deps.as_mut(),
            InstArgs {
                genesis: vec![GenesisGrant::new(
                    DEFAULT_GRANTER_ADDRESS,
                    DEFAULT_GRANTER_ADDRESS,
                    default_send_authorization(),
                    "2030-01-01T00:00:00Z",
                )],
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidRequest { .. }),
            "unexpected error encountered: {:?}",
            error,
        );
        assert!(
            STATE_V1.may_load(deps.as_ref().storage).unwrap().is_none(),
            "no state should be stored for a failed instantiation",
        );
    }

    #[test]
    fn test_invalid_init_contract_including_funds() {
        let mut deps = mock_dependencies();
        let error = test_instantiate(
            deps.as_mut(),
            InstArgs {
                info: mock_info(DEFAULT_ADMIN_ADDRESS, &[coin(100, "stake")]),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidFunds(_)),
            "the responding error should indicate invalid funds, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_invalid_init_msg_fails_before_import() {
        let mut deps = mock_dependencies();
        let error = test_instantiate(
            deps.as_mut(),
            InstArgs {
                default_prune_limit: Some(0),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidMessageFields { .. }),
            "the responding error should indicate that the InitMsg was badly formatted, but got: {:?}",
            error,
        );
    }
}
