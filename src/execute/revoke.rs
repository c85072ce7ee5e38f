use cosmwasm_std::{MessageInfo, Response};

use crate::{
    core::{error::ContractError, msg::ExecuteMsg},
    service::{deps_manager::DepsManager, grant_keeper::GrantKeeper},
    util::{
        aliases::{AuthzResult, EntryPointResponse},
        contract_helpers::{check_funds_are_empty, validate_address},
        event_attributes::{EventAttributes, EventType},
        traits::ResultExtensions,
    },
};

#[derive(Clone, PartialEq, Debug)]
pub struct RevokeV1 {
    pub grantee: String,
    pub msg_type_url: String,
}
impl RevokeV1 {
    pub fn new<S1: Into<String>, S2: Into<String>>(grantee: S1, msg_type_url: S2) -> Self {
        RevokeV1 {
            grantee: grantee.into(),
            msg_type_url: msg_type_url.into(),
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AuthzResult<RevokeV1> {
        match msg {
            ExecuteMsg::Revoke {
                grantee,
                msg_type_url,
            } => RevokeV1::new(grantee, msg_type_url).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::Revoke".to_string(),
            }
            .to_err(),
        }
    }
}

/// Removes a grant the sender previously gave.  Expired grants that have not yet been pruned can
/// still be revoked.
pub fn revoke<'a, K: GrantKeeper + DepsManager<'a>>(
    keeper: K,
    info: MessageInfo,
    msg: RevokeV1,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let grantee = keeper.use_deps(|deps| validate_address(deps.api, &msg.grantee))?;
    keeper.revoke(&info.sender, &grantee, &msg.msg_type_url)?;
    Response::new()
        .add_attributes(EventAttributes::for_grant_event(
            EventType::Revoke,
            &info.sender,
            &grantee,
            &msg.msg_type_url,
        ))
        .to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::{mock_dependencies, mock_env};

    use crate::{
        authorization::registry::AuthorizationRegistry,
        contract::execute,
        core::{error::ContractError, msg::ExecuteMsg, types::authz_msg::MSG_SEND_TYPE_URL},
        query::query_grants::load_grants,
        router::ledger_router::LedgerRouter,
        service::authz_service::AuthzService,
        testutil::{
            test_constants::{DEFAULT_GRANTEE_ADDRESS, DEFAULT_GRANTER_ADDRESS},
            test_utilities::{
                default_send_authorization, empty_mock_info, single_attribute_for_key,
                test_grant_success, test_instantiate_success, InstArgs,
            },
        },
        util::{
            constants::{AUTHZ_EVENT_TYPE_KEY, MSG_TYPE_URL_KEY},
            event_attributes::EventType,
        },
    };

    use super::{revoke, RevokeV1};

    #[test]
    fn test_valid_revoke_via_execute() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_grant_success(deps.as_mut(), default_send_authorization());
        let response = execute(
            deps.as_mut(),
            mock_env(),
            empty_mock_info(DEFAULT_GRANTER_ADDRESS),
            ExecuteMsg::Revoke {
                grantee: DEFAULT_GRANTEE_ADDRESS.to_string(),
                msg_type_url: MSG_SEND_TYPE_URL.to_string(),
            },
        )
        .expect("the revoke should succeed");
        assert_eq!(
            EventType::Revoke.event_name().as_str(),
            single_attribute_for_key(&response, AUTHZ_EVENT_TYPE_KEY),
        );
        assert_eq!(
            MSG_SEND_TYPE_URL,
            single_attribute_for_key(&response, MSG_TYPE_URL_KEY)
        );
        assert!(
            load_grants(
                &deps.as_ref(),
                DEFAULT_GRANTER_ADDRESS,
                DEFAULT_GRANTEE_ADDRESS,
                None
            )
            .unwrap()
            .grants
            .is_empty(),
            "the grant should be removed",
        );
    }

    #[test]
    fn test_revoke_twice_fails_with_not_found() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_grant_success(deps.as_mut(), default_send_authorization());
        let registry = AuthorizationRegistry::default();
        let router = LedgerRouter::default();
        revoke(
            AuthzService::new(deps.as_mut(), &registry, &router),
            empty_mock_info(DEFAULT_GRANTER_ADDRESS),
            RevokeV1::new(DEFAULT_GRANTEE_ADDRESS, MSG_SEND_TYPE_URL),
        )
        .expect("the first revoke should succeed");
        let error = revoke(
            AuthzService::new(deps.as_mut(), &registry, &router),
            empty_mock_info(DEFAULT_GRANTER_ADDRESS),
            RevokeV1::new(DEFAULT_GRANTEE_ADDRESS, MSG_SEND_TYPE_URL),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::NotFound { .. }),
            "unexpected error encountered: {:?}",
            error,
        );
    }

    #[test]
    fn test_revoke_only_reaches_the_senders_grants() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_grant_success(deps.as_mut(), default_send_authorization());
        let error = execute(
            deps.as_mut(),
            mock_env(),
            empty_mock_info("someone-else"),
            ExecuteMsg::Revoke {
                grantee: DEFAULT_GRANTEE_ADDRESS.to_string(),
                msg_type_url: MSG_SEND_TYPE_URL.to_string(),
            },
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::NotFound { .. }),
            "unexpected error encountered: {:?}",
            error,
        );
        assert_eq!(
            1,
            load_grants(
                &deps.as_ref(),
                DEFAULT_GRANTER_ADDRESS,
                DEFAULT_GRANTEE_ADDRESS,
                None
            )
            .unwrap()
            .grants
            .len(),
            "the granter's grant should be untouched",
        );
    }
}
