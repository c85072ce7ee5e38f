use cosmwasm_std::{Env, MessageInfo, Response, Timestamp};

use crate::{
    core::{
        error::ContractError,
        msg::ExecuteMsg,
        types::{authorization_any::AuthorizationAny, block_context::BlockContext},
    },
    service::{deps_manager::DepsManager, grant_keeper::GrantKeeper},
    util::{
        aliases::{AuthzResult, EntryPointResponse},
        contract_helpers::{check_funds_are_empty, validate_address},
        event_attributes::{EventAttributes, EventType},
        functions::timestamp_to_rfc3339,
        traits::ResultExtensions,
    },
};

#[derive(Clone, PartialEq, Debug)]
pub struct GrantV1 {
    pub grantee: String,
    pub authorization: AuthorizationAny,
    pub expiration: Timestamp,
}
impl GrantV1 {
    pub fn new<S: Into<String>>(
        grantee: S,
        authorization: AuthorizationAny,
        expiration: Timestamp,
    ) -> Self {
        GrantV1 {
            grantee: grantee.into(),
            authorization,
            expiration,
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AuthzResult<GrantV1> {
        match msg {
            ExecuteMsg::Grant {
                grantee,
                authorization,
                expiration,
            } => GrantV1::new(grantee, authorization, expiration).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::Grant".to_string(),
            }
            .to_err(),
        }
    }
}

/// Stores a grant from the sender to the requested grantee.  The authorization's message type must
/// be one this contract can execute, otherwise the grant could never be used.
pub fn grant<'a, K: GrantKeeper + DepsManager<'a>>(
    keeper: K,
    env: Env,
    info: MessageInfo,
    msg: GrantV1,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let grantee = keeper.use_deps(|deps| validate_address(deps.api, &msg.grantee))?;
    let msg_type_url = keeper.msg_type_url_of(&msg.authorization)?;
    if !keeper.can_route(&msg_type_url) {
        return ContractError::invalid_request(format!(
            "messages of type [{}] cannot be executed by this contract",
            msg_type_url
        ))
        .to_err();
    }
    keeper.grant(
        &info.sender,
        &grantee,
        &msg.authorization,
        &msg.expiration,
        &BlockContext::from(&env),
    )?;
    Response::new()
        .add_attributes(
            EventAttributes::for_grant_event(EventType::Grant, &info.sender, &grantee, &msg_type_url)
                .set_new_value(timestamp_to_rfc3339(&msg.expiration)?),
        )
        .to_ok()
}
