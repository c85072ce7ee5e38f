use cosmwasm_std::{to_json_binary, Env, MessageInfo, Response};

use crate::{
    core::{
        error::ContractError,
        msg::ExecuteMsg,
        types::{authz_msg::AuthzMsg, block_context::BlockContext, exec_result::ExecResponse},
    },
    service::grant_keeper::GrantKeeper,
    util::{
        aliases::{AuthzResult, EntryPointResponse},
        contract_helpers::check_funds_are_empty,
        event_attributes::{EventAttributes, EventType},
        traits::ResultExtensions,
    },
};

#[derive(Clone, PartialEq, Debug)]
pub struct ExecV1 {
    pub msgs: Vec<AuthzMsg>,
}
impl ExecV1 {
    pub fn new(msgs: Vec<AuthzMsg>) -> Self {
        ExecV1 { msgs }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AuthzResult<ExecV1> {
        match msg {
            ExecuteMsg::Exec { msgs } => ExecV1::new(msgs).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::Exec".to_string(),
            }
            .to_err(),
        }
    }
}

/// Runs the batch with the sender as grantee.  The per-message results are set as the response
/// data, encoded as an [ExecResponse].
pub fn exec<K: GrantKeeper>(
    keeper: K,
    env: Env,
    info: MessageInfo,
    msg: ExecV1,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let results = keeper.exec(&info.sender, &msg.msgs, &BlockContext::from(&env))?;
    let attributes = EventAttributes::new(EventType::Exec)
        .set_grantee(&info.sender)
        .set_new_value(results.len());
    Response::new()
        .add_attributes(attributes)
        .set_data(to_json_binary(&ExecResponse { results })?)
        .to_ok()
}
