use cosmwasm_std::{Env, MessageInfo, Response};

use crate::{
    core::{error::ContractError, msg::ExecuteMsg, state::STATE_V1},
    service::{deps_manager::DepsManager, grant_keeper::GrantKeeper},
    util::{
        aliases::{AuthzResult, EntryPointResponse},
        contract_helpers::check_funds_are_empty,
        event_attributes::{EventAttributes, EventType},
        traits::ResultExtensions,
    },
};

#[derive(Clone, PartialEq, Debug)]
pub struct PruneExpiredGrantsV1 {
    pub limit: Option<u32>,
}
impl PruneExpiredGrantsV1 {
    pub fn new(limit: Option<u32>) -> Self {
        PruneExpiredGrantsV1 { limit }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AuthzResult<PruneExpiredGrantsV1> {
        match msg {
            ExecuteMsg::PruneExpiredGrants { limit } => PruneExpiredGrantsV1::new(limit).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::PruneExpiredGrants".to_string(),
            }
            .to_err(),
        }
    }
}

/// Deletes grants that expired at or before the current block time, oldest first.  When no limit
/// is given, the contract's configured default applies.
pub fn prune_expired_grants<'a, K: GrantKeeper + DepsManager<'a>>(
    keeper: K,
    env: Env,
    info: MessageInfo,
    msg: PruneExpiredGrantsV1,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let limit = match msg.limit {
        Some(limit) => limit,
        None => {
            keeper
                .use_deps(|deps| STATE_V1.load(deps.storage))?
                .default_prune_limit
        }
    };
    let pruned = keeper.prune_expired(&env.block.time, limit)?;
    Response::new()
        .add_attributes(EventAttributes::new(EventType::PruneExpiredGrants).set_new_value(pruned))
        .to_ok()
}
