use cosmwasm_std::Addr;
use cw_storage_plus::Item;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::constants::DEFAULT_PRUNE_LIMIT;

const STATE_V1_KEY: &str = "state_v1";

/// The contract's configuration, written once during instantiation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct StateV1 {
    /// The account that instantiated the contract, unless another was named.
    pub admin: Addr,
    /// Used by [PruneExpiredGrants](crate::core::msg::ExecuteMsg::PruneExpiredGrants) when the
    /// caller does not provide a limit.
    pub default_prune_limit: u32,
}
impl StateV1 {
    pub fn new(admin: Addr, default_prune_limit: Option<u32>) -> Self {
        Self {
            admin,
            default_prune_limit: default_prune_limit.unwrap_or(DEFAULT_PRUNE_LIMIT),
        }
    }
}

pub const STATE_V1: Item<StateV1> = Item::new(STATE_V1_KEY);
