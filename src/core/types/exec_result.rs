use cosmwasm_std::{Addr, Binary};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The outcome of one message in an authorized batch.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct MsgExecutionResult {
    pub msg_index: u32,
    pub msg_type_url: String,
    /// The account the message acted on behalf of.
    pub granter: Addr,
    /// Whatever the message's handler responded with.
    pub data: Binary,
}

/// Set as the response data of a successful `Exec`, one result per message in order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct ExecResponse {
    pub results: Vec<MsgExecutionResult>,
}
