use cosmwasm_std::{Env, Timestamp};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The slice of block information that authorization decisions are allowed to depend on.  Always
/// handed in explicitly so that every time-sensitive operation can be driven by a test clock.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct BlockContext {
    pub height: u64,
    pub time: Timestamp,
    pub chain_id: String,
}
impl BlockContext {
    pub fn new<S: Into<String>>(height: u64, time: Timestamp, chain_id: S) -> Self {
        Self {
            height,
            time,
            chain_id: chain_id.into(),
        }
    }

    /// Builds a context at the given time with no meaningful height or chain.  Useful when only
    /// the clock matters, like lookups and pruning.
    pub fn at_time(time: Timestamp) -> Self {
        Self::new(0, time, "")
    }
}
impl From<&Env> for BlockContext {
    fn from(env: &Env) -> Self {
        Self::new(env.block.height, env.block.time, &env.block.chain_id)
    }
}
