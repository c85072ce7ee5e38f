use cosmwasm_std::{Coin, Timestamp};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::types::authorization_any::AuthorizationAny;
use crate::core::types::authz_msg::AuthzMsg;
use crate::core::types::genesis_grant::GenesisGrant;
use crate::core::types::grant::GrantRecord;

/// The message used to create the contract.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InitMsg {
    /// Defaults to the instantiating account when omitted.
    pub admin: Option<String>,
    pub default_prune_limit: Option<u32>,
    /// Grants loaded into the store before any execution, validated as a whole.
    #[serde(default)]
    pub genesis: Vec<GenesisGrant>,
}

/// Every execution route the contract exposes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Grants the `grantee` authority to run messages of the authorization's type on the sender's
    /// behalf until `expiration`.  Replaces any existing grant for the same message type.
    Grant {
        grantee: String,
        authorization: AuthorizationAny,
        expiration: Timestamp,
    },
    /// Removes a grant previously given by the sender.
    Revoke {
        grantee: String,
        msg_type_url: String,
    },
    /// Runs the messages in order, each on behalf of its signer.  The sender is the grantee.
    Exec { msgs: Vec<AuthzMsg> },
    /// Removes expired grants.  Anybody may call this.
    PruneExpiredGrants { limit: Option<u32> },
    /// Credits the attached funds to the sender's contract balance.
    Deposit {},
    /// Returns funds from the sender's contract balance.
    Withdraw { amount: Vec<Coin> },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Grants {
        granter: String,
        grantee: String,
        msg_type_url: Option<String>,
    },
    GranterGrants { granter: String },
    GranteeGrants { grantee: String },
    Balance { address: String },
    Delegation { delegator: String, validator: String },
    ExportGenesis {},
    State {},
    Version {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MigrateMsg {
    ContractUpgrade {},
}

/// Returned by each of the grant queries.  Expired grants that have not been pruned are included.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct GrantsResponse {
    pub grants: Vec<GrantRecord>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct BalanceResponse {
    pub address: String,
    pub balances: Vec<Coin>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct DelegationResponse {
    pub delegator: String,
    pub validator: String,
    pub amount: Vec<Coin>,
}
