use cosmwasm_std::{Addr, Timestamp};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::authorization_any::AuthorizationAny;

/// The value persisted for each (granter, grantee, msg type url) triple.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct Grant {
    pub authorization: AuthorizationAny,
    /// The grant is invalid at or after this time.
    pub expiration: Timestamp,
}
impl Grant {
    pub fn new(authorization: AuthorizationAny, expiration: Timestamp) -> Self {
        Self {
            authorization,
            expiration,
        }
    }

    pub fn is_expired(&self, now: &Timestamp) -> bool {
        self.expiration <= *now
    }
}

/// A grant alongside the triple it is stored under, with human-readable addresses.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct GrantRecord {
    pub granter: Addr,
    pub grantee: Addr,
    pub msg_type_url: String,
    pub grant: Grant,
}
impl GrantRecord {
    pub fn new<S: Into<String>>(granter: Addr, grantee: Addr, msg_type_url: S, grant: Grant) -> Self {
        Self {
            granter,
            grantee,
            msg_type_url: msg_type_url.into(),
            grant,
        }
    }
}
