use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::error::ContractError;
use crate::util::aliases::AuthzResult;
use crate::util::functions::timestamp_to_rfc3339;
use crate::util::traits::ResultExtensions;

use super::authorization_any::AuthorizationAny;
use super::grant::GrantRecord;

/// The portable snapshot shape of a single grant, used for contract instantiation and state
/// export.  The message type url is not stored separately because it is derived from the
/// authorization itself on import.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct GenesisGrant {
    pub granter: String,
    pub grantee: String,
    pub authorization: AuthorizationAny,
    /// RFC3339 timestamp
    pub expiration: String,
}
impl GenesisGrant {
    pub fn new<S1: Into<String>, S2: Into<String>, S3: Into<String>>(
        granter: S1,
        grantee: S2,
        authorization: AuthorizationAny,
        expiration: S3,
    ) -> Self {
        Self {
            granter: granter.into(),
            grantee: grantee.into(),
            authorization,
            expiration: expiration.into(),
        }
    }

    pub fn from_record(record: &GrantRecord) -> AuthzResult<Self> {
        Self::new(
            record.granter.as_str(),
            record.grantee.as_str(),
            record.grant.authorization.clone(),
            timestamp_to_rfc3339(&record.grant.expiration)?,
        )
        .to_ok()
    }
}

/// Full snapshot of all grant state, in store key order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct GenesisState {
    pub authorization: Vec<GenesisGrant>,
}
impl GenesisState {
    /// Renders the snapshot as a JSON document.
    pub fn to_json_string(&self) -> AuthzResult<String> {
        serde_json_wasm::to_string(self)
            .map_err(|e| ContractError::generic(e.to_string()))
    }
}
