use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::error::ContractError;
use crate::core::types::authorization_any::AuthorizationAny;
use crate::core::types::authz_msg::AuthzMsg;
use crate::core::types::block_context::BlockContext;
use crate::util::aliases::AuthzResult;
use crate::util::traits::ResultExtensions;

use super::capability::{AcceptResponse, Authorization, RegisteredAuthorization};

/// Grants unrestricted permission to execute any message of the given type.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct GenericAuthorization {
    pub msg_type_url: String,
}
impl GenericAuthorization {
    pub fn new<S: Into<String>>(msg_type_url: S) -> Self {
        Self {
            msg_type_url: msg_type_url.into(),
        }
    }
}
impl Authorization for GenericAuthorization {
    fn msg_type_url(&self) -> String {
        self.msg_type_url.clone()
    }

    fn accept(&self, _msg: &AuthzMsg, _ctx: &BlockContext) -> AuthzResult<AcceptResponse> {
        AcceptResponse::accept_with_update(Box::new(self.clone())).to_ok()
    }

    fn validate_basic(&self) -> AuthzResult<()> {
        if !self.msg_type_url.starts_with('/') || self.msg_type_url.len() < 2 {
            return ContractError::ValidationError {
                msg_type_url: self.msg_type_url.clone(),
                explanation: "msg_type_url must be a fully-qualified type url".to_string(),
            }
            .to_err();
        }
        Ok(())
    }

    fn to_any(&self) -> AuthzResult<AuthorizationAny> {
        AuthorizationAny::pack(Self::TYPE_URL, self)
    }
}
impl RegisteredAuthorization for GenericAuthorization {
    const TYPE_URL: &'static str = "/lbm.authz.v1.GenericAuthorization";
}
