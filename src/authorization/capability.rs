use std::fmt::Debug;

use serde::de::DeserializeOwned;

use crate::core::types::authorization_any::AuthorizationAny;
use crate::core::types::authz_msg::AuthzMsg;
use crate::core::types::block_context::BlockContext;
use crate::util::aliases::AuthzResult;

/// A capability that decides whether a candidate message may run under a grant.
pub trait Authorization: Debug {
    /// The message type this capability governs.  Grants are stored under this key.
    fn msg_type_url(&self) -> String;

    /// Judges the candidate message.  An `Err` means the message was not of the expected shape
    /// or could not be accepted; `accepted: false` is a plain refusal.  Either way the caller must
    /// not execute the message.
    fn accept(&self, msg: &AuthzMsg, ctx: &BlockContext) -> AuthzResult<AcceptResponse>;

    /// Structural validation that does not depend on any message.
    fn validate_basic(&self) -> AuthzResult<()>;

    /// Packs the capability into its tagged, storable form.
    fn to_any(&self) -> AuthzResult<AuthorizationAny>;
}

/// A concrete capability that can be registered in an
/// [AuthorizationRegistry](crate::authorization::registry::AuthorizationRegistry).
pub trait RegisteredAuthorization: Authorization + DeserializeOwned + 'static {
    const TYPE_URL: &'static str;
}

#[derive(Debug)]
pub struct AcceptResponse {
    pub accepted: bool,
    /// The grant must be removed: the capability has been fully consumed.
    pub delete: bool,
    /// Replaces the stored capability when present and `delete` is false.
    pub updated: Option<Box<dyn Authorization>>,
}
impl AcceptResponse {
    pub fn accept_with_update(updated: Box<dyn Authorization>) -> Self {
        Self {
            accepted: true,
            delete: false,
            updated: Some(updated),
        }
    }

    pub fn accept_and_delete() -> Self {
        Self {
            accepted: true,
            delete: true,
            updated: None,
        }
    }

    pub fn reject() -> Self {
        Self {
            accepted: false,
            delete: false,
            updated: None,
        }
    }
}
