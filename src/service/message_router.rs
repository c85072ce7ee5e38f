use cosmwasm_std::{Api, Binary, Storage};

use crate::core::types::authz_msg::AuthzMsg;
use crate::core::types::block_context::BlockContext;
use crate::util::aliases::AuthzResult;

/// Executes a single message type's state transition.
pub trait MessageHandler {
    /// Runs the message against `storage`.  The returned data is handed back to the caller of the
    /// batch untouched, and any error fails the batch as-is.
    fn handle(
        &self,
        storage: &mut dyn Storage,
        api: &dyn Api,
        ctx: &BlockContext,
        msg: &AuthzMsg,
    ) -> AuthzResult<Binary>;
}

/// Resolves a message type url to the handler that executes it.
pub trait MessageRouter {
    fn route(&self, msg_type_url: &str) -> Option<&dyn MessageHandler>;
}
