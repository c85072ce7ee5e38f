use crate::core::types::authz_msg::{
    MSG_BEGIN_REDELEGATE_TYPE_URL, MSG_DELEGATE_TYPE_URL, MSG_SEND_TYPE_URL,
    MSG_UNDELEGATE_TYPE_URL,
};
use crate::service::message_router::{MessageHandler, MessageRouter};

use super::bank_handler::BankHandler;
use super::staking_handler::StakingHandler;

/// Routes the built-in bank and staking messages to the contract's custody ledger.  Every other
/// message type is unroutable.
pub struct LedgerRouter {
    bank: BankHandler,
    staking: StakingHandler,
}
impl LedgerRouter {
    pub fn new() -> Self {
        Self {
            bank: BankHandler,
            staking: StakingHandler,
        }
    }
}
impl Default for LedgerRouter {
    fn default() -> Self {
        Self::new()
    }
}
impl MessageRouter for LedgerRouter {
    fn route(&self, msg_type_url: &str) -> Option<&dyn MessageHandler> {
        match msg_type_url {
            MSG_SEND_TYPE_URL => Some(&self.bank),
            MSG_DELEGATE_TYPE_URL | MSG_UNDELEGATE_TYPE_URL | MSG_BEGIN_REDELEGATE_TYPE_URL => {
                Some(&self.staking)
            }
            _ => None,
        }
    }
}
