use cosmwasm_std::{to_json_binary, Api, Binary, Storage};

use crate::core::error::ContractError;
use crate::core::types::authz_msg::{AuthzMsg, MSG_SEND_TYPE_URL};
use crate::core::types::block_context::BlockContext;
use crate::service::message_router::MessageHandler;
use crate::util::aliases::AuthzResult;
use crate::util::contract_helpers::validate_address;
use crate::util::traits::ResultExtensions;

use super::ledger::{balances, credit, debit};

/// Moves custodied coins between accounts.  Responds with the sender's remaining balances.
pub struct BankHandler;
impl MessageHandler for BankHandler {
    fn handle(
        &self,
        storage: &mut dyn Storage,
        api: &dyn Api,
        _ctx: &BlockContext,
        msg: &AuthzMsg,
    ) -> AuthzResult<Binary> {
        let (from_address, to_address, amount) = match msg {
            AuthzMsg::Send {
                from_address,
                to_address,
                amount,
            } => (from_address, to_address, amount),
            _ => {
                return ContractError::InvalidMessageType {
                    expected_message_type: MSG_SEND_TYPE_URL.to_string(),
                }
                .to_err()
            }
        };
        let from = validate_address(api, from_address)?;
        let to = validate_address(api, to_address)?;
        for coin in amount {
            debit(storage, &from, coin)?;
            credit(storage, &to, coin)?;
        }
        to_json_binary(&balances(storage, &from)?)?.to_ok()
    }
}
