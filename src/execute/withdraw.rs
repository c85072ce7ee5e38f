use cosmwasm_std::{Coin, MessageInfo, Response};

use crate::{
    core::{error::ContractError, msg::ExecuteMsg},
    router::ledger::debit,
    util::{
        aliases::{AuthzResult, DepsMutC, EntryPointResponse},
        coins::coins_display,
        contract_helpers::check_funds_are_empty,
        event_attributes::{EventAttributes, EventType},
        functions::bank_send,
        traits::ResultExtensions,
    },
};

#[derive(Clone, PartialEq, Debug)]
pub struct WithdrawV1 {
    pub amount: Vec<Coin>,
}
impl WithdrawV1 {
    pub fn new(amount: Vec<Coin>) -> Self {
        WithdrawV1 { amount }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AuthzResult<WithdrawV1> {
        match msg {
            ExecuteMsg::Withdraw { amount } => WithdrawV1::new(amount).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::Withdraw".to_string(),
            }
            .to_err(),
        }
    }
}

/// Debits the sender's contract balance and sends the funds back to them.
pub fn withdraw(deps: DepsMutC, info: MessageInfo, msg: WithdrawV1) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    for coin in msg.amount.iter() {
        debit(deps.storage, &info.sender, coin)?;
    }
    Response::new()
        .add_message(bank_send(&info.sender, msg.amount.clone()))
        .add_attributes(
            EventAttributes::new(EventType::Withdraw)
                .set_granter(&info.sender)
                .set_new_value(coins_display(&msg.amount)),
        )
        .to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::{mock_dependencies, mock_env};
    use cosmwasm_std::{coin, BankMsg, CosmosMsg};

    use crate::{
        contract::execute,
        core::{error::ContractError, msg::ExecuteMsg},
        query::query_balance::load_balance,
        testutil::test_utilities::{
            empty_mock_info, fund_account, single_attribute_for_key, test_instantiate_success,
            InstArgs,
        },
        util::{
            constants::{AUTHZ_EVENT_TYPE_KEY, NEW_VALUE_KEY},
            event_attributes::EventType,
        },
    };

    use super::{withdraw, WithdrawV1};

    #[test]
    fn test_valid_withdraw() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        fund_account(deps.as_mut(), "holder", 100);
        let response = withdraw(
            deps.as_mut(),
            empty_mock_info("holder"),
            WithdrawV1::new(vec![coin(40, "stake")]),
        )
        .expect("a covered withdrawal should succeed");
        assert_eq!(
            EventType::Withdraw.event_name().as_str(),
            single_attribute_for_key(&response, AUTHZ_EVENT_TYPE_KEY),
        );
        assert_eq!("40stake", single_attribute_for_key(&response, NEW_VALUE_KEY));
        assert_eq!(1, response.messages.len(), "a single bank send should be emitted");
        match &response.messages[0].msg {
            CosmosMsg::Bank(BankMsg::Send { to_address, amount }) => {
                assert_eq!("holder", to_address);
                assert_eq!(&vec![coin(40, "stake")], amount);
            }
            msg => panic!("unexpected message emitted: {:?}", msg),
        }
        assert_eq!(
            vec![coin(60, "stake")],
            load_balance(&deps.as_ref(), "holder").unwrap().balances,
        );
    }

    #[test]
    fn test_withdraw_beyond_balance_fails() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        fund_account(deps.as_mut(), "holder", 10);
        let error = execute(
            deps.as_mut(),
            mock_env(),
            empty_mock_info("holder"),
            ExecuteMsg::Withdraw {
                amount: vec![coin(11, "stake")],
            },
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InsufficientFunds { .. }),
            "unexpected error encountered: {:?}",
            error,
        );
    }
}
