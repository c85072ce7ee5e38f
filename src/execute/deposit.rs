use cosmwasm_std::{MessageInfo, Response};

use crate::{
    core::error::ContractError,
    router::ledger::credit,
    util::{
        aliases::{DepsMutC, EntryPointResponse},
        coins::coins_display,
        event_attributes::{EventAttributes, EventType},
        traits::ResultExtensions,
    },
};

/// Moves the funds attached to the message into the sender's contract balance, where authorized
/// bank and staking messages can act on them.
pub fn deposit(deps: DepsMutC, info: MessageInfo) -> EntryPointResponse {
    if info.funds.is_empty() {
        return ContractError::InvalidFunds("a deposit requires attached funds".to_string())
            .to_err();
    }
    for coin in info.funds.iter() {
        credit(deps.storage, &info.sender, coin)?;
    }
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::Deposit)
                .set_granter(&info.sender)
                .set_new_value(coins_display(&info.funds)),
        )
        .to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::coin;
    use cosmwasm_std::testing::{mock_dependencies, mock_env};

    use crate::{
        contract::execute,
        core::{error::ContractError, msg::ExecuteMsg},
        query::query_balance::load_balance,
        testutil::test_utilities::{
            empty_mock_info, mock_info_with_funds, single_attribute_for_key,
            test_instantiate_success, InstArgs,
        },
        util::{
            constants::{AUTHZ_EVENT_TYPE_KEY, NEW_VALUE_KEY},
            event_attributes::EventType,
        },
    };

    #[test]
    fn test_deposit_accumulates_per_denom() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let response = execute(
            deps.as_mut(),
            mock_env(),
            mock_info_with_funds("depositor", &[coin(10, "atom"), coin(5, "stake")]),
            ExecuteMsg::Deposit {},
        )
        .expect("the deposit should succeed");
        assert_eq!(
            EventType::Deposit.event_name().as_str(),
            single_attribute_for_key(&response, AUTHZ_EVENT_TYPE_KEY),
        );
        assert_eq!(
            "10atom,5stake",
            single_attribute_for_key(&response, NEW_VALUE_KEY)
        );
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info_with_funds("depositor", &[coin(7, "stake")]),
            ExecuteMsg::Deposit {},
        )
        .expect("a second deposit should succeed");
        assert_eq!(
            vec![coin(10, "atom"), coin(12, "stake")],
            load_balance(&deps.as_ref(), "depositor").unwrap().balances,
        );
    }

    #[test]
    fn test_deposit_without_funds_fails() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = execute(
            deps.as_mut(),
            mock_env(),
            empty_mock_info("depositor"),
            ExecuteMsg::Deposit {},
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidFunds(_)),
            "unexpected error encountered: {:?}",
            error,
        );
    }
}
