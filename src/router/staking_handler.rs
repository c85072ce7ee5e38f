use cosmwasm_std::{to_json_binary, Api, Binary, Storage};

use crate::core::error::ContractError;
use crate::core::types::authz_msg::AuthzMsg;
use crate::core::types::block_context::BlockContext;
use crate::service::message_router::MessageHandler;
use crate::util::aliases::AuthzResult;
use crate::util::contract_helpers::{validate_address, validate_validator_id};
use crate::util::traits::ResultExtensions;

use super::ledger::{delegate, delegations, redelegate, undelegate};

/// Bonds, unbonds and moves custodied coins between validators.  Responds with the delegator's
/// resulting delegation to the validator the message targeted.
pub struct StakingHandler;
impl MessageHandler for StakingHandler {
    fn handle(
        &self,
        storage: &mut dyn Storage,
        api: &dyn Api,
        _ctx: &BlockContext,
        msg: &AuthzMsg,
    ) -> AuthzResult<Binary> {
        let (delegator, validator) = match msg {
            AuthzMsg::Delegate {
                delegator_address,
                validator_address,
                amount,
            } => {
                let delegator = validate_address(api, delegator_address)?;
                let validator = validate_validator_id(validator_address)?;
                delegate(storage, &delegator, &validator, amount)?;
                (delegator, validator)
            }
            AuthzMsg::Undelegate {
                delegator_address,
                validator_address,
                amount,
            } => {
                let delegator = validate_address(api, delegator_address)?;
                let validator = validate_validator_id(validator_address)?;
                undelegate(storage, &delegator, &validator, amount)?;
                (delegator, validator)
            }
            AuthzMsg::BeginRedelegate {
                delegator_address,
                validator_src_address,
                validator_dst_address,
                amount,
            } => {
                let delegator = validate_address(api, delegator_address)?;
                let src = validate_validator_id(validator_src_address)?;
                let dst = validate_validator_id(validator_dst_address)?;
                if src == dst {
                    return ContractError::invalid_request(format!(
                        "cannot redelegate from validator [{}] to itself",
                        src
                    ))
                    .to_err();
                }
                redelegate(storage, &delegator, &src, &dst, amount)?;
                (delegator, dst)
            }
            _ => {
                return ContractError::InvalidMessageType {
                    expected_message_type: "a staking message".to_string(),
                }
                .to_err()
            }
        };
        to_json_binary(&delegations(storage, &delegator, &validator)?)?.to_ok()
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::{MockApi, MockStorage};
    use cosmwasm_std::{coin, from_json, Addr, Coin, Timestamp};

    use crate::core::error::ContractError;
    use crate::core::types::authz_msg::AuthzMsg;
    use crate::core::types::block_context::BlockContext;
    use crate::router::ledger::{credit, delegation_of};
    use crate::service::message_router::MessageHandler;

    use super::StakingHandler;

    fn handle(storage: &mut MockStorage, msg: AuthzMsg) -> Result<Vec<Coin>, ContractError> {
        StakingHandler
            .handle(
                storage,
                &MockApi::default(),
                &BlockContext::at_time(Timestamp::from_seconds(1)),
                &msg,
            )
            .map(|data| from_json::<Vec<Coin>>(&data).unwrap())
    }

    #[test]
    fn test_delegate_then_redelegate() {
        let mut storage = MockStorage::new();
        let alice = Addr::unchecked("alice");
        credit(&mut storage, &alice, &coin(50, "stake")).unwrap();
        assert_eq!(
            vec![coin(50, "stake")],
            handle(&mut storage, AuthzMsg::delegate("alice", "val-a", coin(50, "stake"))).unwrap()
        );
        let moved = handle(
            &mut storage,
            AuthzMsg::BeginRedelegate {
                delegator_address: "alice".to_string(),
                validator_src_address: "val-a".to_string(),
                validator_dst_address: "val-b".to_string(),
                amount: coin(20, "stake"),
            },
        )
        .unwrap();
        assert_eq!(vec![coin(20, "stake")], moved, "the destination delegation is returned");
        assert_eq!(
            30,
            delegation_of(&storage, &alice, "val-a", "stake").unwrap().u128()
        );
    }

    #[test]
    fn test_redelegate_to_same_validator_fails() {
        let mut storage = MockStorage::new();
        let error = handle(
            &mut storage,
            AuthzMsg::BeginRedelegate {
                delegator_address: "alice".to_string(),
                validator_src_address: "val-a".to_string(),
                validator_dst_address: "val-a".to_string(),
                amount: coin(1, "stake"),
            },
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidRequest { .. }),
            "unexpected error encountered: {:?}",
            error,
        );
    }

    #[test]
    fn test_send_is_not_a_staking_message() {
        let mut storage = MockStorage::new();
        let error = handle(
            &mut storage,
            AuthzMsg::send("alice", "bob", vec![coin(1, "stake")]),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidMessageType { .. }),
            "unexpected error encountered: {:?}",
            error,
        );
    }

    #[test]
    fn test_operator_addresses_are_accepted_as_validators() {
        let mut storage = MockStorage::new();
        let alice = Addr::unchecked("alice");
        let operator = "linkvaloper1twsfmuj28ndph54k4nw8crwu8h9c8mh3rtx705";
        credit(&mut storage, &alice, &coin(10, "stake")).unwrap();
        handle(&mut storage, AuthzMsg::delegate("alice", operator, coin(10, "stake")))
            .expect("a valoper address should be usable as a validator id");
        assert_eq!(
            10,
            delegation_of(&storage, &alice, operator, "stake").unwrap().u128()
        );
        let error = handle(&mut storage, AuthzMsg::delegate("alice", "", coin(1, "stake")))
            .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidAddress { .. }),
            "unexpected error encountered: {:?}",
            error,
        );
    }
}
