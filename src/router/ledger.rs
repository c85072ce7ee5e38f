use cosmwasm_std::{Addr, Coin, Order, Storage, Uint128};
use cw_storage_plus::Map;

use crate::core::error::ContractError;
use crate::util::aliases::AuthzResult;
use crate::util::constants::{BALANCE_NAMESPACE, DELEGATION_NAMESPACE};
use crate::util::traits::ResultExtensions;

/// (holder, denom) -> amount held in custody by the contract
const BALANCES: Map<(&Addr, &str), Uint128> = Map::new(BALANCE_NAMESPACE);
/// (delegator, validator, denom) -> amount bonded
const DELEGATIONS: Map<(&Addr, &str, &str), Uint128> = Map::new(DELEGATION_NAMESPACE);

pub fn balance_of(storage: &dyn Storage, holder: &Addr, denom: &str) -> AuthzResult<Uint128> {
    BALANCES
        .may_load(storage, (holder, denom))?
        .unwrap_or_default()
        .to_ok()
}

pub fn balances(storage: &dyn Storage, holder: &Addr) -> AuthzResult<Vec<Coin>> {
    BALANCES
        .prefix(holder)
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(denom, amount)| Coin { denom, amount }))
        .collect::<Result<Vec<Coin>, _>>()?
        .to_ok()
}

pub fn credit(storage: &mut dyn Storage, holder: &Addr, coin: &Coin) -> AuthzResult<()> {
    let current = balance_of(storage, holder, coin.denom.as_str())?;
    BALANCES.save(
        storage,
        (holder, coin.denom.as_str()),
        &current.checked_add(coin.amount)?,
    )?;
    Ok(())
}

pub fn debit(storage: &mut dyn Storage, holder: &Addr, coin: &Coin) -> AuthzResult<()> {
    let current = balance_of(storage, holder, coin.denom.as_str())?;
    let remaining = current
        .checked_sub(coin.amount)
        .map_err(|_| ContractError::InsufficientFunds {
            address: holder.to_string(),
            requested: coin.to_string(),
            available: Coin::new(current.u128(), coin.denom.as_str()).to_string(),
        })?;
    if remaining.is_zero() {
        BALANCES.remove(storage, (holder, coin.denom.as_str()));
    } else {
        BALANCES.save(storage, (holder, coin.denom.as_str()), &remaining)?;
    }
    Ok(())
}

pub fn delegation_of(
    storage: &dyn Storage,
    delegator: &Addr,
    validator: &str,
    denom: &str,
) -> AuthzResult<Uint128> {
    DELEGATIONS
        .may_load(storage, (delegator, validator, denom))?
        .unwrap_or_default()
        .to_ok()
}

pub fn delegations(
    storage: &dyn Storage,
    delegator: &Addr,
    validator: &str,
) -> AuthzResult<Vec<Coin>> {
    DELEGATIONS
        .prefix((delegator, validator))
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(denom, amount)| Coin { denom, amount }))
        .collect::<Result<Vec<Coin>, _>>()?
        .to_ok()
}

fn bond(
    storage: &mut dyn Storage,
    delegator: &Addr,
    validator: &str,
    coin: &Coin,
) -> AuthzResult<()> {
    let current = delegation_of(storage, delegator, validator, coin.denom.as_str())?;
    DELEGATIONS.save(
        storage,
        (delegator, validator, coin.denom.as_str()),
        &current.checked_add(coin.amount)?,
    )?;
    Ok(())
}

fn unbond(
    storage: &mut dyn Storage,
    delegator: &Addr,
    validator: &str,
    coin: &Coin,
) -> AuthzResult<()> {
    let current = delegation_of(storage, delegator, validator, coin.denom.as_str())?;
    let remaining = current
        .checked_sub(coin.amount)
        .map_err(|_| ContractError::InsufficientDelegation {
            delegator: delegator.to_string(),
            validator: validator.to_string(),
            requested: coin.to_string(),
            delegated: Coin::new(current.u128(), coin.denom.as_str()).to_string(),
        })?;
    if remaining.is_zero() {
        DELEGATIONS.remove(storage, (delegator, validator, coin.denom.as_str()));
    } else {
        DELEGATIONS.save(storage, (delegator, validator, coin.denom.as_str()), &remaining)?;
    }
    Ok(())
}

/// Moves `coin` from the delegator's balance into a delegation to `validator`.
pub fn delegate(
    storage: &mut dyn Storage,
    delegator: &Addr,
    validator: &str,
    coin: &Coin,
) -> AuthzResult<()> {
    debit(storage, delegator, coin)?;
    bond(storage, delegator, validator, coin)
}

/// Moves `coin` out of a delegation to `validator` back into the delegator's balance.
pub fn undelegate(
    storage: &mut dyn Storage,
    delegator: &Addr,
    validator: &str,
    coin: &Coin,
) -> AuthzResult<()> {
    unbond(storage, delegator, validator, coin)?;
    credit(storage, delegator, coin)
}

pub fn redelegate(
    storage: &mut dyn Storage,
    delegator: &Addr,
    src_validator: &str,
    dst_validator: &str,
    coin: &Coin,
) -> AuthzResult<()> {
    unbond(storage, delegator, src_validator, coin)?;
    bond(storage, delegator, dst_validator, coin)
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::MockStorage;
    use cosmwasm_std::{coin, Addr, Uint128};

    use crate::core::error::ContractError;

    use super::{
        balance_of, balances, credit, debit, delegate, delegation_of, delegations, redelegate,
        undelegate,
    };

    #[test]
    fn test_credit_and_debit() {
        let mut storage = MockStorage::new();
        let alice = Addr::unchecked("alice");
        credit(&mut storage, &alice, &coin(100, "stake")).unwrap();
        credit(&mut storage, &alice, &coin(5, "atom")).unwrap();
        debit(&mut storage, &alice, &coin(30, "stake")).unwrap();
        assert_eq!(vec![coin(5, "atom"), coin(70, "stake")], balances(&storage, &alice).unwrap());
        let error = debit(&mut storage, &alice, &coin(71, "stake")).unwrap_err();
        match error {
            ContractError::InsufficientFunds {
                address,
                requested,
                available,
            } => {
                assert_eq!("alice", address);
                assert_eq!("71stake", requested);
                assert_eq!("70stake", available);
            }
            _ => panic!("unexpected error encountered: {:?}", error),
        };
        debit(&mut storage, &alice, &coin(70, "stake")).unwrap();
        assert_eq!(Uint128::zero(), balance_of(&storage, &alice, "stake").unwrap());
        assert_eq!(vec![coin(5, "atom")], balances(&storage, &alice).unwrap());
    }

    #[test]
    fn test_staking_moves_funds_between_balance_and_delegations() {
        let mut storage = MockStorage::new();
        let alice = Addr::unchecked("alice");
        credit(&mut storage, &alice, &coin(100, "stake")).unwrap();
        delegate(&mut storage, &alice, "val-a", &coin(60, "stake")).unwrap();
        redelegate(&mut storage, &alice, "val-a", "val-b", &coin(20, "stake")).unwrap();
        undelegate(&mut storage, &alice, "val-a", &coin(40, "stake")).unwrap();
        assert_eq!(Uint128::new(80), balance_of(&storage, &alice, "stake").unwrap());
        assert!(delegations(&storage, &alice, "val-a").unwrap().is_empty());
        assert_eq!(
            Uint128::new(20),
            delegation_of(&storage, &alice, "val-b", "stake").unwrap()
        );
        let error = undelegate(&mut storage, &alice, "val-b", &coin(21, "stake")).unwrap_err();
        assert!(
            matches!(error, ContractError::InsufficientDelegation { .. }),
            "unexpected error encountered: {:?}",
            error,
        );
    }
}
