use cosmwasm_std::{Coin, Uint128};
use std::collections::BTreeMap;

/// Collapses a list of coins into a denom-keyed map, summing duplicate denominations and dropping
/// zero amounts.
pub fn coins_to_map(coins: &[Coin]) -> BTreeMap<String, Uint128> {
    let mut map: BTreeMap<String, Uint128> = BTreeMap::new();
    for coin in coins.iter().filter(|c| !c.amount.is_zero()) {
        let entry = map.entry(coin.denom.clone()).or_default();
        *entry = entry.saturating_add(coin.amount);
    }
    map
}

/// Converts a denom-keyed map back into a denom-sorted list of coins, omitting zero amounts.
pub fn map_to_coins(map: BTreeMap<String, Uint128>) -> Vec<Coin> {
    map.into_iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(denom, amount)| Coin { denom, amount })
        .collect()
}

/// Subtracts `amount` from `limit` denomination by denomination.  Returns `Err` with the first
/// denomination that would go negative (including denominations absent from the limit).
/// Denominations present only in the limit are carried over untouched.  The result is sorted by
/// denom and contains no zero amounts.
///
/// # Examples
/// ```
/// use authz_smart_contract::util::coins::safe_sub_coins;
/// use cosmwasm_std::coin;
///
/// let remaining = safe_sub_coins(&[coin(100, "stake"), coin(5, "atom")], &[coin(30, "stake")]).unwrap();
/// assert_eq!(vec![coin(5, "atom"), coin(70, "stake")], remaining);
/// assert_eq!("stake", safe_sub_coins(&[coin(10, "stake")], &[coin(11, "stake")]).unwrap_err().denom);
/// ```
pub fn safe_sub_coins(limit: &[Coin], amount: &[Coin]) -> Result<Vec<Coin>, Coin> {
    let mut remaining = coins_to_map(limit);
    for (denom, requested) in coins_to_map(amount) {
        let available = remaining.get(&denom).copied().unwrap_or_default();
        match available.checked_sub(requested) {
            Ok(left) => {
                remaining.insert(denom, left);
            }
            Err(_) => {
                return Err(Coin {
                    denom,
                    amount: available,
                })
            }
        }
    }
    Ok(map_to_coins(remaining))
}

/// Renders coins the way the cosmos sdk does: `100stake,5atom`.
pub fn coins_display(coins: &[Coin]) -> String {
    coins
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<String>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, Uint128};

    use super::{coins_display, coins_to_map, safe_sub_coins};

    #[test]
    fn test_coins_to_map_sums_duplicates_and_drops_zeroes() {
        let map = coins_to_map(&[coin(1, "a"), coin(2, "a"), coin(0, "b")]);
        assert_eq!(1, map.len(), "the zero coin should be dropped");
        assert_eq!(Uint128::new(3), map["a"], "duplicate denoms should be summed");
    }

    #[test]
    fn test_safe_sub_exact_amount_leaves_nothing() {
        let remaining = safe_sub_coins(&[coin(100, "stake")], &[coin(100, "stake")])
            .expect("an exact subtraction should succeed");
        assert!(remaining.is_empty(), "no zero coins should remain");
    }

    #[test]
    fn test_safe_sub_unknown_denom_is_an_underflow() {
        let failed = safe_sub_coins(&[coin(100, "stake")], &[coin(1, "atom")]).unwrap_err();
        assert_eq!("atom", failed.denom);
        assert!(failed.amount.is_zero(), "nothing is available in an absent denom");
    }

    #[test]
    fn test_coins_display() {
        assert_eq!("10a,20b", coins_display(&[coin(10, "a"), coin(20, "b")]));
    }
}
