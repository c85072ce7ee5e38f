use crate::core::error::ContractError;
use crate::util::aliases::AuthzResult;
use crate::util::traits::ResultExtensions;
use chrono::{DateTime, SecondsFormat};
use cosmwasm_std::{BankMsg, Coin, CosmosMsg, Timestamp};
use std::collections::HashSet;
use std::hash::Hash;

/// Determines how many elements within the provided reference slice are unique by the given
/// property.
///
/// # Parameters
///
/// * `slice` A reference slice from which to derive values to count.
/// * `selector` A closure that defines the criteria used to determine when a value in the slice
/// should be added to the count.
///
/// # Examples
/// ```
/// use authz_smart_contract::util::functions::distinct_count_by_property;
///
/// let values = vec!["a", "b", "c", "a"];
/// let distinct_count = distinct_count_by_property(&values, |s| s);
/// assert_eq!(3, distinct_count);
/// ```
pub fn distinct_count_by_property<F, T, U>(slice: &[T], selector: F) -> usize
where
    U: Sized + Eq + Hash,
    F: FnMut(&T) -> &U,
{
    slice.iter().map(selector).collect::<HashSet<_>>().len()
}

/// Creates a message that sends funds from the contract to the recipient address.
///
/// # Parameters
///
/// * `recipient` The bech32 address of the receiver of the sent funds.
/// * `amount` The coins to send (from the contract's internal funding amount).
pub fn bank_send<R: Into<String>>(recipient: R, amount: Vec<Coin>) -> CosmosMsg {
    CosmosMsg::Bank(BankMsg::Send {
        to_address: recipient.into(),
        amount,
    })
}

/// Renders a block timestamp as an RFC3339 string in UTC, keeping nanosecond precision when the
/// timestamp carries any.
///
/// # Examples
/// ```
/// use authz_smart_contract::util::functions::timestamp_to_rfc3339;
/// use cosmwasm_std::Timestamp;
///
/// let rendered = timestamp_to_rfc3339(&Timestamp::from_seconds(1_700_000_000)).unwrap();
/// assert_eq!("2023-11-14T22:13:20Z", rendered);
/// ```
pub fn timestamp_to_rfc3339(timestamp: &Timestamp) -> AuthzResult<String> {
    let seconds = i64::try_from(timestamp.seconds()).map_err(|_| {
        ContractError::generic(format!("timestamp [{}] is out of range", timestamp))
    })?;
    match DateTime::from_timestamp(seconds, timestamp.subsec_nanos() as u32) {
        Some(date_time) => date_time
            .to_rfc3339_opts(SecondsFormat::AutoSi, true)
            .to_ok(),
        None => ContractError::generic(format!("timestamp [{}] is out of range", timestamp)).to_err(),
    }
}

/// Parses an RFC3339 string into a block timestamp.  Offsets are normalized into UTC.  Values
/// before the unix epoch, or past what a nanosecond `u64` can hold (mid 2554), are rejected.
///
/// # Examples
/// ```
/// use authz_smart_contract::util::functions::rfc3339_to_timestamp;
/// use cosmwasm_std::Timestamp;
///
/// let timestamp = rfc3339_to_timestamp("2023-11-14T22:13:20.5Z").unwrap();
/// assert_eq!(Timestamp::from_nanos(1_700_000_000_500_000_000), timestamp);
/// ```
pub fn rfc3339_to_timestamp<S: AsRef<str>>(value: S) -> AuthzResult<Timestamp> {
    let value = value.as_ref();
    let parsed = DateTime::parse_from_rfc3339(value).map_err(|e| {
        ContractError::generic(format!("[{}] is not a valid RFC3339 timestamp: {}", value, e))
    })?;
    let seconds = u64::try_from(parsed.timestamp()).map_err(|_| {
        ContractError::generic(format!("[{}] is before the unix epoch", value))
    })?;
    seconds
        .checked_mul(1_000_000_000)
        .and_then(|nanos| nanos.checked_add(u64::from(parsed.timestamp_subsec_nanos())))
        .map(Timestamp::from_nanos)
        .ok_or_else(|| ContractError::generic(format!("[{}] is out of range", value)))
}
