use crate::core::error::ContractError;
use crate::util::aliases::AuthzResult;
use crate::util::traits::ResultExtensions;

use cosmwasm_std::{Addr, Api, MessageInfo};

/// Ensures that the info provided to the route does not include any funds.
///
/// # Parameters
///
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
///
/// # Examples
/// ```
/// use authz_smart_contract::util::contract_helpers::check_funds_are_empty;
/// use cosmwasm_std::testing::mock_info;
///
/// let info = mock_info("admin-name", &[]);
/// check_funds_are_empty(&info).expect("no coin provided in info - should be success");
/// ```
pub fn check_funds_are_empty(info: &MessageInfo) -> AuthzResult<()> {
    if !info.funds.is_empty() {
        ContractError::InvalidFunds("route requires no funds be present".to_string()).to_err()
    } else {
        Ok(())
    }
}

/// Validates a bech32 (or chain-specific) address through the provided [Api], converting any
/// failure into an [InvalidAddress](crate::core::error::ContractError::InvalidAddress) error that
/// names the offending value.
///
/// # Parameters
///
/// * `api` The cosmwasm api used to validate the address format.
/// * `address` The address to validate.
///
/// # Examples
/// ```
/// use authz_smart_contract::util::contract_helpers::validate_address;
/// use cosmwasm_std::testing::MockApi;
///
/// let addr = validate_address(&MockApi::default(), "granter").expect("mock addresses should validate");
/// assert_eq!("granter", addr.as_str());
/// ```
pub fn validate_address<S: AsRef<str>>(api: &dyn Api, address: S) -> AuthzResult<Addr> {
    let address = address.as_ref();
    api.addr_validate(address)
        .map_err(|e| ContractError::InvalidAddress {
            address: address.to_string(),
            explanation: e.to_string(),
        })
}

/// Validator operator addresses use their own bech32 prefix, which the account [Api] does not
/// accept, so validator ids are treated as opaque.  Only blank ids are refused.
///
/// # Examples
/// ```
/// use authz_smart_contract::util::contract_helpers::validate_validator_id;
///
/// let validator = validate_validator_id("cosmosvaloper1abc").expect("any non-blank id should pass");
/// assert_eq!("cosmosvaloper1abc", validator);
/// ```
pub fn validate_validator_id<S: AsRef<str>>(validator: S) -> AuthzResult<String> {
    let validator = validator.as_ref();
    if validator.trim().is_empty() {
        return ContractError::InvalidAddress {
            address: validator.to_string(),
            explanation: "validator ids must not be blank".to_string(),
        }
        .to_err();
    }
    validator.to_string().to_ok()
}
