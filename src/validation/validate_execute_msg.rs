use cosmwasm_std::Coin;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::types::authorization_any::AuthorizationAny;
use crate::util::aliases::AuthzResult;
use crate::util::traits::ResultExtensions;

/// Rejects execute messages with blank or zero fields before any route runs.  Addresses are
/// checked by the routes themselves so that malformed ones report as
/// [InvalidAddress](crate::core::error::ContractError::InvalidAddress).
pub fn validate_execute_msg(msg: &ExecuteMsg) -> AuthzResult<()> {
    match msg {
        ExecuteMsg::Grant { authorization, .. } => validate_grant(authorization),
        ExecuteMsg::Revoke { msg_type_url, .. } => validate_revoke(msg_type_url),
        ExecuteMsg::PruneExpiredGrants { limit } => validate_prune_expired_grants(limit),
        ExecuteMsg::Withdraw { amount } => validate_withdraw(amount),
        // Batches are validated as a whole by the dispatcher
        ExecuteMsg::Exec { .. } => Ok(()),
        ExecuteMsg::Deposit {} => Ok(()),
    }
}

fn validate_grant(authorization: &AuthorizationAny) -> AuthzResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if authorization.type_url.is_empty() {
        invalid_fields.push("authorization:type_url: must not be blank".to_string());
    }
    if authorization.value.is_empty() {
        invalid_fields.push("authorization:value: must not be empty".to_string());
    }
    gen_validation_response("ExecuteMsg::Grant", invalid_fields)
}

fn validate_revoke(msg_type_url: &str) -> AuthzResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if msg_type_url.is_empty() {
        invalid_fields.push("msg_type_url: must not be blank".to_string());
    }
    gen_validation_response("ExecuteMsg::Revoke", invalid_fields)
}

fn validate_prune_expired_grants(limit: &Option<u32>) -> AuthzResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if *limit == Some(0) {
        invalid_fields.push("limit: must be greater than zero when provided".to_string());
    }
    gen_validation_response("ExecuteMsg::PruneExpiredGrants", invalid_fields)
}

fn validate_withdraw(amount: &[Coin]) -> AuthzResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if amount.is_empty() {
        invalid_fields.push("amount: at least one coin must be requested".to_string());
    }
    if amount.iter().any(|coin| coin.amount.is_zero()) {
        invalid_fields.push("amount: every coin must be positive".to_string());
    }
    gen_validation_response("ExecuteMsg::Withdraw", invalid_fields)
}

fn gen_validation_response<S: Into<String>>(
    message_type: S,
    invalid_fields: Vec<String>,
) -> AuthzResult<()> {
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: message_type.into(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}
