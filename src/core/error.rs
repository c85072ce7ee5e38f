use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Semver parsing error: {0}")]
    SemVer(#[from] semver::Error),

    #[error("Insufficient delegation from [{delegator}] to validator [{validator}]: requested {requested}, delegated {delegated}")]
    InsufficientDelegation {
        delegator: String,
        validator: String,
        requested: String,
        delegated: String,
    },

    #[error("Insufficient funds for account [{address}]: requested {requested}, available {available}")]
    InsufficientFunds {
        address: String,
        requested: String,
        available: String,
    },

    #[error("Invalid address provided [{address}]: {explanation}")]
    InvalidAddress {
        address: String,
        explanation: String,
    },

    #[error("Current contract name [{current_contract}] does not match provided migration name [{migration_contract}]")]
    InvalidContractName {
        current_contract: String,
        migration_contract: String,
    },

    #[error("Current contract version [{current_version}] is higher than provided migration version [{migration_version}]")]
    InvalidContractVersion {
        current_version: String,
        migration_version: String,
    },

    #[error("Expiration [{expiration}] must be after the current block time [{block_time}]")]
    InvalidExpiration {
        expiration: String,
        block_time: String,
    },

    #[error("{0}")]
    InvalidFunds(String),

    #[error("Message of type [{message_type}] was invalid. Invalid fields: {invalid_fields:?}")]
    InvalidMessageFields {
        message_type: String,
        invalid_fields: Vec<String>,
    },

    #[error("Invalid message type provided. Expected message type {expected_message_type}")]
    InvalidMessageType { expected_message_type: String },

    #[error("Invalid request: {explanation}")]
    InvalidRequest { explanation: String },

    #[error("Resource not found: {explanation}")]
    NotFound { explanation: String },

    #[error("Unauthorized: {explanation}")]
    Unauthorized { explanation: String },

    #[error("No authorization is registered for type url [{type_url}]")]
    UnregisteredAuthorization { type_url: String },

    #[error("Authorization for [{msg_type_url}] failed validation: {explanation}")]
    ValidationError {
        msg_type_url: String,
        explanation: String,
    },

    #[error("{msg}")]
    GenericError { msg: String },
}
impl ContractError {
    pub fn generic<S: Into<String>>(msg: S) -> ContractError {
        ContractError::GenericError { msg: msg.into() }
    }

    pub fn unauthorized<S: Into<String>>(explanation: S) -> ContractError {
        ContractError::Unauthorized {
            explanation: explanation.into(),
        }
    }

    pub fn invalid_request<S: Into<String>>(explanation: S) -> ContractError {
        ContractError::InvalidRequest {
            explanation: explanation.into(),
        }
    }
}
