use cosmwasm_std::Coin;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::error::ContractError;
use crate::core::types::authorization_any::AuthorizationAny;
use crate::core::types::authz_msg::{
    AuthzMsg, MSG_BEGIN_REDELEGATE_TYPE_URL, MSG_DELEGATE_TYPE_URL, MSG_UNDELEGATE_TYPE_URL,
};
use crate::core::types::block_context::BlockContext;
use crate::util::aliases::AuthzResult;
use crate::util::functions::distinct_count_by_property;
use crate::util::traits::ResultExtensions;

use super::capability::{AcceptResponse, Authorization, RegisteredAuthorization};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StakeAuthorizationType {
    Delegate,
    Undelegate,
    Redelegate,
}
impl StakeAuthorizationType {
    pub fn msg_type_url(&self) -> &'static str {
        match self {
            StakeAuthorizationType::Delegate => MSG_DELEGATE_TYPE_URL,
            StakeAuthorizationType::Undelegate => MSG_UNDELEGATE_TYPE_URL,
            StakeAuthorizationType::Redelegate => MSG_BEGIN_REDELEGATE_TYPE_URL,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StakeValidators {
    /// Only these validators may be targeted.
    AllowList { addresses: Vec<String> },
    /// Every validator except these may be targeted.
    DenyList { addresses: Vec<String> },
}
impl StakeValidators {
    fn addresses(&self) -> &[String] {
        match self {
            StakeValidators::AllowList { addresses } => addresses,
            StakeValidators::DenyList { addresses } => addresses,
        }
    }

    fn permits(&self, validator: &str) -> bool {
        match self {
            StakeValidators::AllowList { addresses } => addresses.iter().any(|a| a == validator),
            StakeValidators::DenyList { addresses } => !addresses.iter().any(|a| a == validator),
        }
    }
}

/// Allows the grantee to move the granter's stake, optionally bounded by a token budget that is
/// consumed like a [SendAuthorization](super::send_authorization::SendAuthorization) spend limit.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct StakeAuthorization {
    /// Unbounded when unset.
    pub max_tokens: Option<Coin>,
    pub validators: StakeValidators,
    pub authorization_type: StakeAuthorizationType,
}
impl StakeAuthorization {
    pub fn new(
        max_tokens: Option<Coin>,
        validators: StakeValidators,
        authorization_type: StakeAuthorizationType,
    ) -> Self {
        Self {
            max_tokens,
            validators,
            authorization_type,
        }
    }

    /// Pulls out the validator being targeted and the amount being moved, if the message is the
    /// kind this authorization governs.
    fn target<'a>(&self, msg: &'a AuthzMsg) -> Option<(&'a str, &'a Coin)> {
        match (self.authorization_type, msg) {
            (
                StakeAuthorizationType::Delegate,
                AuthzMsg::Delegate {
                    validator_address,
                    amount,
                    ..
                },
            ) => Some((validator_address, amount)),
            (
                StakeAuthorizationType::Undelegate,
                AuthzMsg::Undelegate {
                    validator_address,
                    amount,
                    ..
                },
            ) => Some((validator_address, amount)),
            (
                StakeAuthorizationType::Redelegate,
                AuthzMsg::BeginRedelegate {
                    validator_dst_address,
                    amount,
                    ..
                },
            ) => Some((validator_dst_address, amount)),
            _ => None,
        }
    }

    fn validation_error<S: Into<String>>(&self, explanation: S) -> ContractError {
        ContractError::ValidationError {
            msg_type_url: self.msg_type_url(),
            explanation: explanation.into(),
        }
    }
}
impl Authorization for StakeAuthorization {
    fn msg_type_url(&self) -> String {
        self.authorization_type.msg_type_url().to_string()
    }

    fn accept(&self, msg: &AuthzMsg, _ctx: &BlockContext) -> AuthzResult<AcceptResponse> {
        let (validator, amount) = match self.target(msg) {
            Some(target) => target,
            None => {
                return ContractError::InvalidMessageType {
                    expected_message_type: self.msg_type_url(),
                }
                .to_err()
            }
        };
        if !self.validators.permits(validator) {
            return AcceptResponse::reject().to_ok();
        }
        let max_tokens = match &self.max_tokens {
            Some(max_tokens) => max_tokens,
            None => return AcceptResponse::accept_with_update(Box::new(self.clone())).to_ok(),
        };
        if max_tokens.denom != amount.denom {
            return ContractError::unauthorized(format!(
                "requested denom [{}] does not match the authorized denom [{}]",
                amount.denom, max_tokens.denom,
            ))
            .to_err();
        }
        let remaining = max_tokens.amount.checked_sub(amount.amount).map_err(|_| {
            ContractError::unauthorized(format!(
                "requested amount [{}] exceeds the remaining token limit of [{}]",
                amount, max_tokens,
            ))
        })?;
        if remaining.is_zero() {
            return AcceptResponse::accept_and_delete().to_ok();
        }
        AcceptResponse::accept_with_update(Box::new(StakeAuthorization {
            max_tokens: Some(Coin {
                denom: max_tokens.denom.clone(),
                amount: remaining,
            }),
            ..self.clone()
        }))
        .to_ok()
    }

    fn validate_basic(&self) -> AuthzResult<()> {
        if let Some(max_tokens) = &self.max_tokens {
            if max_tokens.amount.is_zero() {
                return self
                    .validation_error("max_tokens must be positive when provided")
                    .to_err();
            }
        }
        let addresses = self.validators.addresses();
        if addresses.is_empty() {
            return self
                .validation_error("an allow list or deny list of validators must be provided")
                .to_err();
        }
        if distinct_count_by_property(addresses, |a| a) != addresses.len() {
            return self
                .validation_error("validator lists must not contain duplicates")
                .to_err();
        }
        Ok(())
    }

    fn to_any(&self) -> AuthzResult<AuthorizationAny> {
        AuthorizationAny::pack(Self::TYPE_URL, self)
    }
}
impl RegisteredAuthorization for StakeAuthorization {
    const TYPE_URL: &'static str = "/lbm.staking.v1.StakeAuthorization";
}
