use cosmwasm_std::Coin;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::error::ContractError;
use crate::core::types::authorization_any::AuthorizationAny;
use crate::core::types::authz_msg::{AuthzMsg, MSG_SEND_TYPE_URL};
use crate::core::types::block_context::BlockContext;
use crate::util::aliases::AuthzResult;
use crate::util::coins::{coins_display, safe_sub_coins};
use crate::util::functions::distinct_count_by_property;
use crate::util::traits::ResultExtensions;

use super::capability::{AcceptResponse, Authorization, RegisteredAuthorization};

/// Allows the grantee to send the granter's coins, up to a per-denomination spend limit that
/// shrinks with every accepted send.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct SendAuthorization {
    pub spend_limit: Vec<Coin>,
    /// Recipients the grantee may send to.  Empty allows any recipient.
    #[serde(default)]
    pub allow_list: Vec<String>,
}
impl SendAuthorization {
    pub fn new(spend_limit: Vec<Coin>) -> Self {
        Self {
            spend_limit,
            allow_list: vec![],
        }
    }

    pub fn with_allow_list<S: Into<String>>(mut self, allow_list: Vec<S>) -> Self {
        self.allow_list = allow_list.into_iter().map(|a| a.into()).collect();
        self
    }

    fn validation_error<S: Into<String>>(explanation: S) -> ContractError {
        ContractError::ValidationError {
            msg_type_url: MSG_SEND_TYPE_URL.to_string(),
            explanation: explanation.into(),
        }
    }
}
impl Authorization for SendAuthorization {
    fn msg_type_url(&self) -> String {
        MSG_SEND_TYPE_URL.to_string()
    }

    fn accept(&self, msg: &AuthzMsg, _ctx: &BlockContext) -> AuthzResult<AcceptResponse> {
        let (to_address, amount) = match msg {
            AuthzMsg::Send {
                to_address, amount, ..
            } => (to_address, amount),
            _ => {
                return ContractError::InvalidMessageType {
                    expected_message_type: MSG_SEND_TYPE_URL.to_string(),
                }
                .to_err()
            }
        };
        if !self.allow_list.is_empty() && !self.allow_list.contains(to_address) {
            return AcceptResponse::reject().to_ok();
        }
        let remaining = safe_sub_coins(&self.spend_limit, amount).map_err(|available| {
            ContractError::unauthorized(format!(
                "requested amount [{}] exceeds the remaining spend limit of [{}]",
                coins_display(amount),
                available,
            ))
        })?;
        if remaining.is_empty() {
            AcceptResponse::accept_and_delete().to_ok()
        } else {
            AcceptResponse::accept_with_update(Box::new(SendAuthorization {
                spend_limit: remaining,
                allow_list: self.allow_list.clone(),
            }))
            .to_ok()
        }
    }

    fn validate_basic(&self) -> AuthzResult<()> {
        if self.spend_limit.is_empty() {
            return Self::validation_error("spend_limit must not be empty").to_err();
        }
        if self.spend_limit.iter().any(|c| c.amount.is_zero()) {
            return Self::validation_error("spend_limit must only contain positive amounts")
                .to_err();
        }
        if self.spend_limit.iter().any(|c| c.denom.is_empty()) {
            return Self::validation_error("spend_limit denominations must not be blank").to_err();
        }
        if distinct_count_by_property(&self.spend_limit, |c| &c.denom) != self.spend_limit.len() {
            return Self::validation_error("spend_limit must not contain duplicate denominations")
                .to_err();
        }
        if distinct_count_by_property(&self.allow_list, |a| a) != self.allow_list.len() {
            return Self::validation_error("allow_list must not contain duplicate addresses")
                .to_err();
        }
        Ok(())
    }

    fn to_any(&self) -> AuthzResult<AuthorizationAny> {
        AuthorizationAny::pack(Self::TYPE_URL, self)
    }
}
impl RegisteredAuthorization for SendAuthorization {
    const TYPE_URL: &'static str = "/lbm.bank.v1.SendAuthorization";
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, Timestamp};

    use crate::authorization::capability::{AcceptResponse, Authorization};
    use crate::authorization::registry::AuthorizationRegistry;
    use crate::core::error::ContractError;
    use crate::core::types::authz_msg::AuthzMsg;
    use crate::core::types::block_context::BlockContext;

    use super::SendAuthorization;

    fn ctx() -> BlockContext {
        BlockContext::at_time(Timestamp::from_seconds(100))
    }

    fn accept(authorization: &SendAuthorization, msg: AuthzMsg) -> AcceptResponse {
        authorization
            .accept(&msg, &ctx())
            .expect("the send should be judged without error")
    }

    fn remaining_limit(response: AcceptResponse) -> SendAuthorization {
        let any = response
            .updated
            .expect("an updated authorization should be returned")
            .to_any()
            .expect("the update should pack");
        any.unpack::<SendAuthorization>()
            .expect("the update should be a send authorization")
    }

    #[test]
    fn test_partial_spend_decrements_the_limit() {
        let response = accept(
            &SendAuthorization::new(vec![coin(100, "stake")]),
            AuthzMsg::send("alice", "carol", vec![coin(30, "stake")]),
        );
        assert!(response.accepted);
        assert!(!response.delete, "a partial spend should not delete the grant");
        assert_eq!(vec![coin(70, "stake")], remaining_limit(response).spend_limit);
    }

    #[test]
    fn test_exact_spend_signals_delete() {
        let response = accept(
            &SendAuthorization::new(vec![coin(100, "stake")]),
            AuthzMsg::send("alice", "carol", vec![coin(100, "stake")]),
        );
        assert!(response.accepted);
        assert!(response.delete, "a fully consumed limit should delete the grant");
        assert!(
            response.updated.is_none(),
            "no empty authorization should be handed back"
        );
    }

    #[test]
    fn test_untouched_denominations_survive() {
        let response = accept(
            &SendAuthorization::new(vec![coin(5, "atom"), coin(100, "stake")]),
            AuthzMsg::send("alice", "carol", vec![coin(100, "stake")]),
        );
        assert!(!response.delete, "the atom limit is still available");
        assert_eq!(vec![coin(5, "atom")], remaining_limit(response).spend_limit);
    }

    #[test]
    fn test_overspend_is_an_error() {
        let error = SendAuthorization::new(vec![coin(10, "stake")])
            .accept(
                &AuthzMsg::send("alice", "carol", vec![coin(11, "stake")]),
                &ctx(),
            )
            .unwrap_err();
        assert!(
            matches!(error, ContractError::Unauthorized { .. }),
            "unexpected error encountered: {:?}",
            error,
        );
    }

    #[test]
    fn test_unknown_denomination_is_an_error() {
        SendAuthorization::new(vec![coin(10, "stake")])
            .accept(&AuthzMsg::send("alice", "carol", vec![coin(1, "atom")]), &ctx())
            .expect_err("a denomination with no limit cannot be spent");
    }

    #[test]
    fn test_wrong_message_shape_is_an_error() {
        let error = SendAuthorization::new(vec![coin(10, "stake")])
            .accept(&AuthzMsg::delegate("alice", "val", coin(1, "stake")), &ctx())
            .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidMessageType { .. }),
            "unexpected error encountered: {:?}",
            error,
        );
    }

    #[test]
    fn test_allow_list_rejects_other_recipients() {
        let authorization =
            SendAuthorization::new(vec![coin(10, "stake")]).with_allow_list(vec!["carol"]);
        assert!(
            accept(
                &authorization,
                AuthzMsg::send("alice", "carol", vec![coin(1, "stake")])
            )
            .accepted
        );
        assert!(
            !accept(
                &authorization,
                AuthzMsg::send("alice", "mallory", vec![coin(1, "stake")])
            )
            .accepted
        );
    }

    #[test]
    fn test_validate_basic() {
        SendAuthorization::new(vec![coin(1, "stake")])
            .validate_basic()
            .expect("a positive limit should be valid");
        for invalid in [
            SendAuthorization::new(vec![]),
            SendAuthorization::new(vec![coin(0, "stake")]),
            SendAuthorization::new(vec![coin(1, "stake"), coin(2, "stake")]),
            SendAuthorization::new(vec![coin(1, "stake")]).with_allow_list(vec!["a", "a"]),
        ] {
            let error = invalid.validate_basic().unwrap_err();
            assert!(
                matches!(error, ContractError::ValidationError { .. }),
                "unexpected error encountered for {:?}: {:?}",
                invalid,
                error,
            );
        }
    }

    #[test]
    fn test_variant_survives_registry_round_trip() {
        let authorization =
            SendAuthorization::new(vec![coin(100, "stake")]).with_allow_list(vec!["carol"]);
        let decoded = AuthorizationRegistry::default()
            .decode(&authorization.to_any().expect("packing should succeed"))
            .expect("a send authorization should be registered");
        assert_eq!(
            authorization.to_any().unwrap(),
            decoded.to_any().unwrap(),
            "the decoded variant should repack identically",
        );
    }
}
