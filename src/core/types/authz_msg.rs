use cosmwasm_std::{Binary, Coin};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const MSG_SEND_TYPE_URL: &str = "/lbm.bank.v1.Msg/Send";
pub const MSG_DELEGATE_TYPE_URL: &str = "/lbm.staking.v1.Msg/Delegate";
pub const MSG_UNDELEGATE_TYPE_URL: &str = "/lbm.staking.v1.Msg/Undelegate";
pub const MSG_BEGIN_REDELEGATE_TYPE_URL: &str = "/lbm.staking.v1.Msg/BeginRedelegate";

/// A message that a grantee can ask to have executed on behalf of the account that signs it.
/// Each variant has exactly one required signer, which is the granter whose authority is used.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuthzMsg {
    Send {
        from_address: String,
        to_address: String,
        amount: Vec<Coin>,
    },
    Delegate {
        delegator_address: String,
        validator_address: String,
        amount: Coin,
    },
    Undelegate {
        delegator_address: String,
        validator_address: String,
        amount: Coin,
    },
    BeginRedelegate {
        delegator_address: String,
        validator_src_address: String,
        validator_dst_address: String,
        amount: Coin,
    },
    /// Any other message type.  Only executable when the router has a handler for `type_url`.
    Custom {
        type_url: String,
        signer: String,
        value: Binary,
    },
}
impl AuthzMsg {
    pub fn send<S1: Into<String>, S2: Into<String>>(
        from_address: S1,
        to_address: S2,
        amount: Vec<Coin>,
    ) -> Self {
        AuthzMsg::Send {
            from_address: from_address.into(),
            to_address: to_address.into(),
            amount,
        }
    }

    pub fn delegate<S1: Into<String>, S2: Into<String>>(
        delegator_address: S1,
        validator_address: S2,
        amount: Coin,
    ) -> Self {
        AuthzMsg::Delegate {
            delegator_address: delegator_address.into(),
            validator_address: validator_address.into(),
            amount,
        }
    }

    /// The fully-qualified service method name identifying this message's type.
    pub fn msg_type_url(&self) -> String {
        match self {
            AuthzMsg::Send { .. } => MSG_SEND_TYPE_URL,
            AuthzMsg::Delegate { .. } => MSG_DELEGATE_TYPE_URL,
            AuthzMsg::Undelegate { .. } => MSG_UNDELEGATE_TYPE_URL,
            AuthzMsg::BeginRedelegate { .. } => MSG_BEGIN_REDELEGATE_TYPE_URL,
            AuthzMsg::Custom { type_url, .. } => type_url.as_str(),
        }
        .to_string()
    }

    /// The single account that must authorize this message.
    pub fn signer(&self) -> &str {
        match self {
            AuthzMsg::Send { from_address, .. } => from_address,
            AuthzMsg::Delegate {
                delegator_address, ..
            } => delegator_address,
            AuthzMsg::Undelegate {
                delegator_address, ..
            } => delegator_address,
            AuthzMsg::BeginRedelegate {
                delegator_address, ..
            } => delegator_address,
            AuthzMsg::Custom { signer, .. } => signer,
        }
    }

    /// Stateless checks that do not require storage access.
    pub fn validate_basic(&self) -> Vec<String> {
        let mut invalid_fields: Vec<String> = vec![];
        match self {
            AuthzMsg::Send { amount, .. } => {
                if amount.is_empty() || amount.iter().any(|c| c.amount.is_zero()) {
                    invalid_fields.push("send:amount: must contain only positive coins".to_string());
                }
            }
            AuthzMsg::Delegate { amount, .. }
            | AuthzMsg::Undelegate { amount, .. }
            | AuthzMsg::BeginRedelegate { amount, .. } => {
                if amount.amount.is_zero() {
                    invalid_fields.push("staking:amount: must be positive".to_string());
                }
            }
            AuthzMsg::Custom { type_url, .. } => {
                if !type_url.starts_with('/') {
                    invalid_fields.push("custom:type_url: must begin with '/'".to_string());
                }
            }
        }
        invalid_fields
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::{coin, Binary};

    use super::{AuthzMsg, MSG_BEGIN_REDELEGATE_TYPE_URL, MSG_SEND_TYPE_URL};

    #[test]
    fn test_send_identifies_its_type_and_signer() {
        let msg = AuthzMsg::send("alice", "carol", vec![coin(30, "stake")]);
        assert_eq!(MSG_SEND_TYPE_URL, msg.msg_type_url());
        assert_eq!("alice", msg.signer(), "the sender must be the signer");
    }

    #[test]
    fn test_redelegate_signer_is_the_delegator() {
        let msg = AuthzMsg::BeginRedelegate {
            delegator_address: "alice".to_string(),
            validator_src_address: "val-a".to_string(),
            validator_dst_address: "val-b".to_string(),
            amount: coin(10, "stake"),
        };
        assert_eq!(MSG_BEGIN_REDELEGATE_TYPE_URL, msg.msg_type_url());
        assert_eq!("alice", msg.signer());
    }

    #[test]
    fn test_custom_uses_its_own_type_url() {
        let msg = AuthzMsg::Custom {
            type_url: "/x.Msg/Y".to_string(),
            signer: "alice".to_string(),
            value: Binary::default(),
        };
        assert_eq!("/x.Msg/Y", msg.msg_type_url());
        assert!(msg.validate_basic().is_empty());
    }

    #[test]
    fn test_validate_basic_rejects_zero_amounts() {
        let msg = AuthzMsg::send("alice", "carol", vec![coin(0, "stake")]);
        assert_eq!(1, msg.validate_basic().len());
        let msg = AuthzMsg::delegate("alice", "val", coin(0, "stake"));
        assert_eq!(1, msg.validate_basic().len());
    }
}
