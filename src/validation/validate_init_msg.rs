use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::core::types::genesis_grant::GenesisGrant;
use crate::util::aliases::AuthzResult;
use crate::util::traits::ResultExtensions;

/// Structural checks on the init msg.  Genesis grants get their full validation (addresses,
/// timestamps and capability decoding) when they are imported.
pub fn validate_init_msg(msg: &InitMsg) -> AuthzResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if let Some(admin) = &msg.admin {
        if admin.is_empty() {
            invalid_fields.push("admin: must not be blank when provided".to_string());
        }
    }
    if msg.default_prune_limit == Some(0) {
        invalid_fields.push("default_prune_limit: must be greater than zero".to_string());
    }
    let mut genesis_messages = msg
        .genesis
        .iter()
        .enumerate()
        .flat_map(|(index, grant)| validate_genesis_grant(index, grant))
        .collect::<Vec<String>>();
    invalid_fields.append(&mut genesis_messages);
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: "Instantiate".to_string(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}

fn validate_genesis_grant(index: usize, grant: &GenesisGrant) -> Vec<String> {
    let mut invalid_fields: Vec<String> = vec![];
    if grant.granter.is_empty() {
        invalid_fields.push(format!("genesis[{}]:granter: must not be blank", index));
    }
    if grant.grantee.is_empty() {
        invalid_fields.push(format!("genesis[{}]:grantee: must not be blank", index));
    }
    if grant.authorization.type_url.is_empty() {
        invalid_fields.push(format!(
            "genesis[{}]:authorization:type_url: must not be blank",
            index
        ));
    }
    if grant.expiration.is_empty() {
        invalid_fields.push(format!("genesis[{}]:expiration: must not be blank", index));
    }
    invalid_fields
}
