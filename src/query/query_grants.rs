use cosmwasm_std::{to_json_binary, Binary};

use crate::{
    core::msg::GrantsResponse,
    store::grant_store::{get_grant, iterate_by_grantee_and_granter, GrantEntry},
    util::{
        aliases::{AuthzResult, DepsC},
        contract_helpers::validate_address,
        traits::ResultExtensions,
    },
};

/// Fetches the grants `granter` has given `grantee`, narrowed to a single message type when one
/// is provided.  Expired grants that have not been pruned are included.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `granter` The bech32 address of the account that gave the grants.
/// * `grantee` The bech32 address of the account that received the grants.
/// * `msg_type_url` An optional message type used to select a single grant.
pub fn load_grants<S1: AsRef<str>, S2: AsRef<str>>(
    deps: &DepsC,
    granter: S1,
    grantee: S2,
    msg_type_url: Option<String>,
) -> AuthzResult<GrantsResponse> {
    let granter_raw = deps
        .api
        .addr_canonicalize(validate_address(deps.api, granter)?.as_str())?;
    let grantee_raw = deps
        .api
        .addr_canonicalize(validate_address(deps.api, grantee)?.as_str())?;
    let entries = match msg_type_url {
        Some(msg_type_url) => get_grant(deps.storage, &granter_raw, &grantee_raw, &msg_type_url)?
            .map(|grant| GrantEntry {
                granter: granter_raw.clone(),
                grantee: grantee_raw.clone(),
                msg_type_url,
                grant,
            })
            .into_iter()
            .collect::<Vec<GrantEntry>>(),
        None => iterate_by_grantee_and_granter(deps.storage, &grantee_raw, &granter_raw)
            .collect::<AuthzResult<Vec<GrantEntry>>>()?,
    };
    GrantsResponse {
        grants: entries
            .iter()
            .map(|entry| entry.to_record(deps.api))
            .collect::<AuthzResult<Vec<_>>>()?,
    }
    .to_ok()
}

/// Serializes the result of [load_grants] for the query entrypoint.
pub fn query_grants<S1: AsRef<str>, S2: AsRef<str>>(
    deps: &DepsC,
    granter: S1,
    grantee: S2,
    msg_type_url: Option<String>,
) -> AuthzResult<Binary> {
    to_json_binary(&load_grants(deps, granter, grantee, msg_type_url)?)?.to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::from_json;
    use cosmwasm_std::testing::mock_dependencies;

    use crate::{
        core::{
            error::ContractError,
            msg::GrantsResponse,
            types::authz_msg::{MSG_DELEGATE_TYPE_URL, MSG_SEND_TYPE_URL},
        },
        testutil::{
            test_constants::{DEFAULT_GRANTEE_ADDRESS, DEFAULT_GRANTER_ADDRESS},
            test_utilities::{
                default_send_authorization, generic_authorization, test_grant_success,
                test_instantiate_success, InstArgs,
            },
        },
    };

    use super::{load_grants, query_grants};

    #[test]
    fn test_query_grants_with_and_without_type_filter() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_grant_success(deps.as_mut(), default_send_authorization());
        test_grant_success(deps.as_mut(), generic_authorization(MSG_DELEGATE_TYPE_URL));
        let all = from_json::<GrantsResponse>(
            &query_grants(
                &deps.as_ref(),
                DEFAULT_GRANTER_ADDRESS,
                DEFAULT_GRANTEE_ADDRESS,
                None,
            )
            .expect("the query should succeed"),
        )
        .expect("the response should deserialize");
        assert_eq!(2, all.grants.len(), "both grants should be returned");
        let sends = load_grants(
            &deps.as_ref(),
            DEFAULT_GRANTER_ADDRESS,
            DEFAULT_GRANTEE_ADDRESS,
            Some(MSG_SEND_TYPE_URL.to_string()),
        )
        .unwrap();
        assert_eq!(1, sends.grants.len());
        assert_eq!(MSG_SEND_TYPE_URL, sends.grants[0].msg_type_url);
        let reversed = load_grants(
            &deps.as_ref(),
            DEFAULT_GRANTEE_ADDRESS,
            DEFAULT_GRANTER_ADDRESS,
            None,
        )
        .unwrap();
        assert!(
            reversed.grants.is_empty(),
            "grants are directional and should not be found with the roles swapped",
        );
    }

    #[test]
    fn test_query_grants_rejects_invalid_addresses() {
        let deps = mock_dependencies();
        let error = load_grants(&deps.as_ref(), "X", DEFAULT_GRANTEE_ADDRESS, None).unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidAddress { .. }),
            "unexpected error encountered: {:?}",
            error,
        );
    }
}
