use cosmwasm_std::{to_json_binary, Binary};

use crate::{
    core::msg::GrantsResponse,
    store::grant_store::iterate_by_grantee,
    util::{
        aliases::{AuthzResult, DepsC},
        contract_helpers::validate_address,
        traits::ResultExtensions,
    },
};

/// Every grant held by `grantee`, from any granter.
pub fn load_grantee_grants<S: AsRef<str>>(deps: &DepsC, grantee: S) -> AuthzResult<GrantsResponse> {
    let grantee_raw = deps
        .api
        .addr_canonicalize(validate_address(deps.api, grantee)?.as_str())?;
    let grants = iterate_by_grantee(deps.storage, &grantee_raw)
        .map(|entry| entry?.to_record(deps.api))
        .collect::<AuthzResult<Vec<_>>>()?;
    GrantsResponse { grants }.to_ok()
}

pub fn query_grantee_grants<S: AsRef<str>>(deps: &DepsC, grantee: S) -> AuthzResult<Binary> {
    to_json_binary(&load_grantee_grants(deps, grantee)?)?.to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::{mock_dependencies, mock_env};

    use crate::{
        contract::execute,
        core::msg::ExecuteMsg,
        testutil::{
            test_constants::DEFAULT_GRANTEE_ADDRESS,
            test_utilities::{
                default_expiration, default_send_authorization, empty_mock_info,
                test_grant_success, test_instantiate_success, InstArgs,
            },
        },
    };

    use super::load_grantee_grants;

    #[test]
    fn test_grantee_grants_span_granters() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_grant_success(deps.as_mut(), default_send_authorization());
        execute(
            deps.as_mut(),
            mock_env(),
            empty_mock_info("second-granter"),
            ExecuteMsg::Grant {
                grantee: DEFAULT_GRANTEE_ADDRESS.to_string(),
                authorization: default_send_authorization(),
                expiration: default_expiration(),
            },
        )
        .expect("the second grant should succeed");
        let grants = load_grantee_grants(&deps.as_ref(), DEFAULT_GRANTEE_ADDRESS)
            .expect("the query should succeed")
            .grants;
        assert_eq!(2, grants.len());
        assert!(
            load_grantee_grants(&deps.as_ref(), "nobody")
                .unwrap()
                .grants
                .is_empty(),
            "an account with no grants should get an empty list",
        );
    }
}
