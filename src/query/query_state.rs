use cosmwasm_std::{to_json_binary, Binary};

use crate::{
    core::state::STATE_V1,
    util::{
        aliases::{AuthzResult, DepsC},
        traits::ResultExtensions,
    },
};

/// A query that directly returns the contract's stored [StateV1](crate::core::state::StateV1) value.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
pub fn query_state(deps: &DepsC) -> AuthzResult<Binary> {
    let state = STATE_V1.load(deps.storage)?;
    to_json_binary(&state)?.to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::from_json;
    use cosmwasm_std::testing::mock_dependencies;

    use crate::{
        core::state::StateV1,
        testutil::{
            test_constants::DEFAULT_ADMIN_ADDRESS,
            test_utilities::{test_instantiate_success, InstArgs},
        },
        util::constants::DEFAULT_PRUNE_LIMIT,
    };

    use super::*;

    #[test]
    fn test_successful_query_state() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let state_binary = query_state(&deps.as_ref()).expect("state query should return properly");
        let state = from_json::<StateV1>(&state_binary).expect("state should deserialize correctly");
        assert_eq!(
            DEFAULT_ADMIN_ADDRESS,
            state.admin.as_str(),
            "the default info name should be tagged as the admin address after default instantiation",
        );
        assert_eq!(
            DEFAULT_PRUNE_LIMIT, state.default_prune_limit,
            "the default prune limit should be used when none is provided",
        );
    }
}
