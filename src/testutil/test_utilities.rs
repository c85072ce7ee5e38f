use cosmwasm_std::testing::{mock_env, mock_info};
use cosmwasm_std::{coin, Coin, Env, MessageInfo, Response, Timestamp};

use crate::authorization::capability::Authorization;
use crate::authorization::generic_authorization::GenericAuthorization;
use crate::authorization::send_authorization::SendAuthorization;
use crate::contract::{execute, instantiate};
use crate::core::msg::{ExecuteMsg, InitMsg};
use crate::core::types::authorization_any::AuthorizationAny;
use crate::core::types::genesis_grant::GenesisGrant;
use crate::util::aliases::{DepsMutC, EntryPointResponse};

use super::test_constants::{
    DEFAULT_ADMIN_ADDRESS, DEFAULT_DENOM, DEFAULT_GRANTEE_ADDRESS, DEFAULT_GRANTER_ADDRESS,
    DEFAULT_GRANT_DURATION_SECONDS, DEFAULT_SPEND_LIMIT,
};

pub struct InstArgs {
    pub env: Env,
    pub info: MessageInfo,
    pub admin: Option<String>,
    pub default_prune_limit: Option<u32>,
    pub genesis: Vec<GenesisGrant>,
}
impl Default for InstArgs {
    fn default() -> Self {
        InstArgs {
            env: mock_env(),
            info: mock_info(DEFAULT_ADMIN_ADDRESS, &[]),
            admin: None,
            default_prune_limit: None,
            genesis: vec![],
        }
    }
}

pub fn test_instantiate(deps: DepsMutC, args: InstArgs) -> EntryPointResponse {
    instantiate(
        deps,
        args.env,
        args.info,
        InitMsg {
            admin: args.admin,
            default_prune_limit: args.default_prune_limit,
            genesis: args.genesis,
        },
    )
}

pub fn test_instantiate_success(deps: DepsMutC, args: InstArgs) -> Response {
    test_instantiate(deps, args).expect("expected instantiation to succeed")
}

pub fn empty_mock_info<S: Into<String>>(sender: S) -> MessageInfo {
    mock_info(&sender.into(), &[])
}

pub fn mock_info_with_funds<S: Into<String>>(sender: S, funds: &[Coin]) -> MessageInfo {
    mock_info(&sender.into(), funds)
}

/// An env whose block time is moved forward from the mocked default by the given seconds.
pub fn env_after_seconds(seconds: u64) -> Env {
    let mut env = mock_env();
    env.block.time = env.block.time.plus_seconds(seconds);
    env
}

/// An expiration that is valid for grants given at the mocked block time.
pub fn default_expiration() -> Timestamp {
    mock_env()
        .block
        .time
        .plus_seconds(DEFAULT_GRANT_DURATION_SECONDS)
}

pub fn send_authorization(amount: u128) -> AuthorizationAny {
    SendAuthorization::new(vec![coin(amount, DEFAULT_DENOM)])
        .to_any()
        .expect("a send authorization should always pack")
}

pub fn default_send_authorization() -> AuthorizationAny {
    send_authorization(DEFAULT_SPEND_LIMIT)
}

pub fn generic_authorization<S: Into<String>>(msg_type_url: S) -> AuthorizationAny {
    GenericAuthorization::new(msg_type_url)
        .to_any()
        .expect("a generic authorization should always pack")
}

/// Deposits funds into the contract's ledger on behalf of the address.
pub fn fund_account<S: Into<String>>(deps: DepsMutC, address: S, amount: u128) {
    execute(
        deps,
        mock_env(),
        mock_info_with_funds(address, &[coin(amount, DEFAULT_DENOM)]),
        ExecuteMsg::Deposit {},
    )
    .expect("the deposit should succeed");
}

/// Grants the default grantee the given authorization from the default granter.
pub fn test_grant_success(deps: DepsMutC, authorization: AuthorizationAny) -> Response {
    execute(
        deps,
        mock_env(),
        empty_mock_info(DEFAULT_GRANTER_ADDRESS),
        ExecuteMsg::Grant {
            grantee: DEFAULT_GRANTEE_ADDRESS.to_string(),
            authorization,
            expiration: default_expiration(),
        },
    )
    .expect("expected the grant to succeed")
}

pub fn single_attribute_for_key<'a, T>(response: &'a Response<T>, key: &'a str) -> &'a str {
    response
        .attributes
        .iter()
        .find(|attr| attr.key.as_str() == key)
        .unwrap()
        .value
        .as_str()
}
