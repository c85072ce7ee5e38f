use crate::authorization::registry::AuthorizationRegistry;
use crate::core::msg::{ExecuteMsg, InitMsg, MigrateMsg, QueryMsg};
use crate::execute::deposit::deposit;
use crate::execute::exec::{exec, ExecV1};
use crate::execute::grant::{grant, GrantV1};
use crate::execute::prune_expired_grants::{prune_expired_grants, PruneExpiredGrantsV1};
use crate::execute::revoke::{revoke, RevokeV1};
use crate::execute::withdraw::{withdraw, WithdrawV1};
use crate::instantiate::init_contract::init_contract;
use crate::migrate::migrate_contract::migrate_contract;
use crate::query::query_balance::query_balance;
use crate::query::query_delegation::query_delegation;
use crate::query::query_export_genesis::query_export_genesis;
use crate::query::query_grantee_grants::query_grantee_grants;
use crate::query::query_granter_grants::query_granter_grants;
use crate::query::query_grants::query_grants;
use crate::query::query_state::query_state;
use crate::query::query_version::query_version;
use crate::router::ledger_router::LedgerRouter;
use crate::service::authz_service::AuthzService;
use crate::util::aliases::{AuthzResult, DepsC, DepsMutC, EntryPointResponse};
use crate::validation::validate_execute_msg::validate_execute_msg;
use crate::validation::validate_init_msg::validate_init_msg;
use cosmwasm_std::{entry_point, Binary, Env, MessageInfo};

#[entry_point]
pub fn instantiate(
    deps: DepsMutC,
    env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    // Ensure the init message is properly formatted before doing anything
    validate_init_msg(&msg)?;
    // Execute the core instantiation code
    init_contract(deps, env, info, msg)
}

#[entry_point]
pub fn query(deps: DepsC, _env: Env, msg: QueryMsg) -> AuthzResult<Binary> {
    match msg {
        QueryMsg::Grants {
            granter,
            grantee,
            msg_type_url,
        } => query_grants(&deps, granter, grantee, msg_type_url),
        QueryMsg::GranterGrants { granter } => query_granter_grants(&deps, granter),
        QueryMsg::GranteeGrants { grantee } => query_grantee_grants(&deps, grantee),
        QueryMsg::Balance { address } => query_balance(&deps, address),
        QueryMsg::Delegation {
            delegator,
            validator,
        } => query_delegation(&deps, delegator, validator),
        QueryMsg::ExportGenesis {} => query_export_genesis(&deps),
        QueryMsg::State {} => query_state(&deps),
        QueryMsg::Version {} => query_version(&deps),
    }
}

#[entry_point]
pub fn execute(deps: DepsMutC, env: Env, info: MessageInfo, msg: ExecuteMsg) -> EntryPointResponse {
    // Ensure the execute message is properly formatted before doing anything
    validate_execute_msg(&msg)?;
    // The registry and router hold no state, so each execution builds its own
    let registry = AuthorizationRegistry::default();
    let router = LedgerRouter::default();
    match msg {
        ExecuteMsg::Grant { .. } => grant(
            AuthzService::new(deps, &registry, &router),
            env,
            info,
            GrantV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::Revoke { .. } => revoke(
            AuthzService::new(deps, &registry, &router),
            info,
            RevokeV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::Exec { .. } => exec(
            AuthzService::new(deps, &registry, &router),
            env,
            info,
            ExecV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::PruneExpiredGrants { .. } => prune_expired_grants(
            AuthzService::new(deps, &registry, &router),
            env,
            info,
            PruneExpiredGrantsV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::Deposit {} => deposit(deps, info),
        ExecuteMsg::Withdraw { .. } => withdraw(deps, info, WithdrawV1::from_execute_msg(msg)?),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMutC, _env: Env, msg: MigrateMsg) -> EntryPointResponse {
    match msg {
        MigrateMsg::ContractUpgrade {} => migrate_contract(deps),
    }
}
