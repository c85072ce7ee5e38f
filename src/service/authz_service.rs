use cosmwasm_std::{Addr, Api, CanonicalAddr, Timestamp};

use crate::authorization::registry::AuthorizationRegistry;
use crate::core::error::ContractError;
use crate::core::types::authorization_any::AuthorizationAny;
use crate::core::types::authz_msg::AuthzMsg;
use crate::core::types::block_context::BlockContext;
use crate::core::types::exec_result::MsgExecutionResult;
use crate::core::types::genesis_grant::GenesisState;
use crate::core::types::grant::Grant;
use crate::store::grant_queue::expired_entries;
use crate::store::grant_store::{delete_grant, set_grant};
use crate::util::aliases::{AuthzResult, DepsMutC};
use crate::util::deps_container::DepsContainer;
use crate::util::functions::timestamp_to_rfc3339;
use crate::util::traits::ResultExtensions;

use super::deps_manager::DepsManager;
use super::dispatcher::{lookup_valid, Dispatcher};
use super::genesis::{export_genesis, import_genesis};
use super::grant_keeper::GrantKeeper;
use super::message_router::MessageRouter;

fn canonical_pair(
    api: &dyn Api,
    granter: &Addr,
    grantee: &Addr,
) -> AuthzResult<(CanonicalAddr, CanonicalAddr)> {
    (
        api.addr_canonicalize(granter.as_str())?,
        api.addr_canonicalize(grantee.as_str())?,
    )
        .to_ok()
}

/// Ties the grant store, the capability registry and the message router together behind the
/// [GrantKeeper] operations.
pub struct AuthzService<'a, 'r> {
    deps: DepsContainer<'a>,
    registry: &'r AuthorizationRegistry,
    router: &'r dyn MessageRouter,
}
impl<'a, 'r> AuthzService<'a, 'r> {
    pub fn new(
        deps: DepsMutC<'a>,
        registry: &'r AuthorizationRegistry,
        router: &'r dyn MessageRouter,
    ) -> Self {
        Self {
            deps: DepsContainer::new(deps),
            registry,
            router,
        }
    }
}
impl<'a, 'r> DepsManager<'a> for AuthzService<'a, 'r> {
    fn use_deps<T, F>(&self, deps_fn: F) -> T
    where
        F: FnMut(&mut DepsMutC) -> T,
    {
        self.deps.use_deps(deps_fn)
    }

    fn into_deps(self) -> DepsMutC<'a> {
        self.deps.get()
    }
}
impl<'a, 'r> GrantKeeper for AuthzService<'a, 'r> {
    fn can_route<S: AsRef<str>>(&self, msg_type_url: S) -> bool {
        self.router.route(msg_type_url.as_ref()).is_some()
    }

    fn msg_type_url_of(&self, authorization: &AuthorizationAny) -> AuthzResult<String> {
        self.registry
            .decode(authorization)
            .map(|capability| capability.msg_type_url())
    }

    fn grant(
        &self,
        granter: &Addr,
        grantee: &Addr,
        authorization: &AuthorizationAny,
        expiration: &Timestamp,
        ctx: &BlockContext,
    ) -> AuthzResult<String> {
        if granter == grantee {
            return ContractError::invalid_request(format!(
                "granter [{}] cannot grant authorization to itself",
                granter
            ))
            .to_err();
        }
        if *expiration <= ctx.time {
            return ContractError::InvalidExpiration {
                expiration: timestamp_to_rfc3339(expiration)?,
                block_time: timestamp_to_rfc3339(&ctx.time)?,
            }
            .to_err();
        }
        let capability = self.registry.decode(authorization)?;
        capability.validate_basic()?;
        let msg_type_url = capability.msg_type_url();
        let grant = Grant::new(capability.to_any()?, *expiration);
        self.use_deps(|deps| {
            let (granter_raw, grantee_raw) = canonical_pair(deps.api, granter, grantee)?;
            set_grant(deps.storage, &granter_raw, &grantee_raw, &msg_type_url, &grant)
        })?;
        msg_type_url.to_ok()
    }

    fn revoke<S: AsRef<str>>(
        &self,
        granter: &Addr,
        grantee: &Addr,
        msg_type_url: S,
    ) -> AuthzResult<()> {
        let msg_type_url = msg_type_url.as_ref();
        self.use_deps(|deps| {
            let (granter_raw, grantee_raw) = canonical_pair(deps.api, granter, grantee)?;
            if !delete_grant(deps.storage, &granter_raw, &grantee_raw, msg_type_url)? {
                return ContractError::NotFound {
                    explanation: format!(
                        "no grant exists from granter [{}] to grantee [{}] for [{}]",
                        granter, grantee, msg_type_url,
                    ),
                }
                .to_err();
            }
            Ok(())
        })
    }

    fn lookup_valid<S: AsRef<str>>(
        &self,
        granter: &Addr,
        grantee: &Addr,
        msg_type_url: S,
        now: &Timestamp,
    ) -> AuthzResult<Option<Grant>> {
        self.use_deps(|deps| {
            let (granter_raw, grantee_raw) = canonical_pair(deps.api, granter, grantee)?;
            lookup_valid(
                deps.storage,
                &granter_raw,
                &grantee_raw,
                msg_type_url.as_ref(),
                now,
            )
        })
    }

    fn exec(
        &self,
        grantee: &Addr,
        msgs: &[AuthzMsg],
        ctx: &BlockContext,
    ) -> AuthzResult<Vec<MsgExecutionResult>> {
        self.use_deps(|deps| {
            Dispatcher::new(deps.api, self.registry, self.router, ctx).execute(
                deps.storage,
                grantee,
                msgs,
            )
        })
    }

    fn prune_expired(&self, now: &Timestamp, limit: u32) -> AuthzResult<u32> {
        self.use_deps(|deps| {
            let mut targets: Vec<(CanonicalAddr, CanonicalAddr, String)> = vec![];
            'entries: for entry in expired_entries(deps.storage, now) {
                let entry = entry?;
                for msg_type_url in entry.msg_type_urls {
                    if targets.len() >= limit as usize {
                        break 'entries;
                    }
                    targets.push((
                        entry.key.granter.clone(),
                        entry.key.grantee.clone(),
                        msg_type_url,
                    ));
                }
            }
            for (granter, grantee, msg_type_url) in targets.iter() {
                delete_grant(deps.storage, granter, grantee, msg_type_url)?;
            }
            deps.api.debug(&format!(
                "authz: pruned {} expired grant(s) at {}",
                targets.len(),
                now
            ));
            (targets.len() as u32).to_ok()
        })
    }

    fn export_genesis(&self) -> AuthzResult<GenesisState> {
        self.use_deps(|deps| export_genesis(deps.storage, deps.api))
    }

    fn import_genesis(&self, genesis: &GenesisState) -> AuthzResult<()> {
        self.use_deps(|deps| import_genesis(deps.storage, deps.api, self.registry, genesis))
    }
}
