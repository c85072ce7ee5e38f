use cosmwasm_std::{Addr, Api, CanonicalAddr, Storage, Timestamp};

use crate::authorization::registry::AuthorizationRegistry;
use crate::core::error::ContractError;
use crate::core::types::authz_msg::AuthzMsg;
use crate::core::types::block_context::BlockContext;
use crate::core::types::exec_result::MsgExecutionResult;
use crate::core::types::grant::Grant;
use crate::store::checkpoint::StorageCheckpoint;
use crate::store::grant_store::{delete_grant, get_grant, set_grant};
use crate::util::aliases::AuthzResult;
use crate::util::contract_helpers::validate_address;
use crate::util::traits::ResultExtensions;

use super::message_router::MessageRouter;

/// The stored grant for the triple, unless it has expired at `now`.  Expired grants are left in
/// place for pruning.
pub fn lookup_valid(
    storage: &dyn Storage,
    granter: &CanonicalAddr,
    grantee: &CanonicalAddr,
    msg_type_url: &str,
    now: &Timestamp,
) -> AuthzResult<Option<Grant>> {
    get_grant(storage, granter, grantee, msg_type_url)?
        .filter(|grant| !grant.is_expired(now))
        .to_ok()
}

/// Executes authorized message batches.  Every batch runs inside its own
/// [StorageCheckpoint], so grant consumption and message side effects are committed together or
/// not at all.
pub struct Dispatcher<'r> {
    api: &'r dyn Api,
    registry: &'r AuthorizationRegistry,
    router: &'r dyn MessageRouter,
    ctx: &'r BlockContext,
}
impl<'r> Dispatcher<'r> {
    pub fn new(
        api: &'r dyn Api,
        registry: &'r AuthorizationRegistry,
        router: &'r dyn MessageRouter,
        ctx: &'r BlockContext,
    ) -> Self {
        Self {
            api,
            registry,
            router,
            ctx,
        }
    }

    pub fn execute(
        &self,
        storage: &mut dyn Storage,
        grantee: &Addr,
        msgs: &[AuthzMsg],
    ) -> AuthzResult<Vec<MsgExecutionResult>> {
        if msgs.is_empty() {
            return ContractError::invalid_request("at least one message must be provided")
                .to_err();
        }
        for (index, msg) in msgs.iter().enumerate() {
            let invalid_fields = msg.validate_basic();
            if !invalid_fields.is_empty() {
                return ContractError::InvalidMessageFields {
                    message_type: format!("msgs[{}] {}", index, msg.msg_type_url()),
                    invalid_fields,
                }
                .to_err();
            }
        }
        let mut checkpoint = StorageCheckpoint::new(storage);
        let mut results = Vec::with_capacity(msgs.len());
        for (index, msg) in msgs.iter().enumerate() {
            // an early return drops the checkpoint, discarding the whole batch
            results.push(self.execute_one(&mut checkpoint, grantee, index, msg)?);
        }
        self.api.debug(&format!(
            "authz: exec by [{}] committing {} message(s) with {} write(s)",
            grantee,
            results.len(),
            checkpoint.pending_writes(),
        ));
        checkpoint.commit();
        results.to_ok()
    }

    fn execute_one(
        &self,
        storage: &mut dyn Storage,
        grantee: &Addr,
        index: usize,
        msg: &AuthzMsg,
    ) -> AuthzResult<MsgExecutionResult> {
        let msg_type_url = msg.msg_type_url();
        let granter = validate_address(self.api, msg.signer())?;
        // an account needs no grant to act for itself
        if granter != *grantee {
            self.consume_grant(storage, &granter, grantee, index, msg)?;
        }
        let handler = match self.router.route(&msg_type_url) {
            Some(handler) => handler,
            None => {
                return ContractError::invalid_request(format!(
                    "message {}: no handler is registered for message type [{}]",
                    index, msg_type_url,
                ))
                .to_err()
            }
        };
        let data = handler.handle(storage, self.api, self.ctx, msg)?;
        MsgExecutionResult {
            msg_index: index as u32,
            msg_type_url,
            granter,
            data,
        }
        .to_ok()
    }

    /// Runs the message past the grant's capability and writes back whatever the capability
    /// decided: the grant is deleted, replaced, or the batch fails.
    fn consume_grant(
        &self,
        storage: &mut dyn Storage,
        granter: &Addr,
        grantee: &Addr,
        index: usize,
        msg: &AuthzMsg,
    ) -> AuthzResult<()> {
        let msg_type_url = msg.msg_type_url();
        let granter_raw = self.api.addr_canonicalize(granter.as_str())?;
        let grantee_raw = self.api.addr_canonicalize(grantee.as_str())?;
        let describe = || {
            format!(
                "message {}: grant from granter [{}] to grantee [{}] for [{}]",
                index, granter, grantee, msg_type_url,
            )
        };
        let grant = match lookup_valid(
            storage,
            &granter_raw,
            &grantee_raw,
            &msg_type_url,
            &self.ctx.time,
        )? {
            Some(grant) => grant,
            None => {
                return ContractError::unauthorized(format!(
                    "{} does not exist or has expired",
                    describe()
                ))
                .to_err()
            }
        };
        let capability = self.registry.decode(&grant.authorization)?;
        let response = capability.accept(msg, self.ctx).map_err(|e| {
            ContractError::unauthorized(format!("{} refused the message: {}", describe(), e))
        })?;
        if !response.accepted {
            return ContractError::unauthorized(format!("{} rejected the message", describe()))
                .to_err();
        }
        if response.delete {
            delete_grant(storage, &granter_raw, &grantee_raw, &msg_type_url)?;
        } else if let Some(updated) = response.updated {
            set_grant(
                storage,
                &granter_raw,
                &grantee_raw,
                &msg_type_url,
                &Grant::new(updated.to_any()?, grant.expiration),
            )?;
        }
        Ok(())
    }
}
