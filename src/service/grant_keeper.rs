use cosmwasm_std::{Addr, Timestamp};

use crate::core::types::authorization_any::AuthorizationAny;
use crate::core::types::authz_msg::AuthzMsg;
use crate::core::types::block_context::BlockContext;
use crate::core::types::exec_result::MsgExecutionResult;
use crate::core::types::genesis_grant::GenesisState;
use crate::core::types::grant::Grant;
use crate::util::aliases::AuthzResult;

/// The operations that create, consume and remove grants.  Nothing else writes grant records.
pub trait GrantKeeper {
    /// Whether messages of this type can be executed at all.
    fn can_route<S: AsRef<str>>(&self, msg_type_url: S) -> bool;

    /// The message type the authorization governs, once decoded.
    fn msg_type_url_of(&self, authorization: &AuthorizationAny) -> AuthzResult<String>;

    /// Stores a grant from `granter` to `grantee`, replacing any existing grant for the same
    /// message type.  Returns the message type url the grant was stored under.
    fn grant(
        &self,
        granter: &Addr,
        grantee: &Addr,
        authorization: &AuthorizationAny,
        expiration: &Timestamp,
        ctx: &BlockContext,
    ) -> AuthzResult<String>;

    /// Removes a grant.  Fails with [NotFound](crate::core::error::ContractError::NotFound) when
    /// there is nothing to remove.
    fn revoke<S: AsRef<str>>(&self, granter: &Addr, grantee: &Addr, msg_type_url: S)
        -> AuthzResult<()>;

    /// The stored grant, unless it is missing or expired at `now`.  Never modifies the store.
    fn lookup_valid<S: AsRef<str>>(
        &self,
        granter: &Addr,
        grantee: &Addr,
        msg_type_url: S,
        now: &Timestamp,
    ) -> AuthzResult<Option<Grant>>;

    /// Runs every message in order on behalf of its signer, consuming the grants that authorize
    /// them.  Either every message takes effect or none do.
    fn exec(
        &self,
        grantee: &Addr,
        msgs: &[AuthzMsg],
        ctx: &BlockContext,
    ) -> AuthzResult<Vec<MsgExecutionResult>>;

    /// Deletes up to `limit` grants expired at `now`, oldest first.  Returns how many were
    /// deleted.
    fn prune_expired(&self, now: &Timestamp, limit: u32) -> AuthzResult<u32>;

    fn export_genesis(&self) -> AuthzResult<GenesisState>;

    /// Validates every grant in the snapshot before writing any of them.
    fn import_genesis(&self, genesis: &GenesisState) -> AuthzResult<()>;
}
