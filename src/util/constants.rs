// Execution output attributes.  All should be prefixed with "authz_" to make them easy to
// discern when observed in the event stream

//////////////////////////////
// Shared output attributes //
//////////////////////////////

/// Value = Event Type correlating to EventType enum into String values (String)
pub const AUTHZ_EVENT_TYPE_KEY: &str = "authz_event_type";
/// Value = The account delegating its authority (String)
pub const GRANTER_KEY: &str = "authz_granter";
/// Value = The account receiving delegated authority (String)
pub const GRANTEE_KEY: &str = "authz_grantee";
/// Value = The fully-qualified message type key a grant governs (String)
pub const MSG_TYPE_URL_KEY: &str = "authz_msg_type_url";
/// Value = Any new value being changed that can be coerced to a string target. Dynamic to be used on various routes (String)
pub const NEW_VALUE_KEY: &str = "authz_new_value";

////////////////////////
// Store key prefixes //
////////////////////////

/// Prefix byte for grant records: `0x01 | len(grantee) | grantee | len(granter) | granter | msg_type_url`
pub const GRANT_KEY_PREFIX: u8 = 0x01;
/// Prefix byte for the expiration queue: `0x02 | expiration nanos (BE) | len(granter) | granter | len(grantee) | grantee`
pub const GRANT_QUEUE_PREFIX: u8 = 0x02;
/// Prefix for internal ledger balances
pub const BALANCE_NAMESPACE: &str = "balance";
/// Prefix for internal ledger delegations
pub const DELEGATION_NAMESPACE: &str = "delegation";

//////////////////////
// Global Constants //
//////////////////////

/// The amount of expired grants removed by a single prune when the caller does not specify one
pub const DEFAULT_PRUNE_LIMIT: u32 = 100;
