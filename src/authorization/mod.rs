//! The capability model: what a granter allows, and how a candidate message is judged against it.

/// The [Authorization](self::capability::Authorization) trait every capability implements, and
/// the response it produces when asked to accept a message.
pub mod capability;
/// Unconditional permission for a single message type.
pub mod generic_authorization;
/// Decodes serialized authorizations into their concrete variants.
pub mod registry;
/// Spend-limited permission to send coins.
pub mod send_authorization;
/// Validator- and token-limited permission to delegate, undelegate or redelegate.
pub mod stake_authorization;
