//! Complex structs used to perform intensive operations in a centralized location.

/// Ties the grant store, capability registry and message router together into a single
/// [GrantKeeper](self::grant_keeper::GrantKeeper) implementation.
pub mod authz_service;
/// Lends a service's held [DepsMut](cosmwasm_std::DepsMut) to routes that need storage or the
/// api directly.
pub mod deps_manager;
/// Executes batches of messages on behalf of their granters, consuming grants atomically.
pub mod dispatcher;
/// Snapshot export and validated bulk import of every stored grant.
pub mod genesis;
/// Defines the trait through which execution routes create, consume and remove grants.
pub mod grant_keeper;
/// The boundary between authorized execution and the handlers that apply messages.
pub mod message_router;
