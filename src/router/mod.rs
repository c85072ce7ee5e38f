//! The contract's own implementation of the message routing boundary: a small custody ledger
//! that authorized bank and staking messages act upon.

/// Executes bank sends against custodied balances.
pub mod bank_handler;
/// Storage for custodied balances and delegations.
pub mod ledger;
/// Maps message type urls to the ledger handlers.
pub mod ledger_router;
/// Executes delegations, undelegations and redelegations against custodied balances.
pub mod staking_handler;
