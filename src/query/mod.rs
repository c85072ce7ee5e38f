//! Contains the functionality used in the [contract file](crate::contract) to perform a contract query.

/// Balances held by the contract's ledger for an account.
pub mod query_balance;
/// Delegations recorded in the contract's ledger.
pub mod query_delegation;
/// A full snapshot of the grant store in genesis form.
pub mod query_export_genesis;
pub mod query_grantee_grants;
pub mod query_granter_grants;
/// Grants between a specific granter and grantee.
pub mod query_grants;
pub mod query_state;
pub mod query_version;
