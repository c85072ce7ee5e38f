//! Raw key-value persistence for grants.  Everything in here works on canonical addresses and
//! performs no validation; callers in the [service](crate::service) layer own that.

/// A write-buffering [Storage](cosmwasm_std::Storage) overlay that is committed or discarded
/// as a unit.
pub mod checkpoint;
/// Byte-exact encoding and decoding of grant and expiration queue keys.
pub mod grant_keys;
/// The secondary index of grants ordered by expiration.
pub mod grant_queue;
/// Point access and prefix iteration over grant records.
pub mod grant_store;
