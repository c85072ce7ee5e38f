use cosmwasm_std::{from_json, to_json_vec, CanonicalAddr, Order, Storage, Timestamp};

use crate::util::aliases::AuthzResult;
use crate::util::constants::GRANT_QUEUE_PREFIX;
use crate::util::traits::ResultExtensions;

use super::grant_keys::{parse_queue_key, prefix_range_end, queue_key, queue_time_prefix, QueueKey};

/// All message type urls granted from one granter to one grantee that expire at the same instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueEntry {
    pub key: QueueKey,
    pub msg_type_urls: Vec<String>,
}

fn load_type_urls(storage: &dyn Storage, key: &[u8]) -> AuthzResult<Vec<String>> {
    match storage.get(key) {
        Some(bytes) => from_json::<Vec<String>>(&bytes)?.to_ok(),
        None => vec![].to_ok(),
    }
}

/// Records that the grant for `msg_type_url` expires at `expiration`.  The stored list stays
/// sorted so that the queue's bytes depend only on which grants exist, not the order they were
/// written in.
pub fn enqueue(
    storage: &mut dyn Storage,
    expiration: &Timestamp,
    granter: &CanonicalAddr,
    grantee: &CanonicalAddr,
    msg_type_url: &str,
) -> AuthzResult<()> {
    let key = queue_key(expiration, granter, grantee);
    let mut type_urls = load_type_urls(storage, &key)?;
    if let Err(index) = type_urls.binary_search_by(|url| url.as_str().cmp(msg_type_url)) {
        type_urls.insert(index, msg_type_url.to_string());
        storage.set(&key, &to_json_vec(&type_urls)?);
    }
    Ok(())
}

/// Removes `msg_type_url` from the record at `expiration`, dropping the record once it is empty.
/// Missing entries are ignored.
pub fn dequeue(
    storage: &mut dyn Storage,
    expiration: &Timestamp,
    granter: &CanonicalAddr,
    grantee: &CanonicalAddr,
    msg_type_url: &str,
) -> AuthzResult<()> {
    let key = queue_key(expiration, granter, grantee);
    let mut type_urls = load_type_urls(storage, &key)?;
    if let Ok(index) = type_urls.binary_search_by(|url| url.as_str().cmp(msg_type_url)) {
        type_urls.remove(index);
        if type_urls.is_empty() {
            storage.remove(&key);
        } else {
            storage.set(&key, &to_json_vec(&type_urls)?);
        }
    }
    Ok(())
}

/// Every queue record expiring at or before `now`, earliest first.
pub fn expired_entries<'a>(
    storage: &'a dyn Storage,
    now: &Timestamp,
) -> Box<dyn Iterator<Item = AuthzResult<QueueEntry>> + 'a> {
    let start = vec![GRANT_QUEUE_PREFIX];
    let end = match now.nanos().checked_add(1) {
        Some(nanos) => queue_time_prefix(&Timestamp::from_nanos(nanos)),
        None => prefix_range_end(&start).unwrap_or_else(|| vec![u8::MAX]),
    };
    Box::new(
        storage
            .range(Some(start.as_slice()), Some(end.as_slice()), Order::Ascending)
            .map(|(key, value)| -> AuthzResult<QueueEntry> {
                QueueEntry {
                    key: parse_queue_key(&key),
                    msg_type_urls: from_json::<Vec<String>>(&value)?,
                }
                .to_ok()
            }),
    )
}
