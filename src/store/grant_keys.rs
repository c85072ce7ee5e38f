use cosmwasm_std::{CanonicalAddr, Timestamp};

use crate::util::constants::{GRANT_KEY_PREFIX, GRANT_QUEUE_PREFIX};

/// The triple a grant record is stored under, decoded from its raw key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrantKey {
    pub granter: CanonicalAddr,
    pub grantee: CanonicalAddr,
    pub msg_type_url: String,
}

/// An expiration queue record key, decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueKey {
    pub expiration: Timestamp,
    pub granter: CanonicalAddr,
    pub grantee: CanonicalAddr,
}

fn push_length_prefixed(key: &mut Vec<u8>, address: &CanonicalAddr) {
    let bytes = address.as_slice();
    if bytes.len() > u8::MAX as usize {
        panic!(
            "address of {} bytes cannot be length-prefixed with a single byte",
            bytes.len()
        );
    }
    key.push(bytes.len() as u8);
    key.extend_from_slice(bytes);
}

/// Splits a single-byte length-prefixed address off the front of `bytes`, returning it and the
/// remainder.
fn split_length_prefixed<'a>(bytes: &'a [u8], key: &[u8]) -> (CanonicalAddr, &'a [u8]) {
    let (length, rest) = match bytes.split_first() {
        Some((length, rest)) => (*length as usize, rest),
        None => panic!("malformed store key {:?}: missing address length", key),
    };
    if rest.len() < length {
        panic!(
            "malformed store key {:?}: address length {} exceeds remaining {} bytes",
            key,
            length,
            rest.len()
        );
    }
    let (address, rest) = rest.split_at(length);
    (CanonicalAddr::from(address.to_vec()), rest)
}

/// `0x01 || len(grantee) || grantee`
pub fn grantee_prefix(grantee: &CanonicalAddr) -> Vec<u8> {
    let mut key = vec![GRANT_KEY_PREFIX];
    push_length_prefixed(&mut key, grantee);
    key
}

/// `0x01 || len(grantee) || grantee || len(granter) || granter`
pub fn grantee_granter_prefix(grantee: &CanonicalAddr, granter: &CanonicalAddr) -> Vec<u8> {
    let mut key = grantee_prefix(grantee);
    push_length_prefixed(&mut key, granter);
    key
}

/// `0x01 || len(grantee) || grantee || len(granter) || granter || msg_type_url`
pub fn grant_key(granter: &CanonicalAddr, grantee: &CanonicalAddr, msg_type_url: &str) -> Vec<u8> {
    let mut key = grantee_granter_prefix(grantee, granter);
    key.extend_from_slice(msg_type_url.as_bytes());
    key
}

/// Decodes a grant key.  Keys are only ever produced by [grant_key], so anything malformed is a
/// broken store and panics.
pub fn parse_grant_key(key: &[u8]) -> GrantKey {
    let rest = match key.split_first() {
        Some((&GRANT_KEY_PREFIX, rest)) => rest,
        _ => panic!("malformed grant key {:?}: wrong prefix", key),
    };
    let (grantee, rest) = split_length_prefixed(rest, key);
    let (granter, rest) = split_length_prefixed(rest, key);
    let msg_type_url = match std::str::from_utf8(rest) {
        Ok(msg_type_url) => msg_type_url.to_string(),
        Err(e) => panic!("malformed grant key {:?}: {}", key, e),
    };
    GrantKey {
        granter,
        grantee,
        msg_type_url,
    }
}

/// `0x02 || expiration nanos (u64 BE)`
pub fn queue_time_prefix(expiration: &Timestamp) -> Vec<u8> {
    let mut key = vec![GRANT_QUEUE_PREFIX];
    key.extend_from_slice(&expiration.nanos().to_be_bytes());
    key
}

/// `0x02 || expiration nanos (u64 BE) || len(granter) || granter || len(grantee) || grantee`
pub fn queue_key(
    expiration: &Timestamp,
    granter: &CanonicalAddr,
    grantee: &CanonicalAddr,
) -> Vec<u8> {
    let mut key = queue_time_prefix(expiration);
    push_length_prefixed(&mut key, granter);
    push_length_prefixed(&mut key, grantee);
    key
}

pub fn parse_queue_key(key: &[u8]) -> QueueKey {
    if key.len() < 9 || key[0] != GRANT_QUEUE_PREFIX {
        panic!("malformed grant queue key {:?}", key);
    }
    let mut nanos = [0u8; 8];
    nanos.copy_from_slice(&key[1..9]);
    let (granter, rest) = split_length_prefixed(&key[9..], key);
    let (grantee, rest) = split_length_prefixed(rest, key);
    if !rest.is_empty() {
        panic!("malformed grant queue key {:?}: trailing bytes", key);
    }
    QueueKey {
        expiration: Timestamp::from_nanos(u64::from_be_bytes(nanos)),
        granter,
        grantee,
    }
}

/// The smallest key greater than every key starting with `prefix`, for use as an exclusive range
/// end.  `None` when no such key exists (the prefix is all `0xFF`).
pub fn prefix_range_end(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut end = prefix.to_vec();
    while let Some(last) = end.pop() {
        if last < u8::MAX {
            end.push(last + 1);
            return Some(end);
        }
    }
    None
}
