use cosmwasm_std::{from_json, to_json_vec, Api, CanonicalAddr, Order, Storage};

use crate::core::types::grant::{Grant, GrantRecord};
use crate::util::aliases::AuthzResult;
use crate::util::constants::GRANT_KEY_PREFIX;
use crate::util::traits::ResultExtensions;

use super::grant_keys::{
    grant_key, grantee_granter_prefix, grantee_prefix, parse_grant_key, prefix_range_end,
};
use super::grant_queue::{dequeue, enqueue};

/// A stored grant together with the raw triple it lives under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrantEntry {
    pub granter: CanonicalAddr,
    pub grantee: CanonicalAddr,
    pub msg_type_url: String,
    pub grant: Grant,
}
impl GrantEntry {
    /// Converts the raw addresses back into their human-readable form.
    pub fn to_record(&self, api: &dyn Api) -> AuthzResult<GrantRecord> {
        GrantRecord::new(
            api.addr_humanize(&self.granter)?,
            api.addr_humanize(&self.grantee)?,
            &self.msg_type_url,
            self.grant.clone(),
        )
        .to_ok()
    }
}

/// Upserts the grant for the triple, keeping the expiration queue in step.
pub fn set_grant(
    storage: &mut dyn Storage,
    granter: &CanonicalAddr,
    grantee: &CanonicalAddr,
    msg_type_url: &str,
    grant: &Grant,
) -> AuthzResult<()> {
    if let Some(existing) = get_grant(storage, granter, grantee, msg_type_url)? {
        if existing.expiration != grant.expiration {
            dequeue(storage, &existing.expiration, granter, grantee, msg_type_url)?;
        }
    }
    storage.set(
        &grant_key(granter, grantee, msg_type_url),
        &to_json_vec(grant)?,
    );
    enqueue(storage, &grant.expiration, granter, grantee, msg_type_url)
}

pub fn get_grant(
    storage: &dyn Storage,
    granter: &CanonicalAddr,
    grantee: &CanonicalAddr,
    msg_type_url: &str,
) -> AuthzResult<Option<Grant>> {
    match storage.get(&grant_key(granter, grantee, msg_type_url)) {
        Some(bytes) => Some(from_json::<Grant>(&bytes)?).to_ok(),
        None => None.to_ok(),
    }
}

/// Removes the grant for the triple.  Returns whether anything was removed.
pub fn delete_grant(
    storage: &mut dyn Storage,
    granter: &CanonicalAddr,
    grantee: &CanonicalAddr,
    msg_type_url: &str,
) -> AuthzResult<bool> {
    match get_grant(storage, granter, grantee, msg_type_url)? {
        Some(existing) => {
            storage.remove(&grant_key(granter, grantee, msg_type_url));
            dequeue(storage, &existing.expiration, granter, grantee, msg_type_url)?;
            true.to_ok()
        }
        None => false.to_ok(),
    }
}

fn iterate_prefix<'a>(
    storage: &'a dyn Storage,
    prefix: Vec<u8>,
) -> Box<dyn Iterator<Item = AuthzResult<GrantEntry>> + 'a> {
    let end = prefix_range_end(&prefix);
    Box::new(
        storage
            .range(Some(prefix.as_slice()), end.as_deref(), Order::Ascending)
            .map(|(key, value)| -> AuthzResult<GrantEntry> {
                let key = parse_grant_key(&key);
                GrantEntry {
                    granter: key.granter,
                    grantee: key.grantee,
                    msg_type_url: key.msg_type_url,
                    grant: from_json::<Grant>(&value)?,
                }
                .to_ok()
            }),
    )
}

/// Every grant held by `grantee`, in key order.  Each call starts a fresh iteration.
pub fn iterate_by_grantee<'a>(
    storage: &'a dyn Storage,
    grantee: &CanonicalAddr,
) -> Box<dyn Iterator<Item = AuthzResult<GrantEntry>> + 'a> {
    iterate_prefix(storage, grantee_prefix(grantee))
}

/// Every grant `granter` has given to `grantee`, in key order.
pub fn iterate_by_grantee_and_granter<'a>(
    storage: &'a dyn Storage,
    grantee: &CanonicalAddr,
    granter: &CanonicalAddr,
) -> Box<dyn Iterator<Item = AuthzResult<GrantEntry>> + 'a> {
    iterate_prefix(storage, grantee_granter_prefix(grantee, granter))
}

pub fn iterate_all(storage: &dyn Storage) -> Box<dyn Iterator<Item = AuthzResult<GrantEntry>> + '_> {
    iterate_prefix(storage, vec![GRANT_KEY_PREFIX])
}

/// Snapshots every grant in key order.
pub fn export_all(storage: &dyn Storage) -> AuthzResult<Vec<GrantEntry>> {
    iterate_all(storage).collect()
}

/// Writes each entry with [set_grant].  No validation is performed here.
pub fn import_all(storage: &mut dyn Storage, entries: &[GrantEntry]) -> AuthzResult<()> {
    for entry in entries {
        set_grant(
            storage,
            &entry.granter,
            &entry.grantee,
            &entry.msg_type_url,
            &entry.grant,
        )?;
    }
    Ok(())
}
