use std::collections::BTreeMap;
use std::ops::Bound;

use cosmwasm_std::{Order, Record, Storage};

/// A write-buffering view over another [Storage].  Reads see buffered writes layered over the
/// underlying store; nothing reaches the underlying store until [commit](Self::commit) is called.
/// Dropping the checkpoint discards every buffered write.
pub struct StorageCheckpoint<'a> {
    inner: &'a mut dyn Storage,
    /// `None` marks a pending removal.
    pending: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
}
impl<'a> StorageCheckpoint<'a> {
    pub fn new(inner: &'a mut dyn Storage) -> Self {
        Self {
            inner,
            pending: BTreeMap::new(),
        }
    }

    pub fn pending_writes(&self) -> usize {
        self.pending.len()
    }

    /// Flushes every buffered write to the underlying store.
    pub fn commit(self) {
        let Self { inner, pending } = self;
        for (key, value) in pending {
            match value {
                Some(value) => inner.set(&key, &value),
                None => inner.remove(&key),
            }
        }
    }
}
impl<'a> Storage for StorageCheckpoint<'a> {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        match self.pending.get(key) {
            Some(value) => value.clone(),
            None => self.inner.get(key),
        }
    }

    fn range<'b>(
        &'b self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'b> {
        if let (Some(start), Some(end)) = (start, end) {
            if start >= end {
                return Box::new(std::iter::empty());
            }
        }
        let mut merged: BTreeMap<Vec<u8>, Vec<u8>> = self
            .inner
            .range(start, end, Order::Ascending)
            .collect();
        let bounds = (
            start.map_or(Bound::Unbounded, |s| Bound::Included(s.to_vec())),
            end.map_or(Bound::Unbounded, |e| Bound::Excluded(e.to_vec())),
        );
        for (key, value) in self.pending.range::<Vec<u8>, _>(bounds) {
            match value {
                Some(value) => merged.insert(key.clone(), value.clone()),
                None => merged.remove(key),
            };
        }
        match order {
            Order::Ascending => Box::new(merged.into_iter()),
            Order::Descending => Box::new(merged.into_iter().rev()),
        }
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.pending.insert(key.to_vec(), Some(value.to_vec()));
    }

    fn remove(&mut self, key: &[u8]) {
        self.pending.insert(key.to_vec(), None);
    }
}
