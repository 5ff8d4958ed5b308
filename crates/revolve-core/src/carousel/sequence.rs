//! Item list normalizer
//!
//! Pads the caller's list with clones so the strip can wrap around:
//! `padded = last k ++ original ++ first k`, with `k = min(clone_count, len)`.

use std::fmt;
use std::sync::Arc;

/// Where a slot sits in the padded strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Clone of one of the last items, placed before the real list
    LeadingClone,
    /// One of the caller's items
    Real,
    /// Clone of one of the first items, placed after the real list
    TrailingClone,
}

/// Identity of a slot, unique within one padded sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub kind: SlotKind,
    /// Position of the slot in the padded strip
    pub position: usize,
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind {
            SlotKind::LeadingClone => "head-clone",
            SlotKind::Real => "real",
            SlotKind::TrailingClone => "tail-clone",
        };
        write!(f, "{}-{}", prefix, self.position)
    }
}

/// One entry of the padded strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub key: SlotKey,
    /// Index of the item this slot displays in the original list
    pub source: usize,
}

impl Slot {
    pub fn is_clone(&self) -> bool {
        self.key.kind != SlotKind::Real
    }
}

/// The caller's list padded with clones on both ends
#[derive(Debug, Clone)]
pub struct PaddedSequence<T> {
    items: Arc<[T]>,
    slots: Vec<Slot>,
    clone_count: usize,
}

impl<T> PaddedSequence<T> {
    /// Effective number of clones on each side
    pub fn clone_count(&self) -> usize {
        self.clone_count
    }

    /// Length of the caller's list
    pub fn original_len(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn items(&self) -> &Arc<[T]> {
        &self.items
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slot and displayed item at a strip position
    pub fn get(&self, position: usize) -> Option<(&Slot, &T)> {
        let slot = self.slots.get(position)?;
        Some((slot, &self.items[slot.source]))
    }

    /// Iterate slots together with the item each one displays
    pub fn iter(&self) -> impl Iterator<Item = (&Slot, &T)> + '_ {
        self.slots
            .iter()
            .map(move |slot| (slot, &self.items[slot.source]))
    }

    /// Strip positions holding the real items
    pub fn real_range(&self) -> std::ops::Range<usize> {
        self.clone_count..self.clone_count + self.items.len()
    }
}

/// Build the padded strip for `items`
pub fn normalize<T>(items: Arc<[T]>, clone_count: usize) -> PaddedSequence<T> {
    let len = items.len();
    let k = clone_count.min(len);

    let leading = (len - k..len).map(|source| (SlotKind::LeadingClone, source));
    let real = (0..len).map(|source| (SlotKind::Real, source));
    let trailing = (0..k).map(|source| (SlotKind::TrailingClone, source));

    let slots = leading
        .chain(real)
        .chain(trailing)
        .enumerate()
        .map(|(position, (kind, source))| Slot {
            key: SlotKey { kind, position },
            source,
        })
        .collect();

    PaddedSequence {
        items,
        slots,
        clone_count: k,
    }
}

/// Memoises [`normalize`] on the identity of the input list
#[derive(Debug, Clone)]
pub struct Normalizer<T> {
    clone_count: usize,
    cached: Option<PaddedSequence<T>>,
}

impl<T> Normalizer<T> {
    pub fn new(clone_count: usize) -> Self {
        Self {
            clone_count,
            cached: None,
        }
    }

    /// Return the padded strip for `items`, rebuilding it only when a
    /// different list (by pointer identity) is passed in.
    pub fn normalize(&mut self, items: &Arc<[T]>) -> &PaddedSequence<T> {
        let stale = self
            .cached
            .as_ref()
            .is_some_and(|cached| !Arc::ptr_eq(&cached.items, items));
        if stale {
            self.cached = None;
        }
        let clone_count = self.clone_count;
        self.cached
            .get_or_insert_with(|| normalize(Arc::clone(items), clone_count))
    }

    pub fn current(&self) -> Option<&PaddedSequence<T>> {
        self.cached.as_ref()
    }
}
