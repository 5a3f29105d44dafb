// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned table of bound listeners.

use alloc::vec::Vec;

use crate::host::ListenerTarget;

/// Association list from [`ListenerTarget`] to the host listener bound on it.
///
/// At most one listener exists per target. The table is small (one entry per
/// control and dot), so a linear scan beats hashing and keeps the crate free
/// of identity-keyed maps.
#[derive(Debug)]
pub struct ListenerRegistry<L> {
    entries: Vec<(ListenerTarget, L)>,
}

impl<L> Default for ListenerRegistry<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> ListenerRegistry<L> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of bound listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if a listener is bound on `target`.
    #[must_use]
    pub fn contains(&self, target: ListenerTarget) -> bool {
        self.entries.iter().any(|(t, _)| *t == target)
    }

    /// Counts the bound listeners whose target satisfies `pred`.
    #[must_use]
    pub fn count_where(&self, pred: impl Fn(ListenerTarget) -> bool) -> usize {
        self.entries.iter().filter(|(t, _)| pred(*t)).count()
    }

    /// Records `listener` for `target`.
    ///
    /// If `target` already had a listener, it is returned so the caller can
    /// unbind it; the table never holds two entries for one target.
    pub fn insert(&mut self, target: ListenerTarget, listener: L) -> Option<L> {
        if let Some(slot) = self.entries.iter_mut().find(|(t, _)| *t == target) {
            return Some(core::mem::replace(&mut slot.1, listener));
        }
        self.entries.push((target, listener));
        None
    }

    /// Removes and returns the listener bound on `target`.
    pub fn remove(&mut self, target: ListenerTarget) -> Option<L> {
        let pos = self.entries.iter().position(|(t, _)| *t == target)?;
        Some(self.entries.remove(pos).1)
    }

    /// Removes and returns every listener whose target satisfies `pred`,
    /// in binding order.
    pub fn take_where(&mut self, pred: impl Fn(ListenerTarget) -> bool) -> Vec<L> {
        let mut taken = Vec::new();
        let mut kept = Vec::with_capacity(self.entries.len());
        for (target, listener) in self.entries.drain(..) {
            if pred(target) {
                taken.push(listener);
            } else {
                kept.push((target, listener));
            }
        }
        self.entries = kept;
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NavControl;

    #[test]
    fn insert_replaces_existing_entry() {
        let mut reg = ListenerRegistry::new();
        assert_eq!(reg.insert(ListenerTarget::Track, 1), None);
        assert_eq!(reg.insert(ListenerTarget::Track, 2), Some(1));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.remove(ListenerTarget::Track), Some(2));
        assert!(reg.is_empty());
    }

    #[test]
    fn take_where_partitions_in_order() {
        let mut reg = ListenerRegistry::new();
        reg.insert(ListenerTarget::Nav(NavControl::prev(0)), "prev");
        reg.insert(ListenerTarget::Dot { container: 0, page: 0 }, "dot0");
        reg.insert(ListenerTarget::Nav(NavControl::next(0)), "next");
        reg.insert(ListenerTarget::Dot { container: 0, page: 1 }, "dot1");

        let dots = reg.take_where(ListenerTarget::is_dot);
        assert_eq!(dots, ["dot0", "dot1"]);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.count_where(ListenerTarget::is_nav), 2);
        assert!(reg.contains(ListenerTarget::Nav(NavControl::next(0))));
    }

    #[test]
    fn remove_missing_target_is_none() {
        let mut reg: ListenerRegistry<u32> = ListenerRegistry::new();
        assert_eq!(reg.remove(ListenerTarget::Track), None);
    }
}
