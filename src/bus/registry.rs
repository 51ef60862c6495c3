//! Listener storage: ordered slots keyed by event name.
//!
//! The registry is plain data — it knows nothing about dispatch, wildcards or
//! the failure channel. Invariants it owns:
//! - per-key insertion order is preserved (dispatch order);
//! - duplicate handles are tolerated (one entry per registration call);
//! - removal by handle takes out the first matching occurrence only;
//! - emptied slots may linger as empty sequences but never show up in
//!   [`Registry::keys`].

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::listeners::Listener;

/// One registration: the listener handle plus one-shot bookkeeping.
///
/// For `once` registrations `spent` is the re-entrancy guard: the dispatch
/// loop flips it before invoking, so a snapshot held by an outer emission
/// skips the entry even though the inner emission already consumed it.
pub(crate) struct Entry<P> {
    pub(crate) listener: Listener<P>,
    pub(crate) once: bool,
    pub(crate) spent: Cell<bool>,
}

impl<P> Entry<P> {
    pub(crate) fn new(listener: Listener<P>) -> Rc<Self> {
        Rc::new(Self {
            listener,
            once: false,
            spent: Cell::new(false),
        })
    }

    pub(crate) fn once(listener: Listener<P>) -> Rc<Self> {
        Rc::new(Self {
            listener,
            once: true,
            spent: Cell::new(false),
        })
    }
}

/// Ordered listener sequence for one key.
struct Slot<P> {
    entries: Vec<Rc<Entry<P>>>,
    /// Set once the leak warning for this key has been printed.
    warned: Cell<bool>,
}

impl<P> Slot<P> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            warned: Cell::new(false),
        }
    }
}

/// Mapping from event key to its ordered listener sequence.
pub(crate) struct Registry<P> {
    slots: HashMap<String, Slot<P>>,
}

impl<P> Registry<P> {
    pub(crate) fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    pub(crate) fn append(&mut self, key: &str, entry: Rc<Entry<P>>) {
        self.slot_mut(key).entries.push(entry);
    }

    pub(crate) fn prepend(&mut self, key: &str, entry: Rc<Entry<P>>) {
        self.slot_mut(key).entries.insert(0, entry);
    }

    /// Removes the first entry whose listener is the given handle.
    ///
    /// Identity is `Rc::ptr_eq`; a pending one-shot is matched through its
    /// original handle. Returns whether anything was removed.
    pub(crate) fn remove_listener(&mut self, key: &str, listener: &Listener<P>) -> bool {
        let Some(slot) = self.slots.get_mut(key) else {
            return false;
        };
        let Some(pos) = slot
            .entries
            .iter()
            .position(|e| Rc::ptr_eq(&e.listener, listener))
        else {
            return false;
        };
        slot.entries.remove(pos);
        true
    }

    /// Removes a specific entry (used by the dispatch loop to retire a
    /// one-shot before invoking it). No-op if the entry is already gone.
    pub(crate) fn remove_entry(&mut self, key: &str, entry: &Rc<Entry<P>>) {
        if let Some(slot) = self.slots.get_mut(key) {
            if let Some(pos) = slot.entries.iter().position(|e| Rc::ptr_eq(e, entry)) {
                slot.entries.remove(pos);
            }
        }
    }

    /// Stable copy of a key's entries, in order. Dispatch iterates over this
    /// so registry mutation from inside listeners cannot skip or duplicate
    /// anything mid-pass.
    pub(crate) fn snapshot(&self, key: &str) -> Vec<Rc<Entry<P>>> {
        self.slots
            .get(key)
            .map(|slot| slot.entries.clone())
            .unwrap_or_default()
    }

    /// Copies of the listener handles for a key, in order.
    pub(crate) fn listeners(&self, key: &str) -> Vec<Listener<P>> {
        self.slots
            .get(key)
            .map(|slot| slot.entries.iter().map(|e| Rc::clone(&e.listener)).collect())
            .unwrap_or_default()
    }

    pub(crate) fn len(&self, key: &str) -> usize {
        self.slots.get(key).map_or(0, |slot| slot.entries.len())
    }

    /// Keys with at least one listener; emptied slots are skipped.
    pub(crate) fn keys(&self) -> Vec<String> {
        self.slots
            .iter()
            .filter(|(_, slot)| !slot.entries.is_empty())
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.values().all(|slot| slot.entries.is_empty())
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    /// Returns the key's listener count if it just crossed the soft cap and
    /// the warning for this key has not fired yet.
    pub(crate) fn crossed_cap(&self, key: &str, max: usize) -> Option<usize> {
        if max == 0 {
            return None;
        }
        let slot = self.slots.get(key)?;
        if slot.entries.len() > max && !slot.warned.replace(true) {
            Some(slot.entries.len())
        } else {
            None
        }
    }

    fn slot_mut(&mut self, key: &str) -> &mut Slot<P> {
        self.slots
            .entry(key.to_owned())
            .or_insert_with(Slot::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listeners::listener;

    fn noop() -> Listener<i32> {
        listener(|_key: &str, _n: &i32| Ok(()))
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut reg: Registry<i32> = Registry::new();
        let (a, b, c) = (noop(), noop(), noop());
        reg.append("k", Entry::new(Rc::clone(&a)));
        reg.append("k", Entry::new(Rc::clone(&b)));
        reg.append("k", Entry::new(Rc::clone(&c)));

        let got = reg.listeners("k");
        assert_eq!(got.len(), 3);
        assert!(Rc::ptr_eq(&got[0], &a));
        assert!(Rc::ptr_eq(&got[1], &b));
        assert!(Rc::ptr_eq(&got[2], &c));
    }

    #[test]
    fn test_prepend_goes_first() {
        let mut reg: Registry<i32> = Registry::new();
        let (a, b) = (noop(), noop());
        reg.append("k", Entry::new(Rc::clone(&a)));
        reg.prepend("k", Entry::new(Rc::clone(&b)));

        let got = reg.listeners("k");
        assert!(Rc::ptr_eq(&got[0], &b));
        assert!(Rc::ptr_eq(&got[1], &a));
    }

    #[test]
    fn test_remove_listener_takes_first_occurrence_only() {
        let mut reg: Registry<i32> = Registry::new();
        let (a, b) = (noop(), noop());
        reg.append("k", Entry::new(Rc::clone(&a)));
        reg.append("k", Entry::new(Rc::clone(&b)));
        reg.append("k", Entry::new(Rc::clone(&a)));

        assert!(reg.remove_listener("k", &a));
        let got = reg.listeners("k");
        assert_eq!(got.len(), 2);
        assert!(Rc::ptr_eq(&got[0], &b), "relative order of the rest is kept");
        assert!(Rc::ptr_eq(&got[1], &a));

        assert!(reg.remove_listener("k", &a));
        assert!(!reg.remove_listener("k", &a), "third removal is a no-op");
    }

    #[test]
    fn test_remove_from_unknown_key_is_noop() {
        let mut reg: Registry<i32> = Registry::new();
        assert!(!reg.remove_listener("nope", &noop()));
    }

    #[test]
    fn test_keys_skip_emptied_slots() {
        let mut reg: Registry<i32> = Registry::new();
        let a = noop();
        reg.append("gone", Entry::new(Rc::clone(&a)));
        reg.append("kept", Entry::new(noop()));
        reg.remove_listener("gone", &a);

        assert_eq!(reg.keys(), vec!["kept".to_string()]);
        assert!(!reg.is_empty());
    }

    #[test]
    fn test_snapshot_is_stable_under_mutation() {
        let mut reg: Registry<i32> = Registry::new();
        let a = noop();
        reg.append("k", Entry::new(Rc::clone(&a)));
        let snap = reg.snapshot("k");
        reg.remove_listener("k", &a);

        assert_eq!(snap.len(), 1, "snapshot unaffected by later removal");
        assert_eq!(reg.len("k"), 0);
    }

    #[test]
    fn test_crossed_cap_warns_once_per_key() {
        let mut reg: Registry<i32> = Registry::new();
        reg.append("k", Entry::new(noop()));
        reg.append("k", Entry::new(noop()));

        assert_eq!(reg.crossed_cap("k", 0), None, "0 means unlimited");
        assert_eq!(reg.crossed_cap("k", 1), Some(2));
        assert_eq!(reg.crossed_cap("k", 1), None, "second check stays quiet");
    }
}
