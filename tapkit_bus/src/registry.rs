// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener storage: registrations, handlers, and per-kind bookkeeping.
//!
//! ## Overview
//!
//! Direct listeners attach to a node; delegated listeners attach to a node
//! with a [`Selector`] and fire for matching descendants on the bubble path.
//! Registration order is preserved per node. The table also counts listeners
//! per event kind so the bus can detect setup (first listener of a kind) and
//! teardown (last removed) edges for special-event hooks.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::bus::Handler;
use crate::name::EventName;
use crate::selector::Selector;
use crate::tree::NodeId;
use crate::types::ListenerId;

/// An owned view of one registration, as handed to special-event hooks.
#[derive(Clone, Debug)]
pub struct Registration {
    /// Handle of the registration.
    pub id: ListenerId,
    /// Node the listener is attached to.
    pub node: NodeId,
    /// Name (kind + namespaces) the listener was registered under.
    pub name: EventName,
    /// Delegation selector, if any.
    pub selector: Option<Selector>,
}

struct ListenerEntry<E, M> {
    record: Registration,
    handler: Handler<E, M>,
}

/// Table of live registrations.
pub(crate) struct ListenerTable<E, M> {
    entries: HashMap<ListenerId, ListenerEntry<E, M>>,
    by_node: HashMap<NodeId, Vec<ListenerId>>,
    kind_counts: HashMap<String, usize>,
    next: u64,
}

impl<E, M> Default for ListenerTable<E, M> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            by_node: HashMap::new(),
            kind_counts: HashMap::new(),
            next: 1,
        }
    }
}

impl<E, M> core::fmt::Debug for ListenerTable<E, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListenerTable")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<E, M> ListenerTable<E, M> {
    /// Insert a registration; returns its id and whether it is the first
    /// listener of its kind anywhere on the bus.
    pub(crate) fn insert(
        &mut self,
        node: NodeId,
        name: EventName,
        selector: Option<Selector>,
        handler: Handler<E, M>,
    ) -> (ListenerId, bool) {
        let id = ListenerId(self.next);
        self.next += 1;

        let count = self
            .kind_counts
            .entry(name.kind().to_string())
            .or_insert(0);
        *count += 1;
        let first_of_kind = *count == 1;

        self.by_node.entry(node).or_default().push(id);
        self.entries.insert(
            id,
            ListenerEntry {
                record: Registration {
                    id,
                    node,
                    name,
                    selector,
                },
                handler,
            },
        );
        (id, first_of_kind)
    }

    /// Remove a registration; returns its record and whether it was the last
    /// listener of its kind.
    pub(crate) fn remove(&mut self, id: ListenerId) -> Option<(Registration, bool)> {
        let entry = self.entries.remove(&id)?;
        if let Some(ids) = self.by_node.get_mut(&entry.record.node) {
            ids.retain(|&l| l != id);
            if ids.is_empty() {
                self.by_node.remove(&entry.record.node);
            }
        }
        let kind = entry.record.name.kind();
        let last_of_kind = match self.kind_counts.get_mut(kind) {
            Some(count) => {
                *count -= 1;
                if *count == 0 {
                    self.kind_counts.remove(kind);
                    true
                } else {
                    false
                }
            }
            None => false,
        };
        Some((entry.record, last_of_kind))
    }

    pub(crate) fn record(&self, id: ListenerId) -> Option<&Registration> {
        self.entries.get(&id).map(|e| &e.record)
    }

    pub(crate) fn handler_mut(&mut self, id: ListenerId) -> Option<&mut Handler<E, M>> {
        self.entries.get_mut(&id).map(|e| &mut e.handler)
    }

    /// Listener ids attached to `node`, in registration order.
    pub(crate) fn listeners_at(&self, node: NodeId) -> &[ListenerId] {
        self.by_node.get(&node).map_or(&[], Vec::as_slice)
    }

    /// Ids at `node` a removal spec reaches (kind match + namespace subset).
    pub(crate) fn ids_matching(&self, node: NodeId, name: &EventName) -> Vec<ListenerId> {
        self.listeners_at(node)
            .iter()
            .copied()
            .filter(|&id| {
                self.record(id)
                    .is_some_and(|rec| name.reaches(&rec.name))
            })
            .collect()
    }
}
