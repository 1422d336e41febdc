// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delivery-sequence computation for one event.
//!
//! ## Overview
//!
//! Orders the listeners an event reaches, before any handler runs. The bus
//! snapshots this sequence and then executes it, so handlers observe the
//! listener set as it was when the event fired.
//!
//! ## Ordering
//!
//! The bubble path is target→root. At each path node:
//!
//! - Delegated listeners of the node are matched against strictly-deeper
//!   path nodes, deepest first; within one depth, registration order.
//! - Then the node's direct listeners, in registration order.
//!
//! Namespace filtering applies throughout: a trigger carrying namespaces
//! reaches only listeners registered with a superset of them.

use alloc::vec::Vec;

use crate::name::EventName;
use crate::registry::ListenerTable;
use crate::tree::{ElementTree, NodeId};
use crate::types::{ListenerId, Phase};

/// One planned handler invocation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Delivery {
    /// The registration to invoke.
    pub(crate) listener: ListenerId,
    /// The node whose listener list is being serviced.
    pub(crate) node: NodeId,
    /// The matched node: a deeper path node for delegated listeners, the
    /// listener's own node otherwise.
    pub(crate) via: NodeId,
    /// Phase at `node`.
    pub(crate) phase: Phase,
}

/// Compute the full delivery sequence for an event named `name` at `target`.
///
/// Returns an empty sequence for stale targets.
pub(crate) fn deliveries<E, M>(
    tree: &ElementTree,
    table: &ListenerTable<E, M>,
    name: &EventName,
    target: NodeId,
) -> Vec<Delivery> {
    let path = tree.path_to_root(target);
    let mut out = Vec::new();

    for (i, &node) in path.iter().enumerate().rev() {
        let phase = if node == target {
            Phase::Target
        } else {
            Phase::Bubble
        };

        // Delegated matches against deeper path nodes, deepest first.
        for &deeper in path[i + 1..].iter().rev() {
            let Some(data) = tree.data(deeper) else {
                continue;
            };
            for &listener in table.listeners_at(node) {
                let Some(rec) = table.record(listener) else {
                    continue;
                };
                if let Some(selector) = &rec.selector
                    && name.reaches(&rec.name)
                    && selector.matches(data)
                {
                    out.push(Delivery {
                        listener,
                        node,
                        via: deeper,
                        phase,
                    });
                }
            }
        }

        // Direct listeners of the node itself.
        for &listener in table.listeners_at(node) {
            let Some(rec) = table.record(listener) else {
                continue;
            };
            if rec.selector.is_none() && name.reaches(&rec.name) {
                out.push(Delivery {
                    listener,
                    node,
                    via: node,
                    phase,
                });
            }
        }
    }
    out
}
