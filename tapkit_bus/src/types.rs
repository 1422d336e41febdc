// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the bus: phases, outcomes, origins, identifiers, and events.
//!
//! ## Overview
//!
//! These types describe the dispatch protocol and its inputs/outputs.
//! They are referenced by the [`bus`](crate::bus) and used by downstream
//! integrations such as special-event bridges.

use crate::name::EventName;
use crate::tree::{ElementTree, NodeId};

/// Phases of event propagation.
///
/// Appears on each delivery performed by
/// [`Bus::trigger`](crate::bus::Bus::trigger). Triggered events start at the
/// target and bubble toward the root; there is no capture phase.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Delivery at the target node itself.
    Target,
    /// Target-to-root traversal.
    Bubble,
}

/// Handler outcome controlling propagation.
///
/// Returned by listener handlers to decide whether propagation continues to
/// the remaining deliveries of the current event.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Continue with the next delivery.
    Continue,
    /// Stop propagation immediately.
    Stop,
    /// Stop and mark the event consumed (for higher-level policies).
    StopAndConsume,
}

/// Where a dispatched event came from.
///
/// Carried explicitly on every [`Event`] instead of being duck-typed onto a
/// shared raw-event object. Special-event integrations use it to tell raw
/// hardware input apart from events they synthesized themselves and from
/// events application code triggered manually.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EventOrigin {
    /// Produced by the host's input source (hardware).
    Physical,
    /// Produced by a special-event integration from a physical interaction.
    Synthesized,
    /// Triggered programmatically by application code.
    Manual,
}

/// Identity of one top-level dispatch.
///
/// Every event propagated by the bus is stamped with a fresh, monotonically
/// increasing `DispatchId`. Because all listeners observing the same physical
/// event see the same id, it doubles as the *physical gesture identity* used
/// by gesture bridges to deduplicate synthesis across nested trackers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct DispatchId(pub(crate) u64);

impl DispatchId {
    /// The raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Handle for one listener registration.
///
/// Allocated by [`Bus::on`](crate::bus::Bus::on) and never reused for the
/// lifetime of the bus. Integrations key per-registration state (for example
/// a gesture tracker) by this id rather than by a generated pseudo-namespace.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

impl ListenerId {
    /// The raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A request to propagate one event, before the bus has stamped it.
///
/// Passed to [`Bus::trigger`](crate::bus::Bus::trigger) and to
/// [`Reactions::trigger`](crate::bus::Reactions::trigger).
#[derive(Clone, Debug)]
pub struct TriggerSpec<M> {
    /// Event name, optionally carrying namespaces to filter listeners.
    pub name: EventName,
    /// The node the event originates at; propagation bubbles from here.
    pub target: NodeId,
    /// Provenance of the event.
    pub origin: EventOrigin,
    /// Application payload (positions, touch data, or `()`).
    pub payload: M,
}

/// One event as seen by listener handlers.
#[derive(Clone, Debug)]
pub struct Event<M> {
    /// Event name the trigger carried.
    pub name: EventName,
    /// Origin node of the propagation.
    pub target: NodeId,
    /// Provenance of the event.
    pub origin: EventOrigin,
    /// Identity of this dispatch; shared by every delivery of the event.
    pub id: DispatchId,
    /// Application payload.
    pub payload: M,
}

/// Per-delivery context passed to listener handlers.
///
/// Borrows the event and the element tree so handlers can inspect ancestry
/// without re-entering the bus.
#[derive(Debug)]
pub struct EventCtx<'a, M> {
    /// The event being delivered.
    pub event: &'a Event<M>,
    /// Propagation phase at the current node.
    pub phase: Phase,
    /// The node whose listener list is being serviced.
    pub node: NodeId,
    /// For delegated listeners, the descendant that matched the selector;
    /// equal to [`node`](Self::node) for direct listeners.
    pub via: NodeId,
    /// The registration receiving this delivery.
    pub listener: ListenerId,
    /// Read access to the element tree for ancestry and selector queries.
    pub tree: &'a ElementTree,
}
