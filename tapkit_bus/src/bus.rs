// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bus: listener registration, triggering, and bubbled delivery.
//!
//! ## Overview
//!
//! [`Bus`] owns the element tree, the listener table, and per-kind
//! special-event hooks. [`Bus::trigger`] snapshots the delivery sequence for
//! an event (target first, then ancestors; delegated matches before direct
//! listeners at each node), then executes handlers in order, honoring
//! [`Outcome`] propagation control.
//!
//! ## Re-entrancy
//!
//! Handlers never hold a reference to the bus. Follow-up work — triggering a
//! synthesized event, removing a listener — is queued on the per-dispatch
//! [`Reactions`] buffer and drained before [`Bus::trigger`] returns, so one
//! host call processes the entire synchronous callback chain in order.
//!
//! ## Special-event hooks
//!
//! A hook set registered for an event kind observes the registration
//! lifecycle: `Setup` when the first listener of the kind appears anywhere,
//! `Add`/`Remove` per registration, `Teardown` when the last one goes away.
//! Hooks do get mutable bus access (they run outside dispatch) so they can
//! attach low-level listeners of other kinds.
//!
//! ## Minimal example
//!
//! ```
//! use tapkit_bus::bus::Bus;
//! use tapkit_bus::name::EventName;
//! use tapkit_bus::tree::ElementData;
//! use tapkit_bus::types::{EventOrigin, Outcome, TriggerSpec};
//!
//! let mut bus: Bus<Vec<&'static str>, ()> = Bus::new();
//! let root = bus.tree_mut().insert(ElementData::tag("html"), None).unwrap();
//! let leaf = bus.tree_mut().insert(ElementData::tag("button"), Some(root)).unwrap();
//!
//! let mut log = Vec::new();
//! bus.on(
//!     &mut log,
//!     root,
//!     EventName::from_kind("tap"),
//!     None,
//!     Box::new(|log, _cx, _rx| {
//!         log.push("root saw tap");
//!         Outcome::Continue
//!     }),
//! );
//!
//! bus.trigger(
//!     &mut log,
//!     TriggerSpec {
//!         name: EventName::from_kind("tap"),
//!         target: leaf,
//!         origin: EventOrigin::Manual,
//!         payload: (),
//!     },
//! );
//! assert_eq!(log, ["root saw tap"]);
//! ```

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::name::EventName;
use crate::propagation;
use crate::registry::{ListenerTable, Registration};
use crate::selector::Selector;
use crate::tree::{ElementTree, NodeId};
use crate::types::{DispatchId, Event, EventCtx, ListenerId, Outcome, TriggerSpec};

/// A listener handler.
///
/// Receives the host context (application state threaded through every bus
/// call), the per-delivery [`EventCtx`], and the [`Reactions`] buffer for
/// queued follow-up work.
pub type Handler<E, M> =
    Box<dyn FnMut(&mut E, &EventCtx<'_, M>, &mut Reactions<M>) -> Outcome>;

/// A special-event hook set for one event kind.
pub type HookFn<E, M> = Box<dyn FnMut(&mut Bus<E, M>, &mut E, HookEvent)>;

/// Lifecycle notifications delivered to special-event hooks.
#[derive(Clone, Debug)]
pub enum HookEvent {
    /// First listener of the kind registered anywhere on the bus.
    Setup {
        /// The tree root, where integrations attach low-level listeners.
        root: NodeId,
    },
    /// A listener of the kind was registered.
    Add {
        /// The new registration.
        registration: Registration,
    },
    /// A listener of the kind was removed.
    Remove {
        /// The removed registration.
        registration: Registration,
    },
    /// Last listener of the kind removed.
    Teardown,
}

/// Follow-up work queued by handlers during a dispatch.
#[derive(Debug, Default)]
pub struct Reactions<M> {
    ops: Vec<Reaction<M>>,
}

#[derive(Debug)]
enum Reaction<M> {
    Trigger(TriggerSpec<M>),
    Off(ListenerId),
}

impl<M> Reactions<M> {
    fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Queue an event to propagate after the current one finishes.
    pub fn trigger(&mut self, spec: TriggerSpec<M>) {
        self.ops.push(Reaction::Trigger(spec));
    }

    /// Queue a listener removal, applied after the current propagation.
    pub fn off(&mut self, id: ListenerId) {
        self.ops.push(Reaction::Off(id));
    }
}

/// The event bus over an [`ElementTree`].
///
/// Generic over the host context `E` (application state handed to handlers)
/// and the event payload `M`.
pub struct Bus<E, M> {
    tree: ElementTree,
    registry: ListenerTable<E, M>,
    hooks: HashMap<String, HookFn<E, M>>,
    queue: VecDeque<TriggerSpec<M>>,
    next_dispatch: u64,
}

impl<E, M> core::fmt::Debug for Bus<E, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Bus")
            .field("tree", &self.tree)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl<E, M> Default for Bus<E, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, M> Bus<E, M> {
    /// An empty bus over an empty tree.
    pub fn new() -> Self {
        Self {
            tree: ElementTree::new(),
            registry: ListenerTable::default(),
            hooks: HashMap::new(),
            queue: VecDeque::new(),
            next_dispatch: 1,
        }
    }

    /// Read access to the element tree.
    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    /// Mutable access to the element tree (build the hierarchy here).
    pub fn tree_mut(&mut self) -> &mut ElementTree {
        &mut self.tree
    }

    /// Install the special-event hook set for `kind`, replacing any previous.
    pub fn register_hooks(&mut self, kind: &str, hooks: HookFn<E, M>) {
        self.hooks.insert(kind.to_string(), hooks);
    }

    /// Register a listener.
    ///
    /// `selector == None` registers a direct listener on `node`; with a
    /// selector the listener is delegated and fires for matching descendants
    /// on the bubble path. Returns `None` if `node` is stale.
    pub fn on(
        &mut self,
        host: &mut E,
        node: NodeId,
        name: EventName,
        selector: Option<Selector>,
        handler: Handler<E, M>,
    ) -> Option<ListenerId> {
        if !self.tree.is_alive(node) {
            return None;
        }
        let kind = name.kind().to_string();
        let (id, first_of_kind) = self.registry.insert(node, name, selector, handler);

        // Hooks run with the hook set temporarily taken out of the map, so
        // they may register listeners of other kinds on this bus.
        if let Some(mut hooks) = self.hooks.remove(&kind) {
            if first_of_kind && let Some(root) = self.tree.root() {
                hooks(self, host, HookEvent::Setup { root });
            }
            if let Some(rec) = self.registry.record(id).cloned() {
                hooks(self, host, HookEvent::Add { registration: rec });
            }
            self.hooks.insert(kind, hooks);
        }
        Some(id)
    }

    /// Remove a listener. Returns `false` for unknown ids.
    pub fn off(&mut self, host: &mut E, id: ListenerId) -> bool {
        let Some((registration, last_of_kind)) = self.registry.remove(id) else {
            return false;
        };
        let kind = registration.name.kind().to_string();
        if let Some(mut hooks) = self.hooks.remove(&kind) {
            hooks(self, host, HookEvent::Remove { registration });
            if last_of_kind {
                hooks(self, host, HookEvent::Teardown);
            }
            self.hooks.insert(kind, hooks);
        }
        true
    }

    /// Remove every listener on `node` the removal spec reaches (same kind,
    /// namespaces a subset of the listener's).
    pub fn off_matching(&mut self, host: &mut E, node: NodeId, name: &EventName) -> usize {
        let ids = self.registry.ids_matching(node, name);
        let mut removed = 0;
        for id in ids {
            if self.off(host, id) {
                removed += 1;
            }
        }
        removed
    }

    /// Propagate an event and drain every queued follow-up before returning.
    ///
    /// Returns whether the triggered event itself was consumed (a handler
    /// returned [`Outcome::StopAndConsume`]). Consumption of queued
    /// follow-ups is not reported.
    pub fn trigger(&mut self, host: &mut E, spec: TriggerSpec<M>) -> bool {
        self.queue.push_back(spec);
        let mut first_consumed = false;
        let mut first = true;
        while let Some(next) = self.queue.pop_front() {
            let consumed = self.propagate(host, next);
            if first {
                first_consumed = consumed;
                first = false;
            }
        }
        first_consumed
    }

    fn propagate(&mut self, host: &mut E, spec: TriggerSpec<M>) -> bool {
        let id = DispatchId(self.next_dispatch);
        self.next_dispatch += 1;
        let event = Event {
            name: spec.name,
            target: spec.target,
            origin: spec.origin,
            id,
            payload: spec.payload,
        };

        // Snapshot the sequence: handlers observe the listener set as it was
        // when the event fired.
        let seq = propagation::deliveries(&self.tree, &self.registry, &event.name, event.target);
        let mut reactions = Reactions::new();
        let mut consumed = false;
        {
            // Split borrows: handlers get the tree read-only while their own
            // storage is borrowed mutably.
            let Self { tree, registry, .. } = self;
            for d in seq {
                let Some(handler) = registry.handler_mut(d.listener) else {
                    continue;
                };
                let ctx = EventCtx {
                    event: &event,
                    phase: d.phase,
                    node: d.node,
                    via: d.via,
                    listener: d.listener,
                    tree: &*tree,
                };
                match handler(host, &ctx, &mut reactions) {
                    Outcome::Continue => {}
                    Outcome::Stop => break,
                    Outcome::StopAndConsume => {
                        consumed = true;
                        break;
                    }
                }
            }
        }

        for op in reactions.ops {
            match op {
                Reaction::Trigger(next) => self.queue.push_back(next),
                Reaction::Off(listener) => {
                    self.off(host, listener);
                }
            }
        }
        consumed
    }
}
