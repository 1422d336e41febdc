// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tapkit_bus --heading-base-level=0

//! Tapkit Bus: a `no_std` element tree and bubbling event bus.
//!
//! ## Overview
//!
//! This crate provides the routing substrate gesture integrations build on: a
//! single-rooted [element tree](crate::tree::ElementTree) of selector-addressable
//! nodes and a [`Bus`](crate::bus::Bus) that propagates named events from a
//! target node toward the root. It performs no input interpretation itself;
//! feed it triggers and it delivers them.
//!
//! ## Listeners
//!
//! Listeners register on a node for an [`EventName`](crate::name::EventName) —
//! an event kind plus optional dotted namespaces. A *direct* listener fires
//! when its node is on the bubble path. A *delegated* listener additionally
//! carries a [`Selector`](crate::selector::Selector) and fires only for
//! matching descendants, the way list containers observe their rows without
//! per-row registrations.
//!
//! ## Ordering
//!
//! Propagation visits the target first, then each ancestor up to the root. At
//! every path node, delegated matches run before the node's direct listeners
//! (deepest matched descendant first), and listeners run in registration
//! order within each group. A handler returning
//! [`Outcome::Stop`](crate::types::Outcome::Stop) halts the remaining
//! deliveries; [`Outcome::StopAndConsume`](crate::types::Outcome::StopAndConsume)
//! additionally marks the event consumed for the caller.
//!
//! ## Namespaces
//!
//! `"tap.menu.overlay"` registers a `tap` listener under namespaces `menu`
//! and `overlay`. A trigger (or removal) carrying namespaces reaches exactly
//! the listeners registered under a superset of them; a bare trigger reaches
//! every listener of the kind. Namespace order never matters.
//!
//! ## Special-event hooks
//!
//! Per-kind [hooks](crate::bus::Bus::register_hooks) observe the registration
//! lifecycle — setup on the first listener of a kind, add/remove per
//! registration, teardown after the last — so integrations can lazily attach
//! the low-level listeners they need and tear them down symmetrically. The
//! `tapkit_bridge` crate uses this to install tap recognition.
//!
//! ## Re-entrancy
//!
//! Handlers queue follow-up triggers and removals on a
//! [`Reactions`](crate::bus::Reactions) buffer; the bus drains the queue
//! before [`trigger`](crate::bus::Bus::trigger) returns, so a physical event
//! and every event synthesized from it run as one synchronous chain, each
//! with its own [`DispatchId`](crate::types::DispatchId).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod bus;
pub mod name;
pub mod registry;
pub mod selector;
pub mod tree;
pub mod types;

mod propagation;
