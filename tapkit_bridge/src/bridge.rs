// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tap special event: raw-input listeners, per-registration trackers, and
//! tap synthesis.
//!
//! ## Overview
//!
//! [`install`] registers hooks for the `"tap"` kind on a bus. When the first
//! tap listener appears, the bridge attaches direct listeners for the host's
//! raw input kinds at the tree root; when the last tap listener goes away, it
//! detaches them again. Each tap registration gets its own
//! [`AnyGestureSource`] tracker, keyed by [`ListenerId`], so nested and
//! delegated tap listeners judge one physical interaction independently.
//!
//! ## Synthesis and deduplication
//!
//! When a terminating raw event arrives, every tracking recognizer renders a
//! verdict. The first acceptance synthesizes one bubbling `"tap"` event
//! targeted at the raw event's target; acceptances by further trackers of the
//! *same* raw event are suppressed by remembering its [`DispatchId`], so
//! nested tap listeners see exactly one tap per physical gesture — delivered
//! to all of them by bubbling, not by repeated synthesis.
//!
//! Only [`EventOrigin::Physical`] events drive the trackers. Manually
//! triggering `"touchend"` or `"click"` never fabricates a tap; manually
//! triggering `"tap"` itself needs no bridge at all.

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;

use tapkit_bus::bus::{Bus, Handler, HookEvent, Reactions};
use tapkit_bus::name::EventName;
use tapkit_bus::selector::Selector;
use tapkit_bus::tree::{ElementTree, NodeId};
use tapkit_bus::types::{DispatchId, EventCtx, EventOrigin, ListenerId, Outcome, TriggerSpec};

use tapkit_gesture::capability::PointerCapability;
use tapkit_gesture::synth::TapPoints;
use tapkit_gesture::tracker::{AnyGestureSource, DurationPolicy, GestureSource, TapVerdict};

use crate::payload::InputPayload;

/// The synthesized gesture kind.
pub const TAP: &str = "tap";
/// Touch contact down.
pub const TOUCH_START: &str = "touchstart";
/// Touch contact movement.
pub const TOUCH_MOVE: &str = "touchmove";
/// Touch contact release.
pub const TOUCH_END: &str = "touchend";
/// Touch interaction abandoned by the host.
pub const TOUCH_CANCEL: &str = "touchcancel";
/// Mouse button press.
pub const MOUSE_DOWN: &str = "mousedown";
/// Mouse movement.
pub const MOUSE_MOVE: &str = "mousemove";
/// Mouse press/release pair, reported after the release.
pub const CLICK: &str = "click";

/// Host contexts that carry a [`TapBridge`].
///
/// Listener handlers only ever see the host context, so the bridge's mutable
/// state lives inside the host and is reached through this trait.
pub trait HasTapBridge {
    /// The bridge state.
    fn tap_bridge(&mut self) -> &mut TapBridge;
}

#[derive(Debug)]
struct TrackerEntry {
    node: NodeId,
    selector: Option<Selector>,
    source: AnyGestureSource,
}

/// State of the tap special event for one bus.
#[derive(Debug)]
pub struct TapBridge {
    capability: PointerCapability,
    duration: DurationPolicy,
    trackers: HashMap<ListenerId, TrackerEntry>,
    order: Vec<ListenerId>,
    raw_listeners: Vec<ListenerId>,
    fired_for: Option<DispatchId>,
}

impl TapBridge {
    /// A bridge for the given input family and duration policy.
    pub fn new(capability: PointerCapability, duration: DurationPolicy) -> Self {
        Self {
            capability,
            duration,
            trackers: HashMap::new(),
            order: Vec::new(),
            raw_listeners: Vec::new(),
            fired_for: None,
        }
    }

    /// The input family this bridge listens to.
    pub fn capability(&self) -> PointerCapability {
        self.capability
    }

    /// The duration policy applied to every tracker.
    pub fn duration(&self) -> DurationPolicy {
        self.duration
    }

    /// Number of raw input listeners currently attached.
    pub fn raw_listener_count(&self) -> usize {
        self.raw_listeners.len()
    }

    /// Number of tap registrations currently tracked.
    pub fn tracker_count(&self) -> usize {
        self.trackers.len()
    }
}

/// Install the tap special event on `bus`.
///
/// After this, registering a listener for the `"tap"` kind lazily attaches
/// raw input listeners matching the host's capability, and removing the last
/// one detaches them.
pub fn install<E: HasTapBridge + 'static>(bus: &mut Bus<E, InputPayload>) {
    bus.register_hooks(
        TAP,
        Box::new(|bus, host, ev| match ev {
            HookEvent::Setup { root } => setup(bus, host, root),
            HookEvent::Add { registration } => {
                let bridge = host.tap_bridge();
                let source = AnyGestureSource::for_capability(bridge.capability);
                bridge.trackers.insert(
                    registration.id,
                    TrackerEntry {
                        node: registration.node,
                        selector: registration.selector,
                        source,
                    },
                );
                bridge.order.push(registration.id);
            }
            HookEvent::Remove { registration } => {
                let bridge = host.tap_bridge();
                bridge.trackers.remove(&registration.id);
                bridge.order.retain(|&id| id != registration.id);
            }
            HookEvent::Teardown => {
                let raw = core::mem::take(&mut host.tap_bridge().raw_listeners);
                for id in raw {
                    bus.off(host, id);
                }
            }
        }),
    );
}

fn setup<E: HasTapBridge + 'static>(
    bus: &mut Bus<E, InputPayload>,
    host: &mut E,
    root: NodeId,
) {
    let kinds: &[&str] = match host.tap_bridge().capability {
        PointerCapability::Touch => &[TOUCH_START, TOUCH_MOVE, TOUCH_END, TOUCH_CANCEL],
        PointerCapability::Mouse => &[MOUSE_DOWN, MOUSE_MOVE, CLICK],
    };
    for &kind in kinds {
        let id = bus.on(host, root, EventName::from_kind(kind), None, raw_handler(kind));
        if let Some(id) = id {
            host.tap_bridge().raw_listeners.push(id);
        }
    }
}

fn raw_handler<E: HasTapBridge + 'static>(kind: &str) -> Handler<E, InputPayload> {
    let start = kind == TOUCH_START || kind == MOUSE_DOWN;
    let movement = kind == TOUCH_MOVE || kind == MOUSE_MOVE;
    let end = kind == TOUCH_END || kind == CLICK;
    Box::new(move |host, cx, rx| {
        if cx.event.origin != EventOrigin::Physical {
            return Outcome::Continue;
        }
        if start {
            on_start(host, cx);
        } else if movement {
            on_movement(host, cx);
        } else if end {
            on_end(host, cx, rx);
        } else {
            on_cancel(host);
        }
        Outcome::Continue
    })
}

/// Whether the registration behind `entry` observes an interaction starting
/// at a target with the given root→target `path`.
///
/// Direct registrations observe interactions anywhere in their subtree.
/// Delegated ones additionally need a strictly-deeper path node matching
/// their selector, mirroring how delegated tap listeners are matched at
/// delivery time.
fn observes(tree: &ElementTree, entry: &TrackerEntry, path: &[NodeId]) -> bool {
    let Some(pos) = path.iter().position(|&n| n == entry.node) else {
        return false;
    };
    match &entry.selector {
        None => true,
        Some(selector) => path[pos + 1..]
            .iter()
            .any(|&n| tree.data(n).is_some_and(|d| selector.matches(d))),
    }
}

fn on_start<E: HasTapBridge>(host: &mut E, cx: &EventCtx<'_, InputPayload>) {
    let Some(sample) = cx.event.payload.sample() else {
        return;
    };
    let path = cx.tree.path_to_root(cx.event.target);
    let bridge = host.tap_bridge();
    let order = bridge.order.clone();
    for id in order {
        let Some(entry) = bridge.trackers.get_mut(&id) else {
            continue;
        };
        // Already-tracking recognizers still take the signal (contact-count
        // bookkeeping); idle ones only start if the interaction is theirs.
        if entry.source.is_tracking() || observes(cx.tree, entry, &path) {
            entry.source.start(&sample);
        }
    }
}

fn on_movement<E: HasTapBridge>(host: &mut E, cx: &EventCtx<'_, InputPayload>) {
    let Some(position) = cx.event.payload.position() else {
        return;
    };
    let bridge = host.tap_bridge();
    for entry in bridge.trackers.values_mut() {
        entry.source.movement(position);
    }
}

fn on_end<E: HasTapBridge>(
    host: &mut E,
    cx: &EventCtx<'_, InputPayload>,
    rx: &mut Reactions<InputPayload>,
) {
    let Some(sample) = cx.event.payload.sample() else {
        return;
    };
    let bridge = host.tap_bridge();
    let duration = bridge.duration;
    let order = bridge.order.clone();
    for id in order {
        let Some(entry) = bridge.trackers.get_mut(&id) else {
            continue;
        };
        if !entry.source.is_tracking() {
            continue;
        }
        match entry.source.end(&sample, duration) {
            TapVerdict::Tap(accepted) => {
                // One tap per physical gesture: later acceptors of the same
                // raw dispatch stand down and let the first one's tap bubble.
                if bridge.fired_for == Some(cx.event.id) {
                    continue;
                }
                bridge.fired_for = Some(cx.event.id);
                rx.trigger(TriggerSpec {
                    name: EventName::from_kind(TAP),
                    target: cx.event.target,
                    origin: EventOrigin::Synthesized,
                    payload: InputPayload::Tap(TapPoints::from_sample(&accepted)),
                });
            }
            TapVerdict::Drop(_) => {}
        }
    }
}

fn on_cancel<E: HasTapBridge>(host: &mut E) {
    let bridge = host.tap_bridge();
    for entry in bridge.trackers.values_mut() {
        entry.source.cancel();
    }
}
