// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delegated listeners, namespaces, and manual triggering.
//!
//! One delegated listener on a list container observes taps on every row;
//! namespaced registration lets the whole group be removed in one call.
//!
//! Run:
//! - `cargo run -p tapkit_demos --example delegation`

use kurbo::Point;
use tapkit_bridge::bridge::{self, HasTapBridge, TapBridge, TOUCH_END, TOUCH_START};
use tapkit_bridge::payload::InputPayload;
use tapkit_bus::bus::Bus;
use tapkit_bus::name::EventName;
use tapkit_bus::selector::Selector;
use tapkit_bus::tree::{ElementData, NodeId};
use tapkit_bus::types::{EventOrigin, Outcome, TriggerSpec};
use tapkit_gesture::capability::PointerCapability;
use tapkit_gesture::sample::InputSample;
use tapkit_gesture::tracker::DurationPolicy;

struct App {
    bridge: TapBridge,
}

impl HasTapBridge for App {
    fn tap_bridge(&mut self) -> &mut TapBridge {
        &mut self.bridge
    }
}

fn tap_at(bus: &mut Bus<App, InputPayload>, app: &mut App, target: NodeId, t: u64) {
    let down = InputSample::at(Point::new(10.0, 10.0), t).with_contacts(1);
    bus.trigger(
        app,
        TriggerSpec {
            name: EventName::from_kind(TOUCH_START),
            target,
            origin: EventOrigin::Physical,
            payload: InputPayload::Sample(down),
        },
    );
    let up = InputSample::at(Point::new(10.0, 10.0), t + 80);
    bus.trigger(
        app,
        TriggerSpec {
            name: EventName::from_kind(TOUCH_END),
            target,
            origin: EventOrigin::Physical,
            payload: InputPayload::Sample(up),
        },
    );
}

fn main() {
    let mut bus: Bus<App, InputPayload> = Bus::new();
    let root = bus.tree_mut().insert(ElementData::tag("html"), None).unwrap();
    let list = bus
        .tree_mut()
        .insert(ElementData::tag("ul").with_class("menu"), Some(root))
        .unwrap();
    let first = bus
        .tree_mut()
        .insert(ElementData::tag("li").with_class("entry"), Some(list))
        .unwrap();
    let second = bus
        .tree_mut()
        .insert(ElementData::tag("li").with_class("entry"), Some(list))
        .unwrap();

    bridge::install(&mut bus);
    let mut app = App {
        bridge: TapBridge::new(PointerCapability::Touch, DurationPolicy::Unbounded),
    };

    // One delegated, namespaced listener covers every menu entry.
    bus.on(
        &mut app,
        list,
        EventName::parse("tap.menu").unwrap(),
        Some(Selector::parse("li.entry").unwrap()),
        Box::new(|_, cx, _| {
            println!("menu entry tapped: via={:?} origin={:?}", cx.via, cx.event.origin);
            Outcome::Continue
        }),
    );

    tap_at(&mut bus, &mut app, first, 0);
    tap_at(&mut bus, &mut app, second, 1_000);

    // Manual trigger, namespaced: reaches the listener without any gesture.
    bus.trigger(
        &mut app,
        TriggerSpec {
            name: EventName::parse("tap.menu").unwrap(),
            target: first,
            origin: EventOrigin::Manual,
            payload: InputPayload::Empty,
        },
    );

    // Remove the whole namespace group; further taps go nowhere.
    let removed = bus.off_matching(&mut app, list, &EventName::parse("tap.menu").unwrap());
    println!("removed {removed} listener(s) in .menu");
    tap_at(&mut bus, &mut app, first, 2_000);
    println!("done");
}
