// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A complete tap round trip: raw touch input in, one bubbled tap out.
//!
//! Builds a small element tree, installs the tap special event, and replays a
//! recorded touch interaction against it.
//!
//! Run:
//! - `cargo run -p tapkit_demos --example tap_basics`

use kurbo::Point;
use tapkit_bridge::bridge::{self, HasTapBridge, TapBridge, TAP, TOUCH_END, TOUCH_MOVE, TOUCH_START};
use tapkit_bridge::payload::InputPayload;
use tapkit_bus::bus::Bus;
use tapkit_bus::name::EventName;
use tapkit_bus::tree::{ElementData, NodeId};
use tapkit_bus::types::{EventOrigin, Outcome, TriggerSpec};
use tapkit_gesture::capability::{PointerCapability, StaticEnvironment};
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

fn physical(bus: &mut Bus<App, InputPayload>, app: &mut App, kind: &str, target: NodeId, payload: InputPayload) {
    bus.trigger(
        app,
        TriggerSpec {
            name: EventName::from_kind(kind),
            target,
            origin: EventOrigin::Physical,
            payload,
        },
    );
}

fn main() {
    let mut bus: Bus<App, InputPayload> = Bus::new();
    let root = bus.tree_mut().insert(ElementData::tag("html"), None).unwrap();
    let body = bus.tree_mut().insert(ElementData::tag("body"), Some(root)).unwrap();
    let button = bus
        .tree_mut()
        .insert(ElementData::tag("button").with_id("send"), Some(body))
        .unwrap();

    bridge::install(&mut bus);
    let capability = PointerCapability::detect(&StaticEnvironment(true));
    let mut app = App {
        bridge: TapBridge::new(capability, DurationPolicy::standard()),
    };

    bus.on(
        &mut app,
        button,
        EventName::from_kind(TAP),
        None,
        Box::new(|_, cx, _| {
            if let Some(points) = cx.event.payload.tap() {
                println!("tap on #send at {:?} (phase {:?})", points.client, cx.phase);
            }
            Outcome::Continue
        }),
    );
    bus.on(
        &mut app,
        root,
        EventName::from_kind(TAP),
        None,
        Box::new(|_, cx, _| {
            println!("tap bubbled to <html> (phase {:?})", cx.phase);
            Outcome::Continue
        }),
    );

    // Finger down on the button, a slight wobble, finger up 120 ms later.
    let down = InputSample::at(Point::new(42.0, 18.0), 0).with_contacts(1);
    physical(&mut bus, &mut app, TOUCH_START, button, InputPayload::Sample(down));
    physical(
        &mut bus,
        &mut app,
        TOUCH_MOVE,
        button,
        InputPayload::Position(Point::new(45.0, 20.0)),
    );
    let up = InputSample::at(Point::new(45.0, 20.0), 120);
    physical(&mut bus, &mut app, TOUCH_END, button, InputPayload::Sample(up));

    // A swipe: same endpoints, but it strayed 30 px along the way. No tap.
    let down = InputSample::at(Point::new(42.0, 18.0), 1_000).with_contacts(1);
    physical(&mut bus, &mut app, TOUCH_START, button, InputPayload::Sample(down));
    physical(
        &mut bus,
        &mut app,
        TOUCH_MOVE,
        button,
        InputPayload::Position(Point::new(72.0, 18.0)),
    );
    let up = InputSample::at(Point::new(44.0, 18.0), 1_120);
    physical(&mut bus, &mut app, TOUCH_END, button, InputPayload::Sample(up));
    println!("swipe produced no tap");
}
