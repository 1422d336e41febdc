// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use tapkit_bridge::bridge::{self, HasTapBridge, TapBridge, TAP, TOUCH_END, TOUCH_START};
use tapkit_bridge::payload::InputPayload;
use tapkit_bus::bus::Bus;
use tapkit_bus::name::EventName;
use tapkit_bus::tree::ElementData;
use tapkit_bus::types::{EventOrigin, Outcome, TriggerSpec};
use tapkit_gesture::capability::PointerCapability;
use tapkit_gesture::sample::InputSample;
use tapkit_gesture::tracker::{DurationPolicy, GestureSource, TouchGestureSource};

fn bench_tracker(c: &mut Criterion) {
    let mut group = c.benchmark_group("tapkit_gesture");

    group.bench_function("tracker/clean_tap", |b| {
        let mut tracker = TouchGestureSource::default();
        b.iter(|| {
            tracker.start(&InputSample::at(Point::new(0.0, 0.0), 0).with_contacts(1));
            for i in 0..10 {
                tracker.movement(Point::new(f64::from(i) * 0.5, 0.0));
            }
            black_box(tracker.end(
                &InputSample::at(Point::new(5.0, 0.0), 100),
                DurationPolicy::standard(),
            ))
        });
    });

    group.bench_function("tracker/rejected_by_movement", |b| {
        let mut tracker = TouchGestureSource::default();
        b.iter(|| {
            tracker.start(&InputSample::at(Point::new(0.0, 0.0), 0).with_contacts(1));
            tracker.movement(Point::new(50.0, 0.0));
            black_box(tracker.end(
                &InputSample::at(Point::new(50.0, 0.0), 100),
                DurationPolicy::standard(),
            ))
        });
    });

    group.finish();
}

struct Host {
    bridge: TapBridge,
    taps: u64,
}

impl HasTapBridge for Host {
    fn tap_bridge(&mut self) -> &mut TapBridge {
        &mut self.bridge
    }
}

fn bench_bridge(c: &mut Criterion) {
    let mut group = c.benchmark_group("tapkit_bridge");

    group.bench_function("gesture_to_tap", |b| {
        let mut bus: Bus<Host, InputPayload> = Bus::new();
        let root = bus.tree_mut().insert(ElementData::tag("html"), None).unwrap();
        let body = bus.tree_mut().insert(ElementData::tag("body"), Some(root)).unwrap();
        let button = bus
            .tree_mut()
            .insert(ElementData::tag("button"), Some(body))
            .unwrap();
        bridge::install(&mut bus);

        let mut host = Host {
            bridge: TapBridge::new(PointerCapability::Touch, DurationPolicy::Unbounded),
            taps: 0,
        };
        bus.on(
            &mut host,
            button,
            EventName::from_kind(TAP),
            None,
            Box::new(|host: &mut Host, _, _| {
                host.taps += 1;
                Outcome::Continue
            }),
        );

        b.iter(|| {
            bus.trigger(
                &mut host,
                TriggerSpec {
                    name: EventName::from_kind(TOUCH_START),
                    target: button,
                    origin: EventOrigin::Physical,
                    payload: InputPayload::Sample(
                        InputSample::at(Point::new(0.0, 0.0), 0).with_contacts(1),
                    ),
                },
            );
            bus.trigger(
                &mut host,
                TriggerSpec {
                    name: EventName::from_kind(TOUCH_END),
                    target: button,
                    origin: EventOrigin::Physical,
                    payload: InputPayload::Sample(InputSample::at(Point::new(0.0, 0.0), 50)),
                },
            );
            black_box(host.taps)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tracker, bench_bridge);
criterion_main!(benches);
