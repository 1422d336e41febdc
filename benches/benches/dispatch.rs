// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tapkit_bus::bus::Bus;
use tapkit_bus::name::EventName;
use tapkit_bus::selector::Selector;
use tapkit_bus::tree::{ElementData, NodeId};
use tapkit_bus::types::{EventOrigin, Outcome, TriggerSpec};

/// A root→leaf chain of `depth` nodes; the leaf is a `button.primary`.
fn chain(depth: usize) -> (Bus<u64, ()>, NodeId) {
    let mut bus: Bus<u64, ()> = Bus::new();
    let mut node = bus.tree_mut().insert(ElementData::tag("html"), None).unwrap();
    for _ in 1..depth.saturating_sub(1) {
        node = bus.tree_mut().insert(ElementData::tag("div"), Some(node)).unwrap();
    }
    let leaf = bus
        .tree_mut()
        .insert(ElementData::tag("button").with_class("primary"), Some(node))
        .unwrap();
    (bus, leaf)
}

fn trigger_at(leaf: NodeId) -> TriggerSpec<()> {
    TriggerSpec {
        name: EventName::from_kind("tap"),
        target: leaf,
        origin: EventOrigin::Manual,
        payload: (),
    }
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("tapkit_bus");

    for &depth in &[4_usize, 16, 64] {
        group.bench_function(format!("bubble_direct/depth_{depth}"), |b| {
            let (mut bus, leaf) = chain(depth);
            let mut hits = 0_u64;
            // One direct listener on every node of the bubble path.
            let path = bus.tree().path_to_root(leaf);
            for &node in path.iter() {
                bus.on(
                    &mut hits,
                    node,
                    EventName::from_kind("tap"),
                    None,
                    Box::new(|hits, _, _| {
                        *hits += 1;
                        Outcome::Continue
                    }),
                );
            }
            b.iter(|| {
                bus.trigger(&mut hits, trigger_at(black_box(leaf)));
                black_box(hits)
            });
        });

        group.bench_function(format!("bubble_delegated/depth_{depth}"), |b| {
            let (mut bus, leaf) = chain(depth);
            let root = bus.tree().root().unwrap();
            let mut hits = 0_u64;
            bus.on(
                &mut hits,
                root,
                EventName::from_kind("tap"),
                Some(Selector::parse("button.primary").unwrap()),
                Box::new(|hits, _, _| {
                    *hits += 1;
                    Outcome::Continue
                }),
            );
            b.iter(|| {
                bus.trigger(&mut hits, trigger_at(black_box(leaf)));
                black_box(hits)
            });
        });
    }

    group.bench_function("namespaced_filtering/miss", |b| {
        let (mut bus, leaf) = chain(16);
        let mut hits = 0_u64;
        bus.on(
            &mut hits,
            leaf,
            EventName::parse("tap.menu.overlay").unwrap(),
            None,
            Box::new(|hits, _, _| {
                *hits += 1;
                Outcome::Continue
            }),
        );
        let spec = TriggerSpec {
            name: EventName::parse("tap.other").unwrap(),
            target: leaf,
            origin: EventOrigin::Manual,
            payload: (),
        };
        b.iter(|| {
            bus.trigger(&mut hits, black_box(spec.clone()));
            black_box(hits)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
