// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tapkit_bridge --heading-base-level=0

//! Tapkit Bridge: the `"tap"` special event for a tapkit bus.
//!
//! ## Overview
//!
//! This crate wires `tapkit_gesture` recognition into a `tapkit_bus`
//! [`Bus`](tapkit_bus::bus::Bus). Hosts hold a
//! [`TapBridge`](bridge::TapBridge) (exposed through
//! [`HasTapBridge`](bridge::HasTapBridge)), call
//! [`install`](bridge::install) once, and from then on `"tap"` listeners
//! behave like any other listener: direct or delegated, namespaced,
//! removable, manually triggerable. Raw input listeners are attached at the
//! tree root only while at least one tap listener exists.
//!
//! ## Usage
//!
//! 1) Implement [`HasTapBridge`](bridge::HasTapBridge) on the host context,
//!    holding a [`TapBridge`](bridge::TapBridge) built from the host's
//!    [`PointerCapability`](tapkit_gesture::capability::PointerCapability)
//!    and chosen [`DurationPolicy`](tapkit_gesture::tracker::DurationPolicy).
//! 2) Call [`install`](bridge::install) on the bus.
//! 3) Register `"tap"` listeners and feed the host's raw input to the bus as
//!    [`EventOrigin::Physical`](tapkit_bus::types::EventOrigin::Physical)
//!    triggers carrying [`InputPayload`](payload::InputPayload).
//!
//! Accepted interactions surface as one bubbling `"tap"` event per physical
//! gesture, targeted where the contact lifted and carrying the release
//! positions in all three coordinate spaces.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod bridge;
pub mod payload;
