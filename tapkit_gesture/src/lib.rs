// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tapkit_gesture --heading-base-level=0

//! Tapkit Gesture: tap recognition state machines for touch and mouse input.
//!
//! This crate decides whether one physical interaction — contact down,
//! optional movement, release — was a tap. It has no event model of its own:
//! feed it [`InputSample`](sample::InputSample)s in the order the host
//! observed them, and it answers with a
//! [`TapVerdict`](tracker::TapVerdict). Routing the answer somewhere is the
//! integration layer's job (see `tapkit_bridge`).
//!
//! ## Recognition rules
//!
//! An interaction is a tap only when all of the following hold:
//!
//! - Displacement from the start position stayed within
//!   [`MOVE_THRESHOLD`](tracker::MOVE_THRESHOLD) pixels on *each* axis. A
//!   single excursion disqualifies permanently, even if the contact returns.
//! - At most one simultaneous contact was observed at any point.
//! - Every sample carried finite viewport coordinates.
//! - Under [`DurationPolicy::Within`](tracker::DurationPolicy::Within), the
//!   release came strictly before the bound elapsed.
//!
//! Failures are silent: the tracker reports a
//! [`DropReason`](tracker::DropReason) and resets, and nothing else happens.
//!
//! ## Input families
//!
//! Touch hosts and mouse-only hosts deliver different raw signals, so the
//! recognizer comes in two strategies behind one
//! [`GestureSource`](tracker::GestureSource) trait:
//! [`TouchGestureSource`](tracker::TouchGestureSource) counts simultaneous
//! contacts, while [`MouseGestureSource`](tracker::MouseGestureSource) pairs
//! a press with its click and skips contact counting. Pick one with
//! [`AnyGestureSource::for_capability`](tracker::AnyGestureSource::for_capability)
//! and a [`PointerCapability`](capability::PointerCapability) resolved from
//! the host's [`InputEnvironment`](capability::InputEnvironment).
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod capability;
pub mod sample;
pub mod synth;
pub mod tracker;
