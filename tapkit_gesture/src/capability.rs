// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input capability detection, injected rather than probed globally.
//!
//! ## Usage
//!
//! Hosts describe their input hardware through [`InputEnvironment`]; callers
//! resolve that into a [`PointerCapability`] once, at construction time, and
//! hand it to whatever needs to pick an input strategy. Embedding the answer
//! in a value keeps recognition code testable: a test passes
//! [`StaticEnvironment`] instead of faking a platform query.

/// A host's description of its input hardware.
pub trait InputEnvironment {
    /// Whether the host delivers touch contact events.
    fn touch_capable(&self) -> bool;
}

/// A fixed capability answer, for hosts that know it up front and for tests.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct StaticEnvironment(pub bool);

impl InputEnvironment for StaticEnvironment {
    fn touch_capable(&self) -> bool {
        self.0
    }
}

/// The input family tap recognition should listen to.
///
/// Touch-capable hosts use touch contacts exclusively; everything else falls
/// back to mouse input. The two are never mixed on one bridge.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PointerCapability {
    /// Recognize taps from touch contact sequences.
    Touch,
    /// Recognize taps from mouse press/release sequences.
    Mouse,
}

impl PointerCapability {
    /// Resolve the capability for `env`.
    pub fn detect(env: &dyn InputEnvironment) -> Self {
        if env.touch_capable() {
            Self::Touch
        } else {
            Self::Mouse
        }
    }
}
