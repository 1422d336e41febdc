// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The event payload vocabulary shared by raw input and synthesized taps.

use kurbo::Point;

use tapkit_gesture::sample::InputSample;
use tapkit_gesture::synth::TapPoints;

/// Payload carried by every event on a tap-aware bus.
///
/// Raw press/release events carry a full [`InputSample`]; intermediate
/// movement carries only a position; synthesized taps carry the accepted
/// [`TapPoints`]. Manually triggered events usually carry [`Empty`](Self::Empty).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputPayload {
    /// A full pointer sample (press and release events).
    Sample(InputSample),
    /// A viewport position (movement events).
    Position(Point),
    /// The positions of an accepted tap.
    Tap(TapPoints),
    /// No input data.
    Empty,
}

impl InputPayload {
    /// The full sample, if this payload carries one.
    pub fn sample(&self) -> Option<InputSample> {
        match self {
            Self::Sample(sample) => Some(*sample),
            _ => None,
        }
    }

    /// The viewport position, from either a sample or a bare position.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Sample(sample) => Some(sample.client),
            Self::Position(p) => Some(*p),
            _ => None,
        }
    }

    /// The tap positions, if this payload is a synthesized tap.
    pub fn tap(&self) -> Option<TapPoints> {
        match self {
            Self::Tap(points) => Some(*points),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_reads_both_variants() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(InputPayload::Position(p).position(), Some(p));
        assert_eq!(
            InputPayload::Sample(InputSample::at(p, 0)).position(),
            Some(p)
        );
        assert_eq!(InputPayload::Empty.position(), None);
    }

    #[test]
    fn accessors_reject_other_variants() {
        assert_eq!(InputPayload::Empty.sample(), None);
        assert_eq!(InputPayload::Position(Point::ZERO).tap(), None);
    }
}
