// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap tracking state machines: decide whether one interaction was a tap.
//!
//! ## Usage
//!
//! 1) Feed the start of an interaction to [`GestureSource::start`].
//! 2) Feed position updates to [`GestureSource::movement`]; displacement
//!    beyond [`MOVE_THRESHOLD`] on either axis permanently disqualifies the
//!    interaction, without ending tracking.
//! 3) Feed the terminating signal to [`GestureSource::end`] and inspect the
//!    [`TapVerdict`]. Every verdict resets the tracker to idle.
//! 4) [`GestureSource::cancel`] resets unconditionally.
//!
//! Disqualifications are verdicts, not errors: a rejected interaction simply
//! produces no tap, and the reason is reported for diagnostics only.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use tapkit_gesture::sample::InputSample;
//! use tapkit_gesture::tracker::{
//!     DurationPolicy, GestureSource, TapVerdict, TouchGestureSource,
//! };
//!
//! let mut tracker = TouchGestureSource::default();
//! tracker.start(&InputSample::at(Point::new(0.0, 0.0), 0).with_contacts(1));
//! tracker.movement(Point::new(5.0, 5.0));
//!
//! let end = InputSample::at(Point::new(5.0, 5.0), 100);
//! assert!(matches!(
//!     tracker.end(&end, DurationPolicy::Unbounded),
//!     TapVerdict::Tap(_)
//! ));
//! assert!(!tracker.is_tracking());
//! ```

use kurbo::Point;

use crate::sample::InputSample;

/// Maximum per-axis displacement, in device-independent pixels, before an
/// interaction stops being a tap.
pub const MOVE_THRESHOLD: f64 = 10.0;

/// Default duration bound, in milliseconds, for [`DurationPolicy::standard`].
pub const MAX_DURATION_MS: u64 = 300;

/// Whether elapsed time disqualifies slow interactions.
///
/// The bound is policy rather than a constant of the recognizer: some hosts
/// want press-and-hold to still count as a tap, others want holds to stay
/// available for other gestures.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DurationPolicy {
    /// No time limit; a hold of any length can end in a tap.
    #[default]
    Unbounded,
    /// Reject interactions whose elapsed time reaches the bound. An
    /// interaction lasting exactly the bound is rejected.
    Within(u64),
}

impl DurationPolicy {
    /// The conventional bound of [`MAX_DURATION_MS`].
    pub const fn standard() -> Self {
        Self::Within(MAX_DURATION_MS)
    }

    fn rejects(self, elapsed_ms: u64) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Within(bound) => elapsed_ms >= bound,
        }
    }
}

/// Why an interaction did not end in a tap.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DropReason {
    /// An end signal arrived with no interaction in progress.
    NotTracking,
    /// A sample in the interaction carried non-finite coordinates.
    Malformed,
    /// More than one contact was still down at the end signal.
    ContactsRemain,
    /// A second simultaneous contact was observed at some point, even if it
    /// lifted before the end signal.
    MultiContact,
    /// Displacement exceeded [`MOVE_THRESHOLD`] on some axis.
    Moved,
    /// Elapsed time reached the [`DurationPolicy`] bound.
    TooSlow,
}

/// Outcome of an end signal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TapVerdict {
    /// The interaction was a tap; synthesize from the carried release sample.
    Tap(InputSample),
    /// The interaction was disqualified.
    Drop(DropReason),
}

/// State accumulated between a start signal and its end or cancel.
#[derive(Copy, Clone, Debug)]
struct Tracking {
    start: InputSample,
    max_contacts: u32,
    moved: bool,
    malformed: bool,
}

impl Tracking {
    fn begin(sample: &InputSample) -> Self {
        Self {
            start: *sample,
            max_contacts: sample.contact_count.max(1),
            moved: false,
            malformed: sample.is_malformed(),
        }
    }

    fn observe_movement(&mut self, client: Point) {
        if !client.x.is_finite() || !client.y.is_finite() {
            self.malformed = true;
            return;
        }
        let dx = (client.x - self.start.client.x).abs();
        let dy = (client.y - self.start.client.y).abs();
        if dx > MOVE_THRESHOLD || dy > MOVE_THRESHOLD {
            self.moved = true;
        }
    }
}

/// A tap recognizer for one input family.
///
/// Implementations are strategies over the same tracking state; which one a
/// bridge instantiates depends on the host's
/// [`PointerCapability`](crate::capability::PointerCapability).
pub trait GestureSource {
    /// Begin an interaction, or fold contact bookkeeping into a running one.
    ///
    /// A start signal during tracking never restarts position or time; it
    /// only records that additional simultaneous contacts appeared.
    fn start(&mut self, sample: &InputSample);

    /// Observe a position update during tracking. Idle trackers ignore it.
    fn movement(&mut self, client: Point);

    /// Terminate the interaction and judge it. Resets to idle.
    fn end(&mut self, sample: &InputSample, policy: DurationPolicy) -> TapVerdict;

    /// Abandon any interaction in progress.
    fn cancel(&mut self);

    /// Whether an interaction is in progress.
    fn is_tracking(&self) -> bool;
}

/// Tap recognition over touch contact sequences.
///
/// An interaction runs from the first contact's start signal to the end
/// signal of the release. Rejections, in evaluation order: end with no
/// tracking, malformed samples, more than one contact still down at release,
/// more than one simultaneous contact observed at any point, movement beyond
/// the threshold, and (under a bounded [`DurationPolicy`]) elapsed time.
#[derive(Clone, Debug, Default)]
pub struct TouchGestureSource {
    state: Option<Tracking>,
}

impl GestureSource for TouchGestureSource {
    fn start(&mut self, sample: &InputSample) {
        match &mut self.state {
            Some(tracking) => {
                tracking.max_contacts = tracking.max_contacts.max(sample.contact_count);
                if sample.is_malformed() {
                    tracking.malformed = true;
                }
            }
            None => self.state = Some(Tracking::begin(sample)),
        }
    }

    fn movement(&mut self, client: Point) {
        if let Some(tracking) = &mut self.state {
            tracking.observe_movement(client);
        }
    }

    fn end(&mut self, sample: &InputSample, policy: DurationPolicy) -> TapVerdict {
        let Some(tracking) = self.state.take() else {
            return TapVerdict::Drop(DropReason::NotTracking);
        };
        if tracking.malformed || sample.is_malformed() {
            return TapVerdict::Drop(DropReason::Malformed);
        }
        if sample.contact_count > 1 {
            return TapVerdict::Drop(DropReason::ContactsRemain);
        }
        if tracking.max_contacts > 1 {
            return TapVerdict::Drop(DropReason::MultiContact);
        }
        if tracking.moved {
            return TapVerdict::Drop(DropReason::Moved);
        }
        let elapsed = sample.timestamp_ms.saturating_sub(tracking.start.timestamp_ms);
        if policy.rejects(elapsed) {
            return TapVerdict::Drop(DropReason::TooSlow);
        }
        TapVerdict::Tap(*sample)
    }

    fn cancel(&mut self) {
        self.state = None;
    }

    fn is_tracking(&self) -> bool {
        self.state.is_some()
    }
}

/// Tap recognition over mouse press/release sequences.
///
/// The terminating signal is the click paired with a prior press. Only the
/// movement threshold and sample validity gate acceptance; contact counting
/// does not apply to a mouse, and the duration policy is still honored so
/// both families behave alike under a bounded policy.
#[derive(Clone, Debug, Default)]
pub struct MouseGestureSource {
    state: Option<Tracking>,
}

impl GestureSource for MouseGestureSource {
    fn start(&mut self, sample: &InputSample) {
        if self.state.is_none() {
            self.state = Some(Tracking::begin(sample));
        }
    }

    fn movement(&mut self, client: Point) {
        if let Some(tracking) = &mut self.state {
            tracking.observe_movement(client);
        }
    }

    fn end(&mut self, sample: &InputSample, policy: DurationPolicy) -> TapVerdict {
        let Some(tracking) = self.state.take() else {
            return TapVerdict::Drop(DropReason::NotTracking);
        };
        if tracking.malformed || sample.is_malformed() {
            return TapVerdict::Drop(DropReason::Malformed);
        }
        if tracking.moved {
            return TapVerdict::Drop(DropReason::Moved);
        }
        let elapsed = sample.timestamp_ms.saturating_sub(tracking.start.timestamp_ms);
        if policy.rejects(elapsed) {
            return TapVerdict::Drop(DropReason::TooSlow);
        }
        TapVerdict::Tap(*sample)
    }

    fn cancel(&mut self) {
        self.state = None;
    }

    fn is_tracking(&self) -> bool {
        self.state.is_some()
    }
}

/// Capability-selected recognizer.
#[derive(Clone, Debug)]
pub enum AnyGestureSource {
    /// Touch recognition.
    Touch(TouchGestureSource),
    /// Mouse fallback.
    Mouse(MouseGestureSource),
}

impl AnyGestureSource {
    /// The recognizer matching `capability`.
    pub fn for_capability(capability: crate::capability::PointerCapability) -> Self {
        match capability {
            crate::capability::PointerCapability::Touch => {
                Self::Touch(TouchGestureSource::default())
            }
            crate::capability::PointerCapability::Mouse => {
                Self::Mouse(MouseGestureSource::default())
            }
        }
    }
}

impl GestureSource for AnyGestureSource {
    fn start(&mut self, sample: &InputSample) {
        match self {
            Self::Touch(t) => t.start(sample),
            Self::Mouse(m) => m.start(sample),
        }
    }

    fn movement(&mut self, client: Point) {
        match self {
            Self::Touch(t) => t.movement(client),
            Self::Mouse(m) => m.movement(client),
        }
    }

    fn end(&mut self, sample: &InputSample, policy: DurationPolicy) -> TapVerdict {
        match self {
            Self::Touch(t) => t.end(sample, policy),
            Self::Mouse(m) => m.end(sample, policy),
        }
    }

    fn cancel(&mut self) {
        match self {
            Self::Touch(t) => t.cancel(),
            Self::Mouse(m) => m.cancel(),
        }
    }

    fn is_tracking(&self) -> bool {
        match self {
            Self::Touch(t) => t.is_tracking(),
            Self::Mouse(m) => m.is_tracking(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::PointerCapability;

    fn down(x: f64, y: f64, t: u64) -> InputSample {
        InputSample::at(Point::new(x, y), t).with_contacts(1)
    }

    fn up(x: f64, y: f64, t: u64) -> InputSample {
        InputSample::at(Point::new(x, y), t)
    }

    #[test]
    fn clean_interaction_is_a_tap() {
        let mut tracker = TouchGestureSource::default();
        tracker.start(&down(0.0, 0.0, 0));
        tracker.movement(Point::new(5.0, 5.0));
        let verdict = tracker.end(&up(5.0, 5.0, 100), DurationPolicy::Unbounded);
        let TapVerdict::Tap(sample) = verdict else {
            panic!("expected tap, got {verdict:?}");
        };
        assert_eq!(sample.client, Point::new(5.0, 5.0));
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn end_without_start_is_rejected() {
        let mut tracker = TouchGestureSource::default();
        assert_eq!(
            tracker.end(&up(0.0, 0.0, 0), DurationPolicy::Unbounded),
            TapVerdict::Drop(DropReason::NotTracking)
        );
    }

    #[test]
    fn movement_at_threshold_is_still_a_tap() {
        let mut tracker = TouchGestureSource::default();
        tracker.start(&down(0.0, 0.0, 0));
        tracker.movement(Point::new(10.0, 10.0));
        assert!(matches!(
            tracker.end(&up(10.0, 10.0, 50), DurationPolicy::Unbounded),
            TapVerdict::Tap(_)
        ));
    }

    #[test]
    fn movement_past_threshold_on_one_axis_rejects() {
        let mut tracker = TouchGestureSource::default();
        tracker.start(&down(0.0, 0.0, 0));
        tracker.movement(Point::new(0.0, 10.1));
        assert_eq!(
            tracker.end(&up(0.0, 10.1, 50), DurationPolicy::Unbounded),
            TapVerdict::Drop(DropReason::Moved)
        );
    }

    #[test]
    fn return_trip_does_not_unlatch_movement() {
        let mut tracker = TouchGestureSource::default();
        tracker.start(&down(0.0, 0.0, 0));
        tracker.movement(Point::new(25.0, 0.0));
        tracker.movement(Point::new(0.0, 0.0));
        assert_eq!(
            tracker.end(&up(0.0, 0.0, 50), DurationPolicy::Unbounded),
            TapVerdict::Drop(DropReason::Moved)
        );
    }

    #[test]
    fn second_contact_disqualifies_even_after_lifting() {
        let mut tracker = TouchGestureSource::default();
        tracker.start(&down(0.0, 0.0, 0));
        tracker.start(&down(40.0, 0.0, 10).with_contacts(2));
        // Second finger lifts first; only one contact accounted at release.
        assert_eq!(
            tracker.end(&up(0.0, 0.0, 50), DurationPolicy::Unbounded),
            TapVerdict::Drop(DropReason::MultiContact)
        );
    }

    #[test]
    fn contacts_still_down_at_release_reject() {
        let mut tracker = TouchGestureSource::default();
        tracker.start(&down(0.0, 0.0, 0).with_contacts(3));
        assert_eq!(
            tracker.end(&up(0.0, 0.0, 50).with_contacts(2), DurationPolicy::Unbounded),
            TapVerdict::Drop(DropReason::ContactsRemain)
        );
    }

    #[test]
    fn restart_during_tracking_keeps_original_position_and_time() {
        let mut tracker = TouchGestureSource::default();
        tracker.start(&down(0.0, 0.0, 0));
        // Not a restart: position and timestamp of the first start stand.
        tracker.start(&down(100.0, 100.0, 250).with_contacts(1));
        assert!(matches!(
            tracker.end(&up(4.0, 4.0, 299), DurationPolicy::standard()),
            TapVerdict::Tap(_)
        ));
    }

    #[test]
    fn duration_boundary_is_exclusive() {
        let mut tracker = TouchGestureSource::default();
        tracker.start(&down(0.0, 0.0, 0));
        assert!(matches!(
            tracker.end(&up(0.0, 0.0, 299), DurationPolicy::standard()),
            TapVerdict::Tap(_)
        ));

        tracker.start(&down(0.0, 0.0, 1_000));
        assert_eq!(
            tracker.end(&up(0.0, 0.0, 1_300), DurationPolicy::standard()),
            TapVerdict::Drop(DropReason::TooSlow)
        );
    }

    #[test]
    fn unbounded_policy_accepts_long_holds() {
        let mut tracker = TouchGestureSource::default();
        tracker.start(&down(0.0, 0.0, 0));
        assert!(matches!(
            tracker.end(&up(0.0, 0.0, 10_000), DurationPolicy::Unbounded),
            TapVerdict::Tap(_)
        ));
    }

    #[test]
    fn cancel_resets_to_idle() {
        let mut tracker = TouchGestureSource::default();
        tracker.start(&down(0.0, 0.0, 0));
        tracker.cancel();
        assert!(!tracker.is_tracking());
        assert_eq!(
            tracker.end(&up(0.0, 0.0, 50), DurationPolicy::Unbounded),
            TapVerdict::Drop(DropReason::NotTracking)
        );
    }

    #[test]
    fn malformed_start_rejects_at_end() {
        let mut tracker = TouchGestureSource::default();
        tracker.start(&down(f64::NAN, 0.0, 0));
        assert_eq!(
            tracker.end(&up(0.0, 0.0, 50), DurationPolicy::Unbounded),
            TapVerdict::Drop(DropReason::Malformed)
        );
    }

    #[test]
    fn malformed_movement_rejects_at_end() {
        let mut tracker = TouchGestureSource::default();
        tracker.start(&down(0.0, 0.0, 0));
        tracker.movement(Point::new(f64::INFINITY, 0.0));
        assert_eq!(
            tracker.end(&up(0.0, 0.0, 50), DurationPolicy::Unbounded),
            TapVerdict::Drop(DropReason::Malformed)
        );
    }

    #[test]
    fn verdict_always_resets_tracking() {
        let mut tracker = TouchGestureSource::default();
        tracker.start(&down(0.0, 0.0, 0));
        tracker.movement(Point::new(50.0, 0.0));
        tracker.end(&up(50.0, 0.0, 50), DurationPolicy::Unbounded);
        assert!(!tracker.is_tracking());

        // A fresh interaction is unaffected by the rejected one.
        tracker.start(&down(0.0, 0.0, 100));
        assert!(matches!(
            tracker.end(&up(0.0, 0.0, 150), DurationPolicy::Unbounded),
            TapVerdict::Tap(_)
        ));
    }

    #[test]
    fn mouse_ignores_contact_counts() {
        let mut tracker = MouseGestureSource::default();
        tracker.start(&down(0.0, 0.0, 0).with_contacts(5));
        assert!(matches!(
            tracker.end(&up(0.0, 0.0, 50).with_contacts(5), DurationPolicy::Unbounded),
            TapVerdict::Tap(_)
        ));
    }

    #[test]
    fn mouse_start_during_tracking_is_ignored() {
        let mut tracker = MouseGestureSource::default();
        tracker.start(&down(0.0, 0.0, 0));
        tracker.start(&down(100.0, 100.0, 10));
        tracker.movement(Point::new(5.0, 0.0));
        assert!(matches!(
            tracker.end(&up(5.0, 0.0, 50), DurationPolicy::Unbounded),
            TapVerdict::Tap(_)
        ));
    }

    #[test]
    fn mouse_movement_threshold_applies() {
        let mut tracker = MouseGestureSource::default();
        tracker.start(&down(0.0, 0.0, 0));
        tracker.movement(Point::new(11.0, 0.0));
        assert_eq!(
            tracker.end(&up(11.0, 0.0, 50), DurationPolicy::Unbounded),
            TapVerdict::Drop(DropReason::Moved)
        );
    }

    #[test]
    fn any_source_matches_capability() {
        assert!(matches!(
            AnyGestureSource::for_capability(PointerCapability::Touch),
            AnyGestureSource::Touch(_)
        ));
        assert!(matches!(
            AnyGestureSource::for_capability(PointerCapability::Mouse),
            AnyGestureSource::Mouse(_)
        ));
    }

    #[test]
    fn any_source_delegates_tracking() {
        let mut tracker = AnyGestureSource::for_capability(PointerCapability::Touch);
        tracker.start(&down(0.0, 0.0, 0));
        assert!(tracker.is_tracking());
        assert!(matches!(
            tracker.end(&up(0.0, 0.0, 50), DurationPolicy::Unbounded),
            TapVerdict::Tap(_)
        ));
    }
}
