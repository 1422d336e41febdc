// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input samples: one observed pointer state, in three coordinate spaces.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use tapkit_gesture::sample::InputSample;
//!
//! let down = InputSample::at(Point::new(40.0, 25.0), 1_000).with_contacts(1);
//! assert!(!down.is_malformed());
//! assert_eq!(down.contact_count, 1);
//! ```

use kurbo::Point;

/// One observed pointer state.
///
/// Carries the viewport-relative (`client`), display-relative (`screen`), and
/// document-relative (`page`) positions of the contact, plus the number of
/// simultaneous contacts active at observation time and a monotonic
/// millisecond timestamp.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InputSample {
    /// Position relative to the viewport.
    pub client: Point,
    /// Position relative to the display.
    pub screen: Point,
    /// Position relative to the document.
    pub page: Point,
    /// Simultaneous contacts active when the sample was taken. A release
    /// sample counts the contacts that *remain* after the release.
    pub contact_count: u32,
    /// Monotonic timestamp in milliseconds.
    pub timestamp_ms: u64,
}

impl InputSample {
    /// A sample with all three positions at `pos` and no contacts.
    pub fn at(pos: Point, timestamp_ms: u64) -> Self {
        Self {
            client: pos,
            screen: pos,
            page: pos,
            contact_count: 0,
            timestamp_ms,
        }
    }

    /// Set the contact count.
    pub fn with_contacts(mut self, count: u32) -> Self {
        self.contact_count = count;
        self
    }

    /// Set the display-relative position.
    pub fn with_screen(mut self, screen: Point) -> Self {
        self.screen = screen;
        self
    }

    /// Set the document-relative position.
    pub fn with_page(mut self, page: Point) -> Self {
        self.page = page;
        self
    }

    /// Whether the viewport position is unusable (non-finite coordinates).
    ///
    /// Recognition decisions are made on `client` coordinates, so only those
    /// are validated; `screen` and `page` are carried through verbatim.
    pub fn is_malformed(&self) -> bool {
        !self.client.x.is_finite() || !self.client.y.is_finite()
    }
}
