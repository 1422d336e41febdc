// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap payload synthesis from an accepted release sample.

use kurbo::Point;

use crate::sample::InputSample;

/// The positional payload of a synthesized tap.
///
/// All three coordinate spaces are copied verbatim from the release sample of
/// the accepted interaction, so a tap reports exactly where the contact
/// lifted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TapPoints {
    /// Position relative to the viewport.
    pub client: Point,
    /// Position relative to the display.
    pub screen: Point,
    /// Position relative to the document.
    pub page: Point,
}

impl TapPoints {
    /// Copy the positional state out of `sample`.
    pub fn from_sample(sample: &InputSample) -> Self {
        Self {
            client: sample.client,
            screen: sample.screen,
            page: sample.page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_spaces_copied_verbatim() {
        let sample = InputSample::at(Point::new(5.0, 6.0), 100)
            .with_screen(Point::new(105.0, 206.0))
            .with_page(Point::new(5.0, 506.0));
        let points = TapPoints::from_sample(&sample);
        assert_eq!(points.client, Point::new(5.0, 6.0));
        assert_eq!(points.screen, Point::new(105.0, 206.0));
        assert_eq!(points.page, Point::new(5.0, 506.0));
    }
}
