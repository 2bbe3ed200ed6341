// SPDX-License-Identifier: MPL-2.0
//! Star rating value object.

use std::ops::RangeInclusive;

/// Number of selectable stars.
pub const MAX_STARS: u8 = 5;

/// Star rating, guaranteed to be within `0..=MAX_STARS`.
///
/// Zero means the user has not picked a rating yet.
///
/// # Example
///
/// ```
/// use feedback_form::domain::feedback::Rating;
///
/// let rating = Rating::new(4);
/// assert_eq!(rating.value(), 4);
///
/// // Values outside range are clamped
/// assert_eq!(Rating::new(9).value(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rating(u8);

impl Rating {
    /// The "no rating yet" value.
    pub const UNSET: Rating = Rating(0);

    /// Creates a rating, clamping the value to `0..=MAX_STARS`.
    #[must_use]
    pub fn new(stars: u8) -> Self {
        Self(stars.min(MAX_STARS))
    }

    /// Returns the number of selected stars.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns true while no star has been picked.
    #[must_use]
    pub fn is_unset(self) -> bool {
        self.0 == 0
    }

    /// Returns whether the star at `position` (1-based) renders as selected.
    #[must_use]
    pub fn is_selected(self, position: u8) -> bool {
        position >= 1 && position <= self.0
    }

    /// Star positions in display order.
    #[must_use]
    pub fn positions() -> RangeInclusive<u8> {
        1..=MAX_STARS
    }
}
