// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value ranges, allowed-value sets, and the mapping between values and
//! positions along the track.
//!
//! Everything here is pure: no state, no logging, no allocation beyond
//! [`ValueSet`] itself.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use smallvec::SmallVec;

/// Inclusive integer range covered by the track.
///
/// Invariant: `min <= max`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ValueRange {
    min: i64,
    max: i64,
}

impl ValueRange {
    /// Range used when no allowed values are configured.
    pub const DEFAULT: Self = Self { min: 0, max: 100 };

    /// Creates a range; the bounds are normalized so that `min <= max`.
    #[must_use]
    pub const fn new(a: i64, b: i64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(self) -> i64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(self) -> i64 {
        self.max
    }

    /// Returns `max - min` as a float.
    #[must_use]
    pub fn span(self) -> f64 {
        self.max as f64 - self.min as f64
    }

    /// Returns `true` when `min == max`.
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    /// Returns `true` if `value` is a boundary of the range.
    #[must_use]
    pub const fn is_boundary(self, value: i64) -> bool {
        value == self.min || value == self.max
    }

    /// Clamps `value` into the range.
    #[must_use]
    pub fn clamp(self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Why a list of values was rejected by [`ValueSet::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValueSetError {
    /// A value is smaller than the one before it.
    #[error("value {value} at index {index} is smaller than its predecessor {previous}")]
    Unordered {
        /// Index of the offending value.
        index: usize,
        /// The value before it.
        previous: i64,
        /// The offending value.
        value: i64,
    },
    /// A value appears more than once.
    #[error("value {value} appears more than once (again at index {index})")]
    Duplicate {
        /// Index of the repeated occurrence.
        index: usize,
        /// The repeated value.
        value: i64,
    },
}

/// Strictly increasing sequence of allowed values.
///
/// An empty set means the slider is continuous: every integer in its range is
/// allowed and no snapping happens.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValueSet {
    values: SmallVec<[i64; 8]>,
}

impl ValueSet {
    /// The empty (continuous) set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from values that must already be strictly increasing.
    ///
    /// # Errors
    ///
    /// Returns [`ValueSetError`] for the first pair of values that is out of
    /// order or repeated.
    pub fn new(values: impl IntoIterator<Item = i64>) -> Result<Self, ValueSetError> {
        let values: SmallVec<[i64; 8]> = values.into_iter().collect();
        for (index, pair) in values.windows(2).enumerate() {
            let (previous, value) = (pair[0], pair[1]);
            if value == previous {
                return Err(ValueSetError::Duplicate {
                    index: index + 1,
                    value,
                });
            }
            if value < previous {
                return Err(ValueSetError::Unordered {
                    index: index + 1,
                    previous,
                    value,
                });
            }
        }
        Ok(Self { values })
    }

    /// Builds a set from arbitrary values by sorting and removing duplicates.
    #[must_use]
    pub fn from_unsorted(values: impl IntoIterator<Item = i64>) -> Self {
        let mut values: SmallVec<[i64; 8]> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        Self { values }
    }

    /// Returns `true` when no values are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of allowed values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// The allowed values in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Iterates over the allowed values in ascending order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = i64> + '_ {
        self.values.iter().copied()
    }

    /// Returns `true` if `value` is one of the allowed values.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        self.values.binary_search(&value).is_ok()
    }

    /// The range spanned by the first and last value, if any.
    #[must_use]
    pub fn range(&self) -> Option<ValueRange> {
        match (self.values.first(), self.values.last()) {
            (Some(&first), Some(&last)) => Some(ValueRange::new(first, last)),
            _ => None,
        }
    }

    /// The range of the set, or `fallback` for the empty set.
    #[must_use]
    pub fn range_or(&self, fallback: ValueRange) -> ValueRange {
        self.range().unwrap_or(fallback)
    }

    /// Values strictly between the first and the last one.
    pub fn interior(&self) -> impl Iterator<Item = i64> + '_ {
        let n = self.values.len();
        self.values
            .iter()
            .copied()
            .enumerate()
            .filter(move |&(i, _)| i != 0 && i + 1 != n)
            .map(|(_, v)| v)
    }

    /// Copies the values into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<i64> {
        self.values.to_vec()
    }
}

impl TryFrom<&[i64]> for ValueSet {
    type Error = ValueSetError;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        Self::new(values.iter().copied())
    }
}

/// Normalized position of `value` within `range`, in `[0, 1]`.
///
/// A degenerate range (`min == max`) yields `0`.
#[must_use]
pub fn percentage(value: i64, range: ValueRange) -> f64 {
    if range.is_degenerate() {
        return 0.0;
    }
    ((value as f64 - range.min() as f64) / range.span()).clamp(0.0, 1.0)
}

/// Maps a horizontal position onto the nearest integer value in `range`.
///
/// `content_origin` is the X coordinate of `range.min()` and `content_width`
/// the distance to `range.max()`. Positions outside the content span clamp to
/// the bounds; a non-positive width or non-finite `x` maps to the minimum.
#[must_use]
pub fn value_from_position(
    x: f64,
    content_origin: f64,
    content_width: f64,
    range: ValueRange,
) -> i64 {
    if content_width.is_nan() || content_width <= 0.0 || !x.is_finite() {
        return range.min();
    }
    let fraction = ((x - content_origin) / content_width).clamp(0.0, 1.0);
    let offset = (fraction * range.span()).round();
    // Spans wider than `i64::MAX` need the extra headroom.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offset is a rounded value within [0, 2^64], which fits in i128"
    )]
    let value = (i128::from(range.min()) + offset as i128)
        .clamp(i128::from(range.min()), i128::from(range.max()));
    i64::try_from(value).unwrap_or(range.max())
}

/// Snaps `value` to the closest member of `values`.
///
/// Returns `value` unchanged for an empty set. When two members are equally
/// close the lower one wins.
#[must_use]
pub fn snap_to_nearest(value: i64, values: &ValueSet) -> i64 {
    let mut best: Option<(u64, i64)> = None;
    for member in values.iter() {
        let distance = member.abs_diff(value);
        match best {
            Some((best_distance, _)) if distance >= best_distance => {}
            _ => best = Some((distance, member)),
        }
    }
    best.map_or(value, |(_, member)| member)
}
