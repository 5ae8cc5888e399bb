use core::fmt;
use core::ops::Deref;

use chrono::{DateTime, TimeDelta, Utc};

use crate::HackairError;
use crate::time::format_api_date;

/// A closed window `[start, end]` with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeRange {
    /// First instant covered.
    pub start: DateTime<Utc>,
    /// Last instant covered.
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Build a range, rejecting inverted bounds.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `start > end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, HackairError> {
        if start > end {
            return Err(HackairError::InvalidArg(format!(
                "range start {} is after end {}",
                format_api_date(start),
                format_api_date(end)
            )));
        }
        Ok(Self { start, end })
    }

    /// `end - start`.
    #[must_use]
    pub fn span(&self) -> TimeDelta {
        self.end - self.start
    }

    /// True for a single-instant range.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            format_api_date(self.start),
            format_api_date(self.end)
        )
    }
}

/// Ordered, contiguous, non-overlapping sub-ranges of a window.
///
/// The position of a range in the partition is its canonical index for
/// reassembling per-range results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition(Vec<TimeRange>);

impl Partition {
    pub(crate) const fn from_ranges(ranges: Vec<TimeRange>) -> Self {
        Self(ranges)
    }

    /// The window the partition covers: first start through last end.
    #[must_use]
    pub fn covered(&self) -> Option<TimeRange> {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => Some(TimeRange {
                start: first.start,
                end: last.end,
            }),
            _ => None,
        }
    }
}

impl Deref for Partition {
    type Target = [TimeRange];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Partition {
    type Item = TimeRange;
    type IntoIter = std::vec::IntoIter<TimeRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
