//! Partitioning a flat sample array into regions.

use std::fmt;

/// A contiguous sub-range of a sample array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region<'a> {
    /// Position among sibling regions.
    pub index: usize,
    /// Start boundary as given.
    pub start: usize,
    /// End boundary as given (exclusive).
    pub end: usize,
    /// Samples in `[start, end)`, clamped to the array.
    pub samples: &'a [i16],
}

impl Region<'_> {
    /// Playback length in seconds at the given rate.
    #[allow(clippy::cast_precision_loss)]
    pub fn duration_secs(&self, sample_rate: u32) -> f64 {
        if sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / f64::from(sample_rate)
    }
}

/// Split `samples` at consecutive pairs of `boundaries`.
///
/// N boundaries give N-1 regions. Boundaries past the end of `samples` are
/// clamped, and a pair where `end < start` gives an empty region, so
/// malformed tables never fail here.
pub fn slice_regions<'a>(samples: &'a [i16], boundaries: &[usize]) -> Vec<Region<'a>> {
    boundaries
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let (start, end) = (pair[0], pair[1]);
            let from = start.min(samples.len());
            let to = end.min(samples.len()).max(from);
            Region {
                index,
                start,
                end,
                samples: &samples[from..to],
            }
        })
        .collect()
}

/// A deviation from the expected boundary table shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryIssue {
    /// The first boundary is not zero.
    FirstNotZero {
        /// Actual first value.
        value: usize,
    },
    /// A boundary is smaller than its predecessor.
    Decreasing {
        /// Position of the offending boundary.
        index: usize,
        /// Preceding boundary.
        previous: usize,
        /// Offending boundary.
        value: usize,
    },
}

impl fmt::Display for BoundaryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstNotZero { value } => write!(f, "first boundary is {value}, expected 0"),
            Self::Decreasing {
                index,
                previous,
                value,
            } => write!(
                f,
                "boundary {index} ({value}) is smaller than the previous one ({previous})"
            ),
        }
    }
}

/// Report boundaries that break the `[0, non-decreasing...]` shape.
pub fn check_boundaries(boundaries: &[usize]) -> Vec<BoundaryIssue> {
    let mut issues = Vec::new();

    if let Some(&first) = boundaries.first()
        && first != 0
    {
        issues.push(BoundaryIssue::FirstNotZero { value: first });
    }

    for (offset, pair) in boundaries.windows(2).enumerate() {
        if pair[1] < pair[0] {
            issues.push(BoundaryIssue::Decreasing {
                index: offset + 1,
                previous: pair[0],
                value: pair[1],
            });
        }
    }

    issues
}
