//! Recursive median-cut over a single owned sample buffer.
//!
//! Splits never copy samples: each level sorts a sub-slice in place and
//! records bucket boundaries as index ranges into the shared buffer.

use std::ops::Range;

use crate::color::Sample;

/// RGB channel used as a split axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub fn of(self, s: &Sample) -> f32 {
        match self {
            Channel::Red => s.red,
            Channel::Green => s.green,
            Channel::Blue => s.blue,
        }
    }

    /// Channel with the largest max-min range across `samples`.
    ///
    /// Ties go to red, then green, then blue. An all-identical set has zero
    /// range everywhere and splits on red.
    pub fn widest(samples: &[Sample]) -> Channel {
        let range = |ch: Channel| {
            let (min, max) = samples
                .iter()
                .map(|s| ch.of(s))
                .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
                    (lo.min(v), hi.max(v))
                });
            if max >= min {
                max - min
            } else {
                0.0
            }
        };

        let (r, g, b) = (
            range(Channel::Red),
            range(Channel::Green),
            range(Channel::Blue),
        );
        if r >= g && r >= b {
            Channel::Red
        } else if g >= b {
            Channel::Green
        } else {
            Channel::Blue
        }
    }
}

/// Result of a median-cut run: the reordered samples plus bucket boundaries.
#[derive(Debug, Clone)]
pub struct Buckets {
    samples: Vec<Sample>,
    ranges: Vec<Range<usize>>,
}

impl Buckets {
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Buckets in left-to-right split order.
    pub fn iter(&self) -> impl Iterator<Item = &[Sample]> + '_ {
        self.ranges.iter().map(move |r| &self.samples[r.clone()])
    }

    /// All samples, bucket by bucket.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}

/// Partition `pixels` into up to `2^levels` buckets by recursive median cut.
///
/// Each split sorts the current set (stably) along its widest channel and
/// bisects at `n / 2`, the right half taking the extra sample when `n` is odd.
/// Sets with fewer than two samples are never split, so every returned
/// bucket is non-empty. An empty input yields no buckets; `levels == 0`
/// yields the whole input as one bucket.
pub fn bucketize(pixels: Vec<Sample>, levels: u32) -> Buckets {
    let mut samples = pixels;
    let mut ranges = Vec::with_capacity(1usize << levels.min(16));
    if !samples.is_empty() {
        let all = 0..samples.len();
        split(&mut samples, all, levels, &mut ranges);
    }
    Buckets { samples, ranges }
}

fn split(samples: &mut [Sample], range: Range<usize>, levels: u32, out: &mut Vec<Range<usize>>) {
    if levels == 0 || range.len() < 2 {
        out.push(range);
        return;
    }

    let set = &mut samples[range.clone()];
    let axis = Channel::widest(set);
    set.sort_by(|a, b| axis.of(a).total_cmp(&axis.of(b)));

    let mid = range.start + range.len() / 2;
    split(samples, range.start..mid, levels - 1, out);
    split(samples, mid..range.end, levels - 1, out);
}
