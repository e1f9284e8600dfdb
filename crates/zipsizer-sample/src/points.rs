//! Sample point arithmetic over the logical stream.

use zipsizer_types::SampleWindow;

/// Lazily generated sample points: `S-K, 2S-K, 3S-K, ...`.
///
/// The sequence is unbounded because the logical stream length is not known
/// until enumeration finishes; callers stop consuming once a point falls past
/// the data they have seen.
#[derive(Debug, Clone)]
pub struct SamplePoints {
    next: Option<u64>,
    stride: u64,
}

impl SamplePoints {
    /// Creates the point sequence for a window.
    #[must_use]
    pub const fn new(window: SampleWindow) -> Self {
        Self {
            next: Some(window.first_offset()),
            stride: window.stride(),
        }
    }

    /// Returns the next point without consuming it.
    ///
    /// `None` only once the sequence has run past `u64::MAX`.
    #[must_use]
    pub const fn peek(&self) -> Option<u64> {
        self.next
    }

    /// Returns true if the next point lies before `end`.
    #[must_use]
    pub fn next_before(&self, end: u64) -> bool {
        self.next.is_some_and(|point| point < end)
    }
}

impl Iterator for SamplePoints {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let point = self.next?;
        self.next = point.checked_add(self.stride);
        Some(point)
    }
}

/// Number of sample points inside a logical stream of `total` bytes.
///
/// Equals `ceil(max(total - (S - K), 0) / S)`.
#[must_use]
pub const fn expected_sample_count(total: u64, window: SampleWindow) -> u64 {
    let first = window.first_offset();
    if total <= first {
        0
    } else {
        (total - first).div_ceil(window.stride())
    }
}

/// Length of the final sample window in a stream of `total` bytes.
///
/// This is the bound on the logical stream only. [`VirtualSampler`] also
/// cuts every window at the end of the file holding its point, so the bytes
/// it emits can be shorter than this.
///
/// Returns `None` when the stream holds no sample point.
///
/// [`VirtualSampler`]: crate::VirtualSampler
#[must_use]
pub const fn last_window_len(total: u64, window: SampleWindow) -> Option<u64> {
    let count = expected_sample_count(total, window);
    if count == 0 {
        return None;
    }
    let last_point = window.first_offset() + (count - 1) * window.stride();
    let remaining = total - last_point;
    if remaining < window.sample_size() {
        Some(remaining)
    } else {
        Some(window.sample_size())
    }
}
