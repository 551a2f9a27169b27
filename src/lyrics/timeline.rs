//! Timeline data model and active-line resolution.

use serde::Serialize;

/// Tolerance in seconds absorbing playback-clock tick granularity when
/// matching a position to a timeline entry.
pub const EPSILON: f64 = 0.05;

/// A single lyric line with its start time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LyricLine {
    /// Seconds from track start
    pub time: f64,
    /// The lyrics text
    pub text: String,
}

impl LyricLine {
    pub fn new(time: f64, text: String) -> Self {
        Self { time, text }
    }
}

/// Lyric lines sorted non-decreasing by start time.
///
/// Built once per lyrics source and read-only afterwards; switching tracks
/// or editing lyrics builds a fresh timeline rather than mutating this one.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    lines: Vec<LyricLine>,
}

impl Timeline {
    /// Build a timeline from lines in any order.
    ///
    /// The sort is stable, so lines sharing a timestamp keep the order they
    /// were produced in.
    pub fn from_unsorted(mut lines: Vec<LyricLine>) -> Self {
        lines.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { lines }
    }

    pub fn lines(&self) -> &[LyricLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the line active at `position_secs`, or `None` if playback
    /// has not reached the first line yet.
    ///
    /// Returns the highest index whose time is at most `position + EPSILON`:
    /// simultaneous lines resolve to the last one emitted, and the final
    /// line stays active through trailing silence. Positions may jump
    /// backwards on seek; resolution is stateless.
    pub fn active_index(&self, position_secs: f64) -> Option<usize> {
        let limit = position_secs + EPSILON;
        self.lines.iter().rposition(|l| l.time <= limit)
    }
}
