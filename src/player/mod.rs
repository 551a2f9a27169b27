//! Simulated playback clock for the headless follow mode.
//!
//! Real playback polls the resolver from the player's tick callback; here a
//! tokio interval stands in for that clock.

use crate::lyrics::{LyricLine, Timeline};
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};

/// Monotonic playback position, offset so playback can start mid-track.
#[derive(Debug)]
pub struct PlaybackClock {
    started: Instant,
    offset_secs: f64,
}

impl PlaybackClock {
    pub fn start_at(offset_secs: f64) -> Self {
        Self {
            started: Instant::now(),
            offset_secs,
        }
    }

    pub fn position_secs(&self) -> f64 {
        self.offset_secs + self.started.elapsed().as_secs_f64()
    }
}

/// Poll the timeline against a simulated clock, reporting each line as it
/// becomes active. Returns once the last line has been reached.
pub async fn follow<F>(timeline: &Timeline, from_secs: f64, tick: Duration, mut on_line: F)
where
    F: FnMut(usize, &LyricLine),
{
    if timeline.is_empty() {
        return;
    }

    let clock = PlaybackClock::start_at(from_secs);
    let mut interval = tokio::time::interval(tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_reported: Option<usize> = None;

    loop {
        interval.tick().await;
        let position = clock.position_secs();
        if let Some(index) = timeline.active_index(position) {
            if last_reported != Some(index) {
                // A slow tick may have stepped past lines; report them in order.
                let first = last_reported.map_or(0, |i| i + 1);
                for i in first..=index {
                    on_line(i, &timeline.lines()[i]);
                }
                last_reported = Some(index);
            }
            if index + 1 == timeline.len() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::parser;

    #[tokio::test]
    async fn test_follow_reports_lines_in_order() {
        let timeline = parser::parse("[0:00.00]one\n[0:00.02]two\n[0:00.04]three");
        let mut seen = Vec::new();
        follow(&timeline, 0.0, Duration::from_millis(5), |i, line| {
            seen.push((i, line.text.clone()));
        })
        .await;
        assert_eq!(
            seen,
            vec![
                (0, "one".to_string()),
                (1, "two".to_string()),
                (2, "three".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_follow_starting_past_the_end() {
        let timeline = parser::parse("[0:10.00]one\n[0:20.00]two");
        let mut seen = Vec::new();
        follow(&timeline, 60.0, Duration::from_millis(1), |i, _| seen.push(i)).await;
        assert_eq!(seen, vec![0, 1]);
    }

    #[tokio::test]
    async fn test_follow_empty_timeline_returns() {
        follow(&Timeline::default(), 0.0, Duration::from_millis(1), |_, _| {
            panic!("no lines to report")
        })
        .await;
    }
}
