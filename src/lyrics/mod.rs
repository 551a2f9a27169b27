//! Lyric timing
//!
//! This module provides:
//! - A parser for timestamped lyrics text
//! - Synthetic timing for plain lyrics with a known track duration
//! - The timeline model and active-line resolution during playback

pub mod parser;
pub mod synth;
pub mod timeline;

pub use timeline::{LyricLine, Timeline, EPSILON};

/// Build a timeline from whatever lyrics text is available.
///
/// Timestamped text is parsed directly. Text that yields no tagged lines is
/// treated as plain lyrics and, when the track duration is known, gets
/// synthetic uniform timing instead. Returns an empty timeline when neither
/// works.
pub fn timeline_from_text(text: &str, duration_secs: Option<f64>) -> Timeline {
    let timeline = parser::parse(text);
    if !timeline.is_empty() {
        return timeline;
    }

    let Some(duration) = duration_secs else {
        return timeline;
    };
    match synth::synthesize(text, duration) {
        Ok(generated) => parser::parse(&generated),
        Err(reason) => {
            tracing::debug!(%reason, "no synthetic timing");
            timeline
        }
    }
}
