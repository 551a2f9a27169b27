//! Synthetic timing for plain lyrics
//!
//! When only untimed lyrics and a track duration are known, the lines are
//! spread uniformly across the duration and rendered as timestamped lyrics
//! text. This is an approximation; authored tags always win when present.

use std::fmt;

/// Why no synthetic timing was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Track duration is unknown or not positive.
    NoDuration,
    /// The lyrics contain no non-blank lines.
    NoLines,
    /// No audio base name to derive the artifact name from.
    NoTarget,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SkipReason::NoDuration => "track duration unknown or zero",
            SkipReason::NoLines => "no lyric lines to time",
            SkipReason::NoTarget => "no audio file name to name the artifact after",
        })
    }
}

/// Spread plain lyrics uniformly over `duration_secs` and render them as
/// timestamped lyrics text.
///
/// With `n` non-blank lines, line `i` is placed at `duration / n * i`: the
/// first line starts at zero and the last always starts before the track
/// ends. Unmet preconditions are skips, not errors.
pub fn synthesize(plain: &str, duration_secs: f64) -> Result<String, SkipReason> {
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return Err(SkipReason::NoDuration);
    }

    let lines: Vec<&str> = plain
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(SkipReason::NoLines);
    }

    let step = duration_secs / lines.len() as f64;
    let mut out = String::new();
    for (i, text) in lines.iter().enumerate() {
        out.push_str(&format!("[{}]{}\n", format_timestamp(step * i as f64), text));
    }

    Ok(out)
}

/// Render seconds as a tag body like "1:23.45" (unpadded minutes, two-digit
/// seconds and centiseconds).
pub fn format_timestamp(secs: f64) -> String {
    let total_cs = (secs * 100.0).round() as u64;
    format!(
        "{}:{:02}.{:02}",
        total_cs / 6000,
        total_cs / 100 % 60,
        total_cs % 100
    )
}
