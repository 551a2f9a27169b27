//! Lyrics asset store
//!
//! Artifacts are plain timestamped-lyrics files named after the track's
//! audio file base name, kept in one directory that a static file host
//! serves as-is.

use crate::lyrics::synth::{self, SkipReason};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of a generation attempt for one track.
#[derive(Debug, PartialEq)]
pub enum GenerateOutcome {
    /// Artifact written to this path.
    Written(PathBuf),
    /// Generation skipped; no artifact was produced.
    Skipped(SkipReason),
}

pub struct LyricsStore {
    dir: PathBuf,
}

impl LyricsStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Artifact path for an audio file, or `None` when the path has no
    /// usable base name.
    pub fn artifact_path(&self, audio: &Path) -> Option<PathBuf> {
        let stem = audio.file_stem()?;
        if stem.is_empty() {
            return None;
        }
        // Append rather than set_extension: a dotted base name like
        // "My.Song" must keep all of its parts.
        let mut name = stem.to_os_string();
        name.push(".lrc");
        Some(self.dir.join(name))
    }

    /// Read the stored artifact for an audio file, if one exists.
    pub fn read(&self, audio: &Path) -> anyhow::Result<Option<String>> {
        let Some(path) = self.artifact_path(audio) else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let raw =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        Ok(Some(raw))
    }

    /// Generate a synthetic-timing artifact for one track.
    ///
    /// Unmet preconditions (no duration, no lines, no usable audio name)
    /// skip the track instead of failing, so batch callers can keep going.
    /// Only I/O problems are errors.
    pub fn generate(
        &self,
        audio: &Path,
        plain: &str,
        duration_secs: f64,
    ) -> anyhow::Result<GenerateOutcome> {
        let Some(path) = self.artifact_path(audio) else {
            return Ok(GenerateOutcome::Skipped(SkipReason::NoTarget));
        };
        let text = match synth::synthesize(plain, duration_secs) {
            Ok(text) => text,
            Err(reason) => return Ok(GenerateOutcome::Skipped(reason)),
        };

        self.write_atomic(&path, &text)?;
        tracing::info!(path = %path.display(), "wrote lyrics artifact");
        Ok(GenerateOutcome::Written(path))
    }

    /// Write via a temp file and rename so a failure never leaves a partial
    /// artifact behind.
    fn write_atomic(&self, path: &Path, contents: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create dir {}", self.dir.display()))?;
        let tmp = path.with_extension("lrc.tmp");
        fs::write(&tmp, contents).with_context(|| format!("write {}", tmp.display()))?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(e)
                .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()));
        }
        Ok(())
    }
}
