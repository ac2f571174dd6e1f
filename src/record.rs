// Clip records - the unit of work for the whole pipeline
//
// A record is created at scan time, filled in by the frame sampler and
// audio scorer, and finally serialized into the report. There is no
// store behind it; the generated report is the only persistent output.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{SCORE_MAX, SCORE_MIN};
use crate::scoring::AudioMetrics;

/// Processing status of a clip record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipStatus {
    /// Listed by the scanner, not yet analysed
    Scanned,
    /// Audio analysis completed
    Scored,
    /// Degraded: the clip or its audio could not be read
    Failed,
}

/// Everything the report needs to know about one clip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipRecord {
    /// Stable short identifier derived from the input-relative path.
    /// Used for output asset names, so re-runs regenerate the same files.
    pub id: String,
    pub filename: String,
    pub path: PathBuf,
    pub rel_path: String,
    pub duration_secs: f64,
    /// Excitement score, always within 1-5. Neutral floor until scored.
    pub score: u8,
    pub audio: Option<AudioMetrics>,
    pub team_color: Option<String>,
    pub team_rgb: Option<[u8; 3]>,
    /// Report-relative path of the contact sheet image, if one was built
    pub contact_sheet: Option<String>,
    pub status: ClipStatus,
}

impl ClipRecord {
    pub fn new(path: &Path, rel_path: &str) -> Self {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| rel_path.to_string());

        Self {
            id: clip_id(rel_path),
            filename,
            path: path.to_path_buf(),
            rel_path: rel_path.to_string(),
            duration_secs: 0.0,
            score: SCORE_MIN,
            audio: None,
            team_color: None,
            team_rgb: None,
            contact_sheet: None,
            status: ClipStatus::Scanned,
        }
    }

    /// Record a successful audio analysis. The score is clamped into 1-5.
    pub fn set_score(&mut self, metrics: AudioMetrics, score: u8) {
        self.score = score.clamp(SCORE_MIN, SCORE_MAX);
        self.audio = Some(metrics);
        self.status = ClipStatus::Scored;
    }

    /// Degrade the record: neutral score, no metrics, failed status.
    pub fn mark_failed(&mut self) {
        self.score = SCORE_MIN;
        self.audio = None;
        self.status = ClipStatus::Failed;
    }

    /// True while the record is still waiting for its audio score.
    pub fn is_pending(&self) -> bool {
        self.status == ClipStatus::Scanned
    }
}

/// Stable clip identifier: short hex of a BLAKE3 hash of the relative
/// path. Two clips with the same stem in different subfolders get
/// distinct ids, and re-running on an unchanged folder gets identical ones.
pub fn clip_id(rel_path: &str) -> String {
    let hash = blake3::hash(rel_path.as_bytes());
    hash.to_hex()[..12].to_string()
}

/// Terminal star rating, e.g. "★★★☆☆".
pub fn star_string(score: u8) -> String {
    let filled = score.clamp(SCORE_MIN, SCORE_MAX) as usize;
    "★".repeat(filled) + &"☆".repeat(SCORE_MAX as usize - filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_id_stable() {
        assert_eq!(clip_id("court1/game3.mp4"), clip_id("court1/game3.mp4"));
        assert_eq!(clip_id("a.mp4").len(), 12);
    }

    #[test]
    fn test_clip_id_distinguishes_folders() {
        // Same stem, different folder, must not collide
        assert_ne!(clip_id("court1/game.mp4"), clip_id("court2/game.mp4"));
    }

    #[test]
    fn test_new_record_is_pending_neutral() {
        let rec = ClipRecord::new(Path::new("/footage/game.mp4"), "game.mp4");
        assert_eq!(rec.score, SCORE_MIN);
        assert_eq!(rec.status, ClipStatus::Scanned);
        assert!(rec.is_pending());
        assert_eq!(rec.filename, "game.mp4");
    }

    #[test]
    fn test_set_score_clamps() {
        let mut rec = ClipRecord::new(Path::new("/footage/game.mp4"), "game.mp4");
        rec.set_score(AudioMetrics::default(), 9);
        assert_eq!(rec.score, SCORE_MAX);
        assert_eq!(rec.status, ClipStatus::Scored);

        rec.set_score(AudioMetrics::default(), 0);
        assert_eq!(rec.score, SCORE_MIN);
    }

    #[test]
    fn test_star_string() {
        assert_eq!(star_string(5), "★★★★★");
        assert_eq!(star_string(3), "★★★☆☆");
        assert_eq!(star_string(1), "★☆☆☆☆");
        // Out-of-range input clamps rather than panicking
        assert_eq!(star_string(0), "★☆☆☆☆");
        assert_eq!(star_string(9), "★★★★★");
    }

    #[test]
    fn test_mark_failed_resets_to_neutral() {
        let mut rec = ClipRecord::new(Path::new("/footage/game.mp4"), "game.mp4");
        rec.set_score(AudioMetrics::default(), 4);
        rec.mark_failed();
        assert_eq!(rec.score, SCORE_MIN);
        assert!(rec.audio.is_none());
        assert_eq!(rec.status, ClipStatus::Failed);
    }
}
