// Metadata extraction module

pub mod ffprobe;

use serde::{Deserialize, Serialize};

/// Metadata the pipeline needs per clip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClipMetadata {
    pub duration_secs: f64,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub has_audio: bool,
}
