// Jersey / team color detection
//
// Samples the clip's middle frame as a small raw RGB image, keeps only
// saturated pixels (court wood, lines and crowd grays fall below the
// saturation floor), quantises the survivors into coarse buckets, and
// reports the top clusters. Best-effort: any failure just means no
// team hint for that clip.

use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

use crate::constants::{
    TEAM_MIN_PIXELS, TEAM_QUANT_STEP, TEAM_SAMPLE_HEIGHT, TEAM_SAMPLE_WIDTH, TEAM_SATURATION_MIN,
    TEAM_TOP_COLORS,
};
use crate::error::{Result, TriageError};
use crate::tools::ffmpeg_path;

/// Dominant jersey color of a clip.
#[derive(Debug, Clone)]
pub struct TeamColor {
    pub rgb: [u8; 3],
    pub name: String,
}

/// Detect the dominant jersey color from a clip's middle frame.
pub fn detect_team_color(clip_path: &Path, duration_secs: f64) -> Result<Option<TeamColor>> {
    if duration_secs <= 0.0 {
        return Ok(None);
    }

    let scale_filter = format!("scale={}:{}", TEAM_SAMPLE_WIDTH, TEAM_SAMPLE_HEIGHT);
    let mid = duration_secs * 0.5;

    let output = Command::new(ffmpeg_path())
        .args(["-y", "-ss", &format!("{:.2}", mid), "-i"])
        .arg(clip_path)
        .args([
            "-vframes", "1",
            "-vf", &scale_filter,
            "-f", "rawvideo",
            "-pix_fmt", "rgb24",
            "pipe:1",
        ])
        .output()
        .map_err(|e| TriageError::FFmpeg(format!("Failed to run ffmpeg: {}", e)))?;

    if !output.status.success() || output.stdout.is_empty() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TriageError::FFmpeg(format!(
            "Middle frame sampling failed: {}",
            stderr.trim()
        )));
    }

    let colors = dominant_colors(&output.stdout);
    Ok(colors.first().map(|&rgb| TeamColor {
        rgb,
        name: color_name(rgb),
    }))
}

/// Top dominant non-court colors from raw RGB24 pixel data.
pub fn dominant_colors(raw: &[u8]) -> Vec<[u8; 3]> {
    let colored: Vec<[u8; 3]> = raw
        .chunks_exact(3)
        .map(|p| [p[0], p[1], p[2]])
        .filter(|p| saturation(*p) > TEAM_SATURATION_MIN)
        .collect();

    if colored.len() < TEAM_MIN_PIXELS {
        return Vec::new();
    }

    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();
    for pixel in colored {
        *counts.entry(quantise(pixel)).or_insert(0) += 1;
    }

    // Sort by count, ties broken by color value so output is deterministic
    let mut ranked: Vec<([u8; 3], usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    ranked
        .into_iter()
        .take(TEAM_TOP_COLORS)
        .map(|(rgb, _)| rgb)
        .collect()
}

/// Saturation metric: (max - min) / max, 0 for black.
fn saturation(rgb: [u8; 3]) -> f64 {
    let max = rgb.iter().copied().max().unwrap_or(0) as f64;
    let min = rgb.iter().copied().min().unwrap_or(0) as f64;
    if max > 0.0 {
        (max - min) / max
    } else {
        0.0
    }
}

/// Snap each channel to the middle of its 32-wide bucket.
fn quantise(rgb: [u8; 3]) -> [u8; 3] {
    let step = TEAM_QUANT_STEP;
    [
        (rgb[0] / step) * step + step / 2,
        (rgb[1] / step) * step + step / 2,
        (rgb[2] / step) * step + step / 2,
    ]
}

/// Convert RGB to a rough color name.
pub fn color_name(rgb: [u8; 3]) -> String {
    let [r, g, b] = rgb;
    if r > 180 && g < 100 && b < 100 {
        return "red".to_string();
    }
    if r < 100 && g > 150 && b < 100 {
        return "green".to_string();
    }
    if r < 100 && g < 100 && b > 150 {
        return "blue".to_string();
    }
    if r > 180 && g > 180 && b < 100 {
        return "yellow".to_string();
    }
    if r > 180 && g > 100 && b < 80 {
        return "orange".to_string();
    }
    if r > 100 && g < 80 && b > 150 {
        return "purple".to_string();
    }
    if r > 200 && g > 200 && b > 200 {
        return "white".to_string();
    }
    if r < 60 && g < 60 && b < 60 {
        return "black".to_string();
    }
    if r > 150 && g > 150 && b > 150 {
        return "grey".to_string();
    }
    format!("rgb({},{},{})", r, g, b)
}
