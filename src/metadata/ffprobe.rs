// FFprobe wrapper for metadata extraction

use std::path::Path;
use std::process::Command;

use serde::Deserialize;

use crate::error::{Result, TriageError};
use crate::metadata::ClipMetadata;

#[derive(Debug, Deserialize)]
struct FFprobeOutput {
    streams: Option<Vec<FFprobeStream>>,
    format: Option<FFprobeFormat>,
}

#[derive(Debug, Deserialize)]
struct FFprobeStream {
    codec_type: Option<String>,
    width: Option<i32>,
    height: Option<i32>,
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FFprobeFormat {
    duration: Option<String>,
}

/// Run ffprobe on a clip and extract the metadata the pipeline needs.
pub fn probe(path: &Path) -> Result<ClipMetadata> {
    let output = Command::new(crate::tools::ffprobe_path())
        .args([
            "-v", "quiet",
            "-print_format", "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .map_err(|e| TriageError::FFprobe(format!("Failed to run ffprobe: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TriageError::FFprobe(format!("ffprobe failed: {}", stderr)));
    }

    let probe_output: FFprobeOutput = serde_json::from_slice(&output.stdout)
        .map_err(|e| TriageError::FFprobe(format!("Failed to parse ffprobe output: {}", e)))?;

    Ok(collect_metadata(&probe_output))
}

fn collect_metadata(probe_output: &FFprobeOutput) -> ClipMetadata {
    let mut meta = ClipMetadata::default();
    let mut stream_duration = None;

    if let Some(ref streams) = probe_output.streams {
        for stream in streams {
            match stream.codec_type.as_deref() {
                Some("video") => {
                    meta.width = stream.width;
                    meta.height = stream.height;
                    if stream_duration.is_none() {
                        stream_duration = parse_duration_secs(stream.duration.as_deref());
                    }
                }
                Some("audio") => {
                    meta.has_audio = true;
                }
                _ => {}
            }
        }
    }

    // Prefer the container duration; fall back to the video stream
    meta.duration_secs = probe_output
        .format
        .as_ref()
        .and_then(|f| parse_duration_secs(f.duration.as_deref()))
        .or(stream_duration)
        .unwrap_or(0.0);

    meta
}

/// Parse a duration string to seconds
fn parse_duration_secs(duration_str: Option<&str>) -> Option<f64> {
    let seconds: f64 = duration_str?.parse().ok()?;
    if seconds.is_finite() && seconds >= 0.0 {
        Some(seconds)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_secs() {
        assert_eq!(parse_duration_secs(Some("12.48")), Some(12.48));
        assert_eq!(parse_duration_secs(Some("0")), Some(0.0));
        assert_eq!(parse_duration_secs(Some("nope")), None);
        assert_eq!(parse_duration_secs(Some("-3.0")), None);
        assert_eq!(parse_duration_secs(None), None);
    }

    #[test]
    fn test_collect_metadata_from_probe_json() {
        let json = r#"{
            "streams": [
                {"codec_type": "video", "width": 1920, "height": 1080, "duration": "9.8"},
                {"codec_type": "audio"}
            ],
            "format": {"duration": "10.02"}
        }"#;
        let parsed: FFprobeOutput = serde_json::from_str(json).unwrap();
        let meta = collect_metadata(&parsed);

        assert!((meta.duration_secs - 10.02).abs() < 1e-9);
        assert_eq!(meta.width, Some(1920));
        assert_eq!(meta.height, Some(1080));
        assert!(meta.has_audio);
    }

    #[test]
    fn test_collect_metadata_no_audio_stream() {
        let json = r#"{
            "streams": [{"codec_type": "video", "duration": "4.5"}],
            "format": {}
        }"#;
        let parsed: FFprobeOutput = serde_json::from_str(json).unwrap();
        let meta = collect_metadata(&parsed);

        assert!(!meta.has_audio);
        assert!((meta.duration_secs - 4.5).abs() < 1e-9);
    }
}
