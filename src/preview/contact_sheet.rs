// Contact sheet assembly
//
// Frames are extracted into a scratch dir, then composited with a
// pad+hstack filter graph. Individual frame failures are tolerated; the
// sheet is built from whatever frames were produced. The finished sheet
// is written via temp file + rename so a crashed run never leaves a
// truncated image behind.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, TriageError};
use crate::preview::{frame_timestamps, SheetOptions};
use crate::tools::ffmpeg_path;

/// Build a contact sheet for a clip. Returns the number of frames used.
pub fn generate_contact_sheet(
    source_path: &Path,
    output_path: &Path,
    duration_secs: f64,
    options: &SheetOptions,
) -> Result<u32> {
    if duration_secs <= 0.0 {
        return Err(TriageError::Other(format!(
            "Cannot sample frames without a duration: {}",
            source_path.display()
        )));
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let scratch = tempfile::tempdir()?;
    let mut frame_paths: Vec<PathBuf> = Vec::new();

    for (i, t) in frame_timestamps(duration_secs, options.frames).iter().enumerate() {
        let frame_path = scratch.path().join(format!("frame_{:02}.jpg", i));
        match extract_frame(source_path, *t, &frame_path, options) {
            Ok(()) => frame_paths.push(frame_path),
            Err(e) => {
                log::warn!(
                    "Frame {} of {} failed at {:.2}s: {}",
                    i,
                    source_path.display(),
                    t,
                    e
                );
            }
        }
    }

    if frame_paths.is_empty() {
        return Err(TriageError::FFmpeg(format!(
            "No frames extracted from {}",
            source_path.display()
        )));
    }

    compose_sheet(&frame_paths, output_path, options)?;

    Ok(frame_paths.len() as u32)
}

/// Extract a single frame at the given timestamp.
fn extract_frame(
    source_path: &Path,
    timestamp_secs: f64,
    frame_path: &Path,
    options: &SheetOptions,
) -> Result<()> {
    let scale_filter = format!("scale={}:-1", options.frame_width);

    let output = Command::new(ffmpeg_path())
        .args(["-y", "-ss", &format!("{:.2}", timestamp_secs), "-i"])
        .arg(source_path)
        .args([
            "-vframes", "1",
            "-q:v", &options.quality.to_string(),
            "-vf", &scale_filter,
        ])
        .arg(frame_path)
        .output()
        .map_err(|e| TriageError::FFmpeg(format!("Failed to run ffmpeg: {}", e)))?;

    if !output.status.success() || !frame_path.exists() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TriageError::FFmpeg(format!(
            "Frame extraction failed: {}",
            stderr.trim()
        )));
    }

    Ok(())
}

/// Stitch the extracted frames horizontally into the sheet.
fn compose_sheet(frame_paths: &[PathBuf], output_path: &Path, options: &SheetOptions) -> Result<()> {
    let tmp_path = output_path.with_extension("tmp.jpg");

    let mut cmd = Command::new(ffmpeg_path());
    cmd.arg("-y");
    for fp in frame_paths {
        cmd.arg("-i").arg(fp);
    }

    if frame_paths.len() == 1 {
        // hstack needs at least two inputs; a lone frame becomes the sheet
        let filter = format!(
            "scale={w}:-1:force_original_aspect_ratio=decrease,pad={w}:ih:(ow-iw)/2",
            w = options.frame_width
        );
        cmd.args(["-vf", &filter]);
    } else {
        let filter = build_hstack_filter(frame_paths.len(), options.frame_width);
        cmd.args(["-filter_complex", &filter]);
    }

    cmd.args(["-q:v", &options.quality.to_string()]);
    cmd.arg(&tmp_path);

    let output = cmd
        .output()
        .map_err(|e| TriageError::FFmpeg(format!("Failed to run ffmpeg: {}", e)))?;

    if !output.status.success() {
        let _ = std::fs::remove_file(&tmp_path);
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TriageError::FFmpeg(format!(
            "Contact sheet assembly failed: {}",
            stderr.trim()
        )));
    }

    std::fs::rename(&tmp_path, output_path)?;

    if !output_path.exists() || std::fs::metadata(output_path)?.len() == 0 {
        let _ = std::fs::remove_file(output_path);
        return Err(TriageError::FFmpeg(
            "Contact sheet file is empty or missing".to_string(),
        ));
    }

    Ok(())
}

/// Filter graph: scale+pad each input to a uniform tile, then hstack.
fn build_hstack_filter(count: usize, width: u32) -> String {
    let mut filter = String::new();

    for i in 0..count {
        filter.push_str(&format!(
            "[{i}]scale={w}:-1:force_original_aspect_ratio=decrease,pad={w}:ih:(ow-iw)/2[f{i}];",
            i = i,
            w = width
        ));
    }

    for i in 0..count {
        filter.push_str(&format!("[f{}]", i));
    }
    filter.push_str(&format!("hstack=inputs={}", count));

    filter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_hstack_filter_two() {
        let filter = build_hstack_filter(2, 480);
        assert_eq!(
            filter,
            "[0]scale=480:-1:force_original_aspect_ratio=decrease,pad=480:ih:(ow-iw)/2[f0];\
             [1]scale=480:-1:force_original_aspect_ratio=decrease,pad=480:ih:(ow-iw)/2[f1];\
             [f0][f1]hstack=inputs=2"
        );
    }

    #[test]
    fn test_build_hstack_filter_counts() {
        let filter = build_hstack_filter(4, 480);
        assert!(filter.ends_with("hstack=inputs=4"));
        assert_eq!(filter.matches("pad=480").count(), 4);
        assert!(filter.contains("[f3]hstack"));
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sheet.jpg");
        let err = generate_contact_sheet(
            Path::new("/nonexistent.mp4"),
            &out,
            0.0,
            &SheetOptions::default(),
        );
        assert!(err.is_err());
        assert!(!out.exists());
    }
}
