// Audio analysis
//
// Primary path decodes the audio track to mono 16 kHz s16 PCM over a
// stdout pipe and computes the metrics directly. When decoding produces
// nothing but the clip still has an audio stream, a volumedetect pass
// over ffmpeg's stderr provides conservative fallback metrics.

use std::path::Path;
use std::process::Command;

use regex::Regex;

use crate::constants::{AUDIO_SAMPLE_RATE, AUDIO_WINDOW_SAMPLES};
use crate::error::{Result, TriageError};
use crate::scoring::AudioMetrics;
use crate::tools::ffmpeg_path;

/// Analyse the audio track of a clip and return its energy metrics.
pub fn analyze_clip_audio(clip_path: &Path) -> Result<AudioMetrics> {
    let sample_rate = AUDIO_SAMPLE_RATE.to_string();
    let output = Command::new(ffmpeg_path())
        .args(["-v", "error", "-i"])
        .arg(clip_path)
        .args([
            "-vn",
            "-ac", "1",
            "-ar", &sample_rate,
            "-f", "s16le",
            "pipe:1",
        ])
        .output()
        .map_err(|e| TriageError::FFmpeg(format!("Failed to run ffmpeg: {}", e)))?;

    if output.status.success() && !output.stdout.is_empty() {
        let samples = decode_s16le(&output.stdout);
        return Ok(compute_metrics(&samples));
    }

    log::debug!(
        "PCM decode produced no samples for {}, trying volumedetect",
        clip_path.display()
    );

    analyze_volumedetect(clip_path)
}

/// Fallback: parse mean/max volume from ffmpeg's volumedetect filter.
/// Windowed metrics are unavailable here, so the result is conservative:
/// peak_window_rms collapses to the overall RMS and dynamic range to zero.
fn analyze_volumedetect(clip_path: &Path) -> Result<AudioMetrics> {
    let output = Command::new(ffmpeg_path())
        .arg("-i")
        .arg(clip_path)
        .args(["-vn", "-af", "volumedetect", "-f", "null", "-"])
        .output()
        .map_err(|e| TriageError::FFmpeg(format!("Failed to run ffmpeg: {}", e)))?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    let (mean_db, max_db) = parse_volumedetect(&stderr).ok_or_else(|| {
        TriageError::NoAudio(clip_path.display().to_string())
    })?;

    let rms = db_to_linear(mean_db);
    let peak = db_to_linear(max_db);

    Ok(AudioMetrics {
        rms,
        peak,
        peak_window_rms: rms,
        dynamic_range: 0.0,
    })
}

/// Parse "mean_volume: -23.4 dB" / "max_volume: -5.0 dB" lines.
fn parse_volumedetect(output: &str) -> Option<(f64, f64)> {
    let mean_re = Regex::new(r"mean_volume:\s*(-?\d+\.?\d*)\s*dB").ok()?;
    let max_re = Regex::new(r"max_volume:\s*(-?\d+\.?\d*)\s*dB").ok()?;

    let mean = mean_re.captures(output)?.get(1)?.as_str().parse().ok()?;
    let max = max_re.captures(output)?.get(1)?.as_str().parse().ok()?;

    Some((mean, max))
}

fn db_to_linear(db: f64) -> f64 {
    10f64.powf(db / 20.0).min(1.0)
}

/// Decode little-endian 16-bit PCM into normalized [-1, 1] samples.
fn decode_s16le(raw: &[u8]) -> Vec<f64> {
    raw.chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]) as f64 / 32768.0)
        .collect()
}

/// Compute all metrics from normalized samples.
fn compute_metrics(samples: &[f64]) -> AudioMetrics {
    if samples.is_empty() {
        return AudioMetrics::default();
    }

    let rms = root_mean_square(samples);
    let peak = samples.iter().fold(0.0f64, |acc, s| acc.max(s.abs()));

    // RMS in 100ms windows to measure dynamic range
    let (peak_window_rms, dynamic_range) = if samples.len() > AUDIO_WINDOW_SAMPLES {
        let window_rms: Vec<f64> = samples
            .chunks_exact(AUDIO_WINDOW_SAMPLES)
            .map(root_mean_square)
            .collect();

        let max = window_rms.iter().cloned().fold(0.0f64, f64::max);
        let min = window_rms.iter().cloned().fold(f64::INFINITY, f64::min);
        (max, max - min)
    } else {
        (rms, 0.0)
    };

    AudioMetrics {
        rms,
        peak,
        peak_window_rms,
        dynamic_range,
    }
}

fn root_mean_square(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples.iter().map(|s| s * s).sum();
    (sum_sq / samples.len() as f64).sqrt()
}
