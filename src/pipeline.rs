// Run orchestration
//
// Two modes. Scan-only lists clips, probes durations and writes the
// report immediately; it never touches ffmpeg. The full run additionally
// samples frames and team colors per clip, writes the initial report so
// it is usable right away, then runs the deferred audio pass, rewriting
// the report after every clip so scores stream in. Last write wins.
//
// Per-clip failures degrade that record and the batch continues.

use std::path::PathBuf;

use crate::constants::{CLIP_EXTENSIONS, CLIPS_FOLDER};
use crate::error::{Result, TriageError};
use crate::metadata::ffprobe;
use crate::preview::{contact_sheet, SheetOptions};
use crate::record::{star_string, ClipRecord, ClipStatus};
use crate::report::{self, ReportOptions};
use crate::{scan, scoring, teams};

/// Options for one triage run.
#[derive(Debug, Clone)]
pub struct TriageOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Default report view hides clips below this score (0 disables)
    pub min_score: u8,
    pub detect_teams: bool,
    pub scan_only: bool,
}

/// Which stages a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPlan {
    pub sample_frames: bool,
    pub detect_teams: bool,
    pub score_audio: bool,
}

impl RunPlan {
    pub fn for_options(options: &TriageOptions) -> Self {
        if options.scan_only {
            Self {
                sample_frames: false,
                detect_teams: false,
                score_audio: false,
            }
        } else {
            Self {
                sample_frames: true,
                detect_teams: options.detect_teams,
                score_audio: true,
            }
        }
    }
}

/// What a run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub records: Vec<ClipRecord>,
    pub report_path: PathBuf,
}

/// Execute a triage run.
pub fn run(options: &TriageOptions) -> Result<RunOutcome> {
    let plan = RunPlan::for_options(options);

    let clip_paths = scan::discover_clips(&options.input_dir)?;
    if clip_paths.is_empty() {
        return Err(TriageError::Other(format!(
            "No video clips found in {}. Supported formats: {}",
            options.input_dir.display(),
            CLIP_EXTENSIONS.join(", ")
        )));
    }

    println!("Found {} clips.", clip_paths.len());

    let mut records = scan_records(options, &clip_paths);

    if plan.sample_frames {
        sample_clips(options, &plan, &mut records);
    }

    // Initial report: usable immediately, scores stream in afterwards
    let report_options = ReportOptions::new(options.min_score, plan.score_audio);
    let mut report_path = report::write_report(&options.output_dir, &records, &report_options)?;

    if plan.score_audio {
        report_path = audio_pass(options, &mut records, &report_options)?;
    }

    Ok(RunOutcome {
        records,
        report_path,
    })
}

/// Probe every discovered clip and build its initial record.
fn scan_records(options: &TriageOptions, clip_paths: &[PathBuf]) -> Vec<ClipRecord> {
    let mut records = Vec::with_capacity(clip_paths.len());

    for path in clip_paths {
        let rel = scan::relative_path(&options.input_dir, path);
        let mut record = ClipRecord::new(path, &rel);

        match ffprobe::probe(path) {
            Ok(meta) => {
                record.duration_secs = meta.duration_secs;
                if !meta.has_audio {
                    log::debug!("{} has no audio stream", rel);
                }
            }
            Err(e) => {
                log::warn!("Probe failed for {}: {}", rel, e);
                record.mark_failed();
            }
        }

        records.push(record);
    }

    records
}

/// Contact sheets and team colors, synchronously per clip.
fn sample_clips(options: &TriageOptions, plan: &RunPlan, records: &mut [ClipRecord]) {
    let sheet_options = SheetOptions::default();

    for record in records.iter_mut() {
        if record.status == ClipStatus::Failed {
            continue;
        }

        let sheet_rel = format!("{}/{}_sheet.jpg", CLIPS_FOLDER, record.id);
        let sheet_path = options.output_dir.join(&sheet_rel);
        match contact_sheet::generate_contact_sheet(
            &record.path,
            &sheet_path,
            record.duration_secs,
            &sheet_options,
        ) {
            Ok(frames) => {
                log::debug!("Contact sheet for {} from {} frames", record.rel_path, frames);
                record.contact_sheet = Some(sheet_rel);
            }
            Err(e) => {
                // The report renders a placeholder cell instead
                log::warn!("Contact sheet failed for {}: {}", record.rel_path, e);
            }
        }

        if plan.detect_teams {
            match teams::detect_team_color(&record.path, record.duration_secs) {
                Ok(Some(team)) => {
                    record.team_color = Some(team.name);
                    record.team_rgb = Some(team.rgb);
                }
                Ok(None) => {}
                Err(e) => {
                    log::debug!("Team color sampling failed for {}: {}", record.rel_path, e);
                }
            }
        }
    }
}

/// The deferred audio pass: score each clip, rewriting the report after
/// every update so the page always shows the latest scores.
fn audio_pass(
    options: &TriageOptions,
    records: &mut [ClipRecord],
    report_options: &ReportOptions,
) -> Result<PathBuf> {
    let total = records.len();
    let mut report_path = options.output_dir.join(crate::constants::REPORT_FILENAME);

    for i in 0..records.len() {
        let record = &mut records[i];

        if record.status == ClipStatus::Failed {
            println!("  [{}/{}] {}  →  skipped (unreadable)", i + 1, total, record.filename);
        } else {
            match scoring::audio::analyze_clip_audio(&record.path) {
                Ok(metrics) => {
                    let score = scoring::score_excitement(&metrics);
                    record.set_score(metrics, score);
                }
                Err(e) => {
                    log::warn!("Audio analysis failed for {}: {}", record.rel_path, e);
                    record.mark_failed();
                }
            }

            let team_str = record
                .team_color
                .as_deref()
                .map(|t| format!(" [{}]", t))
                .unwrap_or_default();
            println!(
                "  [{}/{}] {}  →  {}{}",
                i + 1,
                total,
                record.filename,
                star_string(record.score),
                team_str
            );
        }

        report_path = report::write_report(&options.output_dir, records, report_options)?;
    }

    Ok(report_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn options(scan_only: bool, detect_teams: bool) -> TriageOptions {
        TriageOptions {
            input_dir: PathBuf::from("/footage"),
            output_dir: PathBuf::from("/footage/hooptriage_report"),
            min_score: 0,
            detect_teams,
            scan_only,
        }
    }

    #[test]
    fn test_scan_only_plan_skips_all_media_work() {
        // The fast path must never reach audio extraction or frame sampling
        let plan = RunPlan::for_options(&options(true, true));
        assert!(!plan.score_audio);
        assert!(!plan.sample_frames);
        assert!(!plan.detect_teams);
    }

    #[test]
    fn test_full_plan_runs_everything() {
        let plan = RunPlan::for_options(&options(false, true));
        assert!(plan.score_audio);
        assert!(plan.sample_frames);
        assert!(plan.detect_teams);
    }

    #[test]
    fn test_no_teams_plan() {
        let plan = RunPlan::for_options(&options(false, false));
        assert!(plan.score_audio);
        assert!(plan.sample_frames);
        assert!(!plan.detect_teams);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let opts = TriageOptions {
            input_dir: dir.path().to_path_buf(),
            output_dir: dir.path().join("out"),
            min_score: 0,
            detect_teams: true,
            scan_only: true,
        };
        let err = run(&opts).unwrap_err();
        assert!(err.to_string().contains("No video clips found"));
        assert!(!Path::new(&opts.output_dir).join("index.html").exists());
    }
}
