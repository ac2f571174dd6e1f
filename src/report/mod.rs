// HTML report generation
//
// Renders the whole record set into one self-contained index.html. The
// render is a pure function of the records and options, so identical
// inputs produce identical bytes. Writes are temp-file + rename; the
// orchestrator rewrites the report as audio scores stream in and the
// last write wins.

mod template;

use std::path::{Path, PathBuf};

use crate::constants::{CONTACT_SHEET_FRAMES, REPORT_FILENAME, REPORT_REFRESH_SECONDS};
use crate::error::Result;
use crate::record::ClipRecord;

/// Options controlling one report render.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Default view hides clips scoring below this (0 disables)
    pub min_score: u8,
    /// Include the auto-refresh tag while scores are still pending
    pub refresh: bool,
    /// Human-readable generation stamp shown in the subtitle
    pub generated_at: String,
}

impl ReportOptions {
    pub fn new(min_score: u8, refresh: bool) -> Self {
        Self {
            min_score,
            refresh,
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Render the report page.
pub fn render_report(records: &[ClipRecord], options: &ReportOptions) -> Result<String> {
    let pending = records.iter().filter(|r| r.is_pending()).count();
    let (hot, skip, total_minutes) = summarize(records);

    // Embedded JSON must not be able to close the script tag early
    let clips_json = serde_json::to_string(records)?.replace('<', "\\u003c");

    let mut html = String::with_capacity(32 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    if options.refresh && pending > 0 {
        html.push_str(&format!(
            "<meta http-equiv=\"refresh\" content=\"{}\">\n",
            REPORT_REFRESH_SECONDS
        ));
    }
    html.push_str(&format!(
        "<title>HoopTriage Report — {} clips</title>\n",
        records.len()
    ));
    html.push_str("<style>");
    html.push_str(template::STYLE);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str("<h1>🏀 HoopTriage Report</h1>\n");
    html.push_str(&format!(
        "<p class=\"subtitle\">{} clips analysed · generated {}</p>\n",
        records.len(),
        options.generated_at
    ));

    if options.refresh && pending > 0 {
        html.push_str(&format!(
            "<div class=\"notice\">Scoring in progress: {} of {} clips scored. \
             This page refreshes automatically.</div>\n",
            records.len() - pending,
            records.len()
        ));
    }

    html.push_str("<div class=\"summary\">\n");
    html.push_str(&stat_box("stat-total", &records.len().to_string(), "Total clips"));
    html.push_str(&stat_box("stat-hot", &hot.to_string(), "Hot clips (4-5)"));
    html.push_str(&stat_box("stat-skip", &skip.to_string(), "Likely skip (1-2)"));
    html.push_str(&stat_box(
        "stat-minutes",
        &format!("{:.0}m", total_minutes),
        "Total footage",
    ));
    html.push_str("</div>\n");

    html.push_str("<div class=\"controls\" id=\"controls\"></div>\n");
    html.push_str("<div class=\"grid\" id=\"clip-grid\"></div>\n");

    html.push_str("<script>\n");
    html.push_str(&format!("const CLIPS = {};\n", clips_json));
    html.push_str(&format!("const MIN_SCORE = {};\n", options.min_score));
    html.push_str(&format!("const SHEET_FRAMES = {};\n", CONTACT_SHEET_FRAMES));
    html.push_str(template::SCRIPT);
    html.push_str("</script>\n</body>\n</html>\n");

    Ok(html)
}

/// Write the report atomically into the output directory.
pub fn write_report(
    output_dir: &Path,
    records: &[ClipRecord],
    options: &ReportOptions,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;

    let report_path = output_dir.join(REPORT_FILENAME);
    let tmp_path = output_dir.join(format!("{}.tmp", REPORT_FILENAME));

    let html = render_report(records, options)?;
    std::fs::write(&tmp_path, html)?;
    std::fs::rename(&tmp_path, &report_path)?;

    Ok(report_path)
}

fn stat_box(id: &str, value: &str, label: &str) -> String {
    format!(
        "    <div class=\"stat\"><div class=\"stat-value\" id=\"{}\">{}</div>\
         <div class=\"stat-label\">{}</div></div>\n",
        id, value, label
    )
}

/// Hot count, likely-skip count, and total footage minutes.
fn summarize(records: &[ClipRecord]) -> (usize, usize, f64) {
    let hot = records.iter().filter(|r| r.score >= 4).count();
    let skip = records.iter().filter(|r| r.score <= 2).count();
    let minutes = records.iter().map(|r| r.duration_secs).sum::<f64>() / 60.0;
    (hot, skip, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ClipStatus;
    use crate::scoring::AudioMetrics;

    fn record(name: &str, score: u8) -> ClipRecord {
        let mut rec = ClipRecord::new(Path::new(&format!("/footage/{}", name)), name);
        rec.duration_secs = 12.0;
        rec.set_score(AudioMetrics::default(), score);
        rec
    }

    fn options() -> ReportOptions {
        ReportOptions {
            min_score: 0,
            refresh: false,
            generated_at: "2026-08-01 10:00:00".to_string(),
        }
    }

    #[test]
    fn test_render_embeds_every_record() {
        let records = vec![record("a.mp4", 5), record("b.mp4", 1), record("c.mp4", 3)];
        let html = render_report(&records, &options()).unwrap();

        // The embedded JSON must parse and carry one entry per clip
        let start = html.find("const CLIPS = ").unwrap() + "const CLIPS = ".len();
        let end = html[start..].find(";\n").unwrap() + start;
        let parsed: Vec<ClipRecord> = serde_json::from_str(&html[start..end]).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].score, 5);
    }

    #[test]
    fn test_render_min_score_retains_all_records() {
        // min-score narrows the default view but every record stays embedded
        let records = vec![record("a.mp4", 5), record("b.mp4", 1)];
        let opts = ReportOptions {
            min_score: 3,
            ..options()
        };
        let html = render_report(&records, &opts).unwrap();
        assert!(html.contains("const MIN_SCORE = 3;"));
        assert!(html.contains("a.mp4"));
        assert!(html.contains("b.mp4"));
    }

    #[test]
    fn test_render_deterministic() {
        let records = vec![record("a.mp4", 4), record("b.mp4", 2)];
        let one = render_report(&records, &options()).unwrap();
        let two = render_report(&records, &options()).unwrap();
        assert_eq!(one, two);
    }

    #[test]
    fn test_refresh_tag_only_while_pending() {
        let mut pending = record("a.mp4", 1);
        pending.status = ClipStatus::Scanned;

        let opts = ReportOptions {
            refresh: true,
            ..options()
        };
        let html = render_report(&[pending.clone()], &opts).unwrap();
        assert!(html.contains("http-equiv=\"refresh\""));
        assert!(html.contains("Scoring in progress"));

        // Once everything is scored the refresh tag disappears
        let mut scored = pending;
        scored.set_score(AudioMetrics::default(), 2);
        let html = render_report(&[scored], &opts).unwrap();
        assert!(!html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn test_script_tag_cannot_be_closed_by_filename() {
        let rec = record("</script><b>.mp4", 3);
        let html = render_report(&[rec], &options()).unwrap();
        let script_start = html.find("const CLIPS").unwrap();
        let tail = &html[script_start..];
        // The only </script> after the data is the page's own closer
        assert_eq!(tail.matches("</script>").count(), 1);
    }

    #[test]
    fn test_summarize_counts() {
        let records = vec![
            record("a.mp4", 5),
            record("b.mp4", 4),
            record("c.mp4", 3),
            record("d.mp4", 1),
        ];
        let (hot, skip, minutes) = summarize(&records);
        assert_eq!(hot, 2);
        assert_eq!(skip, 1);
        assert!((minutes - 48.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_write_report_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![record("a.mp4", 3)];
        let path = write_report(dir.path(), &records, &options()).unwrap();
        assert!(path.ends_with(REPORT_FILENAME));
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        // No stray temp file left behind
        assert!(!dir.path().join("index.html.tmp").exists());
    }
}
