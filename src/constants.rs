// HoopTriage constants
// Scoring thresholds and weights are tuned for typical basketball gym
// audio; keep them in sync with the tests in scoring/.

// Supported clip extensions (lowercase, no dot)
pub const CLIP_EXTENSIONS: [&str; 7] = ["mov", "mp4", "m4v", "avi", "mkv", "mts", "webm"];

// Output layout
pub const REPORT_FILENAME: &str = "index.html";
pub const CLIPS_FOLDER: &str = "clips";
pub const DEFAULT_OUTPUT_FOLDER: &str = "hooptriage_report";

// Contact sheet geometry
pub const CONTACT_SHEET_FRAMES: u32 = 4;
pub const FRAME_WIDTH: u32 = 480; // px per frame in the sheet
pub const SHEET_QUALITY: u32 = 3; // ffmpeg -q:v, 1 best .. 31 worst

// Frames are spread across 10%-90% of the clip to avoid black lead-in/out
pub const FRAME_SPREAD_START: f64 = 0.1;
pub const FRAME_SPREAD_RANGE: f64 = 0.8;

// Audio decode parameters: mono 16 kHz s16, windowed RMS over 100 ms
pub const AUDIO_SAMPLE_RATE: u32 = 16_000;
pub const AUDIO_WINDOW_SAMPLES: usize = 1_600;

// Combined-metric weights (must sum to 1.0)
pub const WEIGHT_PEAK_WINDOW_RMS: f64 = 0.5;
pub const WEIGHT_DYNAMIC_RANGE: f64 = 0.3;
pub const WEIGHT_RMS: f64 = 0.2;

// Score thresholds: a combined metric above each bound maps to 5..2,
// anything below the last maps to the neutral floor of 1.
pub const SCORE_THRESHOLD_5: f64 = 0.25;
pub const SCORE_THRESHOLD_4: f64 = 0.15;
pub const SCORE_THRESHOLD_3: f64 = 0.08;
pub const SCORE_THRESHOLD_2: f64 = 0.03;

pub const SCORE_MIN: u8 = 1;
pub const SCORE_MAX: u8 = 5;

// Jersey color sampling
pub const TEAM_SAMPLE_WIDTH: u32 = 64;
pub const TEAM_SAMPLE_HEIGHT: u32 = 48;
pub const TEAM_SATURATION_MIN: f64 = 0.3; // below this is court/crowd/lines
pub const TEAM_MIN_PIXELS: usize = 10; // fewer saturated pixels than this reports nothing
pub const TEAM_QUANT_STEP: u8 = 32; // channel bucket width
pub const TEAM_TOP_COLORS: usize = 3;

// Tool resolution env overrides
pub const ENV_FFMPEG_PATH: &str = "HOOPTRIAGE_FFMPEG_PATH";
pub const ENV_FFPROBE_PATH: &str = "HOOPTRIAGE_FFPROBE_PATH";

// Report auto-refresh interval while scores are still streaming in
pub const REPORT_REFRESH_SECONDS: u32 = 5;
