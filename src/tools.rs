// External tool resolver for ffmpeg/ffprobe
//
// Resolution order:
// 1) Environment variable override (HOOPTRIAGE_FFMPEG_PATH, etc.)
// 2) PATH lookup

use std::env;
use std::path::PathBuf;

use crate::constants::{ENV_FFMPEG_PATH, ENV_FFPROBE_PATH};
use crate::error::{Result, TriageError};

/// Resolve a tool path, honoring the env override when it points at a file.
fn resolve_tool(env_key: &str, default_name: &str) -> PathBuf {
    if let Ok(v) = env::var(env_key) {
        let p = PathBuf::from(&v);
        if p.exists() {
            return p;
        }
    }

    let mut filename = default_name.to_string();
    if cfg!(windows) && !filename.to_lowercase().ends_with(".exe") {
        filename.push_str(".exe");
    }

    PathBuf::from(filename)
}

/// Get path to ffmpeg binary
pub fn ffmpeg_path() -> PathBuf {
    resolve_tool(ENV_FFMPEG_PATH, "ffmpeg")
}

/// Get path to ffprobe binary
pub fn ffprobe_path() -> PathBuf {
    resolve_tool(ENV_FFPROBE_PATH, "ffprobe")
}

/// Check if a tool is runnable at its resolved path.
pub fn is_tool_available(tool: &str) -> bool {
    let path = match tool {
        "ffmpeg" => ffmpeg_path(),
        "ffprobe" => ffprobe_path(),
        _ => return false,
    };

    std::process::Command::new(&path)
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Verify both external tools before any processing begins.
/// Missing tools are a fatal setup failure.
pub fn check_tools() -> Result<()> {
    for tool in ["ffmpeg", "ffprobe"] {
        if !is_tool_available(tool) {
            return Err(TriageError::MissingTool(format!(
                "{} not found. Install it first (brew install ffmpeg).",
                tool
            )));
        }
    }
    Ok(())
}
