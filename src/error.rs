// HoopTriage error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("FFprobe error: {0}")]
    FFprobe(String),

    #[error("FFmpeg error: {0}")]
    FFmpeg(String),

    #[error("Missing external tool: {0}")]
    MissingTool(String),

    #[error("No audio stream: {0}")]
    NoAudio(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TriageError>;
