// Clip discovery
//
// Lists candidate video files under the input folder. Results are sorted
// by path so every run processes clips in the same order.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::constants::CLIP_EXTENSIONS;
use crate::error::Result;

/// Discover all supported clips under a directory (recursive).
pub fn discover_clips(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut clips = Vec::new();

    for entry in WalkDir::new(input_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && is_clip_file(path) && !is_hidden(path) {
            clips.push(path.to_path_buf());
        }
    }

    clips.sort();

    Ok(clips)
}

/// Check if a file is a supported clip based on extension.
pub fn is_clip_file(path: &Path) -> bool {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(e) => e.to_lowercase(),
        None => return false,
    };

    CLIP_EXTENSIONS.contains(&ext.as_str())
}

/// Hidden files (e.g. macOS "._" AppleDouble junk) are skipped.
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(true)
}

/// Compute the input-relative path used for clip identity, with forward
/// slashes on every platform.
pub fn relative_path(input_dir: &Path, clip_path: &Path) -> String {
    let rel = clip_path.strip_prefix(input_dir).unwrap_or(clip_path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_clip_file() {
        assert!(is_clip_file(Path::new("game.mp4")));
        assert!(is_clip_file(Path::new("game.MOV")));
        assert!(is_clip_file(Path::new("game.mts")));
        assert!(!is_clip_file(Path::new("notes.txt")));
        assert!(!is_clip_file(Path::new("game")));
        assert!(!is_clip_file(Path::new("audio.mp3")));
    }

    #[test]
    fn test_discover_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("court2")).unwrap();
        fs::write(root.join("b.mp4"), b"x").unwrap();
        fs::write(root.join("a.mov"), b"x").unwrap();
        fs::write(root.join("court2").join("c.mkv"), b"x").unwrap();
        fs::write(root.join(".hidden.mp4"), b"x").unwrap();
        fs::write(root.join("readme.md"), b"x").unwrap();

        let clips = discover_clips(root).unwrap();
        let names: Vec<String> = clips
            .iter()
            .map(|p| relative_path(root, p))
            .collect();

        assert_eq!(names, vec!["a.mov", "b.mp4", "court2/c.mkv"]);
    }

    #[test]
    fn test_relative_path_forward_slashes() {
        let root = Path::new("/footage");
        let clip = Path::new("/footage/court1/game.mp4");
        assert_eq!(relative_path(root, clip), "court1/game.mp4");
    }
}
