use std::io::Read;
use std::path::{Path, PathBuf};

use alloc_heatmap_core::error::Result;
use alloc_heatmap_core::{HeatmapError, SnapshotSource};

/// Reads a saved `/getalloc` body from a file, or from stdin for `-`.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path == Path::new("-")
    }
}

impl SnapshotSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        if self.is_stdin() {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| HeatmapError::NetworkFailure(format!("stdin: {e}")))?;
            return Ok(buf);
        }
        std::fs::read(&self.path)
            .map_err(|e| HeatmapError::NetworkFailure(format!("{}: {e}", self.path.display())))
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            "stdin".into()
        } else {
            self.path.display().to_string()
        }
    }
}
