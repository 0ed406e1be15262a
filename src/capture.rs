//! Image capture capability.
//!
//! On the command line a "photo" is a path to an existing image file.

use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Captured(String),
    Cancelled,
    Failed(String),
}

impl CaptureOutcome {
    /// Turn cancel / failure into the matching blocking error.
    pub fn into_result(self) -> AppResult<String> {
        match self {
            CaptureOutcome::Captured(uri) => Ok(uri),
            CaptureOutcome::Cancelled => Err(AppError::CaptureCancelled),
            CaptureOutcome::Failed(msg) => Err(AppError::CaptureFailed(msg)),
        }
    }
}

pub trait ImageCapture {
    fn capture(&mut self) -> CaptureOutcome;
}

/// Capture backed by a file given on the command line.
pub struct PathCapture {
    path: Option<PathBuf>,
}

impl PathCapture {
    pub fn new(path: Option<&str>) -> Self {
        Self {
            path: path.filter(|p| !p.trim().is_empty()).map(PathBuf::from),
        }
    }
}

impl ImageCapture for PathCapture {
    fn capture(&mut self) -> CaptureOutcome {
        let Some(path) = self.path.take() else {
            return CaptureOutcome::Cancelled;
        };

        if !path.is_file() {
            return CaptureOutcome::Failed(format!("image not found: {}", path.display()));
        }

        let uri = path
            .canonicalize()
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();
        CaptureOutcome::Captured(uri)
    }
}

/// Capture that always returns the same outcome.
pub struct FixedCapture(pub CaptureOutcome);

impl ImageCapture for FixedCapture {
    fn capture(&mut self) -> CaptureOutcome {
        self.0.clone()
    }
}
