//! File-backed audio source for the CLI.
//!
//! The terminal build has no microphone capture; `/voice <path>`
//! transcribes a pre-recorded WAV file instead. Device capture lives
//! behind the same `AudioSource` seam and can be swapped in later.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use sehat_ai::{AudioSource, VoiceError};

pub struct FileUtteranceSource {
    path: PathBuf,
}

impl FileUtteranceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AudioSource for FileUtteranceSource {
    async fn capture_utterance(&self, _timeout: Duration) -> Result<Vec<u8>, VoiceError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| VoiceError::Other(format!("cannot read {}: {e}", self.path.display())))
    }
}
