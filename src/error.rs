use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be opened or read, including a header shorter than 44 bytes.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid WAV format: {0}")]
    Format(String),

    #[error("no audio samples found in {path}")]
    EmptyAudio { path: PathBuf },

    #[error("failed to initialize whisper context from model '{model}': {reason}")]
    EngineInit { model: String, reason: String },

    #[error("failed to run whisper_full: {0}")]
    EngineRun(String),

    /// Non-fatal, the segment is skipped.
    #[error("failed to get text for segment {index}: {reason}")]
    SegmentRead { index: usize, reason: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
