pub mod engine;
pub mod error;
pub mod language;
pub mod logging;
pub mod pipeline;
pub mod wav;
pub mod whisper;

pub use engine::{transcribe, Engine, Transcript};
pub use error::{Error, Result};
pub use language::{language_label, UNKNOWN_LANGUAGE};
pub use pipeline::{run, Report, RunOptions};
pub use wav::{read_audio_file, HeaderLayout};
pub use whisper::{WhisperConfig, WhisperEngine};
