/*
Transcribe a 16-bit PCM WAV file with whisper.cpp and print the detected language

wget https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-base.bin -O ggml-base.bin
cargo run --release -- --model ggml-base.bin --audio speech.wav --startup-delay-ms 0
*/

use clap::Parser;
use eyre::Result;
use std::path::PathBuf;
use std::time::Duration;
use wavscribe::{
    logging,
    pipeline::{run, RunOptions},
    wav::HeaderLayout,
    whisper::{WhisperConfig, WhisperEngine, DEFAULT_MODEL},
    Error,
};

/// Detect the spoken language of a WAV file and transcribe it
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the ggml whisper model
    #[arg(long, env = "WAVSCRIBE_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// 16-bit PCM WAV file to transcribe
    #[arg(long, env = "WAVSCRIBE_AUDIO", default_value = "nhacvn.wav")]
    audio: PathBuf,

    /// Locate the data chunk by scanning RIFF chunks instead of assuming a 44-byte header
    #[arg(long, env = "WAVSCRIBE_CHUNKED")]
    chunked: bool,

    /// Pause before loading the model
    #[arg(long, env = "WAVSCRIBE_STARTUP_DELAY_MS", default_value_t = 1000)]
    startup_delay_ms: u64,

    #[arg(long, env = "WAVSCRIBE_USE_GPU")]
    use_gpu: bool,

    /// Show whisper.cpp logs
    #[arg(long, env = "WAVSCRIBE_DEBUG")]
    debug: bool,
}

fn context(err: &Error, options: &RunOptions) -> String {
    match err {
        Error::EngineInit { .. } => format!("Failed to load model '{}'", options.model),
        Error::Io { .. } | Error::Format(_) | Error::EmptyAudio { .. } => {
            format!("Failed to load audio file '{}'", options.audio.display())
        }
        Error::EngineRun(_) | Error::SegmentRead { .. } => "Transcription failed".to_string(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.debug);

    let options = RunOptions {
        model: args.model,
        audio: args.audio,
        layout: if args.chunked {
            HeaderLayout::Chunked
        } else {
            HeaderLayout::Fixed
        },
        startup_delay: Duration::from_millis(args.startup_delay_ms),
    };
    let use_gpu = args.use_gpu;

    let report = run(&options, |model| {
        WhisperEngine::new(WhisperConfig {
            model: model.into(),
            use_gpu,
        })
    })
    .map_err(|err| {
        let context = context(&err, &options);
        eyre::Report::new(err).wrap_err(context)
    })?;

    println!("{}", report);
    Ok(())
}
