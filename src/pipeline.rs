//! Model load, WAV decode and transcription in one pass.

use crate::engine::{transcribe, Engine, Transcript};
use crate::error::Result;
use crate::wav::{read_audio_file, HeaderLayout};
use crate::whisper::DEFAULT_MODEL;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub model: String,
    pub audio: PathBuf,
    pub layout: HeaderLayout,
    pub startup_delay: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            audio: PathBuf::from("nhacvn.wav"),
            layout: HeaderLayout::Fixed,
            startup_delay: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub transcript: Transcript,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let transcript = &self.transcript;
        writeln!(
            f,
            "Ngôn ngữ phát hiện: {} ({})",
            transcript.language_label(),
            transcript.lang
        )?;
        writeln!(f, "Number of text segments: {}", transcript.segment_count)?;
        writeln!(f)?;
        writeln!(f, "--- Full Transcription ---")?;
        writeln!(f, "{}", transcript.text())?;
        write!(f, "--------------------------")
    }
}

/// The engine is opened before any audio is touched, so a bad model fails fast.
pub fn run<E, F>(options: &RunOptions, open_engine: F) -> Result<Report>
where
    E: Engine,
    F: FnOnce(&str) -> Result<E>,
{
    if !options.startup_delay.is_zero() {
        std::thread::sleep(options.startup_delay);
    }

    let mut engine = open_engine(&options.model)?;
    tracing::info!(
        "Successfully initialized whisper context from model '{}'",
        options.model
    );

    let audio = read_audio_file(&options.audio, options.layout)?;

    tracing::info!("Running transcription...");
    let transcript = transcribe(&mut engine, &audio)?;
    tracing::debug!("detected language {:?}", transcript.lang);

    Ok(Report { transcript })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::FakeEngine;
    use crate::error::Error;
    use std::io::Write;

    fn wav_file(samples: &[i16]) -> tempfile::NamedTempFile {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 16000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let file = tempfile::Builder::new().suffix(".wav").tempfile().unwrap();
        let mut writer = hound::WavWriter::create(file.path(), spec).unwrap();
        for s in samples {
            writer.write_sample(*s).unwrap();
        }
        writer.finalize().unwrap();
        file
    }

    fn options(audio: PathBuf) -> RunOptions {
        RunOptions {
            model: "ggml-test.bin".into(),
            audio,
            startup_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    #[test]
    fn model_failure_stops_before_audio_is_read() {
        // The audio path does not exist; an Io error here would mean it was opened
        let options = options(PathBuf::from("/nonexistent/audio.wav"));
        let err = run(&options, |model| -> Result<FakeEngine> {
            Err(Error::EngineInit {
                model: model.to_string(),
                reason: "not found".into(),
            })
        })
        .unwrap_err();

        assert!(matches!(err, Error::EngineInit { ref model, .. } if model == "ggml-test.bin"));
    }

    #[test]
    fn transcribes_audio_file() {
        let file = wav_file(&[16384, -16384, 0]);
        let report = run(&options(file.path().to_path_buf()), |_| {
            Ok(FakeEngine {
                lang: Some("en".into()),
                segments: vec![Some("Hello".into()), Some("there".into())],
                ..Default::default()
            })
        })
        .unwrap();

        assert_eq!(report.transcript.lang, "en");
        assert_eq!(report.transcript.text(), "Hello there");
    }

    #[test]
    fn empty_audio_is_fatal() {
        let file = wav_file(&[]);
        let err = run(&options(file.path().to_path_buf()), |_| Ok(FakeEngine::default()))
            .unwrap_err();
        assert!(matches!(err, Error::EmptyAudio { .. }));
    }

    #[test]
    fn invalid_audio_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 64]).unwrap();
        let err = run(&options(file.path().to_path_buf()), |_| Ok(FakeEngine::default()))
            .unwrap_err();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn engine_failure_is_fatal() {
        let file = wav_file(&[1, 2, 3]);
        let err = run(&options(file.path().to_path_buf()), |_| {
            Ok(FakeEngine {
                run_error: Some("failed to encode".into()),
                ..Default::default()
            })
        })
        .unwrap_err();
        assert!(matches!(err, Error::EngineRun(_)));
    }

    #[test]
    fn report_layout() {
        let report = Report {
            transcript: Transcript {
                lang: "en".into(),
                segment_count: 3,
                segments: vec!["One.".into(), "Two.".into()],
            },
        };
        let expected = "Ngôn ngữ phát hiện: Tiếng Anh (en)\n\
                        Number of text segments: 3\n\
                        \n\
                        --- Full Transcription ---\n\
                        One. Two.\n\
                        --------------------------";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn report_with_unknown_language() {
        let report = Report {
            transcript: Transcript {
                lang: "xx".into(),
                segment_count: 0,
                segments: Vec::new(),
            },
        };
        assert!(report
            .to_string()
            .starts_with("Ngôn ngữ phát hiện: Ngôn ngữ không xác định (xx)\n"));
    }
}
