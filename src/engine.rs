use crate::error::{Error, Result};
use crate::language::language_label;

/// Log target of the per-segment read warnings.
pub const SEGMENT_TARGET: &str = "wavscribe::segment";

/// A speech recognizer that runs over a whole buffer and exposes its output as segments.
pub trait Engine {
    /// Run acoustic modeling, language detection and decoding over `samples`.
    fn run_full(&mut self, samples: &[f32]) -> Result<()>;

    fn segment_count(&self) -> Result<usize>;

    /// Fails with [`Error::SegmentRead`] when the text of one segment is unavailable.
    fn segment_text(&self, index: usize) -> Result<String>;

    fn detected_language(&self) -> Option<String>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    /// Detected language code, empty when the engine reports none.
    pub lang: String,
    /// Segments the engine produced, including any whose text could not be read.
    pub segment_count: usize,
    pub segments: Vec<String>,
}

impl Transcript {
    pub fn text(&self) -> String {
        self.segments.join(" ")
    }

    pub fn language_label(&self) -> &'static str {
        language_label(&self.lang)
    }
}

pub fn transcribe<E: Engine + ?Sized>(engine: &mut E, samples: &[f32]) -> Result<Transcript> {
    engine.run_full(samples)?;

    let lang = engine.detected_language().unwrap_or_default();
    let segment_count = engine.segment_count()?;
    let mut segments = Vec::with_capacity(segment_count);
    for index in 0..segment_count {
        match engine.segment_text(index) {
            Ok(text) => segments.push(text),
            Err(err @ Error::SegmentRead { .. }) => {
                tracing::warn!(target: SEGMENT_TARGET, "{}", err)
            }
            Err(err) => return Err(err),
        }
    }

    Ok(Transcript {
        lang,
        segment_count,
        segments,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Scripted engine. `None` segments fail to read.
    #[derive(Debug, Default)]
    pub(crate) struct FakeEngine {
        pub lang: Option<String>,
        pub segments: Vec<Option<String>>,
        pub run_error: Option<String>,
        pub received: Vec<f32>,
    }

    impl Engine for FakeEngine {
        fn run_full(&mut self, samples: &[f32]) -> Result<()> {
            self.received = samples.to_vec();
            match &self.run_error {
                Some(reason) => Err(Error::EngineRun(reason.clone())),
                None => Ok(()),
            }
        }

        fn segment_count(&self) -> Result<usize> {
            Ok(self.segments.len())
        }

        fn segment_text(&self, index: usize) -> Result<String> {
            self.segments[index]
                .clone()
                .ok_or_else(|| Error::SegmentRead {
                    index,
                    reason: "null pointer".into(),
                })
        }

        fn detected_language(&self) -> Option<String> {
            self.lang.clone()
        }
    }

    #[test]
    fn joins_segments_with_single_spaces() {
        let mut engine = FakeEngine {
            lang: Some("en".into()),
            segments: vec![Some(" Hello".into()), Some("world.".into())],
            ..Default::default()
        };
        let transcript = transcribe(&mut engine, &[0.1, -0.2]).unwrap();

        assert_eq!(engine.received, vec![0.1, -0.2]);
        assert_eq!(transcript.lang, "en");
        assert_eq!(transcript.language_label(), "Tiếng Anh");
        assert_eq!(transcript.text(), " Hello world.");
    }

    #[test]
    fn skips_unreadable_segments() {
        let mut engine = FakeEngine {
            lang: Some("vi".into()),
            segments: vec![Some("xin".into()), None, Some("chào".into())],
            ..Default::default()
        };
        let transcript = transcribe(&mut engine, &[0.0]).unwrap();
        assert_eq!(transcript.segment_count, 3);
        assert_eq!(transcript.segments, vec!["xin", "chào"]);
        assert_eq!(transcript.text(), "xin chào");
    }

    #[test]
    fn run_failure_is_fatal() {
        let mut engine = FakeEngine {
            segments: vec![Some("never read".into())],
            run_error: Some("return code: 8".into()),
            ..Default::default()
        };
        let err = transcribe(&mut engine, &[0.0]).unwrap_err();
        assert!(matches!(err, Error::EngineRun(_)));
    }

    #[test]
    fn missing_language_uses_fallback_label() {
        let mut engine = FakeEngine::default();
        let transcript = transcribe(&mut engine, &[0.0]).unwrap();
        assert_eq!(transcript.lang, "");
        assert_eq!(transcript.language_label(), crate::language::UNKNOWN_LANGUAGE);
        assert!(transcript.text().is_empty());
    }
}
